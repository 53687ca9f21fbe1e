//! Corner widget placement around the wheel square

use crate::content::{Corner, ElementId, WidgetPlacement, WidgetRequest};
use crate::errors::LayoutWarning;
use crate::types::{BoundingBox, Dimensions, Position};

/// Where a widget ended up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetSlot {
    Corner(Corner),
    Center,
}

/// A widget with its absolute box on the canvas
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacedWidget {
    pub bounds: BoundingBox,
    pub slot: WidgetSlot,
}

/// One widget to place: id, request and measured size
pub(crate) struct Candidate<'a> {
    pub id: ElementId,
    pub request: &'a WidgetRequest,
    pub size: Dimensions,
}

/// Box of `size` flush with `corner` of `square`
fn corner_box(square: &BoundingBox, corner: Corner, size: Dimensions) -> BoundingBox {
    let x = if corner.is_left() {
        square.left()
    } else {
        square.right() - size.width
    };
    let y = if corner.is_top() {
        square.top()
    } else {
        square.bottom() - size.height
    };
    BoundingBox::new(Position::new(x, y), size)
}

#[derive(Clone)]
struct Placer {
    square: BoundingBox,
    used: [bool; 4],
    placed: Vec<PlacedWidget>,
}

impl Placer {
    fn fits(&self, size: Dimensions) -> bool {
        size.fits_within(self.square.size)
    }

    fn is_clear(&self, candidate: &BoundingBox) -> bool {
        !self.placed.iter().any(|p| p.bounds.intersects(candidate))
    }

    /// First unused corner from `start` in scan order (wrapping) whose box
    /// avoids everything placed so far
    fn free_corner(&self, start: usize, size: Dimensions) -> Option<(Corner, BoundingBox)> {
        (0..Corner::SCAN_ORDER.len())
            .map(|k| Corner::SCAN_ORDER[(start + k) % Corner::SCAN_ORDER.len()])
            .filter(|corner| !self.used[corner.scan_index()])
            .map(|corner| (corner, corner_box(&self.square, corner, size)))
            .find(|(_, bounds)| self.is_clear(bounds))
    }

    fn corner_widget(&self, start: usize, size: Dimensions) -> Option<PlacedWidget> {
        self.free_corner(start, size).map(|(corner, bounds)| PlacedWidget {
            bounds,
            slot: WidgetSlot::Corner(corner),
        })
    }

    /// Corner slot for a request, ignoring any wish to be centred
    fn corner_request(&self, candidate: &Candidate<'_>) -> Option<PlacedWidget> {
        let start = match candidate.request.placement {
            WidgetPlacement::Corner(corner) => corner.scan_index(),
            WidgetPlacement::Auto | WidgetPlacement::Center => 0,
        };
        self.corner_widget(start, candidate.size)
    }

    fn commit(&mut self, widget: PlacedWidget) {
        if let WidgetSlot::Corner(corner) = widget.slot {
            self.used[corner.scan_index()] = true;
        }
        self.placed.push(widget);
    }

    /// Boxes the corner requests in `later` would occupy if placed from the
    /// current state
    fn later_corner_boxes(&self, later: &[Candidate<'_>]) -> Vec<BoundingBox> {
        let mut preview = self.clone();
        let mut boxes = Vec::new();
        for candidate in later {
            let centred = matches!(candidate.request.placement, WidgetPlacement::Center);
            if centred || !preview.fits(candidate.size) {
                continue;
            }
            if let Some(widget) = preview.corner_request(candidate) {
                preview.commit(widget);
                boxes.push(widget.bounds);
            }
        }
        boxes
    }

    fn place(
        &mut self,
        candidate: &Candidate<'_>,
        later: &[Candidate<'_>],
        center_blocked: bool,
    ) -> Option<PlacedWidget> {
        let chosen = match candidate.request.placement {
            WidgetPlacement::Center => {
                let centered = BoundingBox::centered_at(self.square.center(), candidate.size);
                let central = !center_blocked
                    && self.is_clear(&centered)
                    && !self
                        .later_corner_boxes(later)
                        .iter()
                        .any(|b| b.intersects(&centered));
                if central {
                    Some(PlacedWidget {
                        bounds: centered,
                        slot: WidgetSlot::Center,
                    })
                } else {
                    self.corner_request(candidate)
                }
            }
            WidgetPlacement::Auto | WidgetPlacement::Corner(_) => self.corner_request(candidate),
        };
        if let Some(widget) = chosen {
            self.commit(widget);
        }
        chosen
    }
}

/// Place widgets in request order. Earlier requests win; later ones are
/// displaced forward in scan order, and omitted with a warning once no
/// corner is left. A centred widget yields to any corner request, earlier or
/// later, that would overlap it. Widgets larger than the wheel square are
/// omitted.
pub(crate) fn place_widgets(
    square: BoundingBox,
    candidates: &[Candidate<'_>],
    center_blocked: bool,
) -> (Vec<(ElementId, PlacedWidget)>, Vec<LayoutWarning>) {
    let mut placer = Placer {
        square,
        used: [false; 4],
        placed: Vec::with_capacity(candidates.len()),
    };
    let mut placed = Vec::new();
    let mut warnings = Vec::new();

    for (i, candidate) in candidates.iter().enumerate() {
        let kind = candidate.request.kind.name().to_string();
        let warning = if !placer.fits(candidate.size) {
            LayoutWarning::WidgetTooLarge {
                widget: candidate.id,
                kind,
                size: candidate.size,
                square: square.size,
            }
        } else if let Some(widget) = placer.place(candidate, &candidates[i + 1..], center_blocked) {
            crate::log::debug!(element = %candidate.id, slot = ?widget.slot, "placed widget");
            placed.push((candidate.id, widget));
            continue;
        } else {
            LayoutWarning::WidgetOmitted {
                widget: candidate.id,
                kind,
            }
        };
        crate::log::warn!(element = %candidate.id, "{warning}");
        warnings.push(warning);
    }

    (placed, warnings)
}
