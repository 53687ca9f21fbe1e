//! Layout solver: measured content in, exact chart geometry out
//!
//! The solver runs in fixed phases (stack tables, size the canvas, size and
//! place the wheel, resolve ring radii, place corner widgets, finalize table
//! positions). It is a pure function of its inputs.

mod corners;
mod rings;
mod stack;

use std::collections::BTreeMap;

pub use corners::{PlacedWidget, WidgetSlot};
pub use rings::{Annulus, RingSet};
pub use stack::{TableArrangement, stack_tables};

use crate::config::{LayoutConfig, TablePlacement};
use crate::content::{ContentDescriptor, ElementId};
use crate::errors::{InvalidContentError, LayoutError, LayoutWarning};
use crate::measure::Measurements;
use crate::types::{BoundingBox, Dimensions, Position, Px, Ratio};

// ============================================================================
// Result types
// ============================================================================

/// Solved wheel geometry
#[derive(Debug, Clone, PartialEq)]
pub struct WheelLayout {
    /// Top-left corner of the wheel square on the canvas
    pub position: Position,
    /// Side of the wheel square (the wheel diameter)
    pub size: Px,
    pub zodiac: Annulus,
    /// One ring set per wheel, wheel 1 (outermost) first
    pub rings: Vec<RingSet>,
    /// Radius of the central disc holding aspect lines
    pub aspect_radius: Px,
    /// Glyph size multiplier for this wheel count
    pub glyph_scale: Ratio,
}

impl WheelLayout {
    pub fn center(&self) -> Position {
        self.bounds().center()
    }

    pub fn bounds(&self) -> BoundingBox {
        BoundingBox::new(self.position, Dimensions::square(self.size))
    }

    pub fn wheel_count(&self) -> usize {
        self.rings.len()
    }

    /// Ring set of 1-based `wheel`
    pub fn ring(&self, wheel: usize) -> Option<&RingSet> {
        wheel.checked_sub(1).and_then(|i| self.rings.get(i))
    }
}

/// Exact geometry of one chart
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutResult {
    /// Full canvas, margins included
    pub canvas: Dimensions,
    /// Wheel plus stacked tables, without margins or table padding
    pub content: Dimensions,
    pub margin: Px,
    pub placement: TablePlacement,
    pub wheel: WheelLayout,
    /// Absolute origin of the table strip
    pub table_origin: Position,
    pub arrangement: TableArrangement,
    /// Absolute table boxes
    pub tables: BTreeMap<ElementId, BoundingBox>,
    /// Placed corner widgets; omitted ones are absent
    pub widgets: BTreeMap<ElementId, PlacedWidget>,
}

impl LayoutResult {
    pub fn canvas_bounds(&self) -> BoundingBox {
        BoundingBox::new(Position::ORIGIN, self.canvas)
    }

    /// Every element box (tables then widgets) in id order
    pub fn element_bounds(&self) -> impl Iterator<Item = (ElementId, BoundingBox)> + '_ {
        self.tables
            .iter()
            .map(|(id, b)| (*id, *b))
            .chain(self.widgets.iter().map(|(id, w)| (*id, w.bounds)))
    }
}

/// A successful layout with the non-fatal conditions met along the way
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutOutcome {
    pub layout: LayoutResult,
    pub warnings: Vec<LayoutWarning>,
}

// ============================================================================
// Solver
// ============================================================================

/// Solve the layout of `descriptor` under `config` from its measurements.
pub fn solve(
    descriptor: &ContentDescriptor,
    config: &LayoutConfig,
    measurements: &Measurements,
) -> Result<LayoutOutcome, LayoutError> {
    let wheel_count = descriptor.wheel_count();
    let ring_table = config.ring_ratios(wheel_count)?;
    let growth = config.growth(wheel_count)?;
    let glyph_scale = config.glyph_scale(wheel_count)?;
    let placement = config.placement();
    let margin = config.min_margin();
    let vertical = placement.stacks_vertically();
    let mut warnings = Vec::new();

    // Phase 1: stack tables
    let table_sizes = (0..descriptor.tables().len())
        .map(|i| {
            let id = ElementId::Table(i);
            Ok((id, measurements.require(id)?))
        })
        .collect::<Result<Vec<_>, InvalidContentError>>()?;
    let arrangement = stack_tables(&table_sizes, placement, config.gap_between_tables());
    let stacked = arrangement.size();
    let padding = if arrangement.is_empty() {
        Px::ZERO
    } else {
        config.table_padding()
    };
    crate::log::debug!(
        tables = table_sizes.len(),
        stacked = %stacked,
        placement = placement.as_str(),
        "stacked tables"
    );

    // Phase 2/3: wheel size
    let base = config.base_size();
    let nominal = if config.auto_grow_wheel() { base * growth } else { base };
    let wheel_size = match (config.auto_grow_wheel(), config.max_canvas()) {
        (true, Some(max)) => {
            let (room_w, room_h) = if vertical {
                (max.width - margin * 2.0 - padding - stacked.width, max.height - margin * 2.0)
            } else {
                (max.width - margin * 2.0, max.height - margin * 2.0 - padding - stacked.height)
            };
            base.max(nominal.min(room_w.min(room_h)))
        }
        _ => nominal,
    };

    // Phase 2: content and canvas
    let content = if vertical {
        Dimensions::new(wheel_size + stacked.width, wheel_size.max(stacked.height))
    } else {
        Dimensions::new(wheel_size.max(stacked.width), wheel_size + stacked.height)
    };
    let canvas = if vertical {
        Dimensions::new(content.width + padding + margin * 2.0, content.height + margin * 2.0)
    } else {
        Dimensions::new(content.width + margin * 2.0, content.height + padding + margin * 2.0)
    };
    crate::log::debug!(
        wheel_size = wheel_size.0,
        content = %content,
        canvas = %canvas,
        "sized canvas"
    );

    // Phase 4: position the wheel in its sub-area
    let sub_area = match placement {
        TablePlacement::Right => BoundingBox::new(
            Position::new(margin, margin),
            Dimensions::new(wheel_size, content.height),
        ),
        TablePlacement::Left => BoundingBox::new(
            Position::new(margin + stacked.width + padding, margin),
            Dimensions::new(wheel_size, content.height),
        ),
        TablePlacement::Below => BoundingBox::new(
            Position::new(margin, margin),
            Dimensions::new(content.width, wheel_size),
        ),
    };
    let wheel_position = if config.auto_center() {
        Position::new(
            sub_area.left() + (sub_area.size.width - wheel_size) / 2.0,
            sub_area.top() + (sub_area.size.height - wheel_size) / 2.0,
        )
    } else {
        sub_area.origin
    };

    // Phase 5: radii
    let resolved = rings::resolve(ring_table, wheel_size);
    let wheel = WheelLayout {
        position: wheel_position,
        size: wheel_size,
        zodiac: resolved.zodiac,
        rings: resolved.wheels,
        aspect_radius: resolved.aspect,
        glyph_scale,
    };
    crate::log::debug!(
        center_x = wheel.center().x.0,
        center_y = wheel.center().y.0,
        rings = wheel.rings.len(),
        "placed wheel"
    );

    // Phase 6: corner widgets
    let candidates = descriptor
        .widgets()
        .iter()
        .enumerate()
        .map(|(i, request)| {
            let id = ElementId::Widget(i);
            Ok(corners::Candidate {
                id,
                request,
                size: measurements.require(id)?,
            })
        })
        .collect::<Result<Vec<_>, InvalidContentError>>()?;
    let (placed, widget_warnings) =
        corners::place_widgets(wheel.bounds(), &candidates, descriptor.center_occupied());
    warnings.extend(widget_warnings);

    // Phase 7: absolute table positions
    let table_origin = match placement {
        TablePlacement::Right | TablePlacement::Left => {
            let x = if placement == TablePlacement::Right {
                margin + wheel_size + padding
            } else {
                margin
            };
            let y = if config.auto_center() {
                margin + (content.height - stacked.height) / 2.0
            } else {
                margin
            };
            Position::new(x, y)
        }
        TablePlacement::Below => {
            let x = if config.auto_center() {
                margin + (content.width - stacked.width) / 2.0
            } else {
                margin
            };
            Position::new(x, margin + wheel_size + padding)
        }
    };
    let tables: BTreeMap<ElementId, BoundingBox> = arrangement
        .entries()
        .iter()
        .zip(&table_sizes)
        .map(|((id, offset), (_, size))| {
            (*id, BoundingBox::new(table_origin.offset_by(*offset), *size))
        })
        .collect();

    if let Some(max) = config.max_canvas() {
        let limit_x = max.width - margin;
        let limit_y = max.height - margin;
        for (id, bounds) in &tables {
            if bounds.right() > limit_x || bounds.bottom() > limit_y {
                let warning = LayoutWarning::TableOverflow {
                    table: *id,
                    needed: bounds.size,
                    available: Dimensions::new(
                        (limit_x - bounds.left()).max(Px::ZERO),
                        (limit_y - bounds.top()).max(Px::ZERO),
                    ),
                };
                crate::log::warn!(element = %id, "{warning}");
                warnings.push(warning);
            }
        }
    }

    Ok(LayoutOutcome {
        layout: LayoutResult {
            canvas,
            content,
            margin,
            placement,
            wheel,
            table_origin,
            arrangement,
            tables,
            widgets: placed.into_iter().collect(),
        },
        warnings,
    })
}
