//! Render layers: one logical slice of a solved chart each
//!
//! Each layer type knows how to paint one [`LayerContent`] variant. The
//! [`Layer`] enum dispatches to them without boxing, and [`layer_for`] picks
//! the right one for a given content slice.

use enum_dispatch::enum_dispatch;

use super::surface::Surface;
use crate::content::{ContentDescriptor, ElementId, TableKind, WheelContent, WidgetKind};
use crate::errors::RenderError;
use crate::layout::{LayoutResult, PlacedWidget, RingSet, WheelLayout};
use crate::transform::CoordinateTransformer;
use crate::types::{Angle, BoundingBox, Position, Px};

/// Zodiac signs per turn
const SIGNS: usize = 12;

/// Baseline offset of a title inside its box
const TITLE_INSET: Px = Px(14.0);

/// The slice of a [`LayoutResult`] one layer paints
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LayerContent<'a> {
    Zodiac {
        wheel: &'a WheelLayout,
    },
    Wheel {
        /// 1-based, wheel 1 outermost
        index: usize,
        rings: &'a RingSet,
        content: WheelContent,
        /// Whether the aspect disc sits inside this wheel
        innermost: bool,
        aspect_radius: Px,
    },
    Table {
        id: ElementId,
        kind: TableKind,
        bounds: BoundingBox,
    },
    Widget {
        id: ElementId,
        kind: WidgetKind,
        widget: PlacedWidget,
    },
}

impl LayerContent<'_> {
    /// Human-readable name for logs and errors
    pub fn name(&self) -> String {
        match self {
            LayerContent::Zodiac { .. } => "zodiac band".to_string(),
            LayerContent::Wheel { index, .. } => format!("wheel {index}"),
            LayerContent::Table { id, kind, .. } => format!("{id} ({})", kind.name()),
            LayerContent::Widget { id, kind, .. } => format!("{id} ({})", kind.name()),
        }
    }
}

/// Every layer of a solved chart in paint order: zodiac band, wheels from
/// the outside in, tables in request order, then placed widgets.
pub fn layer_stack<'a>(
    descriptor: &ContentDescriptor,
    layout: &'a LayoutResult,
) -> Vec<LayerContent<'a>> {
    let wheel = &layout.wheel;
    let mut layers = vec![LayerContent::Zodiac { wheel }];

    let count = wheel.rings.len();
    layers.extend(
        wheel
            .rings
            .iter()
            .zip(descriptor.wheels())
            .enumerate()
            .map(|(i, (rings, content))| LayerContent::Wheel {
                index: i + 1,
                rings,
                content: *content,
                innermost: i + 1 == count,
                aspect_radius: wheel.aspect_radius,
            }),
    );

    layers.extend(descriptor.tables().iter().enumerate().filter_map(|(i, kind)| {
        let id = ElementId::Table(i);
        layout.tables.get(&id).map(|bounds| LayerContent::Table {
            id,
            kind: *kind,
            bounds: *bounds,
        })
    }));

    layers.extend(descriptor.widgets().iter().enumerate().filter_map(|(i, request)| {
        let id = ElementId::Widget(i);
        layout.widgets.get(&id).map(|widget| LayerContent::Widget {
            id,
            kind: request.kind,
            widget: *widget,
        })
    }));

    layers
}

fn mismatch(layer: &str, content: &LayerContent<'_>) -> RenderError {
    RenderError::Layer {
        layer: layer.to_string(),
        message: format!("cannot paint {}", content.name()),
    }
}

// ============================================================================
// Layer trait and implementations
// ============================================================================

/// Paints one slice of the chart onto the surface
#[enum_dispatch]
pub trait RenderLayer {
    fn render(
        &self,
        transformer: &CoordinateTransformer,
        surface: &mut Surface,
        content: &LayerContent<'_>,
    ) -> Result<(), RenderError>;
}

/// Zodiac band: two circles and the twelve sign boundaries
#[derive(Debug, Clone, Copy, Default)]
pub struct ZodiacBandLayer;

impl RenderLayer for ZodiacBandLayer {
    fn render(
        &self,
        transformer: &CoordinateTransformer,
        surface: &mut Surface,
        content: &LayerContent<'_>,
    ) -> Result<(), RenderError> {
        let LayerContent::Zodiac { wheel } = content else {
            return Err(mismatch("zodiac band", content));
        };
        let center = transformer.center();
        surface.circle(center, wheel.zodiac.outer, "zodiac-outer");
        surface.circle(center, wheel.zodiac.inner, "zodiac-inner");
        for sign in 0..SIGNS {
            let angle = Angle(sign as f64 * 360.0 / SIGNS as f64);
            let (from, to) =
                transformer.radial_segment(angle, wheel.zodiac.outer, wheel.zodiac.inner);
            surface.line(from, to, "sign-boundary");
        }
        Ok(())
    }
}

/// One wheel: outer and inner edges, the glyph track, and the aspect disc
/// when it is the innermost wheel
#[derive(Debug, Clone, Copy, Default)]
pub struct WheelRingLayer;

impl RenderLayer for WheelRingLayer {
    fn render(
        &self,
        transformer: &CoordinateTransformer,
        surface: &mut Surface,
        content: &LayerContent<'_>,
    ) -> Result<(), RenderError> {
        let LayerContent::Wheel {
            index,
            rings,
            innermost,
            aspect_radius,
            ..
        } = content
        else {
            return Err(mismatch("wheel ring", content));
        };
        let center = transformer.center();
        surface.circle(center, rings.outer, &format!("wheel-{index}-outer"));
        surface.circle(center, rings.glyph, &format!("wheel-{index}-glyph"));
        surface.circle(center, rings.inner, &format!("wheel-{index}-inner"));
        if *innermost {
            surface.circle(center, *aspect_radius, "aspect-disc");
        }
        Ok(())
    }
}

/// Table frame with its title
#[derive(Debug, Clone, Copy, Default)]
pub struct TableLayer;

impl RenderLayer for TableLayer {
    fn render(
        &self,
        _transformer: &CoordinateTransformer,
        surface: &mut Surface,
        content: &LayerContent<'_>,
    ) -> Result<(), RenderError> {
        let LayerContent::Table { kind, bounds, .. } = content else {
            return Err(mismatch("table", content));
        };
        surface.rect(*bounds, &format!("table {}", kind.name()));
        surface.label(
            Position::new(bounds.left() + TITLE_INSET / 2.0, bounds.top() + TITLE_INSET),
            kind.name(),
            "table-title",
        );
        Ok(())
    }
}

/// Corner widget frame with its title
#[derive(Debug, Clone, Copy, Default)]
pub struct CornerWidgetLayer;

impl RenderLayer for CornerWidgetLayer {
    fn render(
        &self,
        _transformer: &CoordinateTransformer,
        surface: &mut Surface,
        content: &LayerContent<'_>,
    ) -> Result<(), RenderError> {
        let LayerContent::Widget { kind, widget, .. } = content else {
            return Err(mismatch("corner widget", content));
        };
        let bounds = widget.bounds;
        surface.rect(bounds, &format!("widget {}", kind.name()));
        surface.label(
            Position::new(bounds.left() + TITLE_INSET / 2.0, bounds.top() + TITLE_INSET),
            kind.name(),
            "widget-title",
        );
        Ok(())
    }
}

/// Every built-in layer, dispatched statically
#[enum_dispatch(RenderLayer)]
#[derive(Debug, Clone, Copy)]
pub enum Layer {
    ZodiacBandLayer,
    WheelRingLayer,
    TableLayer,
    CornerWidgetLayer,
}

/// The built-in layer that paints `content`
pub fn layer_for(content: &LayerContent<'_>) -> Layer {
    match content {
        LayerContent::Zodiac { .. } => ZodiacBandLayer.into(),
        LayerContent::Wheel { .. } => WheelRingLayer.into(),
        LayerContent::Table { .. } => TableLayer.into(),
        LayerContent::Widget { .. } => CornerWidgetLayer.into(),
    }
}
