//! Compositor: measure, solve, then hand every layer to a renderer
//!
//! The compositor draws nothing itself. It owns the order of operations and
//! guarantees that a failed layout never produces a partial canvas.

mod layers;
mod surface;

use std::io::{self, Write};

pub use layers::{
    CornerWidgetLayer, Layer, LayerContent, RenderLayer, TableLayer, WheelRingLayer,
    ZodiacBandLayer, layer_for, layer_stack,
};
pub use surface::Surface;

use crate::config::LayoutConfig;
use crate::content::ContentDescriptor;
use crate::errors::{ComposeError, LayoutError, LayoutWarning, RenderError};
use crate::layout::{LayoutOutcome, LayoutResult, solve};
use crate::measure::measure;
use crate::transform::CoordinateTransformer;

/// External paint callback, invoked once per layer
pub trait LayerRenderer {
    fn render_layer(
        &mut self,
        content: &LayerContent<'_>,
        transformer: &CoordinateTransformer,
        surface: &mut Surface,
    ) -> Result<(), RenderError>;
}

impl<F> LayerRenderer for F
where
    F: FnMut(&LayerContent<'_>, &CoordinateTransformer, &mut Surface) -> Result<(), RenderError>,
{
    fn render_layer(
        &mut self,
        content: &LayerContent<'_>,
        transformer: &CoordinateTransformer,
        surface: &mut Surface,
    ) -> Result<(), RenderError> {
        self(content, transformer, surface)
    }
}

/// Paints guide outlines for every layer using the built-in layers
#[derive(Debug, Clone, Copy, Default)]
pub struct OutlineRenderer;

impl LayerRenderer for OutlineRenderer {
    fn render_layer(
        &mut self,
        content: &LayerContent<'_>,
        transformer: &CoordinateTransformer,
        surface: &mut Surface,
    ) -> Result<(), RenderError> {
        layer_for(content).render(transformer, surface, content)
    }
}

/// Finished artifact: serialized SVG plus the geometry it was painted from
#[derive(Debug, Clone, PartialEq)]
pub struct Composition {
    svg: String,
    layout: LayoutResult,
    warnings: Vec<LayoutWarning>,
}

impl Composition {
    pub fn svg(&self) -> &str {
        &self.svg
    }

    pub fn layout(&self) -> &LayoutResult {
        &self.layout
    }

    pub fn warnings(&self) -> &[LayoutWarning] {
        &self.warnings
    }

    /// Write the SVG to `writer`, which is only borrowed for this call.
    pub fn write_to<W: Write>(&self, mut writer: W) -> io::Result<()> {
        writer.write_all(self.svg.as_bytes())?;
        writer.flush()
    }

    pub fn into_svg(self) -> String {
        self.svg
    }
}

/// Measure and solve in one step.
pub fn layout(
    descriptor: &ContentDescriptor,
    config: &LayoutConfig,
) -> Result<LayoutOutcome, LayoutError> {
    let measurements = measure(descriptor, config)?;
    solve(descriptor, config, &measurements)
}

/// Solve many independent charts in parallel. Results keep input order.
#[cfg(feature = "rayon")]
pub fn layout_batch(
    requests: &[(ContentDescriptor, LayoutConfig)],
) -> Vec<Result<LayoutOutcome, LayoutError>> {
    use rayon::prelude::*;

    requests
        .par_iter()
        .map(|(descriptor, config)| layout(descriptor, config))
        .collect()
}

/// Lay out `descriptor` and paint it layer by layer with `renderer`.
///
/// Layout errors abort before any surface exists. A renderer error aborts
/// the remaining layers and nothing is returned.
pub fn compose<R>(
    descriptor: &ContentDescriptor,
    config: &LayoutConfig,
    renderer: &mut R,
) -> Result<Composition, ComposeError>
where
    R: LayerRenderer + ?Sized,
{
    let LayoutOutcome { layout, warnings } = layout(descriptor, config)?;

    let transformer = CoordinateTransformer::for_wheel(&layout.wheel, descriptor.rotation());
    let mut surface = Surface::new(layout.canvas);
    for content in layer_stack(descriptor, &layout) {
        crate::log::debug!(layer = %content.name(), "rendering layer");
        renderer.render_layer(&content, &transformer, &mut surface)?;
    }
    crate::log::debug!(nodes = surface.node_count(), warnings = warnings.len(), "composed chart");

    Ok(Composition {
        svg: surface.finish(),
        layout,
        warnings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{TableKind, WidgetKind, WidgetPlacement};

    fn descriptor() -> ContentDescriptor {
        ContentDescriptor::builder()
            .wheel_with_aspects(10, 5)
            .table(TableKind::Houses { wheel: 1 })
            .widget(WidgetKind::Counts, WidgetPlacement::Auto)
            .build()
            .unwrap()
    }

    #[test]
    fn outline_renderer_produces_svg_of_canvas_size() {
        let composition =
            compose(&descriptor(), &LayoutConfig::default(), &mut OutlineRenderer).unwrap();
        let canvas = composition.layout().canvas;
        assert!(composition.svg().contains("<svg"));
        assert!(composition.svg().contains(&format!(r#"width="{}""#, canvas.width)));
        assert!(composition.warnings().is_empty());
    }

    #[test]
    fn closures_see_every_layer_once() {
        let mut seen = Vec::new();
        let mut record = |content: &LayerContent<'_>,
                          _: &CoordinateTransformer,
                          _: &mut Surface|
         -> Result<(), RenderError> {
            seen.push(content.name());
            Ok(())
        };
        compose(&descriptor(), &LayoutConfig::default(), &mut record).unwrap();
        assert_eq!(
            seen,
            vec!["zodiac band", "wheel 1", "table #0 (houses)", "widget #0 (counts)"]
        );
    }

    #[test]
    fn renderer_error_aborts_composition() {
        let mut calls = 0;
        let mut failing = |content: &LayerContent<'_>,
                           _: &CoordinateTransformer,
                           _: &mut Surface|
         -> Result<(), RenderError> {
            calls += 1;
            match content {
                LayerContent::Table { .. } => Err(RenderError::Layer {
                    layer: content.name(),
                    message: "font missing".to_string(),
                }),
                _ => Ok(()),
            }
        };
        let err = compose(&descriptor(), &LayoutConfig::default(), &mut failing).unwrap_err();
        assert!(matches!(err, ComposeError::Render(_)));
        assert_eq!(calls, 3);
    }

    #[test]
    fn write_to_copies_the_svg() {
        let composition =
            compose(&descriptor(), &LayoutConfig::default(), &mut OutlineRenderer).unwrap();
        let mut out = Vec::new();
        composition.write_to(&mut out).unwrap();
        assert_eq!(out, composition.svg().as_bytes());
    }
}
