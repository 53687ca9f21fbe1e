//! Layout and composition engine for radial astrological charts.
//!
//! Given a [`ContentDescriptor`] (how many wheels, objects and aspects, which
//! tables and corner widgets) and a [`LayoutConfig`], the engine computes an
//! exact, collision-free [`LayoutResult`]: canvas size, wheel position and
//! ring radii, and an absolute box for every table and widget. Painting is
//! left to a [`LayerRenderer`]; [`OutlineRenderer`] draws guide outlines.
//!
//! ```
//! use wheelwright::{ContentDescriptor, LayoutConfig, OutlineRenderer, TableKind, compose};
//!
//! let chart = ContentDescriptor::builder()
//!     .wheel_with_aspects(12, 20)
//!     .table(TableKind::Positions { wheel: 1 })
//!     .build()?;
//! let composition = compose(&chart, &LayoutConfig::default(), &mut OutlineRenderer)?;
//! assert!(composition.svg().contains("<svg"));
//! # Ok::<(), miette::Report>(())
//! ```

mod log;

pub mod compose;
pub mod config;
pub mod content;
pub mod defaults;
pub mod errors;
pub mod layout;
pub mod measure;
pub mod transform;
pub mod types;

pub use compose::{
    Composition, LayerContent, LayerRenderer, OutlineRenderer, RenderLayer, Surface, compose,
    layout,
};
#[cfg(feature = "rayon")]
pub use compose::layout_batch;
pub use config::{
    LayoutConfig, LayoutConfigBuilder, RingRatioTable, TablePlacement, TableStyle, WheelRingRatios,
    WidgetStyle,
};
pub use content::{
    ContentDescriptor, ContentDescriptorBuilder, Corner, ElementId, TableKind, WheelContent,
    WidgetKind, WidgetPlacement, WidgetRequest,
};
pub use errors::{
    ComposeError, ConfigurationError, InvalidContentError, LayoutError, LayoutWarning, RenderError,
};
pub use layout::{
    Annulus, LayoutOutcome, LayoutResult, PlacedWidget, RingSet, WheelLayout, WidgetSlot, solve,
};
pub use measure::{Measurements, measure};
pub use transform::{CoordinateTransformer, to_pixel};
pub use types::{Angle, BoundingBox, Dimensions, Position, Px, Ratio};
