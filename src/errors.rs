//! Error and warning types with diagnostics via miette
//!
//! Fatal errors abort a layout before anything is drawn. Warnings never abort;
//! they travel alongside a successful layout in [`crate::LayoutOutcome`].

use miette::Diagnostic;
use thiserror::Error;

use crate::content::ElementId;
use crate::types::{Dimensions, NumericError};

// ============================================================================
// Configuration Errors
// ============================================================================

/// Errors in the layout configuration or in the chart arity
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum ConfigurationError {
    #[error("unsupported wheel count: {count}")]
    #[diagnostic(
        code(wheelwright::config::wheel_count),
        help("a chart carries between 1 and 4 concentric wheels")
    )]
    WheelCount { count: usize },

    #[error("invalid {field}: {value} ({reason})")]
    #[diagnostic(code(wheelwright::config::invalid_length))]
    InvalidLength {
        field: &'static str,
        value: f64,
        reason: NumericError,
    },

    #[error("unknown table placement: {value}")]
    #[diagnostic(
        code(wheelwright::config::unknown_placement),
        help("expected one of: right, left, below")
    )]
    UnknownPlacement { value: String },

    #[error("{table} table style has no columns")]
    #[diagnostic(code(wheelwright::config::empty_columns))]
    EmptyColumns { table: &'static str },

    #[error("ring ratio {ring} = {value} for {wheels}-wheel charts is outside (0, 1]")]
    #[diagnostic(code(wheelwright::config::ratio_out_of_range))]
    RatioOutOfRange {
        wheels: usize,
        ring: String,
        value: f64,
    },

    #[error("zodiac band of {wheels}-wheel charts reaches {value} of the wheel size")]
    #[diagnostic(
        code(wheelwright::config::ring_outside_wheel),
        help("ratios multiply the wheel diameter, so the outermost ratio must not exceed 0.5")
    )]
    RingOutsideWheel { wheels: usize, value: f64 },

    #[error("{wheels}-wheel rings out of order: {outer} ({outer_value}) vs {inner} ({inner_value})")]
    #[diagnostic(
        code(wheelwright::config::rings_not_decreasing),
        help("list rings outer to inner; nested wheels may touch but never overlap")
    )]
    RingsNotDecreasing {
        wheels: usize,
        outer: String,
        outer_value: f64,
        inner: String,
        inner_value: f64,
    },

    #[error("ring table for {wheels}-wheel charts describes {found} wheels")]
    #[diagnostic(code(wheelwright::config::ring_count_mismatch))]
    RingCountMismatch { wheels: usize, found: usize },

    #[error("growth factor {value} for {wheels}-wheel charts must be finite and at least 1")]
    #[diagnostic(code(wheelwright::config::invalid_growth))]
    InvalidGrowth { wheels: usize, value: f64 },

    #[error("glyph scale {value} for {wheels}-wheel charts is outside (0, 1]")]
    #[diagnostic(code(wheelwright::config::invalid_glyph_scale))]
    InvalidGlyphScale { wheels: usize, value: f64 },
}

// ============================================================================
// Content Errors
// ============================================================================

/// Errors in the content descriptor or its measurements
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum InvalidContentError {
    #[error("negative {what}: {value}")]
    #[diagnostic(code(wheelwright::content::negative_count))]
    NegativeCount { what: String, value: i64 },

    #[error("{element} refers to wheel {wheel}, but the chart has {wheel_count}")]
    #[diagnostic(
        code(wheelwright::content::unknown_wheel),
        help("wheel indices are 1-based, wheel 1 being the outermost")
    )]
    UnknownWheel {
        element: ElementId,
        wheel: usize,
        wheel_count: usize,
    },

    #[error("no measurement for {element}")]
    #[diagnostic(
        code(wheelwright::content::unmeasured),
        help("measure the descriptor with the same configuration before solving")
    )]
    Unmeasured { element: ElementId },

    #[error("invalid {what}: {value} ({reason})")]
    #[diagnostic(code(wheelwright::content::invalid_value))]
    InvalidValue {
        what: &'static str,
        value: f64,
        reason: NumericError,
    },
}

// ============================================================================
// Layout Errors
// ============================================================================

/// Any fatal error raised while measuring or solving a layout
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum LayoutError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Content(#[from] InvalidContentError),
}

// ============================================================================
// Render Errors
// ============================================================================

/// Errors raised by a render callback while painting one layer
#[derive(Error, Diagnostic, Debug)]
pub enum RenderError {
    #[error("failed to render {layer}: {message}")]
    #[diagnostic(code(wheelwright::render::layer))]
    Layer { layer: String, message: String },
}

/// Errors from the compositor: either the layout failed or a layer did
#[derive(Error, Diagnostic, Debug)]
pub enum ComposeError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Layout(#[from] LayoutError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Render(#[from] RenderError),
}

impl From<ConfigurationError> for ComposeError {
    fn from(err: ConfigurationError) -> Self {
        ComposeError::Layout(err.into())
    }
}

impl From<InvalidContentError> for ComposeError {
    fn from(err: InvalidContentError) -> Self {
        ComposeError::Layout(err.into())
    }
}

// ============================================================================
// Warnings
// ============================================================================

/// Non-fatal conditions surfaced next to a successful layout
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum LayoutWarning {
    #[error("{widget} ({kind}) omitted: no free corner")]
    #[diagnostic(
        code(wheelwright::layout::widget_omitted),
        severity(Warning),
        help("a wheel has four corners; request fewer widgets or make them smaller")
    )]
    WidgetOmitted { widget: ElementId, kind: String },

    #[error("{widget} ({kind}) omitted: {size} does not fit the {square} wheel square")]
    #[diagnostic(
        code(wheelwright::layout::widget_too_large),
        severity(Warning),
        help("corner widgets must fit inside the wheel square; shrink the widget")
    )]
    WidgetTooLarge {
        widget: ElementId,
        kind: String,
        size: Dimensions,
        square: Dimensions,
    },

    #[error("{table} needs {needed} but only {available} is available")]
    #[diagnostic(
        code(wheelwright::layout::table_overflow),
        severity(Warning),
        help("the canvas grows past its limit to hold the table; it may look cramped")
    )]
    TableOverflow {
        table: ElementId,
        needed: Dimensions,
        available: Dimensions,
    },
}
