//! Content descriptor: what a chart needs laid out, independent of config
//!
//! The calculation layer only tells us counts and requests. Raw counts come in
//! as signed integers (they cross a language or wire boundary upstream) and are
//! validated once, in [`ContentDescriptorBuilder::build`].

use std::fmt;

use crate::config::MAX_WHEELS;
use crate::errors::{ConfigurationError, InvalidContentError, LayoutError};
use crate::types::{Angle, NumericError, Px};

/// Identifies a table or corner widget by its request index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ElementId {
    Table(usize),
    Widget(usize),
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementId::Table(i) => write!(f, "table #{i}"),
            ElementId::Widget(i) => write!(f, "widget #{i}"),
        }
    }
}

/// Objects and aspects drawn on one wheel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WheelContent {
    pub objects: usize,
    pub aspects: usize,
}

// ============================================================================
// Tables
// ============================================================================

/// Kinds of auxiliary tables. Wheel indices are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableKind {
    /// One row per object of `wheel`, plus header and footer
    Positions { wheel: usize },
    /// Twelve house cusps of `wheel`, plus header
    Houses { wheel: usize },
    /// Aspect grid. `None` means triangular over wheel 1 for single-wheel
    /// charts and wheel 1 against wheel 2 otherwise; `Some((rows, cols))`
    /// crosses two explicit wheels.
    Aspectarian { pair: Option<(usize, usize)> },
    /// Free-form grid with a header row
    Custom { rows: usize, columns: usize },
}

impl TableKind {
    pub fn name(&self) -> &'static str {
        match self {
            TableKind::Positions { .. } => "positions",
            TableKind::Houses { .. } => "houses",
            TableKind::Aspectarian { .. } => "aspectarian",
            TableKind::Custom { .. } => "custom",
        }
    }

    /// Wheels this table reads from
    fn wheels(&self) -> Vec<usize> {
        match *self {
            TableKind::Positions { wheel } | TableKind::Houses { wheel } => vec![wheel],
            TableKind::Aspectarian { pair: Some((a, b)) } => vec![a, b],
            TableKind::Aspectarian { pair: None } | TableKind::Custom { .. } => Vec::new(),
        }
    }
}

// ============================================================================
// Corner widgets
// ============================================================================

/// The four corners of the wheel's bounding square
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    /// Fixed order used to hand out and displace corners
    pub const SCAN_ORDER: [Corner; 4] = [
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomLeft,
        Corner::BottomRight,
    ];

    pub fn scan_index(self) -> usize {
        match self {
            Corner::TopLeft => 0,
            Corner::TopRight => 1,
            Corner::BottomLeft => 2,
            Corner::BottomRight => 3,
        }
    }

    pub fn is_left(self) -> bool {
        matches!(self, Corner::TopLeft | Corner::BottomLeft)
    }

    pub fn is_top(self) -> bool {
        matches!(self, Corner::TopLeft | Corner::TopRight)
    }
}

/// Auxiliary info boxes drawn around the wheel
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WidgetKind {
    /// Chart summary (name, date, place...), one line each
    Summary { lines: usize },
    /// Glyph legend, one entry per line
    Legend { entries: usize },
    /// Element and modality tallies
    Counts,
    /// Small square auxiliary diagram (e.g. a moon phase)
    Diagram,
    /// Caller-sized box
    Custom { width: Px, height: Px },
}

impl WidgetKind {
    pub fn name(&self) -> &'static str {
        match self {
            WidgetKind::Summary { .. } => "summary",
            WidgetKind::Legend { .. } => "legend",
            WidgetKind::Counts => "counts",
            WidgetKind::Diagram => "diagram",
            WidgetKind::Custom { .. } => "custom",
        }
    }
}

/// Where a widget would like to go
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WidgetPlacement {
    /// Next free corner in scan order
    #[default]
    Auto,
    /// A specific corner; displaced forward in scan order on conflict
    Corner(Corner),
    /// Centred on the wheel when nothing else occupies the centre
    Center,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WidgetRequest {
    pub kind: WidgetKind,
    pub placement: WidgetPlacement,
}

// ============================================================================
// ContentDescriptor
// ============================================================================

/// Immutable summary of what must be laid out
#[derive(Debug, Clone, PartialEq)]
pub struct ContentDescriptor {
    wheels: Vec<WheelContent>,
    tables: Vec<TableKind>,
    widgets: Vec<WidgetRequest>,
    rotation: Angle,
}

impl ContentDescriptor {
    pub fn builder() -> ContentDescriptorBuilder {
        ContentDescriptorBuilder::default()
    }

    /// Number of concentric wheels (1..=4)
    pub fn wheel_count(&self) -> usize {
        self.wheels.len()
    }

    /// Wheels in order, wheel 1 (outermost) first
    pub fn wheels(&self) -> &[WheelContent] {
        &self.wheels
    }

    /// Content of 1-based `wheel`, or an error naming the element that asked
    pub fn wheel(
        &self,
        wheel: usize,
        element: ElementId,
    ) -> Result<WheelContent, InvalidContentError> {
        wheel
            .checked_sub(1)
            .and_then(|i| self.wheels.get(i))
            .copied()
            .ok_or(InvalidContentError::UnknownWheel {
                element,
                wheel,
                wheel_count: self.wheels.len(),
            })
    }

    pub fn total_aspects(&self) -> usize {
        self.wheels.iter().map(|w| w.aspects).sum()
    }

    /// Requested tables, in stacking order
    pub fn tables(&self) -> &[TableKind] {
        &self.tables
    }

    /// Requested corner widgets, in placement priority order
    pub fn widgets(&self) -> &[WidgetRequest] {
        &self.widgets
    }

    /// Chart rotation handed to the coordinate transformer
    pub fn rotation(&self) -> Angle {
        self.rotation
    }

    pub fn has_tables(&self) -> bool {
        !self.tables.is_empty()
    }

    /// Aspect lines fill the central disc, leaving no room for a centred widget
    pub fn center_occupied(&self) -> bool {
        self.total_aspects() > 0
    }
}

/// Collects raw counts and requests; validation happens in [`build`](Self::build).
#[derive(Debug, Clone, Default)]
pub struct ContentDescriptorBuilder {
    wheels: Vec<WheelContent>,
    tables: Vec<TableKind>,
    widgets: Vec<WidgetRequest>,
    rotation: f64,
    error: Option<InvalidContentError>,
}

impl ContentDescriptorBuilder {
    /// Add the next (inner) wheel with `objects` objects and no aspects
    pub fn wheel(self, objects: i64) -> Self {
        self.wheel_with_aspects(objects, 0)
    }

    /// Add the next (inner) wheel with its object and aspect counts
    pub fn wheel_with_aspects(mut self, objects: i64, aspects: i64) -> Self {
        let wheel = self.wheels.len() + 1;
        let objects = self.count(format!("object count of wheel {wheel}"), objects);
        let aspects = self.count(format!("aspect count of wheel {wheel}"), aspects);
        self.wheels.push(WheelContent { objects, aspects });
        self
    }

    pub fn table(mut self, kind: TableKind) -> Self {
        self.tables.push(kind);
        self
    }

    /// Free-form table from raw row and column counts
    pub fn custom_table(mut self, rows: i64, columns: i64) -> Self {
        let index = self.tables.len();
        let rows = self.count(format!("row count of table #{index}"), rows);
        let columns = self.count(format!("column count of table #{index}"), columns);
        self.tables.push(TableKind::Custom { rows, columns });
        self
    }

    pub fn widget(mut self, kind: WidgetKind, placement: WidgetPlacement) -> Self {
        self.widgets.push(WidgetRequest { kind, placement });
        self
    }

    /// Chart rotation in degrees
    pub fn rotation(mut self, degrees: f64) -> Self {
        self.rotation = degrees;
        self
    }

    // First bad count wins; later ones are recorded as zero.
    fn count(&mut self, what: String, value: i64) -> usize {
        match usize::try_from(value) {
            Ok(n) => n,
            Err(_) => {
                if self.error.is_none() {
                    self.error = Some(InvalidContentError::NegativeCount { what, value });
                }
                0
            }
        }
    }

    /// Validate counts, wheel references and arity.
    pub fn build(self) -> Result<ContentDescriptor, LayoutError> {
        if let Some(err) = self.error {
            return Err(err.into());
        }
        if self.wheels.is_empty() || self.wheels.len() > MAX_WHEELS {
            return Err(ConfigurationError::WheelCount {
                count: self.wheels.len(),
            }
            .into());
        }
        if !self.rotation.is_finite() {
            let reason = if self.rotation.is_nan() {
                NumericError::NaN
            } else {
                NumericError::Infinite
            };
            return Err(InvalidContentError::InvalidValue {
                what: "rotation",
                value: self.rotation,
                reason,
            }
            .into());
        }
        for widget in &self.widgets {
            if let WidgetKind::Custom { width, height } = widget.kind {
                for value in [width, height] {
                    Px::try_non_negative(value.raw()).map_err(|reason| {
                        InvalidContentError::InvalidValue {
                            what: "custom widget size",
                            value: value.raw(),
                            reason,
                        }
                    })?;
                }
            }
        }

        let descriptor = ContentDescriptor {
            wheels: self.wheels,
            tables: self.tables,
            widgets: self.widgets,
            rotation: Angle(self.rotation),
        };
        for (i, table) in descriptor.tables.iter().enumerate() {
            for wheel in table.wheels() {
                descriptor.wheel(wheel, ElementId::Table(i))?;
            }
        }
        Ok(descriptor)
    }
}
