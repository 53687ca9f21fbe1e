//! Content measurement: the size of every table and widget, never its place

use std::collections::BTreeMap;

use crate::config::{LayoutConfig, TableStyle, WidgetStyle};
use crate::content::{ContentDescriptor, ElementId, TableKind, WidgetKind};
use crate::defaults::{COUNTS_LINES, HOUSE_COUNT};
use crate::errors::{InvalidContentError, LayoutError};
use crate::types::{Dimensions, Px};

/// Size of every requested element, keyed by element id
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Measurements {
    sizes: BTreeMap<ElementId, Dimensions>,
}

impl Measurements {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a copy with `id` measured as `size`
    pub fn with(mut self, id: ElementId, size: Dimensions) -> Self {
        self.sizes.insert(id, size);
        self
    }

    pub fn get(&self, id: ElementId) -> Option<Dimensions> {
        self.sizes.get(&id).copied()
    }

    /// Size of `id`, or an error if it was never measured
    pub fn require(&self, id: ElementId) -> Result<Dimensions, InvalidContentError> {
        self.get(id).ok_or(InvalidContentError::Unmeasured { element: id })
    }

    /// Entries in id order (tables first, then widgets)
    pub fn iter(&self) -> impl Iterator<Item = (ElementId, Dimensions)> + '_ {
        self.sizes.iter().map(|(id, size)| (*id, *size))
    }

    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }
}

impl FromIterator<(ElementId, Dimensions)> for Measurements {
    fn from_iter<I: IntoIterator<Item = (ElementId, Dimensions)>>(iter: I) -> Self {
        Self {
            sizes: iter.into_iter().collect(),
        }
    }
}

/// Measure every table and corner widget the descriptor requests.
///
/// Zero counts are valid and measure as an empty (header-only) table.
pub fn measure(
    descriptor: &ContentDescriptor,
    config: &LayoutConfig,
) -> Result<Measurements, LayoutError> {
    let mut sizes = BTreeMap::new();

    for (i, table) in descriptor.tables().iter().enumerate() {
        let id = ElementId::Table(i);
        let size = measure_table(descriptor, config, id, table)?;
        crate::log::debug!(
            element = %id,
            kind = table.name(),
            width = size.width.0,
            height = size.height.0,
            "measured table"
        );
        sizes.insert(id, size);
    }

    for (i, widget) in descriptor.widgets().iter().enumerate() {
        let id = ElementId::Widget(i);
        let size = measure_widget(config.widget_style(), &widget.kind);
        crate::log::debug!(
            element = %id,
            kind = widget.kind.name(),
            width = size.width.0,
            height = size.height.0,
            "measured widget"
        );
        sizes.insert(id, size);
    }

    Ok(Measurements { sizes })
}

fn measure_table(
    descriptor: &ContentDescriptor,
    config: &LayoutConfig,
    id: ElementId,
    table: &TableKind,
) -> Result<Dimensions, InvalidContentError> {
    let size = match *table {
        TableKind::Positions { wheel } => {
            let objects = descriptor.wheel(wheel, id)?.objects;
            // header + one row per object + footer
            grid(config.position_style(), objects + 2, None)
        }
        TableKind::Houses { wheel } => {
            descriptor.wheel(wheel, id)?;
            grid(config.house_style(), HOUSE_COUNT + 1, None)
        }
        TableKind::Aspectarian { pair } => {
            let (rows, cols) = match pair {
                Some((a, b)) => (
                    descriptor.wheel(a, id)?.objects,
                    descriptor.wheel(b, id)?.objects,
                ),
                None if descriptor.wheel_count() == 1 => {
                    // Triangular grid: the lower triangle including its
                    // diagonal spans the full n x n box.
                    let n = descriptor.wheel(1, id)?.objects;
                    (n, n)
                }
                None => (descriptor.wheel(1, id)?.objects, descriptor.wheel(2, id)?.objects),
            };
            aspect_grid(config.aspect_style(), rows, cols)
        }
        TableKind::Custom { rows, columns } => grid(config.custom_style(), rows + 1, Some(columns)),
    };
    Ok(size)
}

/// `rows` rows of the style's row height. Columns are the style's widths,
/// or `columns` columns cycling through them.
fn grid(style: &TableStyle, rows: usize, columns: Option<usize>) -> Dimensions {
    let widths = style.column_widths();
    let content_width = match columns {
        None => style.columns_width(),
        Some(n) => {
            let cycles = n / widths.len();
            let rest: Px = widths[..n % widths.len()].iter().copied().sum();
            style.columns_width() * cycles as f64 + rest
        }
    };
    let pad = style.padding() * 2.0;
    Dimensions::new(content_width + pad, style.row_height() * rows as f64 + pad)
}

fn aspect_grid(style: &TableStyle, rows: usize, cols: usize) -> Dimensions {
    let cell_width = style.column_widths().first().copied().unwrap_or(style.row_height());
    let pad = style.padding() * 2.0;
    Dimensions::new(cell_width * cols as f64 + pad, style.row_height() * rows as f64 + pad)
}

fn measure_widget(style: &WidgetStyle, kind: &WidgetKind) -> Dimensions {
    let text_block = |lines: usize| -> Dimensions {
        Dimensions::new(style.width(), style.line_height() * lines as f64 + style.padding() * 2.0)
    };
    match *kind {
        WidgetKind::Summary { lines } => text_block(lines),
        // title line + entries
        WidgetKind::Legend { entries } => text_block(entries + 1),
        WidgetKind::Counts => text_block(COUNTS_LINES + 1),
        WidgetKind::Diagram => Dimensions::square(style.diagram_size()),
        WidgetKind::Custom { width, height } => {
            Dimensions::new(width.max(Px::ZERO), height.max(Px::ZERO))
        }
    }
}
