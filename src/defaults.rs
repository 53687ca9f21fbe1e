//! Default sizes, ring-ratio tables and styles (all lengths in pixels)

use crate::config::{RingRatioTable, TableStyle, WheelRingRatios, WidgetStyle};
use crate::types::{Px, Ratio};

pub const BASE_SIZE: Px = Px(600.0);
pub const MIN_MARGIN: Px = Px(30.0);
pub const TABLE_PADDING: Px = Px(30.0);
pub const GAP_BETWEEN_TABLES: Px = Px(20.0);
pub const AUTO_CENTER: bool = true;
pub const AUTO_GROW_WHEEL: bool = true;

/// Largest wheel size, as a multiple of the base size, per wheel count (1..=4)
pub const GROWTH: [Ratio; 4] = [Ratio(1.0), Ratio(1.2), Ratio(1.35), Ratio(1.5)];

/// Glyph scale-down per wheel count (1..=4) so crowded rings stay legible
pub const GLYPH_SCALE: [Ratio; 4] = [Ratio(1.0), Ratio(0.85), Ratio(0.70), Ratio(0.60)];

/// Houses are always twelve
pub const HOUSE_COUNT: usize = 12;

// ============================================================================
// Ring ratio tables (fractions of the wheel diameter)
// ============================================================================

const fn wheel(outer: f64, glyph: f64, inner: f64) -> WheelRingRatios {
    WheelRingRatios {
        outer: Ratio(outer),
        glyph: Ratio(glyph),
        inner: Ratio(inner),
    }
}

pub const SINGLE_WHEEL_RINGS: [WheelRingRatios; 1] = [wheel(0.40, 0.34, 0.22)];

pub const BI_WHEEL_RINGS: [WheelRingRatios; 2] = [
    wheel(0.41, 0.375, 0.34),
    wheel(0.34, 0.29, 0.22),
];

pub const TRI_WHEEL_RINGS: [WheelRingRatios; 3] = [
    wheel(0.42, 0.395, 0.37),
    wheel(0.37, 0.335, 0.30),
    wheel(0.30, 0.26, 0.20),
];

pub const QUAD_WHEEL_RINGS: [WheelRingRatios; 4] = [
    wheel(0.425, 0.405, 0.385),
    wheel(0.385, 0.36, 0.335),
    wheel(0.335, 0.305, 0.275),
    wheel(0.275, 0.24, 0.19),
];

/// The built-in ring table for `wheel_count` wheels (clamped to 1..=4)
pub fn ring_ratios(wheel_count: usize) -> RingRatioTable {
    match wheel_count {
        0 | 1 => RingRatioTable::new(
            Ratio(0.47),
            Ratio(0.40),
            SINGLE_WHEEL_RINGS.to_vec(),
            Ratio(0.22),
        ),
        2 => RingRatioTable::new(Ratio(0.47), Ratio(0.41), BI_WHEEL_RINGS.to_vec(), Ratio(0.22)),
        3 => RingRatioTable::new(Ratio(0.47), Ratio(0.42), TRI_WHEEL_RINGS.to_vec(), Ratio(0.20)),
        _ => RingRatioTable::new(Ratio(0.47), Ratio(0.425), QUAD_WHEEL_RINGS.to_vec(), Ratio(0.19)),
    }
}

// ============================================================================
// Table and widget styles
// ============================================================================

pub const ROW_HEIGHT: Px = Px(24.0);
pub const CELL_PADDING: Px = Px(10.0);
pub const ASPECT_CELL: Px = Px(24.0);

/// glyph, name, longitude, house
pub fn position_table_style() -> TableStyle {
    TableStyle::new(vec![Px(32.0), Px(96.0), Px(96.0), Px(48.0)], ROW_HEIGHT, CELL_PADDING)
}

/// house, cusp longitude, sign
pub fn house_table_style() -> TableStyle {
    TableStyle::new(vec![Px(48.0), Px(96.0), Px(96.0)], ROW_HEIGHT, CELL_PADDING)
}

/// One square cell per object pair
pub fn aspectarian_style() -> TableStyle {
    TableStyle::new(vec![ASPECT_CELL], ASPECT_CELL, CELL_PADDING)
}

/// Uniform column for free-form tables
pub fn custom_table_style() -> TableStyle {
    TableStyle::new(vec![Px(80.0)], ROW_HEIGHT, CELL_PADDING)
}

pub const WIDGET_WIDTH: Px = Px(160.0);
pub const WIDGET_LINE_HEIGHT: Px = Px(16.0);
pub const WIDGET_PADDING: Px = Px(8.0);
pub const DIAGRAM_SIZE: Px = Px(120.0);

/// Four elements plus three modalities
pub const COUNTS_LINES: usize = 7;

pub fn widget_style() -> WidgetStyle {
    WidgetStyle::new(WIDGET_WIDTH, WIDGET_LINE_HEIGHT, WIDGET_PADDING, DIAGRAM_SIZE)
}
