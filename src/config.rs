//! Layout configuration: immutable values plus a `with_*` builder
//!
//! A [`LayoutConfig`] can only be obtained from [`LayoutConfig::default`] or
//! [`LayoutConfigBuilder::build`], so every config the solver sees has
//! already been validated.

use std::str::FromStr;

use crate::defaults;
use crate::errors::ConfigurationError;
use crate::types::{Dimensions, Px, Ratio};

/// Highest supported number of concentric wheels
pub const MAX_WHEELS: usize = 4;

/// Zero-based slot in the per-arity tables, or a configuration error
pub(crate) fn arity_slot(wheel_count: usize) -> Result<usize, ConfigurationError> {
    if (1..=MAX_WHEELS).contains(&wheel_count) {
        Ok(wheel_count - 1)
    } else {
        Err(ConfigurationError::WheelCount { count: wheel_count })
    }
}

/// Which side of the wheel the table strip occupies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TablePlacement {
    #[default]
    Right,
    Left,
    Below,
}

impl TablePlacement {
    /// Tables stack top-to-bottom beside the wheel, left-to-right below it
    pub fn stacks_vertically(self) -> bool {
        matches!(self, TablePlacement::Right | TablePlacement::Left)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TablePlacement::Right => "right",
            TablePlacement::Left => "left",
            TablePlacement::Below => "below",
        }
    }
}

impl FromStr for TablePlacement {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "right" => Ok(TablePlacement::Right),
            "left" => Ok(TablePlacement::Left),
            "below" => Ok(TablePlacement::Below),
            _ => Err(ConfigurationError::UnknownPlacement { value: s.to_string() }),
        }
    }
}

// ============================================================================
// Ring ratios
// ============================================================================

/// Radii of one wheel as fractions of the wheel diameter
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelRingRatios {
    /// Outer edge of the wheel (cusp lines start here)
    pub outer: Ratio,
    /// Where object glyphs sit
    pub glyph: Ratio,
    /// Inner edge of the wheel (house numbers sit just outside)
    pub inner: Ratio,
}

/// Ring-ratio table for one chart arity
#[derive(Debug, Clone, PartialEq)]
pub struct RingRatioTable {
    zodiac_outer: Ratio,
    zodiac_inner: Ratio,
    wheels: Vec<WheelRingRatios>,
    aspect: Ratio,
}

impl RingRatioTable {
    /// `wheels` lists wheel 1 (outermost) first
    pub fn new(
        zodiac_outer: Ratio,
        zodiac_inner: Ratio,
        wheels: Vec<WheelRingRatios>,
        aspect: Ratio,
    ) -> Self {
        Self {
            zodiac_outer,
            zodiac_inner,
            wheels,
            aspect,
        }
    }

    pub fn zodiac_outer(&self) -> Ratio {
        self.zodiac_outer
    }

    pub fn zodiac_inner(&self) -> Ratio {
        self.zodiac_inner
    }

    pub fn wheels(&self) -> &[WheelRingRatios] {
        &self.wheels
    }

    /// Radius of the central disc where aspect lines are drawn
    pub fn aspect(&self) -> Ratio {
        self.aspect
    }

    /// Check the table describes `wheel_count` properly nested wheels.
    pub fn validate(&self, wheel_count: usize) -> Result<(), ConfigurationError> {
        if self.wheels.len() != wheel_count {
            return Err(ConfigurationError::RingCountMismatch {
                wheels: wheel_count,
                found: self.wheels.len(),
            });
        }

        // Every ring, outer to inner, with whether it must be strictly
        // smaller than its predecessor (rings inside one band) or may touch
        // it (boundary between the zodiac band and a wheel, or two wheels).
        let mut rings: Vec<(String, Ratio, bool)> = vec![
            ("zodiac_outer".to_string(), self.zodiac_outer, true),
            ("zodiac_inner".to_string(), self.zodiac_inner, true),
        ];
        for (i, wheel) in self.wheels.iter().enumerate() {
            let n = i + 1;
            rings.push((format!("wheel_{n}_outer"), wheel.outer, false));
            rings.push((format!("wheel_{n}_glyph"), wheel.glyph, true));
            rings.push((format!("wheel_{n}_inner"), wheel.inner, true));
        }
        rings.push(("aspect".to_string(), self.aspect, false));

        for (name, value, _) in &rings {
            if !value.is_finite() || !value.is_unit_fraction() {
                return Err(ConfigurationError::RatioOutOfRange {
                    wheels: wheel_count,
                    ring: name.clone(),
                    value: value.raw(),
                });
            }
        }

        if self.zodiac_outer.raw() > 0.5 {
            return Err(ConfigurationError::RingOutsideWheel {
                wheels: wheel_count,
                value: self.zodiac_outer.raw(),
            });
        }

        for pair in rings.windows(2) {
            let (outer, outer_value, _) = &pair[0];
            let (inner, inner_value, strict) = &pair[1];
            let ordered = if *strict {
                inner_value < outer_value
            } else {
                inner_value <= outer_value
            };
            if !ordered {
                return Err(ConfigurationError::RingsNotDecreasing {
                    wheels: wheel_count,
                    outer: outer.clone(),
                    outer_value: outer_value.raw(),
                    inner: inner.clone(),
                    inner_value: inner_value.raw(),
                });
            }
        }

        Ok(())
    }
}

// ============================================================================
// Table and widget styles
// ============================================================================

/// Grid metrics for one table kind
#[derive(Debug, Clone, PartialEq)]
pub struct TableStyle {
    column_widths: Vec<Px>,
    row_height: Px,
    padding: Px,
}

impl TableStyle {
    pub fn new(column_widths: Vec<Px>, row_height: Px, padding: Px) -> Self {
        Self {
            column_widths,
            row_height,
            padding,
        }
    }

    pub fn column_widths(&self) -> &[Px] {
        &self.column_widths
    }

    pub fn row_height(&self) -> Px {
        self.row_height
    }

    /// Inner padding on every side of the grid
    pub fn padding(&self) -> Px {
        self.padding
    }

    /// Sum of the configured column widths
    pub fn columns_width(&self) -> Px {
        self.column_widths.iter().copied().sum()
    }

    fn validate(&self, table: &'static str) -> Result<(), ConfigurationError> {
        if self.column_widths.is_empty() {
            return Err(ConfigurationError::EmptyColumns { table });
        }
        for width in &self.column_widths {
            positive("column width", width.raw())?;
        }
        positive("row height", self.row_height.raw())?;
        non_negative("table cell padding", self.padding.raw())?;
        Ok(())
    }
}

/// Metrics shared by corner widgets
#[derive(Debug, Clone, PartialEq)]
pub struct WidgetStyle {
    width: Px,
    line_height: Px,
    padding: Px,
    diagram_size: Px,
}

impl WidgetStyle {
    pub fn new(width: Px, line_height: Px, padding: Px, diagram_size: Px) -> Self {
        Self {
            width,
            line_height,
            padding,
            diagram_size,
        }
    }

    pub fn width(&self) -> Px {
        self.width
    }

    pub fn line_height(&self) -> Px {
        self.line_height
    }

    pub fn padding(&self) -> Px {
        self.padding
    }

    /// Side of the square auxiliary diagram
    pub fn diagram_size(&self) -> Px {
        self.diagram_size
    }

    fn validate(&self) -> Result<(), ConfigurationError> {
        positive("widget width", self.width.raw())?;
        positive("widget line height", self.line_height.raw())?;
        non_negative("widget padding", self.padding.raw())?;
        positive("diagram size", self.diagram_size.raw())?;
        Ok(())
    }
}

fn positive(field: &'static str, value: f64) -> Result<Px, ConfigurationError> {
    Px::try_positive(value).map_err(|reason| ConfigurationError::InvalidLength {
        field,
        value,
        reason,
    })
}

fn non_negative(field: &'static str, value: f64) -> Result<Px, ConfigurationError> {
    Px::try_non_negative(value).map_err(|reason| ConfigurationError::InvalidLength {
        field,
        value,
        reason,
    })
}

// ============================================================================
// LayoutConfig
// ============================================================================

/// Every tunable layout parameter, validated and immutable
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutConfig {
    base_size: Px,
    min_margin: Px,
    table_padding: Px,
    gap_between_tables: Px,
    placement: TablePlacement,
    auto_center: bool,
    auto_grow_wheel: bool,
    ring_ratios: [RingRatioTable; MAX_WHEELS],
    growth: [Ratio; MAX_WHEELS],
    glyph_scale: [Ratio; MAX_WHEELS],
    max_canvas: Option<Dimensions>,
    position_style: TableStyle,
    house_style: TableStyle,
    aspect_style: TableStyle,
    custom_style: TableStyle,
    widget_style: WidgetStyle,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            base_size: defaults::BASE_SIZE,
            min_margin: defaults::MIN_MARGIN,
            table_padding: defaults::TABLE_PADDING,
            gap_between_tables: defaults::GAP_BETWEEN_TABLES,
            placement: TablePlacement::default(),
            auto_center: defaults::AUTO_CENTER,
            auto_grow_wheel: defaults::AUTO_GROW_WHEEL,
            ring_ratios: [
                defaults::ring_ratios(1),
                defaults::ring_ratios(2),
                defaults::ring_ratios(3),
                defaults::ring_ratios(4),
            ],
            growth: defaults::GROWTH,
            glyph_scale: defaults::GLYPH_SCALE,
            max_canvas: None,
            position_style: defaults::position_table_style(),
            house_style: defaults::house_table_style(),
            aspect_style: defaults::aspectarian_style(),
            custom_style: defaults::custom_table_style(),
            widget_style: defaults::widget_style(),
        }
    }
}

impl LayoutConfig {
    /// Start a builder from the defaults
    pub fn builder() -> LayoutConfigBuilder {
        LayoutConfigBuilder::new()
    }

    /// Start a builder seeded with this config's values
    pub fn to_builder(&self) -> LayoutConfigBuilder {
        LayoutConfigBuilder {
            config: self.clone(),
            bad_arity: None,
        }
    }

    /// Nominal side of the (square) wheel area
    pub fn base_size(&self) -> Px {
        self.base_size
    }

    /// Margin on every side of the canvas
    pub fn min_margin(&self) -> Px {
        self.min_margin
    }

    /// Space between the wheel area and the table strip
    pub fn table_padding(&self) -> Px {
        self.table_padding
    }

    pub fn gap_between_tables(&self) -> Px {
        self.gap_between_tables
    }

    pub fn placement(&self) -> TablePlacement {
        self.placement
    }

    pub fn auto_center(&self) -> bool {
        self.auto_center
    }

    pub fn auto_grow_wheel(&self) -> bool {
        self.auto_grow_wheel
    }

    /// Ring-ratio table for a chart with `wheel_count` wheels
    pub fn ring_ratios(&self, wheel_count: usize) -> Result<&RingRatioTable, ConfigurationError> {
        Ok(&self.ring_ratios[arity_slot(wheel_count)?])
    }

    /// Upper bound on wheel growth, as a multiple of `base_size`
    pub fn growth(&self, wheel_count: usize) -> Result<Ratio, ConfigurationError> {
        Ok(self.growth[arity_slot(wheel_count)?])
    }

    pub fn glyph_scale(&self, wheel_count: usize) -> Result<Ratio, ConfigurationError> {
        Ok(self.glyph_scale[arity_slot(wheel_count)?])
    }

    /// Optional cap on the canvas; exceeding it raises warnings, never clips
    pub fn max_canvas(&self) -> Option<Dimensions> {
        self.max_canvas
    }

    pub fn position_style(&self) -> &TableStyle {
        &self.position_style
    }

    pub fn house_style(&self) -> &TableStyle {
        &self.house_style
    }

    pub fn aspect_style(&self) -> &TableStyle {
        &self.aspect_style
    }

    pub fn custom_style(&self) -> &TableStyle {
        &self.custom_style
    }

    pub fn widget_style(&self) -> &WidgetStyle {
        &self.widget_style
    }
}

/// Accumulates options and produces one validated [`LayoutConfig`]
#[derive(Debug, Clone, Default)]
pub struct LayoutConfigBuilder {
    config: LayoutConfig,
    bad_arity: Option<usize>,
}

impl LayoutConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base_size(mut self, px: f64) -> Self {
        self.config.base_size = Px(px);
        self
    }

    pub fn with_min_margin(mut self, px: f64) -> Self {
        self.config.min_margin = Px(px);
        self
    }

    pub fn with_table_padding(mut self, px: f64) -> Self {
        self.config.table_padding = Px(px);
        self
    }

    pub fn with_gap_between_tables(mut self, px: f64) -> Self {
        self.config.gap_between_tables = Px(px);
        self
    }

    pub fn with_placement(mut self, placement: TablePlacement) -> Self {
        self.config.placement = placement;
        self
    }

    pub fn with_auto_center(mut self, on: bool) -> Self {
        self.config.auto_center = on;
        self
    }

    pub fn with_auto_grow_wheel(mut self, on: bool) -> Self {
        self.config.auto_grow_wheel = on;
        self
    }

    /// Override the ring table for one arity. Out-of-range arities are
    /// reported by [`build`](Self::build).
    pub fn with_ring_ratios(mut self, wheel_count: usize, table: RingRatioTable) -> Self {
        match arity_slot(wheel_count) {
            Ok(slot) => self.config.ring_ratios[slot] = table,
            Err(_) => self.pending_arity_error(wheel_count),
        }
        self
    }

    pub fn with_growth(mut self, wheel_count: usize, factor: f64) -> Self {
        match arity_slot(wheel_count) {
            Ok(slot) => self.config.growth[slot] = Ratio(factor),
            Err(_) => self.pending_arity_error(wheel_count),
        }
        self
    }

    pub fn with_glyph_scale(mut self, wheel_count: usize, scale: f64) -> Self {
        match arity_slot(wheel_count) {
            Ok(slot) => self.config.glyph_scale[slot] = Ratio(scale),
            Err(_) => self.pending_arity_error(wheel_count),
        }
        self
    }

    pub fn with_max_canvas(mut self, width: f64, height: f64) -> Self {
        self.config.max_canvas = Some(Dimensions::new(Px(width), Px(height)));
        self
    }

    pub fn without_max_canvas(mut self) -> Self {
        self.config.max_canvas = None;
        self
    }

    pub fn with_position_style(mut self, style: TableStyle) -> Self {
        self.config.position_style = style;
        self
    }

    pub fn with_house_style(mut self, style: TableStyle) -> Self {
        self.config.house_style = style;
        self
    }

    pub fn with_aspect_style(mut self, style: TableStyle) -> Self {
        self.config.aspect_style = style;
        self
    }

    pub fn with_custom_style(mut self, style: TableStyle) -> Self {
        self.config.custom_style = style;
        self
    }

    pub fn with_widget_style(mut self, style: WidgetStyle) -> Self {
        self.config.widget_style = style;
        self
    }

    // Remembered so `build` can report it; the `with_*` chain stays infallible.
    fn pending_arity_error(&mut self, wheel_count: usize) {
        self.bad_arity = Some(wheel_count);
    }

    /// Validate and freeze the configuration.
    pub fn build(self) -> Result<LayoutConfig, ConfigurationError> {
        if let Some(count) = self.bad_arity {
            return Err(ConfigurationError::WheelCount { count });
        }

        let config = self.config;
        positive("base_size", config.base_size.raw())?;
        positive("min_margin", config.min_margin.raw())?;
        non_negative("table_padding", config.table_padding.raw())?;
        non_negative("gap_between_tables", config.gap_between_tables.raw())?;
        if let Some(max) = config.max_canvas {
            positive("max canvas width", max.width.raw())?;
            positive("max canvas height", max.height.raw())?;
        }

        for (slot, table) in config.ring_ratios.iter().enumerate() {
            let wheels = slot + 1;
            table.validate(wheels)?;

            let growth = config.growth[slot].raw();
            if !growth.is_finite() || growth < 1.0 {
                return Err(ConfigurationError::InvalidGrowth { wheels, value: growth });
            }
            let scale = config.glyph_scale[slot];
            if !scale.is_finite() || !scale.is_unit_fraction() {
                return Err(ConfigurationError::InvalidGlyphScale {
                    wheels,
                    value: scale.raw(),
                });
            }
        }

        config.position_style.validate("position")?;
        config.house_style.validate("house")?;
        config.aspect_style.validate("aspectarian")?;
        config.custom_style.validate("custom")?;
        config.widget_style.validate()?;

        Ok(config)
    }
}
