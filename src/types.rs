//! Strongly-typed numeric primitives for chart layout (zero-cost newtypes).
//!
//! Lengths are raster pixels ([`Px`]), unitless multipliers are [`Ratio`],
//! and zodiacal longitudes are [`Angle`] in degrees. Raw `f64` only appears at
//! the edges (configuration input and SVG output).

use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, Sub, SubAssign};

/// Error type for invalid numeric values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericError {
    /// Value is NaN
    NaN,
    /// Value is infinite
    Infinite,
    /// Value is zero when non-zero required
    Zero,
    /// Value is negative when positive required
    Negative,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::NaN => write!(f, "value is NaN"),
            NumericError::Infinite => write!(f, "value is infinite"),
            NumericError::Zero => write!(f, "value is zero"),
            NumericError::Negative => write!(f, "value is negative"),
        }
    }
}

impl std::error::Error for NumericError {}

// ============================================================================
// Px
// ============================================================================

/// Length in raster pixels
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
#[repr(transparent)]
pub struct Px(pub f64);

impl Px {
    pub const ZERO: Px = Px(0.0);

    /// Create a length with validation (rejects NaN/infinite)
    #[inline]
    pub fn try_new(val: f64) -> Result<Px, NumericError> {
        if val.is_nan() {
            Err(NumericError::NaN)
        } else if val.is_infinite() {
            Err(NumericError::Infinite)
        } else {
            Ok(Px(val))
        }
    }

    /// Create a non-negative length with validation
    #[inline]
    pub fn try_non_negative(val: f64) -> Result<Px, NumericError> {
        let px = Px::try_new(val)?;
        if val < 0.0 {
            Err(NumericError::Negative)
        } else {
            Ok(px)
        }
    }

    /// Create a strictly positive length with validation
    #[inline]
    pub fn try_positive(val: f64) -> Result<Px, NumericError> {
        let px = Px::try_non_negative(val)?;
        if val == 0.0 {
            Err(NumericError::Zero)
        } else {
            Ok(px)
        }
    }

    #[inline]
    pub fn min(self, other: Px) -> Px {
        Px(self.0.min(other.0))
    }

    #[inline]
    pub fn max(self, other: Px) -> Px {
        Px(self.0.max(other.0))
    }

    /// Get the raw value (use sparingly, prefer typed operations)
    #[inline]
    pub fn raw(self) -> f64 {
        self.0
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }
}

impl Add for Px {
    type Output = Px;
    fn add(self, rhs: Px) -> Px {
        Px(self.0 + rhs.0)
    }
}

impl Sub for Px {
    type Output = Px;
    fn sub(self, rhs: Px) -> Px {
        Px(self.0 - rhs.0)
    }
}

impl Mul<f64> for Px {
    type Output = Px;
    fn mul(self, rhs: f64) -> Px {
        Px(self.0 * rhs)
    }
}

impl Div<f64> for Px {
    type Output = Px;
    fn div(self, rhs: f64) -> Px {
        Px(self.0 / rhs)
    }
}

impl AddAssign for Px {
    fn add_assign(&mut self, rhs: Px) {
        self.0 += rhs.0;
    }
}

impl SubAssign for Px {
    fn sub_assign(&mut self, rhs: Px) {
        self.0 -= rhs.0;
    }
}

impl std::iter::Sum for Px {
    fn sum<I: Iterator<Item = Px>>(iter: I) -> Px {
        iter.fold(Px::ZERO, |acc, px| acc + px)
    }
}

impl fmt::Display for Px {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Ratio
// ============================================================================

/// Unitless multiplier (ring-radius ratios, growth and glyph-scale factors)
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
#[repr(transparent)]
pub struct Ratio(pub f64);

impl Ratio {
    pub const ZERO: Ratio = Ratio(0.0);
    pub const ONE: Ratio = Ratio(1.0);

    #[inline]
    pub fn raw(self) -> f64 {
        self.0
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }

    /// True if the ratio lies in the half-open unit interval (0, 1]
    #[inline]
    pub fn is_unit_fraction(self) -> bool {
        self.0 > 0.0 && self.0 <= 1.0
    }
}

impl fmt::Display for Ratio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Ratio * Px = Px (scaling a length)
impl Mul<Px> for Ratio {
    type Output = Px;
    fn mul(self, rhs: Px) -> Px {
        Px(self.0 * rhs.0)
    }
}

/// Px * Ratio = Px (scaling a length)
impl Mul<Ratio> for Px {
    type Output = Px;
    fn mul(self, rhs: Ratio) -> Px {
        Px(self.0 * rhs.0)
    }
}

// ============================================================================
// Angle
// ============================================================================

/// Angle in degrees (zodiacal longitude or chart rotation)
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
pub struct Angle(pub f64);

impl Angle {
    pub const ZERO: Angle = Angle(0.0);

    #[inline]
    pub fn degrees(self) -> f64 {
        self.0
    }

    #[inline]
    pub fn radians(self) -> f64 {
        self.0.to_radians()
    }

    /// Wrap into [0, 360)
    #[inline]
    pub fn normalized(self) -> Angle {
        Angle(self.0.rem_euclid(360.0))
    }
}

impl Add for Angle {
    type Output = Angle;
    fn add(self, rhs: Angle) -> Angle {
        Angle(self.0 + rhs.0)
    }
}

impl Sub for Angle {
    type Output = Angle;
    fn sub(self, rhs: Angle) -> Angle {
        Angle(self.0 - rhs.0)
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.0)
    }
}

// ============================================================================
// Geometry
// ============================================================================

/// A point on the canvas (origin top-left, y grows downward)
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Position {
    pub x: Px,
    pub y: Px,
}

impl Position {
    pub const ORIGIN: Position = Position { x: Px::ZERO, y: Px::ZERO };

    pub fn new(x: Px, y: Px) -> Self {
        Position { x, y }
    }

    /// Translate by another position treated as an offset
    pub fn offset_by(self, offset: Position) -> Position {
        Position {
            x: self.x + offset.x,
            y: self.y + offset.y,
        }
    }
}

/// A 2D size
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Dimensions {
    pub width: Px,
    pub height: Px,
}

impl Dimensions {
    pub const ZERO: Dimensions = Dimensions { width: Px::ZERO, height: Px::ZERO };

    pub fn new(width: Px, height: Px) -> Self {
        Dimensions { width, height }
    }

    pub fn square(side: Px) -> Self {
        Dimensions { width: side, height: side }
    }

    /// True if this size fits inside `other` on both axes
    pub fn fits_within(&self, other: Dimensions) -> bool {
        self.width <= other.width && self.height <= other.height
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Axis-aligned box: top-left origin plus size
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct BoundingBox {
    pub origin: Position,
    pub size: Dimensions,
}

impl BoundingBox {
    pub fn new(origin: Position, size: Dimensions) -> Self {
        BoundingBox { origin, size }
    }

    /// Box of the given size centred on `center`
    pub fn centered_at(center: Position, size: Dimensions) -> Self {
        BoundingBox {
            origin: Position {
                x: center.x - size.width / 2.0,
                y: center.y - size.height / 2.0,
            },
            size,
        }
    }

    pub fn left(&self) -> Px {
        self.origin.x
    }

    pub fn top(&self) -> Px {
        self.origin.y
    }

    pub fn right(&self) -> Px {
        self.origin.x + self.size.width
    }

    pub fn bottom(&self) -> Px {
        self.origin.y + self.size.height
    }

    pub fn center(&self) -> Position {
        Position {
            x: self.origin.x + self.size.width / 2.0,
            y: self.origin.y + self.size.height / 2.0,
        }
    }

    /// Strict overlap test: the shared region must have positive area, so
    /// boxes that only share an edge (or are empty) do not intersect.
    pub fn intersects(&self, other: &BoundingBox) -> bool {
        let left = self.left().max(other.left());
        let right = self.right().min(other.right());
        let top = self.top().max(other.top());
        let bottom = self.bottom().min(other.bottom());
        left < right && top < bottom
    }

    /// True if `other` lies entirely inside this box (edges inclusive)
    pub fn contains(&self, other: &BoundingBox) -> bool {
        other.left() >= self.left()
            && other.top() >= self.top()
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }
}
