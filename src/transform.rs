//! Polar chart coordinates to raster pixels
//!
//! Zodiacal longitude runs counter-clockwise from a fixed reference; the
//! raster has y growing downward. The conversion is
//! `adjusted = (90 - angle - rotation) mod 360`,
//! `x = cx + r cos(adjusted)`, `y = cy - r sin(adjusted)`.

use glam::{DVec2, dvec2};

use crate::layout::WheelLayout;
use crate::types::{Angle, Position, Px};

impl From<Position> for DVec2 {
    fn from(p: Position) -> Self {
        dvec2(p.x.0, p.y.0)
    }
}

impl From<DVec2> for Position {
    fn from(v: DVec2) -> Self {
        Position::new(Px(v.x), Px(v.y))
    }
}

fn adjusted(angle: Angle, rotation: Angle) -> Angle {
    (Angle(90.0) - angle - rotation).normalized()
}

/// Pixel position of `angle` at `radius` around `center`, for a chart
/// rotated by `rotation`.
pub fn to_pixel(angle: Angle, radius: Px, center: Position, rotation: Angle) -> Position {
    let theta = adjusted(angle, rotation).radians();
    let c: DVec2 = center.into();
    (c + dvec2(theta.cos(), -theta.sin()) * radius.0).into()
}

/// Converts chart angles to pixels around one solved wheel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateTransformer {
    center: Position,
    rotation: Angle,
}

impl CoordinateTransformer {
    pub fn new(center: Position, rotation: Angle) -> Self {
        Self { center, rotation }
    }

    /// Transformer centred on a solved wheel
    pub fn for_wheel(wheel: &WheelLayout, rotation: Angle) -> Self {
        Self::new(wheel.center(), rotation)
    }

    pub fn center(&self) -> Position {
        self.center
    }

    pub fn rotation(&self) -> Angle {
        self.rotation
    }

    pub fn to_pixel(&self, angle: Angle, radius: Px) -> Position {
        to_pixel(angle, radius, self.center, self.rotation)
    }

    /// Inverse of [`to_pixel`](Self::to_pixel): chart angle in [0, 360) and
    /// radius of a pixel position. The centre itself maps to angle 0.
    pub fn to_polar(&self, point: Position) -> (Angle, Px) {
        let d = DVec2::from(point) - DVec2::from(self.center);
        let radius = d.length();
        if radius == 0.0 {
            return (Angle::ZERO, Px::ZERO);
        }
        let adjusted = Angle((-d.y).atan2(d.x).to_degrees());
        ((Angle(90.0) - adjusted - self.rotation).normalized(), Px(radius))
    }

    /// Line along `angle` from the `outer` radius inward to `inner`
    pub fn radial_segment(&self, angle: Angle, outer: Px, inner: Px) -> (Position, Position) {
        (self.to_pixel(angle, outer), self.to_pixel(angle, inner))
    }

    /// `divisions` points evenly spaced around a circle, starting at angle 0
    pub fn circle_points(&self, radius: Px, divisions: usize) -> Vec<Position> {
        if divisions == 0 {
            return Vec::new();
        }
        let step = 360.0 / divisions as f64;
        (0..divisions)
            .map(|i| self.to_pixel(Angle(step * i as f64), radius))
            .collect()
    }
}
