//! Ring radii: ratio tables scaled by the solved wheel size

use crate::config::RingRatioTable;
use crate::types::Px;

/// A band between two radii
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Annulus {
    pub outer: Px,
    pub inner: Px,
}

impl Annulus {
    pub fn width(&self) -> Px {
        self.outer - self.inner
    }

    /// Radius halfway through the band (where sign glyphs sit)
    pub fn mid(&self) -> Px {
        (self.outer + self.inner) / 2.0
    }
}

/// Radii of one wheel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingSet {
    pub outer: Px,
    pub glyph: Px,
    pub inner: Px,
}

impl RingSet {
    pub fn band(&self) -> Annulus {
        Annulus {
            outer: self.outer,
            inner: self.inner,
        }
    }
}

/// Every radius of a chart, wheel 1 (outermost) first
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ResolvedRings {
    pub zodiac: Annulus,
    pub wheels: Vec<RingSet>,
    pub aspect: Px,
}

pub(crate) fn resolve(table: &RingRatioTable, wheel_size: Px) -> ResolvedRings {
    ResolvedRings {
        zodiac: Annulus {
            outer: table.zodiac_outer() * wheel_size,
            inner: table.zodiac_inner() * wheel_size,
        },
        wheels: table
            .wheels()
            .iter()
            .map(|w| RingSet {
                outer: w.outer * wheel_size,
                glyph: w.glyph * wheel_size,
                inner: w.inner * wheel_size,
            })
            .collect(),
        aspect: table.aspect() * wheel_size,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults;

    #[test]
    fn single_wheel_radii_scale_with_size() {
        let rings = resolve(&defaults::ring_ratios(1), Px(600.0));
        assert!((rings.zodiac.outer.0 - 282.0).abs() < 1e-9);
        assert!((rings.zodiac.inner.0 - 240.0).abs() < 1e-9);
        assert_eq!(rings.wheels.len(), 1);
        assert!((rings.aspect.0 - 132.0).abs() < 1e-9);
    }

    #[test]
    fn rings_are_monotonic_for_every_arity() {
        for k in 1..=4 {
            let rings = resolve(&defaults::ring_ratios(k), Px(720.0));
            assert!(rings.zodiac.outer > rings.zodiac.inner);
            assert!(rings.wheels[0].outer <= rings.zodiac.inner);
            for wheel in &rings.wheels {
                assert!(wheel.outer > wheel.glyph);
                assert!(wheel.glyph > wheel.inner);
                assert!(wheel.inner > Px::ZERO);
            }
            for pair in rings.wheels.windows(2) {
                assert!(pair[1].outer <= pair[0].inner, "{k} wheels overlap");
            }
            let innermost = rings.wheels[k - 1];
            assert!(rings.aspect <= innermost.inner);
        }
    }

    #[test]
    fn annulus_helpers() {
        let band = Annulus {
            outer: Px(100.0),
            inner: Px(80.0),
        };
        assert_eq!(band.width(), Px(20.0));
        assert_eq!(band.mid(), Px(90.0));
    }
}
