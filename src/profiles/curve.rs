//! Polar curves: the ring radius as a function of azimuth.

/// A closed curve given in polar form, `r = f(φ)`.
pub trait PolarCurve {
    /// Curve radius at angle `phi` (radians).
    fn radial_point(&self, phi: f64) -> f64;
}

/// Limaçon curve: `r(φ) = 1 + λ·cos(φ)`.
///
/// `λ = 0` is the unit circle. For `|λ| > 1` the curve develops an inner loop
/// and `r` goes negative on part of the range; that is left as is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LimaconCurve {
    /// Shape parameter λ. Any real value.
    pub lambda: f64,
}

impl LimaconCurve {
    pub fn new(lambda: f64) -> Self {
        Self { lambda }
    }
}

impl PolarCurve for LimaconCurve {
    #[inline]
    fn radial_point(&self, phi: f64) -> f64 {
        1.0 + self.lambda * phi.cos()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI, TAU};

    #[test]
    fn test_unit_circle() {
        let c = LimaconCurve::new(0.0);
        for i in 0..16 {
            let phi = i as f64 * TAU / 16.0 - 3.0;
            assert_eq!(c.radial_point(phi), 1.0);
        }
    }

    #[test]
    fn test_periodic() {
        let c = LimaconCurve::new(0.37);
        for &phi in &[-4.0, -0.3, 0.0, 1.1, 2.9, 7.5] {
            let a = c.radial_point(phi);
            let b = c.radial_point(phi + TAU);
            assert!((a - b).abs() < 1e-12, "phi={phi}: {a} vs {b}");
        }
    }

    #[test]
    fn test_known_values() {
        let c = LimaconCurve::new(0.5);
        assert!((c.radial_point(0.0) - 1.5).abs() < 1e-15);
        assert!((c.radial_point(PI) - 0.5).abs() < 1e-15);
        assert!((c.radial_point(FRAC_PI_2) - 1.0).abs() < 1e-15);
    }
}
