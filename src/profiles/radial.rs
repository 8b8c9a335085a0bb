//! Radial profiles: brightness falloff with distance from the ring curve.
//!
//! Profiles are unnormalized, peaking at 1 on the curve itself. Both variants
//! size their bounding region as `2 + 3σ`, using the outer width for the
//! asymmetric profile since that is the side that reaches furthest out.

use crate::error::{ensure_positive, Result};

/// Weight as a function of pixel radius `r` and curve radius `r_curve` at the
/// same azimuth.
pub trait RadialProfile {
    fn radial_profile(&self, r: f64, r_curve: f64) -> f64;

    /// Radius that encloses the profile for a curve of unit scale.
    fn radial_extent(&self) -> f64;
}

/// Symmetric Gaussian falloff: `exp(−(r − r_c)² / 2σ²)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolarGaussian {
    /// Gaussian width, same units as `r`.
    pub sigma: f64,
}

impl PolarGaussian {
    /// Fails with `InvalidParameters` unless `sigma > 0`.
    pub fn new(sigma: f64) -> Result<Self> {
        Ok(Self {
            sigma: ensure_positive("sigma", sigma)?,
        })
    }
}

impl RadialProfile for PolarGaussian {
    #[inline]
    fn radial_profile(&self, r: f64, r_curve: f64) -> f64 {
        gaussian(r - r_curve, self.sigma)
    }

    fn radial_extent(&self) -> f64 {
        2.0 + 3.0 * self.sigma
    }
}

/// Asymmetric Gaussian with separate widths inside and outside the curve.
///
/// `r < r_c` uses `sigma_inner`; `r ≥ r_c` (the curve itself included) uses
/// `sigma_outer`. The value is continuous across the curve, the slope is not.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolarDblGaussian {
    pub sigma_inner: f64,
    pub sigma_outer: f64,
}

impl PolarDblGaussian {
    /// Fails with `InvalidParameters` unless both widths are positive.
    pub fn new(sigma_inner: f64, sigma_outer: f64) -> Result<Self> {
        Ok(Self {
            sigma_inner: ensure_positive("sigma_inner", sigma_inner)?,
            sigma_outer: ensure_positive("sigma_outer", sigma_outer)?,
        })
    }
}

impl RadialProfile for PolarDblGaussian {
    #[inline]
    fn radial_profile(&self, r: f64, r_curve: f64) -> f64 {
        let d = r - r_curve;
        let sigma = if r < r_curve {
            self.sigma_inner
        } else {
            self.sigma_outer
        };
        gaussian(d, sigma)
    }

    fn radial_extent(&self) -> f64 {
        2.0 + 3.0 * self.sigma_outer
    }
}

#[inline]
fn gaussian(d: f64, sigma: f64) -> f64 {
    (-d * d / (2.0 * sigma * sigma)).exp()
}
