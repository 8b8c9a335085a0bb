//! Polar ring templates built from independent profile components.
//!
//! A template evaluates a pixel by converting it to polar form and multiplying
//! a radial weight (distance from a polar curve) with an azimuthal weight:
//!
//! ```text
//! (X, Y) → r = hypot(X, Y), φ = ring_phase(X, Y)
//!        → r_c = curve(φ)
//!        → I = radial(r, r_c) × azimuthal(φ)
//! ```
//!
//! # Components
//!
//! - [`PolarCurve`] — ring radius vs angle ([`LimaconCurve`])
//! - [`RadialProfile`] — falloff away from the curve ([`PolarGaussian`], [`PolarDblGaussian`])
//! - [`AzimuthalProfile`] — angular modulation ([`AzimuthalUniform`], [`AzimuthalCosine`])
//!
//! Each component receives only the quantities it needs; there is no shared
//! parameter record between them.

pub mod azimuthal;
pub mod curve;
pub mod radial;

pub use azimuthal::{AzimuthalCosine, AzimuthalProfile, AzimuthalUniform};
pub use curve::{LimaconCurve, PolarCurve};
pub use radial::{PolarDblGaussian, PolarGaussian, RadialProfile};

use crate::model::SkyModel;

/// Azimuth of an image-plane point as used by [`PolarTemplate`].
///
/// Measured counter-clockwise from +X: `φ = atan2(Y, X)`. The origin maps to 0.
#[inline]
pub fn ring_phase(x: f64, y: f64) -> f64 {
    y.atan2(x)
}

/// Ring template: `I(X, Y) = radial(r, curve(φ)) × azimuthal(φ)`.
#[derive(Debug, Clone, PartialEq)]
pub struct PolarTemplate<R, A = AzimuthalUniform, C = LimaconCurve> {
    pub radial: R,
    pub azimuthal: A,
    pub curve: C,
}

impl<R, A, C> PolarTemplate<R, A, C>
where
    R: RadialProfile,
    A: AzimuthalProfile,
    C: PolarCurve,
{
    pub fn new(radial: R, azimuthal: A, curve: C) -> Self {
        Self {
            radial,
            azimuthal,
            curve,
        }
    }
}

impl<R, A, C> SkyModel for PolarTemplate<R, A, C>
where
    R: RadialProfile,
    A: AzimuthalProfile,
    C: PolarCurve,
{
    #[inline]
    fn intensity_point(&self, x: f64, y: f64) -> f64 {
        let r = x.hypot(y);
        let phi = ring_phase(x, y);
        let r_curve = self.curve.radial_point(phi);
        self.radial.radial_profile(r, r_curve) * self.azimuthal.azimuthal_profile(phi)
    }

    fn radial_extent(&self) -> f64 {
        self.radial.radial_extent()
    }
}
