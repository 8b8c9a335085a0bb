//! Ready-wired limaçon ring templates.
//!
//! The `basic` builders produce an unscaled template centred on the origin with a
//! uniform azimuthal profile. The `full` builders additionally place it on the
//! sky:
//!
//! ```text
//! template(λ2, σ/λ1) → stretch(λ1, λ1) → rotate(φ) → shift(x0, y0)
//! ```
//!
//! Widths are divided by `λ1` before the stretch multiplies them back, so `σ`
//! is the ring thickness in sky units regardless of the ring size `λ1`.

use tracing::debug;

use crate::error::{ensure_positive, Result};
use crate::modifiers::{ModelExt, Rotated, Shifted, Stretched};
use crate::profiles::{
    AzimuthalUniform, LimaconCurve, PolarDblGaussian, PolarGaussian, PolarTemplate,
};

/// Limaçon template with a symmetric Gaussian cross-section.
pub type GaussianLimacon = PolarTemplate<PolarGaussian, AzimuthalUniform, LimaconCurve>;

/// Limaçon template with an asymmetric inner/outer Gaussian cross-section.
pub type DblGaussianLimacon = PolarTemplate<PolarDblGaussian, AzimuthalUniform, LimaconCurve>;

/// A model sized, oriented and positioned on the sky.
pub type PlacedModel<M> = Shifted<Rotated<Stretched<M>>>;

/// Unit-scale Gaussian limaçon `r = 1 + λ·cos φ` with width `sigma`.
pub fn build_gaussian_limacon_basic(lambda: f64, sigma: f64) -> Result<GaussianLimacon> {
    Ok(PolarTemplate::new(
        PolarGaussian::new(sigma)?,
        AzimuthalUniform,
        LimaconCurve::new(lambda),
    ))
}

/// Gaussian limaçon of size `lambda1`, shape `lambda2` and sky width `sigma`,
/// rotated by `phi` and centred at `(x0, y0)`.
pub fn build_gaussian_limacon_full(
    lambda1: f64,
    lambda2: f64,
    sigma: f64,
    phi: f64,
    x0: f64,
    y0: f64,
) -> Result<PlacedModel<GaussianLimacon>> {
    let size = ensure_positive("lambda1", lambda1)?;
    debug!(
        "Gaussian limacon: size={:.4}, shape={:.4}, sigma={:.4}, phi={:.4}, center=({:.4}, {:.4})",
        size, lambda2, sigma, phi, x0, y0
    );
    let template = build_gaussian_limacon_basic(lambda2, sigma / size)?;
    place(template, size, phi, x0, y0)
}

/// Unit-scale limaçon with separate inner and outer Gaussian widths.
pub fn build_dbl_gaussian_limacon_basic(
    lambda: f64,
    sigma_inner: f64,
    sigma_outer: f64,
) -> Result<DblGaussianLimacon> {
    Ok(PolarTemplate::new(
        PolarDblGaussian::new(sigma_inner, sigma_outer)?,
        AzimuthalUniform,
        LimaconCurve::new(lambda),
    ))
}

/// Double-Gaussian counterpart of [`build_gaussian_limacon_full`]; both widths
/// are divided by `lambda1`.
pub fn build_dbl_gaussian_limacon_full(
    lambda1: f64,
    lambda2: f64,
    sigma_inner: f64,
    sigma_outer: f64,
    phi: f64,
    x0: f64,
    y0: f64,
) -> Result<PlacedModel<DblGaussianLimacon>> {
    let size = ensure_positive("lambda1", lambda1)?;
    debug!(
        "Double Gaussian limacon: size={:.4}, shape={:.4}, sigma_in={:.4}, sigma_out={:.4}, phi={:.4}, center=({:.4}, {:.4})",
        size, lambda2, sigma_inner, sigma_outer, phi, x0, y0
    );
    let template = build_dbl_gaussian_limacon_basic(lambda2, sigma_inner / size, sigma_outer / size)?;
    place(template, size, phi, x0, y0)
}

fn place<M: ModelExt>(model: M, size: f64, phi: f64, x0: f64, y0: f64) -> Result<PlacedModel<M>> {
    Ok(model.stretched(size, size)?.rotated(phi).shifted(x0, y0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ModelError;
    use crate::model::SkyModel;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_basic_on_curve() {
        let m = build_gaussian_limacon_basic(0.0, 0.1).unwrap();
        assert_relative_eq!(m.intensity_point(1.0, 0.0), 1.0);
        assert_relative_eq!(m.radial_extent(), 2.3, epsilon = 1e-12);
    }

    #[test]
    fn test_full_sigma_rescaled() {
        let m = build_gaussian_limacon_full(4.0, 0.2, 0.8, 0.3, 1.0, -2.0).unwrap();
        let template = m.inner().inner().inner();
        assert_relative_eq!(template.radial.sigma, 0.2, epsilon = 1e-15);
        assert_eq!(template.curve.lambda, 0.2);
        assert_eq!(m.inner().inner().scale(), (4.0, 4.0));
        assert_eq!(m.inner().angle(), 0.3);
    }

    #[test]
    fn test_full_matches_manual_chain() {
        let (l1, l2, s, phi, x0, y0) = (2.5, 0.3, 0.4, 0.7, 0.5, -0.25);
        let m = build_gaussian_limacon_full(l1, l2, s, phi, x0, y0).unwrap();
        let manual = build_gaussian_limacon_basic(l2, s / l1)
            .unwrap()
            .stretched(l1, l1)
            .unwrap()
            .rotated(phi)
            .shifted(x0, y0);
        for &(x, y) in &[(0.0, 0.0), (2.0, 1.0), (-1.5, 2.2), (3.1, -0.4)] {
            assert_eq!(m.intensity_point(x, y), manual.intensity_point(x, y));
        }
    }

    #[test]
    fn test_full_peak_location() {
        // Circle of radius 2 centred at (1, 1); peak intensity is 1/λ1² after the stretch
        let m = build_gaussian_limacon_full(2.0, 0.0, 0.2, FRAC_PI_2, 1.0, 1.0).unwrap();
        assert_relative_eq!(m.intensity_point(3.0, 1.0), 0.25, max_relative = 1e-12);
        assert_relative_eq!(m.intensity_point(1.0, -1.0), 0.25, max_relative = 1e-12);
        assert!(m.intensity_point(1.0, 1.0) < 1e-10);
    }

    #[test]
    fn test_thickness_invariant_under_size() {
        // One sky-σ away from the ring the falloff is e^{-1/2} for any ring size
        for &size in &[0.5, 1.0, 3.0, 10.0] {
            let m = build_gaussian_limacon_full(size, 0.0, 0.1, 0.0, 0.0, 0.0).unwrap();
            let peak = m.intensity_point(size, 0.0);
            let off = m.intensity_point(size + 0.1, 0.0);
            assert_relative_eq!(off / peak, (-0.5_f64).exp(), max_relative = 1e-9);
        }
    }

    #[test]
    fn test_dbl_full_rescales_both_widths() {
        let m = build_dbl_gaussian_limacon_full(2.0, 0.1, 0.2, 0.6, 0.0, 0.0, 0.0).unwrap();
        let radial = m.inner().inner().inner().radial;
        assert_relative_eq!(radial.sigma_inner, 0.1);
        assert_relative_eq!(radial.sigma_outer, 0.3);
        assert_relative_eq!(m.radial_extent(), (2.0 + 0.9) * 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_invalid_arguments() {
        assert!(matches!(
            build_gaussian_limacon_basic(0.0, 0.0),
            Err(ModelError::InvalidParameters(_))
        ));
        assert!(build_gaussian_limacon_full(0.0, 0.1, 0.1, 0.0, 0.0, 0.0).is_err());
        assert!(build_gaussian_limacon_full(-1.0, 0.1, 0.1, 0.0, 0.0, 0.0).is_err());
        assert!(build_dbl_gaussian_limacon_basic(0.0, 0.1, -0.1).is_err());
        assert!(build_dbl_gaussian_limacon_full(1.0, 0.0, 0.0, 0.1, 0.0, 0.0, 0.0).is_err());
    }
}
