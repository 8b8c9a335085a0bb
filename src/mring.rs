//! Thin Fourier-mode ring on a limaçon.
//!
//! The ring is an annulus of fixed width [`MLimacon::DR`] that follows the
//! limaçon `r(θ) = 1 + λ·cos θ`. Inside the band the brightness is a truncated
//! real Fourier series in θ:
//!
//! ```text
//! I(θ) = [1 + Σₙ 2·(αₙ·cos nθ − βₙ·sin nθ)] / (2π·dr)
//! ```
//!
//! Outside the band the intensity is exactly 0. The constant term carries all
//! of the flux, so the model reports unit flux for any coefficients.
//!
//! The azimuth here is `θ = atan2(−X, Y)`, which is *not* the convention used by
//! [`PolarTemplate`](crate::PolarTemplate). Changing it would rotate every
//! fitted coefficient set.

use std::f64::consts::TAU;

use tracing::debug;

use crate::error::{ModelError, Result};
use crate::model::{Flux, SkyModel};
use crate::profiles::{LimaconCurve, PolarCurve};

/// Fourier-mode ring model with a limaçon radius.
#[derive(Debug, Clone, PartialEq)]
pub struct MLimacon {
    alpha: Vec<f64>,
    beta: Vec<f64>,
    curve: LimaconCurve,
}

impl MLimacon {
    /// Full radial width of the ring band.
    pub const DR: f64 = 0.02;

    /// Build from real parts `alpha`, imaginary parts `beta` and shape `lambda`.
    ///
    /// `alpha[n-1]` and `beta[n-1]` are the coefficients of mode `n`. Fails with
    /// `InvalidParameters` if the sequences are empty or differ in length.
    pub fn new(alpha: Vec<f64>, beta: Vec<f64>, lambda: f64) -> Result<Self> {
        if alpha.len() != beta.len() {
            return Err(ModelError::InvalidParameters(format!(
                "alpha and beta must have the same length, got {} and {}",
                alpha.len(),
                beta.len()
            )));
        }
        if alpha.is_empty() {
            return Err(ModelError::InvalidParameters(
                "at least one Fourier mode is required".to_string(),
            ));
        }
        debug!(
            "MLimacon: {} modes, lambda = {:.4}",
            alpha.len(),
            lambda
        );
        Ok(Self {
            alpha,
            beta,
            curve: LimaconCurve::new(lambda),
        })
    }

    /// Number of Fourier modes N.
    pub fn num_modes(&self) -> usize {
        self.alpha.len()
    }

    pub fn alpha(&self) -> &[f64] {
        &self.alpha
    }

    pub fn beta(&self) -> &[f64] {
        &self.beta
    }

    pub fn lambda(&self) -> f64 {
        self.curve.lambda
    }

    /// Azimuth convention of this model: `θ = atan2(−X, Y)`.
    #[inline]
    pub fn azimuth(x: f64, y: f64) -> f64 {
        (-x).atan2(y)
    }

    /// Un-normalized angular brightness `1 + Σ 2(αₙ cos nθ − βₙ sin nθ)`.
    pub fn angular_flux(&self, theta: f64) -> f64 {
        let series: f64 = self
            .alpha
            .iter()
            .zip(&self.beta)
            .enumerate()
            .map(|(i, (a, b))| {
                let (s, c) = ((i + 1) as f64 * theta).sin_cos();
                2.0 * (a * c - b * s)
            })
            .sum();
        1.0 + series
    }
}

impl SkyModel for MLimacon {
    fn intensity_point(&self, x: f64, y: f64) -> f64 {
        let r = x.hypot(y);
        let theta = Self::azimuth(x, y);
        if (r - self.curve.radial_point(theta)).abs() >= Self::DR / 2.0 {
            return 0.0;
        }
        self.angular_flux(theta) / (TAU * Self::DR)
    }

    fn radial_extent(&self) -> f64 {
        3.0
    }
}

impl Flux for MLimacon {
    fn flux(&self) -> f64 {
        1.0
    }
}
