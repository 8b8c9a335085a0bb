//! Azimuthal profiles: brightness modulation as a function of angle alone.
//!
//! The trait is the injection point for profiles defined outside this crate;
//! anything that maps an angle to a multiplicative weight will do.

use crate::error::{ModelError, Result};

pub trait AzimuthalProfile {
    /// Multiplicative weight at angle `phi` (radians).
    fn azimuthal_profile(&self, phi: f64) -> f64;
}

/// Constant weight of 1 at every angle.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AzimuthalUniform;

impl AzimuthalProfile for AzimuthalUniform {
    #[inline]
    fn azimuthal_profile(&self, _phi: f64) -> f64 {
        1.0
    }
}

/// Cosine-modulated weight:
///
/// ```text
/// w(φ) = 1 − Σₙ sₙ·cos(n·(φ − ξₙ)),   n = 1..N
/// ```
///
/// The weight is negative wherever the modulation exceeds 1; no clamping is
/// done, so keep `Σ|sₙ| ≤ 1` for a physical image.
#[derive(Debug, Clone, PartialEq)]
pub struct AzimuthalCosine {
    amplitudes: Vec<f64>,
    phases: Vec<f64>,
}

impl AzimuthalCosine {
    /// Build from paired amplitudes `s` and phases `ξ`.
    ///
    /// Fails with `InvalidParameters` if the sequences differ in length.
    /// Empty sequences give the uniform profile.
    pub fn new(amplitudes: Vec<f64>, phases: Vec<f64>) -> Result<Self> {
        if amplitudes.len() != phases.len() {
            return Err(ModelError::InvalidParameters(format!(
                "cosine modulation needs one phase per amplitude, got {} amplitudes and {} phases",
                amplitudes.len(),
                phases.len()
            )));
        }
        Ok(Self { amplitudes, phases })
    }

    /// Single-mode modulation `1 − s·cos(φ − ξ)`.
    pub fn dipole(amplitude: f64, phase: f64) -> Self {
        Self {
            amplitudes: vec![amplitude],
            phases: vec![phase],
        }
    }

    pub fn amplitudes(&self) -> &[f64] {
        &self.amplitudes
    }

    pub fn phases(&self) -> &[f64] {
        &self.phases
    }
}

impl AzimuthalProfile for AzimuthalCosine {
    fn azimuthal_profile(&self, phi: f64) -> f64 {
        let modulation: f64 = self
            .amplitudes
            .iter()
            .zip(&self.phases)
            .enumerate()
            .map(|(i, (s, xi))| s * ((i + 1) as f64 * (phi - xi)).cos())
            .sum();
        1.0 - modulation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_uniform() {
        for &phi in &[-PI, 0.0, 0.4, 3.0, 100.0] {
            assert_eq!(AzimuthalUniform.azimuthal_profile(phi), 1.0);
        }
    }

    #[test]
    fn test_dipole() {
        let a = AzimuthalCosine::dipole(0.5, 0.0);
        assert!((a.azimuthal_profile(0.0) - 0.5).abs() < 1e-15);
        assert!((a.azimuthal_profile(PI) - 1.5).abs() < 1e-15);
    }

    #[test]
    fn test_second_mode_uses_harmonic() {
        let a = AzimuthalCosine::new(vec![0.0, 0.25], vec![0.0, 0.0]).unwrap();
        // cos(2·π/2) = −1
        assert!((a.azimuthal_profile(PI / 2.0) - 1.25).abs() < 1e-14);
        assert!((a.azimuthal_profile(PI) - 0.75).abs() < 1e-14);
    }

    #[test]
    fn test_empty_is_uniform() {
        let a = AzimuthalCosine::new(vec![], vec![]).unwrap();
        assert_eq!(a.azimuthal_profile(1.234), 1.0);
    }

    #[test]
    fn test_length_mismatch() {
        let err = AzimuthalCosine::new(vec![0.1, 0.2], vec![0.0]).unwrap_err();
        assert!(matches!(err, ModelError::InvalidParameters(_)));
    }
}
