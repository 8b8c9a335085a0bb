//! Geometric modifiers that wrap any [`SkyModel`].
//!
//! Each modifier transforms the incoming image coordinate and then delegates to
//! the wrapped model, so nesting reads inside-out:
//!
//! ```text
//! m.stretched(a, b)?.rotated(ξ).shifted(x0, y0)
//!   (X, Y) → shift⁻¹ → rotate⁻¹ → stretch⁻¹ → m
//! ```
//!
//! # Conventions
//!
//! - **Stretch** `(sx, sy)`: evaluates `m(X/sx, Y/sy) / (sx·sy)`, preserving flux.
//! - **Rotate** `ξ`: rotates the input by `−ξ`, i.e. the model turns counter-clockwise by `ξ`.
//! - **Shift** `(dx, dy)`: evaluates `m(X − dx, Y − dy)`.
//! - **Renorm** `s ≥ 0`: multiplies intensity and flux by `s`.
//!
//! Convolution is not evaluated here; [`Convolved`] only pairs a model with its
//! kernel for an external operator.

use nalgebra::Rotation2;

use crate::error::{ensure_finite, ensure_positive, ModelError, Result};
use crate::model::{Flux, SkyModel};
use crate::Point2;

/// Model scaled by `(sx, sy)` along the image axes.
#[derive(Debug, Clone, PartialEq)]
pub struct Stretched<M> {
    model: M,
    sx: f64,
    sy: f64,
}

impl<M> Stretched<M> {
    /// Fails with `InvalidParameters` unless both factors are positive.
    pub fn new(model: M, sx: f64, sy: f64) -> Result<Self> {
        Ok(Self {
            model,
            sx: ensure_positive("stretch x", sx)?,
            sy: ensure_positive("stretch y", sy)?,
        })
    }

    pub fn inner(&self) -> &M {
        &self.model
    }

    pub fn scale(&self) -> (f64, f64) {
        (self.sx, self.sy)
    }
}

impl<M: SkyModel> SkyModel for Stretched<M> {
    #[inline]
    fn intensity_point(&self, x: f64, y: f64) -> f64 {
        self.model.intensity_point(x / self.sx, y / self.sy) / (self.sx * self.sy)
    }

    fn radial_extent(&self) -> f64 {
        self.model.radial_extent() * self.sx.max(self.sy)
    }
}

impl<M: Flux> Flux for Stretched<M> {
    fn flux(&self) -> f64 {
        self.model.flux()
    }
}

/// Model rotated counter-clockwise by `angle` radians.
#[derive(Debug, Clone, PartialEq)]
pub struct Rotated<M> {
    model: M,
    angle: f64,
    inverse: Rotation2<f64>,
}

impl<M> Rotated<M> {
    pub fn new(model: M, angle: f64) -> Self {
        Self {
            model,
            angle,
            inverse: Rotation2::new(-angle),
        }
    }

    pub fn inner(&self) -> &M {
        &self.model
    }

    pub fn angle(&self) -> f64 {
        self.angle
    }
}

impl<M: SkyModel> SkyModel for Rotated<M> {
    #[inline]
    fn intensity_point(&self, x: f64, y: f64) -> f64 {
        let p = self.inverse * Point2::new(x, y);
        self.model.intensity_point(p.x, p.y)
    }

    fn radial_extent(&self) -> f64 {
        self.model.radial_extent()
    }
}

impl<M: Flux> Flux for Rotated<M> {
    fn flux(&self) -> f64 {
        self.model.flux()
    }
}

/// Model translated so its origin sits at `(dx, dy)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Shifted<M> {
    model: M,
    offset: Point2,
}

impl<M> Shifted<M> {
    pub fn new(model: M, dx: f64, dy: f64) -> Self {
        Self {
            model,
            offset: Point2::new(dx, dy),
        }
    }

    pub fn inner(&self) -> &M {
        &self.model
    }

    pub fn offset(&self) -> Point2 {
        self.offset
    }
}

impl<M: SkyModel> SkyModel for Shifted<M> {
    #[inline]
    fn intensity_point(&self, x: f64, y: f64) -> f64 {
        self.model
            .intensity_point(x - self.offset.x, y - self.offset.y)
    }

    fn radial_extent(&self) -> f64 {
        self.model.radial_extent() + self.offset.norm()
    }
}

impl<M: Flux> Flux for Shifted<M> {
    fn flux(&self) -> f64 {
        self.model.flux()
    }
}

/// Model with intensity multiplied by a constant.
#[derive(Debug, Clone, PartialEq)]
pub struct Renormed<M> {
    model: M,
    scale: f64,
}

impl<M> Renormed<M> {
    /// Fails with `InvalidParameters` if `scale` is negative or not finite.
    /// Zero is allowed and gives a dark model.
    pub fn new(model: M, scale: f64) -> Result<Self> {
        let scale = ensure_finite("renormalization", scale)?;
        if scale < 0.0 {
            return Err(ModelError::InvalidParameters(format!(
                "renormalization must be non-negative, got {scale}"
            )));
        }
        Ok(Self { model, scale })
    }

    pub fn inner(&self) -> &M {
        &self.model
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }
}

impl<M: SkyModel> SkyModel for Renormed<M> {
    #[inline]
    fn intensity_point(&self, x: f64, y: f64) -> f64 {
        self.scale * self.model.intensity_point(x, y)
    }

    fn radial_extent(&self) -> f64 {
        self.model.radial_extent()
    }
}

impl<M: Flux> Flux for Renormed<M> {
    fn flux(&self) -> f64 {
        self.scale * self.model.flux()
    }
}

/// Marker for models an external convolution operator may accept.
pub trait Convolvable: SkyModel {}

impl<M: SkyModel> Convolvable for M {}

/// A model paired with the kernel it is to be convolved with.
///
/// There is no image-domain intensity for this pairing; the convolution itself
/// belongs to whatever framework consumes it.
#[derive(Debug, Clone, PartialEq)]
pub struct Convolved<M, K> {
    model: M,
    kernel: K,
}

impl<M: Convolvable, K: Convolvable> Convolved<M, K> {
    pub fn new(model: M, kernel: K) -> Self {
        Self { model, kernel }
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    pub fn kernel(&self) -> &K {
        &self.kernel
    }

    /// Support of a convolution is bounded by the sum of the two supports.
    pub fn radial_extent(&self) -> f64 {
        self.model.radial_extent() + self.kernel.radial_extent()
    }

    pub fn into_parts(self) -> (M, K) {
        (self.model, self.kernel)
    }
}

/// Chainable constructors for the modifiers above.
pub trait ModelExt: SkyModel + Sized {
    fn stretched(self, sx: f64, sy: f64) -> Result<Stretched<Self>> {
        Stretched::new(self, sx, sy)
    }

    fn rotated(self, angle: f64) -> Rotated<Self> {
        Rotated::new(self, angle)
    }

    fn shifted(self, dx: f64, dy: f64) -> Shifted<Self> {
        Shifted::new(self, dx, dy)
    }

    fn renormed(self, scale: f64) -> Result<Renormed<Self>> {
        Renormed::new(self, scale)
    }

    fn convolved<K: Convolvable>(self, kernel: K) -> Convolved<Self, K> {
        Convolved::new(self, kernel)
    }
}

impl<M: SkyModel> ModelExt for M {}
