//! Evaluation interface shared by every model variant.
//!
//! Templates, Fourier rings and modifier-wrapped composites all implement
//! [`SkyModel`], so image samplers and optimizers can treat them uniformly.
//! Coordinates are image-plane `(X, Y)` in the model's units (ring radius ≈ 1).

/// A brightness distribution that can be sampled at a single sky coordinate.
pub trait SkyModel {
    /// Intensity at image-plane coordinate `(x, y)`.
    ///
    /// Never fails. Non-finite inputs propagate through the arithmetic.
    fn intensity_point(&self, x: f64, y: f64) -> f64;

    /// Radius of a disk, centred on the origin, that contains the visible
    /// structure of the model. Used by callers to size a field of view.
    fn radial_extent(&self) -> f64;
}

/// Models whose total flux is known analytically.
pub trait Flux {
    fn flux(&self) -> f64;
}

impl<M: SkyModel + ?Sized> SkyModel for &M {
    fn intensity_point(&self, x: f64, y: f64) -> f64 {
        (**self).intensity_point(x, y)
    }

    fn radial_extent(&self) -> f64 {
        (**self).radial_extent()
    }
}

impl<M: SkyModel + ?Sized> SkyModel for Box<M> {
    fn intensity_point(&self, x: f64, y: f64) -> f64 {
        (**self).intensity_point(x, y)
    }

    fn radial_extent(&self) -> f64 {
        (**self).radial_extent()
    }
}

impl<M: Flux + ?Sized> Flux for &M {
    fn flux(&self) -> f64 {
        (**self).flux()
    }
}

impl<M: Flux + ?Sized> Flux for Box<M> {
    fn flux(&self) -> f64 {
        (**self).flux()
    }
}
