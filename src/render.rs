//! Evaluate a model over many coordinates at once.
//!
//! Every pixel is independent, so rows are split into chunks and evaluated on
//! the rayon thread pool. Results are identical to a serial loop; there is no
//! randomness and no ordering dependence between pixels.
//!
//! # Grid layout
//!
//! [`ImageGrid`] samples pixel centres. Pixel `(j, i)` (row, column) lies at
//!
//! ```text
//! x = x0 − fov_x/2 + (i + ½)·dx,   dx = fov_x / nx
//! y = y0 − fov_y/2 + (j + ½)·dy,   dy = fov_y / ny
//! ```
//!
//! so row 0 is the most negative `y`.

use std::time::Instant;

use nalgebra::DMatrix;
use rayon::prelude::*;
use tracing::debug;

use crate::error::{ensure_positive, ModelError, Result};
use crate::model::SkyModel;
use crate::Point2;

/// Regular pixel-centre sampling grid.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageGrid {
    /// Full width of the grid along x. Default 4.0.
    pub fov_x: f64,
    /// Full height of the grid along y. Default 4.0.
    pub fov_y: f64,
    /// Pixel columns. Default 128.
    pub nx: usize,
    /// Pixel rows. Default 128.
    pub ny: usize,
    /// Grid centre x. Default 0.0.
    pub x0: f64,
    /// Grid centre y. Default 0.0.
    pub y0: f64,
}

impl Default for ImageGrid {
    fn default() -> Self {
        Self {
            fov_x: 4.0,
            fov_y: 4.0,
            nx: 128,
            ny: 128,
            x0: 0.0,
            y0: 0.0,
        }
    }
}

impl ImageGrid {
    /// Grid centred on the origin. Fails with `InvalidParameters` for a
    /// non-positive field of view or a zero pixel count.
    pub fn new(fov_x: f64, fov_y: f64, nx: usize, ny: usize) -> Result<Self> {
        if nx == 0 || ny == 0 {
            return Err(ModelError::InvalidParameters(format!(
                "image grid needs at least one pixel per axis, got {nx}x{ny}"
            )));
        }
        Ok(Self {
            fov_x: ensure_positive("fov_x", fov_x)?,
            fov_y: ensure_positive("fov_y", fov_y)?,
            nx,
            ny,
            x0: 0.0,
            y0: 0.0,
        })
    }

    /// Square `npix × npix` grid spanning the model's full radial extent.
    pub fn fitting<M: SkyModel>(model: &M, npix: usize) -> Result<Self> {
        let fov = 2.0 * model.radial_extent();
        Self::new(fov, fov, npix, npix)
    }

    /// Move the grid centre to `(x0, y0)`.
    pub fn with_center(mut self, x0: f64, y0: f64) -> Self {
        self.x0 = x0;
        self.y0 = y0;
        self
    }

    /// Pixel size `(dx, dy)`.
    pub fn pixel_size(&self) -> (f64, f64) {
        (self.fov_x / self.nx as f64, self.fov_y / self.ny as f64)
    }

    pub fn pixel_area(&self) -> f64 {
        let (dx, dy) = self.pixel_size();
        dx * dy
    }

    /// Sky coordinate of the centre of pixel `(row, col)`.
    pub fn coordinate(&self, row: usize, col: usize) -> Point2 {
        let (dx, dy) = self.pixel_size();
        Point2::new(
            self.x0 - 0.5 * self.fov_x + (col as f64 + 0.5) * dx,
            self.y0 - 0.5 * self.fov_y + (row as f64 + 0.5) * dy,
        )
    }

    pub fn num_pixels(&self) -> usize {
        self.nx * self.ny
    }
}

/// Options for grid evaluation.
#[derive(Debug, Clone)]
pub struct EvalConfig {
    /// Evaluate chunks on the rayon pool. Default true.
    pub parallel: bool,
    /// Rows per parallel work item. Clamped to `1..=ny`, so `usize::MAX` means
    /// a single chunk. Default 64.
    pub chunk_rows: usize,
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            parallel: true,
            chunk_rows: 64,
        }
    }
}

/// Evaluate `model` at every pixel centre of `grid`.
///
/// Returns an `ny × nx` matrix indexed `[(row, col)]`.
pub fn intensity_map<M>(model: &M, grid: &ImageGrid, config: &EvalConfig) -> DMatrix<f64>
where
    M: SkyModel + Sync,
{
    let t0 = Instant::now();
    let (nx, ny) = (grid.nx, grid.ny);
    if nx == 0 || ny == 0 {
        return DMatrix::zeros(ny, nx);
    }

    // Row-major scratch buffer so that contiguous chunks are whole rows
    let mut buf = vec![0.0; nx * ny];
    // Bounded by ny so the chunk length never exceeds the buffer
    let chunk_rows = config.chunk_rows.clamp(1, ny);
    let chunk_len = nx * chunk_rows;
    let fill = |(chunk_idx, chunk): (usize, &mut [f64])| {
        let row0 = chunk_idx * chunk_rows;
        for (k, row) in chunk.chunks_mut(nx).enumerate() {
            for (col, px) in row.iter_mut().enumerate() {
                let p = grid.coordinate(row0 + k, col);
                *px = model.intensity_point(p.x, p.y);
            }
        }
    };

    if config.parallel {
        buf.par_chunks_mut(chunk_len)
            .enumerate()
            .for_each(fill);
    } else {
        buf.chunks_mut(chunk_len).enumerate().for_each(fill);
    }

    debug!(
        "Evaluated {}x{} grid (fov {:.3}x{:.3}, parallel={}) in {:.2} ms",
        nx,
        ny,
        grid.fov_x,
        grid.fov_y,
        config.parallel,
        t0.elapsed().as_secs_f64() * 1000.0
    );
    DMatrix::from_row_slice(ny, nx, &buf)
}

/// Evaluate `model` at each of `points`, preserving order.
pub fn intensity_points<M>(model: &M, points: &[Point2]) -> Vec<f64>
where
    M: SkyModel + Sync,
{
    points
        .par_iter()
        .map(|p| model.intensity_point(p.x, p.y))
        .collect()
}

/// Riemann-sum flux of a map produced on `grid`.
pub fn grid_flux(map: &DMatrix<f64>, grid: &ImageGrid) -> f64 {
    map.sum() * grid.pixel_area()
}
