// terrain_core builds a random height field and composites terrain bands
// and feature overlays into an RGB pixel buffer
pub mod canvas;
pub mod classify;
pub mod compositor;
pub mod error;
pub mod forest;
pub mod heightfield;
pub mod lake;
pub mod river;
pub mod settlement;

use std::time::Instant;

use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub use canvas::{Color, PixelBuffer};
pub use classify::{TerrainBand, classify};
pub use compositor::{Compositor, Stage};
pub use error::{Result, TerrainError};
pub use forest::ForestSpeckle;
pub use heightfield::{Dimensions, HeightField};
pub use lake::LakeFill;
pub use river::RiverPath;
pub use settlement::SettlementSpeckle;

// An overlay applied after the base terrain paint.
// Reads only the height field and coordinates, never the canvas, and
// overwrites whatever is already painted where it fires.
pub trait FeatureLayer {
    // Short label used in logs
    fn name(&self) -> &'static str;

    // Paint this layer onto `canvas`; returns how many stamps were made
    fn apply<R: Rng + ?Sized>(
        &self,
        field: &HeightField,
        canvas: &mut PixelBuffer,
        rng: &mut R,
    ) -> usize;
}

// Render one width×height terrain picture. All randomness (elevations,
// forest and settlement trials) is drawn from `rng`, in that order.
pub fn render<R: Rng + ?Sized>(width: i64, height: i64, rng: &mut R) -> Result<PixelBuffer> {
    let start = Instant::now();
    let canvas = Compositor::build(width, height, rng)?.run(rng);
    info!(
        "rendered {}x{} terrain in {:.2} ms",
        width,
        height,
        start.elapsed().as_secs_f64() * 1000.0
    );
    Ok(canvas)
}

// Same as `render`, seeded from system entropy
pub fn render_from_entropy(width: i64, height: i64) -> Result<PixelBuffer> {
    let mut rng = StdRng::from_os_rng();
    render(width, height, &mut rng)
}
