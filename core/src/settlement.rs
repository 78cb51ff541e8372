use rand::Rng;

use crate::FeatureLayer;
use crate::canvas::{Color, PixelBuffer, SETTLEMENT};
use crate::heightfield::HeightField;

// Rare settlements on low dirt. A hit stamps a square block anchored at
// its top-left cell; the block is clipped where it runs past the edge.
pub struct SettlementSpeckle {
    low: f32,
    high: f32,
    probability: f64,
    block: usize,
    color: Color,
}

impl Default for SettlementSpeckle {
    fn default() -> Self {
        Self::new(0.01, 5)
    }
}

impl SettlementSpeckle {
    pub fn new(probability: f64, block: usize) -> Self {
        assert!(
            (0.0..=1.0).contains(&probability),
            "settlement probability must be in [0, 1]"
        );
        assert!(block > 0, "settlement block must be at least 1 pixel");
        Self {
            low: 0.5,
            high: 0.6,
            probability,
            block,
            color: SETTLEMENT,
        }
    }

    pub fn accepts(&self, elevation: f32) -> bool {
        elevation > self.low && elevation < self.high
    }
}

impl FeatureLayer for SettlementSpeckle {
    fn name(&self) -> &'static str {
        "settlements"
    }

    fn apply<R: Rng + ?Sized>(
        &self,
        field: &HeightField,
        canvas: &mut PixelBuffer,
        rng: &mut R,
    ) -> usize {
        let mut placed = 0;
        for (x, y, e) in field.iter() {
            if self.accepts(e) && rng.random_bool(self.probability) {
                canvas.fill_rect(x, y, self.block, self.block, self.color);
                placed += 1;
            }
        }
        placed
    }
}
