use rand::Rng;

use crate::FeatureLayer;
use crate::canvas::{Color, FOREST, PixelBuffer};
use crate::heightfield::HeightField;

// Scatters single trees over mid-elevation cells.
// Each cell strictly inside (low, high) gets one Bernoulli trial.
pub struct ForestSpeckle {
    low: f32,
    high: f32,
    probability: f64,
    color: Color,
}

impl Default for ForestSpeckle {
    fn default() -> Self {
        Self::new(0.1)
    }
}

impl ForestSpeckle {
    pub fn new(probability: f64) -> Self {
        assert!(
            (0.0..=1.0).contains(&probability),
            "forest probability must be in [0, 1]"
        );
        Self {
            low: 0.5,
            high: 0.7,
            probability,
            color: FOREST,
        }
    }

    pub fn accepts(&self, elevation: f32) -> bool {
        elevation > self.low && elevation < self.high
    }
}

impl FeatureLayer for ForestSpeckle {
    fn name(&self) -> &'static str {
        "forests"
    }

    fn apply<R: Rng + ?Sized>(
        &self,
        field: &HeightField,
        canvas: &mut PixelBuffer,
        rng: &mut R,
    ) -> usize {
        let mut painted = 0;
        for (x, y, e) in field.iter() {
            // Only draw a trial once the elevation check passes
            if self.accepts(e) && rng.random_bool(self.probability) {
                canvas.put(x, y, self.color);
                painted += 1;
            }
        }
        painted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{AlwaysHit, NeverHit};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn band_is_open_on_both_sides() {
        let forest = ForestSpeckle::default();
        assert!(!forest.accepts(0.5));
        assert!(forest.accepts(0.51));
        assert!(forest.accepts(0.69));
        assert!(!forest.accepts(0.7));
    }

    #[test]
    fn every_eligible_cell_on_success() {
        let field = HeightField::from_fn(5, 1, |x, _| [0.5, 0.55, 0.65, 0.7, 0.2][x]).unwrap();
        let mut canvas = PixelBuffer::new(5, 1);
        let painted = ForestSpeckle::default().apply(&field, &mut canvas, &mut AlwaysHit);
        assert_eq!(painted, 2);
        assert_eq!(canvas.get(0, 0), Some(image::Rgb([0, 0, 0])));
        assert_eq!(canvas.get(1, 0), Some(FOREST));
        assert_eq!(canvas.get(2, 0), Some(FOREST));
        assert_eq!(canvas.get(3, 0), Some(image::Rgb([0, 0, 0])));
    }

    #[test]
    fn nothing_on_failure() {
        let field = HeightField::from_fn(8, 8, |_, _| 0.6).unwrap();
        let mut canvas = PixelBuffer::new(8, 8);
        assert_eq!(ForestSpeckle::default().apply(&field, &mut canvas, &mut NeverHit), 0);
    }

    #[test]
    fn density_close_to_probability() {
        let field = HeightField::from_fn(200, 200, |_, _| 0.6).unwrap();
        let mut canvas = PixelBuffer::new(200, 200);
        let mut rng = StdRng::seed_from_u64(11);
        let painted = ForestSpeckle::default().apply(&field, &mut canvas, &mut rng);
        let ratio = painted as f64 / (200.0 * 200.0);
        assert!((ratio - 0.1).abs() < 0.01, "tree density {}", ratio);
    }

    #[test]
    #[should_panic]
    fn rejects_bad_probability() {
        ForestSpeckle::new(1.5);
    }
}
