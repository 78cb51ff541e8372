use std::fmt;

use log::{debug, trace};
use rand::Rng;

use crate::FeatureLayer;
use crate::canvas::PixelBuffer;
use crate::classify::classify;
use crate::error::Result;
use crate::forest::ForestSpeckle;
use crate::heightfield::HeightField;
use crate::lake::LakeFill;
use crate::river::RiverPath;
use crate::settlement::SettlementSpeckle;

// Pipeline progress. Every transition is one full pass over the grid or
// buffer, and the order never changes. `Uninitialized` is the state before
// `Compositor::build` has sampled the field; no compositor value holds it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Stage {
    Uninitialized,
    FieldBuilt,
    BasePainted,
    LakesApplied,
    RiverApplied,
    ForestApplied,
    SettlementsApplied,
}

impl Stage {
    pub fn is_terminal(self) -> bool {
        self == Stage::SettlementsApplied
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

// Owns the height field and the output buffer for one render.
// Later layers overwrite earlier ones wherever they touch.
pub struct Compositor {
    field: HeightField,
    canvas: PixelBuffer,
    stage: Stage,
    lakes: LakeFill,
    river: RiverPath,
    forest: ForestSpeckle,
    settlements: SettlementSpeckle,
}

impl Compositor {
    // Uninitialized -> FieldBuilt. Dimensions are checked before the
    // field or the buffer is allocated.
    pub fn build<R: Rng + ?Sized>(width: i64, height: i64, rng: &mut R) -> Result<Self> {
        debug!("{} -> {}", Stage::Uninitialized, Stage::FieldBuilt);
        let field = HeightField::generate(width, height, rng)?;
        Ok(Self::from_field(field))
    }

    // Start from a field the caller already built
    pub fn from_field(field: HeightField) -> Self {
        let canvas = PixelBuffer::for_dimensions(field.dimensions());
        Self {
            field,
            canvas,
            stage: Stage::FieldBuilt,
            lakes: LakeFill::default(),
            river: RiverPath::default(),
            forest: ForestSpeckle::default(),
            settlements: SettlementSpeckle::default(),
        }
    }

    // Replace the layer parameters; the order they run in stays fixed
    pub fn with_layers(
        mut self,
        lakes: LakeFill,
        river: RiverPath,
        forest: ForestSpeckle,
        settlements: SettlementSpeckle,
    ) -> Self {
        self.lakes = lakes;
        self.river = river;
        self.forest = forest;
        self.settlements = settlements;
        self
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn canvas(&self) -> &PixelBuffer {
        &self.canvas
    }

    // Run exactly one transition. Returns the new stage; a no-op once
    // the pipeline is finished.
    pub fn step<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Stage {
        let next = match self.stage {
            // build() makes the Uninitialized -> FieldBuilt transition
            // itself, so a constructed compositor starts at FieldBuilt
            Stage::Uninitialized | Stage::FieldBuilt => {
                self.paint_base();
                Stage::BasePainted
            }
            Stage::BasePainted => {
                Self::overlay(&self.lakes, &self.field, &mut self.canvas, rng);
                Stage::LakesApplied
            }
            Stage::LakesApplied => {
                Self::overlay(&self.river, &self.field, &mut self.canvas, rng);
                Stage::RiverApplied
            }
            Stage::RiverApplied => {
                Self::overlay(&self.forest, &self.field, &mut self.canvas, rng);
                Stage::ForestApplied
            }
            Stage::ForestApplied => {
                Self::overlay(&self.settlements, &self.field, &mut self.canvas, rng);
                Stage::SettlementsApplied
            }
            Stage::SettlementsApplied => return self.stage,
        };
        debug!("{} -> {}", self.stage, next);
        self.stage = next;
        next
    }

    // Drive the pipeline to the end and hand over the finished buffer
    pub fn run<R: Rng + ?Sized>(mut self, rng: &mut R) -> PixelBuffer {
        while !self.stage.is_terminal() {
            self.step(rng);
        }
        self.canvas
    }

    fn paint_base(&mut self) {
        for (x, y, e) in self.field.iter() {
            let (_, color) = classify(e);
            self.canvas.put(x, y, color);
        }
    }

    fn overlay<L: FeatureLayer, R: Rng + ?Sized>(
        layer: &L,
        field: &HeightField,
        canvas: &mut PixelBuffer,
        rng: &mut R,
    ) {
        let painted = layer.apply(field, canvas, rng);
        trace!("{}: painted {} stamps", layer.name(), painted);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{DIRT, GRASS, SNOW, WATER};
    use crate::testing::NeverHit;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn stages_advance_in_order() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut c = Compositor::build(16, 16, &mut rng).unwrap();
        assert_eq!(c.stage(), Stage::FieldBuilt);
        let mut seen = vec![c.stage()];
        while !c.stage().is_terminal() {
            seen.push(c.step(&mut rng));
        }
        assert_eq!(
            seen,
            vec![
                Stage::FieldBuilt,
                Stage::BasePainted,
                Stage::LakesApplied,
                Stage::RiverApplied,
                Stage::ForestApplied,
                Stage::SettlementsApplied,
            ]
        );
        // terminal state is sticky
        assert_eq!(c.step(&mut rng), Stage::SettlementsApplied);
    }

    #[test]
    fn constructors_start_at_field_built() {
        let mut rng = StdRng::seed_from_u64(4);
        let built = Compositor::build(6, 4, &mut rng).unwrap();
        let field = HeightField::from_fn(6, 4, |_, _| 0.4).unwrap();
        let given = Compositor::from_field(field);
        for c in [built, given] {
            assert_eq!(c.stage(), Stage::FieldBuilt);
            assert!(c.stage() > Stage::Uninitialized);
            assert_eq!((c.canvas().width(), c.canvas().height()), (6, 4));
        }
    }

    #[test]
    fn base_paint_follows_classification() {
        let field = HeightField::from_fn(4, 1, |x, _| [0.1, 0.4, 0.6, 0.9][x]).unwrap();
        let mut c = Compositor::from_field(field);
        c.step(&mut NeverHit);
        assert_eq!(c.stage(), Stage::BasePainted);
        assert_eq!(c.canvas().get(0, 0), Some(WATER));
        assert_eq!(c.canvas().get(1, 0), Some(GRASS));
        assert_eq!(c.canvas().get(2, 0), Some(DIRT));
        assert_eq!(c.canvas().get(3, 0), Some(SNOW));
    }

    #[test]
    fn lake_stage_leaves_base_colors_unchanged() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut c = Compositor::build(64, 64, &mut rng).unwrap();
        c.step(&mut rng);
        let base = c.canvas().clone();
        c.step(&mut rng);
        assert_eq!(c.stage(), Stage::LakesApplied);
        assert_eq!(c.canvas(), &base);
    }

    #[test]
    fn build_rejects_bad_dimensions() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(Compositor::build(0, 5, &mut rng).is_err());
        assert!(Compositor::build(5, -5, &mut rng).is_err());
    }
}
