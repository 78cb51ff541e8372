use crate::canvas::{Color, DIRT, GRASS, SNOW, WATER};

// Upper bounds of the bands; each band is [previous bound, bound)
pub const WATER_THRESHOLD: f32 = 0.3;
pub const GRASS_THRESHOLD: f32 = 0.5;
pub const DIRT_THRESHOLD: f32 = 0.8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TerrainBand {
    Water,
    Grass,
    Dirt,
    Snow,
}

impl TerrainBand {
    pub const ALL: [TerrainBand; 4] = [
        TerrainBand::Water,
        TerrainBand::Grass,
        TerrainBand::Dirt,
        TerrainBand::Snow,
    ];

    pub fn color(self) -> Color {
        match self {
            TerrainBand::Water => WATER,
            TerrainBand::Grass => GRASS,
            TerrainBand::Dirt => DIRT,
            TerrainBand::Snow => SNOW,
        }
    }
}

// Map an elevation in [0, 1) to its band and base color.
// Boundary values fall into the band they open.
pub fn classify(elevation: f32) -> (TerrainBand, Color) {
    let band = match elevation {
        e if e < WATER_THRESHOLD => TerrainBand::Water,
        e if e < GRASS_THRESHOLD => TerrainBand::Grass,
        e if e < DIRT_THRESHOLD => TerrainBand::Dirt,
        _ => TerrainBand::Snow,
    };
    (band, band.color())
}
