//! Settings of a sketch run.

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::env;

use crate::error::Result;
use crate::grid::{Grid, Resolution};

/// Environment variable overriding the resolution, e.g. `RESOLUTION=1280x720`.
pub const RESOLUTION_VAR: &str = "RESOLUTION";

/// Everything a sketch needs to set up its templates and its animation loop.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SketchConfig {
    /// Canvas size
    pub resolution: Resolution,

    /// Grid used to cut artwork into pieces
    pub grid: Grid,

    /// How far grid line endpoints wander, in cells
    pub jitter: f64,

    /// Seed for every random decision of the sketch
    pub seed: u64,

    /// Frames per second of the rendered sequence
    pub frame_rate: f64,

    /// Space kept between the artwork and the canvas border, in pixels
    pub padding: f64,
}

impl Default for SketchConfig {
    fn default() -> Self {
        SketchConfig {
            resolution: Resolution::new(720, 720),
            grid: Grid::new(7, 7),
            jitter: 0.4,
            seed: 1337,
            frame_rate: 60.0,
            padding: 32.0,
        }
    }
}

impl SketchConfig {
    /// Defaults with the resolution taken from [`RESOLUTION_VAR`] if it is set.
    pub fn from_env() -> Result<Self> {
        let mut config = SketchConfig::default();
        if let Ok(resolution) = env::var(RESOLUTION_VAR) {
            config.resolution = resolution.parse()?;
        }
        Ok(config)
    }

    /// A fresh random generator seeded with [`SketchConfig::seed`].
    ///
    /// Calling this twice yields two generators producing the same numbers.
    pub fn rng(&self) -> StdRng {
        StdRng::seed_from_u64(self.seed)
    }

    /// Time between two frames in seconds.
    pub fn frame_time(&self) -> f64 {
        1.0 / self.frame_rate
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn defaults() {
        let config = SketchConfig::default();
        assert_eq!(config.resolution.to_string(), "720x720");
        assert_eq!(config.grid, Grid::new(7, 7));
        assert!((config.frame_time() - 1.0 / 60.0).abs() < 1e-12);
    }

    #[test]
    fn seeded_rng() {
        let config = SketchConfig::default();
        let a: f64 = config.rng().gen();
        let b: f64 = config.rng().gen();
        assert_eq!(a, b);
    }
}
