use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::growth::DEFAULT_GROWTH_SPEED;

/// Tunables for a scene of plants.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Live plant cap; the oldest plant is evicted beyond it.
    pub max_plants: usize,
    /// Plants created by a reset.
    pub initial_plants: usize,
    /// Height of the ground strip at the bottom of the canvas, in pixels.
    pub ground_height: f32,
    /// Growth progress added per tick.
    pub growth_speed: f64,
    /// Season fraction at startup.
    pub initial_season: f32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            max_plants: 30,
            initial_plants: 5,
            ground_height: 80.0,
            growth_speed: DEFAULT_GROWTH_SPEED,
            initial_season: 0.5,
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("max_plants must be at least 1")]
    NoPlantCapacity,
    #[error("initial_plants ({initial}) exceeds max_plants ({max})")]
    TooManyInitialPlants { initial: usize, max: usize },
    #[error("growth_speed must be in (0, 1], got {0}")]
    GrowthSpeed(f64),
    #[error("ground_height must be a non-negative number, got {0}")]
    GroundHeight(f32),
    #[error("initial_season must be in [0, 1], got {0}")]
    Season(f32),
}

impl SceneConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_plants == 0 {
            return Err(ConfigError::NoPlantCapacity);
        }
        if self.initial_plants > self.max_plants {
            return Err(ConfigError::TooManyInitialPlants {
                initial: self.initial_plants,
                max: self.max_plants,
            });
        }
        if !(self.growth_speed > 0.0 && self.growth_speed <= 1.0) {
            return Err(ConfigError::GrowthSpeed(self.growth_speed));
        }
        if !(self.ground_height >= 0.0 && self.ground_height.is_finite()) {
            return Err(ConfigError::GroundHeight(self.ground_height));
        }
        if !(0.0..=1.0).contains(&self.initial_season) {
            return Err(ConfigError::Season(self.initial_season));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert_eq!(SceneConfig::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_bad_values() {
        let mut cfg = SceneConfig::default();
        cfg.max_plants = 0;
        assert_eq!(cfg.validate(), Err(ConfigError::NoPlantCapacity));

        let mut cfg = SceneConfig::default();
        cfg.initial_plants = 31;
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::TooManyInitialPlants { initial: 31, max: 30 })
        );

        let mut cfg = SceneConfig::default();
        cfg.growth_speed = 0.0;
        assert!(matches!(cfg.validate(), Err(ConfigError::GrowthSpeed(_))));

        let mut cfg = SceneConfig::default();
        cfg.growth_speed = f64::NAN;
        assert!(matches!(cfg.validate(), Err(ConfigError::GrowthSpeed(_))));

        let mut cfg = SceneConfig::default();
        cfg.ground_height = -1.0;
        assert!(matches!(cfg.validate(), Err(ConfigError::GroundHeight(_))));

        let mut cfg = SceneConfig::default();
        cfg.initial_season = 1.5;
        assert!(matches!(cfg.validate(), Err(ConfigError::Season(_))));
    }

    #[test]
    fn partial_json_fills_defaults() {
        let cfg: SceneConfig = serde_json::from_str(r#"{ "max_plants": 12 }"#).unwrap();
        assert_eq!(cfg.max_plants, 12);
        assert_eq!(cfg.initial_plants, 5);
        assert_eq!(cfg.ground_height, 80.0);
    }

    #[test]
    fn error_messages_name_the_field() {
        let msg = ConfigError::TooManyInitialPlants { initial: 9, max: 4 }.to_string();
        assert_eq!(msg, "initial_plants (9) exceeds max_plants (4)");
    }
}
