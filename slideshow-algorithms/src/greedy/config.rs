use anyhow::Result;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use slideshow_challenges::SlideshowError;

pub const DEFAULT_SAMPLE_SIZE: usize = 256;

/// Per-step work caps of the two greedy phases.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub sample_size_slides: usize,
    pub sample_size_vertical_photos: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sample_size_slides: DEFAULT_SAMPLE_SIZE,
            sample_size_vertical_photos: DEFAULT_SAMPLE_SIZE,
        }
    }
}

impl Config {
    /// Overlays hyperparameters on the defaults. Unknown keys are ignored; a
    /// value of the wrong type discards all overrides.
    pub fn initialize(hyperparameters: &Option<Map<String, Value>>) -> Self {
        let base_params = Self::default();

        let mut merged_params = serde_json::to_value(base_params).expect("Config serializable");
        if let (Value::Object(ref mut obj), Some(map)) = (&mut merged_params, hyperparameters) {
            for (k, v) in map {
                obj.insert(k.clone(), v.clone());
            }
        }

        serde_json::from_value(merged_params).unwrap_or_else(|_| Self::default())
    }

    pub fn validate(&self) -> Result<()> {
        if self.sample_size_slides == 0 || self.sample_size_vertical_photos == 0 {
            return Err(SlideshowError::InvariantViolation(format!(
                "Sample sizes must be at least 1 (slides: {}, vertical photos: {})",
                self.sample_size_slides, self.sample_size_vertical_photos
            ))
            .into());
        }
        Ok(())
    }
}
