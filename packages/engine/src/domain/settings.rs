//! Live-adjustable simulation settings.
//!
//! The host UI owns range clamps for slider input; a settings document
//! loaded as JSON is validated here because it can come from anywhere.

use serde::{Deserialize, Serialize};

/// Largest batch a settings document may request.
pub const MAX_FILL_COUNT: u32 = 500;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SimulationSettings {
    /// Downward acceleration in px per 60 fps frame².
    pub gravity: f32,
    /// Number of balls spawned by `fill()`.
    pub fill_count: u32,
    pub repel_radius: f32,
    pub repel_strength: f32,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            gravity: 0.5,
            fill_count: 20,
            repel_radius: 200.0,
            repel_strength: 8.0,
        }
    }
}

impl SimulationSettings {
    pub fn from_json(json: &str) -> Result<Self, String> {
        let settings: SimulationSettings = serde_json::from_str(json).map_err(|e| e.to_string())?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> String {
        // Plain numeric struct: serialisation cannot fail.
        serde_json::to_string(self).unwrap_or_default()
    }

    pub fn validate(&self) -> Result<(), String> {
        if !self.gravity.is_finite() {
            return Err("gravity must be a finite number".to_string());
        }
        if self.fill_count > MAX_FILL_COUNT {
            return Err(format!(
                "fillCount {} exceeds the maximum of {}",
                self.fill_count, MAX_FILL_COUNT
            ));
        }
        if !(self.repel_radius.is_finite() && self.repel_radius > 0.0) {
            return Err("repelRadius must be a positive number".to_string());
        }
        if !self.repel_strength.is_finite() {
            return Err("repelStrength must be a finite number".to_string());
        }
        Ok(())
    }
}
