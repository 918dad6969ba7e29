//! Rig configuration loaded from JSON.
//!
//! Every section and field is optional; missing values fall back to the
//! defaults in [`crate::constants`]. Unknown fields are rejected so typos do
//! not silently fall back to defaults.
//!
//! ```json
//! {
//!   "filter": { "frequency": 2.0, "damping": 0.7, "response": 0.0 },
//!   "stabilisation": "pole-matching",
//!   "gait": { "step_distance": 0.2, "min_grounded": 3 },
//!   "camera": { "anticipation": 0.5 }
//! }
//! ```

use std::fs;
use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

use crate::camera::CameraConfig;
use crate::dynamics::{FilterTuning, Stabilisation};
use crate::error::ConfigError;
use crate::gait::GaitConfig;

/// Complete tuning for a rig: a standalone filter, the gait and the camera.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RigConfig {
    /// Tuning for standalone filters, such as the response preview.
    pub filter: FilterTuning,
    /// Stability strategy for standalone filters.
    pub stabilisation: Stabilisation,
    /// Multi-leg stepping.
    pub gait: GaitConfig,
    /// Camera follow rig.
    pub camera: CameraConfig,
}

impl RigConfig {
    /// Parses and validates a rig from JSON text.
    ///
    /// # Errors
    /// Returns [`ConfigError::Parse`] for malformed JSON or unknown fields
    /// and [`ConfigError::Invalid`] when a tuning is rejected.
    ///
    /// # Examples
    /// ```
    /// use strider::RigConfig;
    ///
    /// let rig = RigConfig::from_json_str(r#"{ "filter": { "frequency": 3.0 } }"#)?;
    /// assert_eq!(rig.filter.frequency, 3.0);
    /// # Ok::<(), strider::ConfigError>(())
    /// ```
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let rig: Self = serde_json::from_str(text)?;
        rig.validate()?;
        Ok(rig)
    }

    /// Reads, parses and validates a rig file.
    ///
    /// # Errors
    /// Returns [`ConfigError::Io`] when the file cannot be read, otherwise
    /// as [`Self::from_json_str`].
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let rig = Self::from_json_str(&text)?;
        info!("loaded rig config from {}", path.display());
        Ok(rig)
    }

    /// Checks every tuning the rig contains.
    ///
    /// # Errors
    /// Returns [`ConfigError::Invalid`] for the first rejected value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.filter.validate()?;
        self.gait.validate()?;
        self.camera.filter.validate()?;
        Ok(())
    }
}
