//! Configuration structures for the spectro_scan engine.
//!
//! All tunable parameters of the engine live here, grouped by concern:
//! sensor channel ranges, the absorbance display range, and fit settings.
//!
//! # Configuration Loading
//!
//! Configuration can be loaded from JSON files or constructed programmatically:
//!
//! ```no_run
//! use spectro_scan::EngineConfig;
//! use std::path::Path;
//!
//! // Load from file
//! let config = EngineConfig::from_json_file(Path::new("engine.json"))?;
//!
//! // Or use defaults
//! let config = EngineConfig::default();
//! # Ok::<(), spectro_scan::MeasurementError>(())
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::constants::{absorbance, calibration, sensor, solver};
use crate::error::{MeasurementError, Result};

/// Complete engine configuration.
///
/// Can be serialized to/from JSON for reproducible measurement setups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Sensor channel ranges
    pub sensor: SensorConfig,

    /// Absorbance display range
    pub absorbance: AbsorbanceConfig,

    /// Calibration fit settings
    pub calibration: CalibrationConfig,
}

/// Channel ranges of the colorimetric sensor.
///
/// The frame sampler reports averaged HSV values; these ranges define how
/// they are normalized before entering the absorbance model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SensorConfig {
    /// Maximum hue channel value
    pub hue_max: f64,

    /// Maximum saturation channel value
    pub saturation_max: f64,

    /// Maximum value (brightness) channel value
    pub value_max: f64,

    /// Floor applied to normalized value before the log transform
    pub value_floor: f64,
}

/// Absorbance display range. Estimates outside it are clipped.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AbsorbanceConfig {
    /// Minimum displayed absorbance
    pub display_min: f64,

    /// Maximum displayed absorbance
    pub display_max: f64,
}

/// Calibration fit settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalibrationConfig {
    /// Minimum number of reference samples accepted by a fit
    pub min_samples: usize,

    /// Pivot magnitude below which the normal-equations system is
    /// declared singular
    pub pivot_tolerance: f64,
}

impl Default for SensorConfig {
    fn default() -> Self {
        Self {
            hue_max: sensor::HUE_MAX,
            saturation_max: sensor::SATURATION_MAX,
            value_max: sensor::VALUE_MAX,
            value_floor: sensor::VALUE_FLOOR,
        }
    }
}

impl Default for AbsorbanceConfig {
    fn default() -> Self {
        Self {
            display_min: absorbance::DISPLAY_MIN,
            display_max: absorbance::DISPLAY_MAX,
        }
    }
}

impl Default for CalibrationConfig {
    fn default() -> Self {
        Self {
            min_samples: calibration::MIN_SAMPLES,
            pivot_tolerance: solver::PIVOT_TOLERANCE,
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            sensor: SensorConfig::default(),
            absorbance: AbsorbanceConfig::default(),
            calibration: CalibrationConfig::default(),
        }
    }
}

impl EngineConfig {
    /// Load configuration from a JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| MeasurementError::config(format!("failed to read {}", path.display()), e))?;
        let config: Self = serde_json::from_str(&content)
            .map_err(|e| MeasurementError::config(format!("failed to parse {}", path.display()), e))?;
        tracing::debug!(path = %path.display(), "engine configuration loaded");
        Ok(config)
    }

    /// Save configuration to a JSON file
    pub fn to_json_file(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| MeasurementError::config("failed to serialize configuration", e))?;
        std::fs::write(path, json)
            .map_err(|e| MeasurementError::config(format!("failed to write {}", path.display()), e))?;
        Ok(())
    }
}
