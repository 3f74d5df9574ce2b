//! Absorbance-to-concentration resolution
//!
//! Maps a corrected absorbance to a concentration through a per-wavelength
//! linear calibration curve. Curves are fitted and persisted by an external
//! collaborator; the engine treats the curve store as read-only input.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{MeasurementError, Result};

/// Per-wavelength linear calibration curve `concentration = slope * A + intercept`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalibrationCurve {
    /// Slope of the concentration/absorbance line
    pub slope: f64,

    /// Intercept of the line
    pub intercept: f64,

    /// Coefficient of determination of the external fit
    pub r_squared: f64,

    /// When the curve was fitted
    pub fitted_at: DateTime<Utc>,
}

/// Mapping from wavelength in nanometers to its calibration curve
pub type CurveStore = HashMap<u32, CalibrationCurve>;

/// Resolver from absorbance to concentration
pub struct ConcentrationResolver;

impl Default for ConcentrationResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl ConcentrationResolver {
    pub fn new() -> Self {
        Self
    }

    /// Resolve an absorbance to a concentration at the given wavelength.
    ///
    /// Requires an exact-wavelength curve: there is no interpolation across
    /// wavelengths. The result is floored at zero and rounded to two
    /// decimal places.
    ///
    /// # Errors
    ///
    /// Returns `NotCalibrated` if `curves` has no entry for `wavelength`.
    pub fn resolve(&self, absorbance: f64, wavelength: u32, curves: &CurveStore) -> Result<f64> {
        let curve = curves
            .get(&wavelength)
            .ok_or(MeasurementError::NotCalibrated { wavelength })?;

        let concentration = curve.slope * absorbance + curve.intercept;
        let scale = 10f64.powi(crate::constants::concentration::DECIMAL_PLACES as i32);
        Ok((concentration.max(0.0) * scale).round() / scale)
    }
}
