//! Color-to-absorbance model
//!
//! Estimates optical absorbance from an HSV sensor reading via a fitted
//! linear model over normalized channels, scaled by a wavelength-dependent
//! sensitivity factor and clamped to the instrument's display range.
//!
//! Algorithm tag: `algo-hsv-beer-lambert`

use std::sync::RwLock;

use serde::{Deserialize, Serialize};

use crate::calibration::wavelength::WavelengthFactorTable;
use crate::config::{AbsorbanceConfig, EngineConfig, SensorConfig};
use crate::constants::calibration;
use crate::ColorReading;

/// Fitted coefficients of the linear absorbance model
///
/// `absorbance = (hue_coeff * h + saturation_coeff * s + density_coeff * d + intercept) * factor`
/// where `h`, `s` are the normalized hue/saturation channels and
/// `d = -log10(normalized value)` is the optical density term.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalibrationCoefficients {
    /// Constant offset
    pub intercept: f64,

    /// Weight of the normalized hue channel
    pub hue_coeff: f64,

    /// Weight of the normalized saturation channel
    pub saturation_coeff: f64,

    /// Weight of the optical density term
    pub density_coeff: f64,
}

impl Default for CalibrationCoefficients {
    /// Factory defaults, used until the first successful calibration fit
    fn default() -> Self {
        Self {
            intercept: calibration::DEFAULT_INTERCEPT,
            hue_coeff: calibration::DEFAULT_HUE_COEFF,
            saturation_coeff: calibration::DEFAULT_SATURATION_COEFF,
            density_coeff: calibration::DEFAULT_DENSITY_COEFF,
        }
    }
}

/// Normalized regressors `[x1, x2, x3]` for one reading.
///
/// Shared between estimation and the calibration fit so both sides of the
/// model see identical channel transforms.
pub(crate) fn channel_regressors(reading: &ColorReading, sensor: &SensorConfig) -> [f64; 3] {
    let h = reading.hue / sensor.hue_max;
    let s = reading.saturation / sensor.saturation_max;
    let v = (reading.value / sensor.value_max).max(sensor.value_floor);
    [h, s, -v.log10()]
}

/// Absorbance estimator holding the current coefficient set and the
/// wavelength correction table.
///
/// The coefficient set is the only shared mutable state in the engine.
/// [`CalibrationModel::replace_coefficients`] swaps it wholesale behind a
/// lock, so concurrent readers observe either the old or the new set
/// entirely, never a partial update.
#[derive(Debug)]
pub struct CalibrationModel {
    coefficients: RwLock<CalibrationCoefficients>,
    factors: WavelengthFactorTable,
    sensor: SensorConfig,
    absorbance: AbsorbanceConfig,
}

impl Default for CalibrationModel {
    fn default() -> Self {
        Self::new()
    }
}

impl CalibrationModel {
    /// Create a model with factory-default coefficients and sensor ranges
    pub fn new() -> Self {
        Self::with_config(&EngineConfig::default())
    }

    /// Create a model using the given engine configuration
    pub fn with_config(config: &EngineConfig) -> Self {
        Self {
            coefficients: RwLock::new(CalibrationCoefficients::default()),
            factors: WavelengthFactorTable::new(),
            sensor: config.sensor,
            absorbance: config.absorbance,
        }
    }

    /// Estimate absorbance for a sensor reading at the given wavelength.
    ///
    /// Channels are normalized by the sensor ranges, with the value channel
    /// floored before the log transform so a dark frame cannot produce
    /// log10(0). The raw model output is scaled by the wavelength factor and
    /// clamped to the display range — out-of-range estimates are clipped,
    /// not rejected.
    pub fn estimate_absorbance(&self, reading: &ColorReading, wavelength: u32) -> f64 {
        let coeffs = self.coefficients();
        let [h, s, density] = channel_regressors(reading, &self.sensor);
        let factor = self.factors.factor_for(wavelength);

        let raw = (coeffs.hue_coeff * h
            + coeffs.saturation_coeff * s
            + coeffs.density_coeff * density
            + coeffs.intercept)
            * factor;

        raw.clamp(self.absorbance.display_min, self.absorbance.display_max)
    }

    /// Subtract a blank reference from an absorbance value.
    ///
    /// The blank defines the zero point for its wavelength; the corrected
    /// absorbance is floored at zero.
    pub fn apply_blank_correction(&self, absorbance: f64, blank: f64) -> f64 {
        (absorbance - blank).max(0.0)
    }

    /// Replace the coefficient set wholesale.
    ///
    /// Readers either see the previous set or `new_coefficients` entirely.
    pub fn replace_coefficients(&self, new_coefficients: CalibrationCoefficients) {
        let mut guard = match self.coefficients.write() {
            Ok(guard) => guard,
            // A poisoned lock still holds a complete coefficient set: the
            // swap below is the only write and it is a single Copy store.
            Err(poisoned) => poisoned.into_inner(),
        };
        *guard = new_coefficients;
    }

    /// Snapshot of the current coefficient set
    pub fn coefficients(&self) -> CalibrationCoefficients {
        match self.coefficients.read() {
            Ok(guard) => *guard,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }

    /// Sensor channel ranges this model normalizes against
    pub fn sensor_config(&self) -> &SensorConfig {
        &self.sensor
    }

    /// Wavelength correction factor used at the given wavelength
    pub fn wavelength_factor(&self, wavelength: u32) -> f64 {
        self.factors.factor_for(wavelength)
    }
}
