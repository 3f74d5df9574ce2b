//! # Spectro Scan
//!
//! A Rust crate for estimating optical absorbance from colorimetric sensor
//! readings, with calibration against known reference samples.
//!
//! This library provides calibrated photometric measurement by:
//! - Converting HSV sensor readings to absorbance via a fitted linear model
//! - Correcting for wavelength-dependent sensor sensitivity
//! - Blank-referencing measurements against a zero-concentration sample
//! - Resolving concentrations through per-wavelength calibration curves
//!
//! The camera, region-of-interest extraction, and result persistence are
//! external collaborators: a frame sampler supplies averaged HSV channel
//! values, and a curve store supplies concentration calibration curves.
//!
//! ## Example
//!
//! ```rust
//! use spectro_scan::{measure, CalibrationModel, ColorReading};
//!
//! let model = CalibrationModel::new();
//! let reading = ColorReading::new(120.0, 150.0, 100.0);
//!
//! let result = measure(&model, &reading, 540, Some(0.02), None)?;
//! println!("A = {:.3}", result.absorbance);
//! # Ok::<(), spectro_scan::MeasurementError>(())
//! ```

use palette::{FromColor, Hsv, Srgb};
use serde::{Deserialize, Serialize};

pub mod calibration;
pub mod color;
pub mod concentration;
pub mod config;
pub mod constants;
pub mod error;
pub mod simulate;
pub mod solver;

pub use calibration::{
    CalibrationCoefficients, CalibrationModel, Calibrator, ReferenceSample, SpectralBand,
    WavelengthFactorTable,
};
pub use concentration::{CalibrationCurve, ConcentrationResolver, CurveStore};
pub use config::EngineConfig;
pub use error::{MeasurementError, Result};
pub use solver::LinearSolver;

/// One averaged HSV reading from the frame sampler.
///
/// Channels use the sensor's native OpenCV-style ranges: hue in [0, 180],
/// saturation and value in [0, 255]. Values are real-valued because the
/// sampler averages over a region of pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorReading {
    /// Hue channel, [0, 180]
    pub hue: f64,

    /// Saturation channel, [0, 255]
    pub saturation: f64,

    /// Value (brightness) channel, [0, 255]
    pub value: f64,
}

impl ColorReading {
    /// Create a reading from sensor-range channel values
    pub fn new(hue: f64, saturation: f64, value: f64) -> Self {
        Self {
            hue,
            saturation,
            value,
        }
    }

    /// Convert to a palette HSV color (hue in degrees, unit saturation/value)
    pub fn to_hsv(&self) -> Hsv {
        Hsv::new(
            (self.hue * 2.0) as f32,
            (self.saturation / constants::sensor::SATURATION_MAX) as f32,
            (self.value / constants::sensor::VALUE_MAX) as f32,
        )
    }

    /// Display color of the sampled region
    pub fn to_srgb(&self) -> Srgb {
        Srgb::from_color(self.to_hsv())
    }
}

/// Complete result of one measurement
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeasurementResult {
    /// Wavelength the measurement was taken at, in nanometers
    pub wavelength: u32,

    /// The sensor reading the estimate was derived from
    pub reading: ColorReading,

    /// Absorbance estimate before blank correction
    pub raw_absorbance: f64,

    /// Absorbance after blank correction (equal to `raw_absorbance` when no
    /// blank was supplied)
    pub absorbance: f64,

    /// Resolved concentration, present only when a curve store was supplied
    pub concentration: Option<f64>,
}

/// Measure absorbance for a sensor reading, with optional blank correction
/// and concentration resolution.
///
/// This is the main entry point for a single measurement. The absorbance
/// estimate is a pure function of the reading and the model's current
/// coefficient set; passing `blank` subtracts the zero-point reference, and
/// passing `curves` additionally resolves a concentration.
///
/// # Arguments
///
/// * `model` - Calibration model holding the current coefficients
/// * `reading` - Averaged HSV reading from the frame sampler
/// * `wavelength` - Measurement wavelength in nanometers
/// * `blank` - Previously measured blank absorbance for this wavelength
/// * `curves` - Per-wavelength concentration calibration curves
///
/// # Errors
///
/// Returns `NotCalibrated` if `curves` is supplied but has no entry for
/// `wavelength`. Estimation itself cannot fail: out-of-range readings and
/// wavelengths are handled by the model's documented clamp and fallback
/// policies.
pub fn measure(
    model: &CalibrationModel,
    reading: &ColorReading,
    wavelength: u32,
    blank: Option<f64>,
    curves: Option<&CurveStore>,
) -> Result<MeasurementResult> {
    let raw_absorbance = model.estimate_absorbance(reading, wavelength);
    let absorbance = match blank {
        Some(blank) => model.apply_blank_correction(raw_absorbance, blank),
        None => raw_absorbance,
    };

    let concentration = match curves {
        Some(curves) => Some(ConcentrationResolver::new().resolve(absorbance, wavelength, curves)?),
        None => None,
    };

    Ok(MeasurementResult {
        wavelength,
        reading: *reading,
        raw_absorbance,
        absorbance,
        concentration,
    })
}
