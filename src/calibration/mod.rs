//! Photometric calibration module
//!
//! This module holds the color-to-absorbance model, the wavelength
//! sensitivity correction table, and the least-squares fit that produces
//! the model's coefficients from reference samples.

pub mod fit;
pub mod model;
pub mod wavelength;

pub use fit::{Calibrator, ReferenceSample};
pub use model::{CalibrationCoefficients, CalibrationModel};
pub use wavelength::{SpectralBand, WavelengthFactorTable};
