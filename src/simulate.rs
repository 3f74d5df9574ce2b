//! Synthetic absorbance generator — demo and test data only
//!
//! Produces plausible absorbance spectra for the demo sample wells when no
//! real sensor reading is available. Nothing here passes through the
//! calibration model; values from this module must never be mistaken for
//! calibrated measurements.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Demo sample wells with known synthetic spectra
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SampleKind {
    /// Zero-concentration reference; near-zero noise floor
    Blank,
    /// Two-peak spectrum (280 nm and 540 nm)
    Sample1,
    /// Single-peak spectrum (260 nm)
    Sample2,
}

/// Gaussian absorption peak centered at `center` nm
fn peak(wavelength: u32, center: f64, width: f64, height: f64) -> f64 {
    let t = (wavelength as f64 - center) / width;
    (-t * t).exp() * height
}

/// Synthetic absorbance for a demo sample at the given wavelength.
///
/// Draws a small positive noise term from `rng`; seed the generator for
/// reproducible spectra.
pub fn simulate_absorbance(kind: SampleKind, wavelength: u32, rng: &mut impl Rng) -> f64 {
    let noise = rng.gen::<f64>() * 0.05;
    match kind {
        SampleKind::Blank => noise,
        SampleKind::Sample1 => {
            peak(wavelength, 280.0, 30.0, 0.8) + peak(wavelength, 540.0, 40.0, 0.6) + noise
        }
        SampleKind::Sample2 => peak(wavelength, 260.0, 25.0, 1.2) + noise,
    }
}

/// Zero-centered sensor noise matching the hardware's observed jitter,
/// for demos that want measurements to wander realistically.
pub fn sensor_noise(rng: &mut impl Rng) -> f64 {
    (rng.gen::<f64>() - 0.5) * 0.02
}
