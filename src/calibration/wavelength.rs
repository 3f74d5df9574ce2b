//! Wavelength-dependent sensitivity correction
//!
//! The sensor's response varies across the visible spectrum, so the raw
//! color-model output is scaled by a per-wavelength correction factor.
//! Factors are piecewise-constant over named spectral bands and precomputed
//! for every integer wavelength in the instrument's domain.

use crate::constants::spectrum;

/// Named spectral bands of the visible range, each carrying one
/// sensitivity correction factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpectralBand {
    /// 380-449 nm
    Violet,
    /// 450-499 nm
    Blue,
    /// 500-569 nm
    Green,
    /// 570-589 nm
    Yellow,
    /// 590-649 nm
    Orange,
    /// 650-750 nm, and the fallback for anything outside the domain
    DeepRed,
}

impl SpectralBand {
    /// Classify a wavelength in nanometers.
    ///
    /// Wavelengths outside [380, 750] fall through to `DeepRed`; out-of-band
    /// requests are answered with the fallback factor rather than rejected.
    pub fn for_wavelength(wavelength: u32) -> Self {
        match wavelength {
            380..=449 => Self::Violet,
            450..=499 => Self::Blue,
            500..=569 => Self::Green,
            570..=589 => Self::Yellow,
            590..=649 => Self::Orange,
            _ => Self::DeepRed,
        }
    }

    /// Sensitivity correction factor for this band
    pub fn factor(self) -> f64 {
        match self {
            Self::Violet => 1.2,
            Self::Blue => 1.1,
            Self::Green => 1.0,
            Self::Yellow => 0.9,
            Self::Orange => 0.85,
            Self::DeepRed => spectrum::OUT_OF_BAND_FACTOR,
        }
    }
}

/// Precomputed per-wavelength correction factors.
///
/// Built once at model construction for O(1) lookup; every integer
/// wavelength in [380, 750] has an entry.
#[derive(Debug, Clone)]
pub struct WavelengthFactorTable {
    factors: Vec<f64>,
}

impl Default for WavelengthFactorTable {
    fn default() -> Self {
        Self::new()
    }
}

impl WavelengthFactorTable {
    /// Precompute factors for the full instrument domain
    pub fn new() -> Self {
        let factors = (spectrum::WAVELENGTH_MIN..=spectrum::WAVELENGTH_MAX)
            .map(|nm| SpectralBand::for_wavelength(nm).factor())
            .collect();
        Self { factors }
    }

    /// Correction factor for a wavelength in nanometers.
    ///
    /// Every wavelength is answered: in-domain lookups come from the
    /// precomputed table, anything else gets the deep-red fallback factor.
    pub fn factor_for(&self, wavelength: u32) -> f64 {
        if (spectrum::WAVELENGTH_MIN..=spectrum::WAVELENGTH_MAX).contains(&wavelength) {
            self.factors[(wavelength - spectrum::WAVELENGTH_MIN) as usize]
        } else {
            spectrum::OUT_OF_BAND_FACTOR
        }
    }
}
