//! Reference values and fixed parameters for absorbance estimation
//!
//! This module contains compile-time constants for the color-to-absorbance
//! model, the calibration fit, and the sensor's native channel ranges.

/// Sensor channel ranges (OpenCV-style HSV)
///
/// The frame sampler reports averaged HSV channel values in OpenCV's 8-bit
/// convention: hue spans half-degrees (0-180) while saturation and value
/// span the full byte range.
pub mod sensor {
    /// Maximum hue channel value
    pub const HUE_MAX: f64 = 180.0;

    /// Maximum saturation channel value
    pub const SATURATION_MAX: f64 = 255.0;

    /// Maximum value (brightness) channel value
    pub const VALUE_MAX: f64 = 255.0;

    /// Floor applied to normalized value before the log transform.
    /// A fully dark reading would otherwise produce log10(0).
    pub const VALUE_FLOOR: f64 = 0.01;
}

/// Wavelength domain of the instrument
pub mod spectrum {
    /// Shortest supported wavelength in nanometers (violet edge)
    pub const WAVELENGTH_MIN: u32 = 380;

    /// Longest supported wavelength in nanometers (deep red edge)
    pub const WAVELENGTH_MAX: u32 = 750;

    /// Correction factor applied to wavelengths outside the supported
    /// domain. Out-of-band requests are answered with the deep-red factor
    /// rather than rejected.
    pub const OUT_OF_BAND_FACTOR: f64 = 0.8;
}

/// Absorbance display range
///
/// The instrument's defined absorbance range. Estimates outside it are
/// clipped, not rejected.
pub mod absorbance {
    /// Minimum displayed absorbance
    pub const DISPLAY_MIN: f64 = 0.0;

    /// Maximum displayed absorbance
    pub const DISPLAY_MAX: f64 = 2.0;
}

/// Linear solver parameters
pub mod solver {
    /// Pivot magnitudes below this are treated as zero; the system is
    /// declared singular instead of dividing through.
    pub const PIVOT_TOLERANCE: f64 = 1e-10;
}

/// Calibration fit parameters and factory-default coefficients
pub mod calibration {
    /// Minimum number of reference samples accepted by a fit.
    ///
    /// The model has four free parameters, so three samples give an
    /// under-determined system that will normally fail as singular. The
    /// floor is kept at the documented value for compatibility; callers
    /// should prefer four or more samples.
    pub const MIN_SAMPLES: usize = 3;

    /// Default model intercept
    pub const DEFAULT_INTERCEPT: f64 = 0.05;

    /// Default weight of the normalized hue channel
    pub const DEFAULT_HUE_COEFF: f64 = 0.02;

    /// Default weight of the normalized saturation channel
    pub const DEFAULT_SATURATION_COEFF: f64 = -0.01;

    /// Default weight of the optical density term (-log10 of normalized value)
    pub const DEFAULT_DENSITY_COEFF: f64 = 1.85;
}

/// Concentration reporting parameters
pub mod concentration {
    /// Resolved concentrations are rounded to this many decimal places
    pub const DECIMAL_PLACES: u32 = 2;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sensor_ranges() {
        // OpenCV 8-bit HSV convention
        assert_eq!(sensor::HUE_MAX, 180.0);
        assert_eq!(sensor::SATURATION_MAX, 255.0);
        assert_eq!(sensor::VALUE_MAX, 255.0);
        assert!(sensor::VALUE_FLOOR > 0.0);
    }

    #[test]
    fn test_spectrum_domain() {
        assert!(spectrum::WAVELENGTH_MIN < spectrum::WAVELENGTH_MAX);
        assert!(spectrum::OUT_OF_BAND_FACTOR > 0.0);
    }

    #[test]
    fn test_absorbance_range() {
        assert!(absorbance::DISPLAY_MIN < absorbance::DISPLAY_MAX);
        assert_eq!(absorbance::DISPLAY_MAX, 2.0);
    }

    #[test]
    fn test_fit_floor_is_below_parameter_count() {
        // Documented compatibility floor; see module docs
        assert_eq!(calibration::MIN_SAMPLES, 3);
    }
}
