//! Display-space color helpers
//!
//! Conversions between the instrument's wavelength domain and display
//! colors, for hosts that render a spectrum target or preview swatch.

use palette::{FromColor, Hsl, Srgb};

/// Approximate CSS hue angle in degrees for a wavelength in nanometers.
///
/// Piecewise-linear mapping over the visible range; wavelengths outside
/// [380, 750] collapse to red (0 degrees).
pub fn wavelength_to_hue(wavelength: u32) -> f32 {
    let nm = wavelength as f32;
    match wavelength {
        380..=439 => 280.0 + (nm - 380.0) * 0.5,
        440..=489 => 240.0 - (nm - 440.0) * 1.2,
        490..=509 => 120.0,
        510..=579 => 120.0 - (nm - 510.0) * 0.7,
        580..=644 => 60.0 - (nm - 580.0) * 0.5,
        _ => 0.0,
    }
}

/// Saturated display color for a wavelength, suitable for spectrum
/// previews (fully saturated, 70% lightness).
pub fn wavelength_display_color(wavelength: u32) -> Srgb {
    let hsl = Hsl::new(wavelength_to_hue(wavelength), 1.0, 0.7);
    Srgb::from_color(hsl)
}
