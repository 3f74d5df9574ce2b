//! Multivariate least-squares calibration fit
//!
//! Fits the absorbance model's coefficients from reference samples with
//! known absorbance, by building the ordinary least-squares normal
//! equations over `{1, x1, x2, x3}` and solving them with the dense
//! linear solver.
//!
//! Algorithm tag: `algo-normal-equations-ols`

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calibration::model::{channel_regressors, CalibrationCoefficients, CalibrationModel};
use crate::config::{EngineConfig, SensorConfig};
use crate::error::{MeasurementError, Result};
use crate::solver::LinearSolver;
use crate::ColorReading;

/// Number of free parameters in the absorbance model
const PARAMETER_COUNT: usize = 4;

/// One reference observation: a sensor reading of a sample whose
/// absorbance at `wavelength` is known.
///
/// The wavelength-specific correction is deliberately not divided out
/// before fitting: the fit produces a single coefficient set shared across
/// wavelengths, which the model multiplies by the per-wavelength factor at
/// estimation time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReferenceSample {
    /// Averaged HSV reading of the reference sample
    pub reading: ColorReading,

    /// Known absorbance of the reference, non-negative
    pub known_absorbance: f64,

    /// Wavelength the reference was measured at, in nanometers
    pub wavelength: u32,
}

/// Least-squares calibration fitter
pub struct Calibrator {
    solver: LinearSolver,
    sensor: SensorConfig,
    min_samples: usize,
}

impl Default for Calibrator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calibrator {
    /// Create a calibrator with default sensor ranges and fit settings
    pub fn new() -> Self {
        Self::with_config(&EngineConfig::default())
    }

    /// Create a calibrator using the given engine configuration
    pub fn with_config(config: &EngineConfig) -> Self {
        Self {
            solver: LinearSolver::with_tolerance(config.calibration.pivot_tolerance),
            sensor: config.sensor,
            min_samples: config.calibration.min_samples,
        }
    }

    /// Fit model coefficients from reference samples.
    ///
    /// Builds the 4x4 normal-equations system for ordinary least squares of
    /// known absorbance against `{1, x1, x2, x3}` (intercept, normalized
    /// hue, normalized saturation, optical density) and solves it.
    ///
    /// # Errors
    ///
    /// Returns `InsufficientSamples` below the minimum sample floor. Note
    /// the floor of 3 is below the parameter count, so a minimal fit will
    /// normally fail as `SingularSystem`; four or more varied samples are
    /// needed in practice. On any failure no state changes anywhere — the
    /// caller's model keeps its previous coefficients.
    pub fn fit(&self, samples: &[ReferenceSample]) -> Result<CalibrationCoefficients> {
        if samples.len() < self.min_samples {
            return Err(MeasurementError::InsufficientSamples {
                provided: samples.len(),
                minimum: self.min_samples,
            });
        }

        // Accumulate A^T A and A^T y over the basis [1, x1, x2, x3]
        let mut normal = vec![vec![0.0; PARAMETER_COUNT]; PARAMETER_COUNT];
        let mut rhs = vec![0.0; PARAMETER_COUNT];

        for sample in samples {
            let [x1, x2, x3] = channel_regressors(&sample.reading, &self.sensor);
            let basis = [1.0, x1, x2, x3];

            for i in 0..PARAMETER_COUNT {
                for j in 0..PARAMETER_COUNT {
                    normal[i][j] += basis[i] * basis[j];
                }
                rhs[i] += basis[i] * sample.known_absorbance;
            }
        }

        let solution = self.solver.solve(&normal, &rhs)?;

        let coefficients = CalibrationCoefficients {
            intercept: solution[0],
            hue_coeff: solution[1],
            saturation_coeff: solution[2],
            density_coeff: solution[3],
        };
        debug!(
            samples = samples.len(),
            intercept = coefficients.intercept,
            hue = coefficients.hue_coeff,
            saturation = coefficients.saturation_coeff,
            density = coefficients.density_coeff,
            "calibration fit succeeded"
        );
        Ok(coefficients)
    }

    /// Fit coefficients and install them into `model` on success.
    ///
    /// On failure the model is left untouched and keeps serving its
    /// previous coefficient set.
    pub fn calibrate(
        &self,
        samples: &[ReferenceSample],
        model: &CalibrationModel,
    ) -> Result<CalibrationCoefficients> {
        let coefficients = self.fit(samples)?;
        model.replace_coefficients(coefficients);
        Ok(coefficients)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    /// Build a sample whose known absorbance follows an exact linear
    /// relation over the normalized regressors (noise-free).
    fn exact_sample(hue: f64, saturation: f64, value: f64, wavelength: u32) -> ReferenceSample {
        let reading = ColorReading::new(hue, saturation, value);
        let [x1, x2, x3] = channel_regressors(&reading, &SensorConfig::default());
        ReferenceSample {
            reading,
            known_absorbance: 0.05 + 0.02 * x1 - 0.01 * x2 + 1.85 * x3,
            wavelength,
        }
    }

    #[test]
    fn test_fit_rejects_too_few_samples() {
        let calibrator = Calibrator::new();
        let samples = vec![exact_sample(30.0, 60.0, 200.0, 540); 2];

        match calibrator.fit(&samples) {
            Err(MeasurementError::InsufficientSamples { provided, minimum }) => {
                assert_eq!(provided, 2);
                assert_eq!(minimum, 3);
            }
            other => panic!("Expected InsufficientSamples, got: {:?}", other),
        }
    }

    #[test]
    fn test_fit_recovers_exact_linear_relation() {
        let calibrator = Calibrator::new();
        let samples = vec![
            exact_sample(30.0, 60.0, 200.0, 540),
            exact_sample(90.0, 120.0, 120.0, 540),
            exact_sample(150.0, 200.0, 60.0, 540),
            exact_sample(60.0, 240.0, 30.0, 540),
        ];

        let coeffs = calibrator.fit(&samples).unwrap();
        assert_relative_eq!(coeffs.intercept, 0.05, epsilon = 1e-6);
        assert_relative_eq!(coeffs.hue_coeff, 0.02, epsilon = 1e-6);
        assert_relative_eq!(coeffs.saturation_coeff, -0.01, epsilon = 1e-6);
        assert_relative_eq!(coeffs.density_coeff, 1.85, epsilon = 1e-6);
    }

    #[test]
    fn test_fit_identical_samples_is_singular() {
        let calibrator = Calibrator::new();
        // Four copies of one reading: rank-1 design, no unique solution
        let samples = vec![exact_sample(90.0, 128.0, 100.0, 540); 4];

        assert!(matches!(
            calibrator.fit(&samples),
            Err(MeasurementError::SingularSystem { .. })
        ));
    }

    #[test]
    fn test_minimum_floor_fit_is_under_determined() {
        // Three samples cannot determine four parameters: the fit passes
        // the sample floor but fails as singular.
        let calibrator = Calibrator::new();
        let samples = vec![
            exact_sample(30.0, 60.0, 200.0, 540),
            exact_sample(90.0, 120.0, 120.0, 540),
            exact_sample(150.0, 200.0, 60.0, 540),
        ];

        assert!(matches!(
            calibrator.fit(&samples),
            Err(MeasurementError::SingularSystem { .. })
        ));
    }

    #[test]
    fn test_fit_with_redundant_samples() {
        // Over-determined but consistent: eight samples on the same plane
        let calibrator = Calibrator::new();
        let mut samples = vec![
            exact_sample(30.0, 60.0, 200.0, 540),
            exact_sample(90.0, 120.0, 120.0, 540),
            exact_sample(150.0, 200.0, 60.0, 540),
            exact_sample(60.0, 240.0, 30.0, 540),
        ];
        samples.extend(samples.clone());

        let coeffs = calibrator.fit(&samples).unwrap();
        assert_relative_eq!(coeffs.density_coeff, 1.85, epsilon = 1e-6);
    }

    #[test]
    fn test_calibrate_installs_coefficients() {
        let calibrator = Calibrator::new();
        let model = CalibrationModel::new();
        let samples = vec![
            exact_sample(30.0, 60.0, 200.0, 540),
            exact_sample(90.0, 120.0, 120.0, 540),
            exact_sample(150.0, 200.0, 60.0, 540),
            exact_sample(60.0, 240.0, 30.0, 540),
        ];

        let fitted = calibrator.calibrate(&samples, &model).unwrap();
        assert_eq!(model.coefficients(), fitted);
    }

    #[test]
    fn test_failed_calibration_preserves_model() {
        let calibrator = Calibrator::new();
        let model = CalibrationModel::new();
        let before = model.coefficients();

        let samples = vec![exact_sample(90.0, 128.0, 100.0, 540); 4];
        assert!(calibrator.calibrate(&samples, &model).is_err());
        assert_eq!(model.coefficients(), before);
    }
}
