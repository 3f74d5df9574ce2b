//! Error types for the spectro_scan library

use thiserror::Error;

/// Result type alias for spectro_scan operations
pub type Result<T> = std::result::Result<T, MeasurementError>;

/// Error types for absorbance estimation and calibration operations
#[derive(Error, Debug)]
pub enum MeasurementError {
    /// Linear system has no unique solution (pivot underflow during elimination)
    #[error("Singular system: pivot magnitude {pivot:.3e} below tolerance at column {column}")]
    SingularSystem { pivot: f64, column: usize },

    /// Too few reference samples supplied for a calibration fit
    #[error("Insufficient calibration data: {provided} samples (minimum {minimum})")]
    InsufficientSamples { provided: usize, minimum: usize },

    /// No calibration curve is available for the requested wavelength
    #[error("No calibration curve for {wavelength} nm")]
    NotCalibrated { wavelength: u32 },

    /// Invalid input parameters
    #[error("Invalid parameter: {parameter} = {value}")]
    InvalidParameter { parameter: String, value: String },

    /// Configuration file could not be loaded or parsed
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl MeasurementError {
    /// Create an invalid parameter error
    pub fn invalid_parameter(parameter: impl Into<String>, value: impl ToString) -> Self {
        Self::InvalidParameter {
            parameter: parameter.into(),
            value: value.to_string(),
        }
    }

    /// Create a configuration error with context
    pub fn config<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::ConfigError {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Check if this error indicates a recoverable condition
    ///
    /// The three engine failure kinds leave prior valid state untouched
    /// (coefficients, curves), so the caller can retry with better inputs.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            MeasurementError::SingularSystem { .. }
                | MeasurementError::InsufficientSamples { .. }
                | MeasurementError::NotCalibrated { .. }
        )
    }

    /// Get user-friendly error description for application display
    pub fn user_message(&self) -> String {
        match self {
            MeasurementError::SingularSystem { .. } => {
                "Calibration samples are too similar to each other. Use reference samples with more varied colors.".to_string()
            }
            MeasurementError::InsufficientSamples { minimum, .. } => {
                format!("Capture at least {} reference samples before calibrating.", minimum)
            }
            MeasurementError::NotCalibrated { wavelength } => {
                format!("No calibration curve exists for {} nm. Fit a standard curve at this wavelength first.", wavelength)
            }
            _ => "Measurement failed. Please check the inputs and try again.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_failures_are_recoverable() {
        assert!(MeasurementError::SingularSystem { pivot: 1e-12, column: 2 }.is_recoverable());
        assert!(MeasurementError::InsufficientSamples { provided: 1, minimum: 3 }.is_recoverable());
        assert!(MeasurementError::NotCalibrated { wavelength: 540 }.is_recoverable());
        assert!(!MeasurementError::invalid_parameter("wavelength", "abc").is_recoverable());
    }

    #[test]
    fn test_display_messages() {
        let err = MeasurementError::InsufficientSamples { provided: 2, minimum: 3 };
        assert_eq!(
            err.to_string(),
            "Insufficient calibration data: 2 samples (minimum 3)"
        );

        let err = MeasurementError::NotCalibrated { wavelength: 620 };
        assert!(err.to_string().contains("620 nm"));
        assert!(err.user_message().contains("620 nm"));
    }
}
