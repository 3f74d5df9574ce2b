//! Command-line calibration demo for spectro_scan
//!
//! Fits model coefficients from a JSON file of reference samples, or from
//! generated synthetic samples with `--synthetic`.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use spectro_scan::{Calibrator, ColorReading, ReferenceSample};
use std::{env, path::Path, process};

fn main() {
    let args: Vec<String> = env::args().collect();

    let samples = match args.get(1).map(String::as_str) {
        Some("--synthetic") => synthetic_samples(),
        Some("--help") | Some("-h") | None => {
            print_help(&args[0]);
            process::exit(if args.len() > 1 { 0 } else { 1 });
        }
        Some(path) => load_samples(Path::new(path)),
    };

    eprintln!("Fitting {} reference samples...", samples.len());

    let calibrator = Calibrator::new();
    match calibrator.fit(&samples) {
        Ok(coefficients) => {
            match serde_json::to_string_pretty(&coefficients) {
                Ok(json) => println!("{}", json),
                Err(e) => eprintln!("Error serializing coefficients: {}", e),
            }
            eprintln!();
            eprintln!("Fitted Coefficients:");
            eprintln!("  intercept:        {:+.5}", coefficients.intercept);
            eprintln!("  hue weight:       {:+.5}", coefficients.hue_coeff);
            eprintln!("  saturation weight: {:+.5}", coefficients.saturation_coeff);
            eprintln!("  density weight:   {:+.5}", coefficients.density_coeff);
        }
        Err(error) => {
            eprintln!("Calibration failed: {}", error);
            if error.is_recoverable() {
                eprintln!("Suggestion: {}", error.user_message());
            }
            process::exit(1);
        }
    }
}

fn load_samples(path: &Path) -> Vec<ReferenceSample> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Error: failed to read '{}': {}", path.display(), e);
            process::exit(1);
        }
    };
    match serde_json::from_str(&content) {
        Ok(samples) => samples,
        Err(e) => {
            eprintln!("Error: failed to parse '{}': {}", path.display(), e);
            process::exit(1);
        }
    }
}

/// Noisy synthetic samples around a plausible coefficient set
fn synthetic_samples() -> Vec<ReferenceSample> {
    let mut rng = StdRng::seed_from_u64(1);
    (0..12)
        .map(|_| {
            let reading = ColorReading::new(
                rng.gen_range(0.0..180.0),
                rng.gen_range(0.0..255.0),
                rng.gen_range(20.0..255.0),
            );
            let h = reading.hue / 180.0;
            let s = reading.saturation / 255.0;
            let d = -(reading.value / 255.0).log10();
            ReferenceSample {
                reading,
                known_absorbance: 0.05 + 0.02 * h - 0.01 * s + 1.85 * d
                    + spectro_scan::simulate::sensor_noise(&mut rng),
                wavelength: 540,
            }
        })
        .collect()
}

fn print_help(program_name: &str) {
    eprintln!("Usage: {} <samples.json | --synthetic>", program_name);
    eprintln!();
    eprintln!("Fit absorbance model coefficients from reference samples.");
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  samples.json   JSON array of reference samples:");
    eprintln!("                 [{{\"reading\": {{\"hue\": 120, \"saturation\": 150, \"value\": 100}},");
    eprintln!("                   \"known_absorbance\": 0.81, \"wavelength\": 540}}, ...]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --synthetic    Fit against generated demo samples instead");
    eprintln!("  --help, -h     Show this help message");
}
