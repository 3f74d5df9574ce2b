//! Command-line measurement demo for spectro_scan
//!
//! Estimates absorbance for an HSV reading at a chosen wavelength using
//! the factory-default calibration model.

use spectro_scan::{measure, CalibrationModel, ColorReading};
use std::{env, process};

fn main() {
    let args: Vec<String> = env::args().collect();

    let mut blank = None;
    let mut positional = Vec::new();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--blank" => {
                if i + 1 >= args.len() {
                    eprintln!("Error: --blank requires a value");
                    process::exit(1);
                }
                match args[i + 1].parse::<f64>() {
                    Ok(value) => blank = Some(value),
                    Err(_) => {
                        eprintln!("Error: invalid blank value '{}'", args[i + 1]);
                        process::exit(1);
                    }
                }
                i += 1;
            }
            "--help" | "-h" => {
                print_help(&args[0]);
                process::exit(0);
            }
            arg => positional.push(arg.to_string()),
        }
        i += 1;
    }

    if positional.len() != 4 {
        print_help(&args[0]);
        process::exit(1);
    }

    let hue: f64 = parse_arg(&positional[0], "hue");
    let saturation: f64 = parse_arg(&positional[1], "saturation");
    let value: f64 = parse_arg(&positional[2], "value");
    let wavelength: u32 = parse_arg(&positional[3], "wavelength");

    let model = CalibrationModel::new();
    let reading = ColorReading::new(hue, saturation, value);

    match measure(&model, &reading, wavelength, blank, None) {
        Ok(result) => {
            // JSON to stdout for programmatic use
            match serde_json::to_string_pretty(&result) {
                Ok(json) => println!("{}", json),
                Err(e) => eprintln!("Error serializing result: {}", e),
            }

            // Summary to stderr for human reading
            eprintln!();
            eprintln!("Measurement Summary:");
            eprintln!("  Wavelength: {} nm", result.wavelength);
            eprintln!("  Raw absorbance: {:.3}", result.raw_absorbance);
            eprintln!("  Absorbance: {:.3}", result.absorbance);
            if let Some(blank) = blank {
                eprintln!("  Blank reference: {:.3}", blank);
            }
        }
        Err(error) => {
            eprintln!("Measurement failed: {}", error);
            if error.is_recoverable() {
                eprintln!("Suggestion: {}", error.user_message());
            }
            process::exit(1);
        }
    }
}

fn parse_arg<T: std::str::FromStr>(raw: &str, name: &str) -> T {
    match raw.parse() {
        Ok(value) => value,
        Err(_) => {
            eprintln!("Error: invalid {} '{}'", name, raw);
            process::exit(1);
        }
    }
}

fn print_help(program_name: &str) {
    eprintln!("Usage: {} [OPTIONS] <hue> <saturation> <value> <wavelength>", program_name);
    eprintln!();
    eprintln!("Estimate absorbance from an HSV sensor reading.");
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  hue          Hue channel, 0-180");
    eprintln!("  saturation   Saturation channel, 0-255");
    eprintln!("  value        Value channel, 0-255");
    eprintln!("  wavelength   Wavelength in nanometers, 380-750");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --blank A    Subtract a blank reference absorbance");
    eprintln!("  --help, -h   Show this help message");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  {} 120 150 100 540", program_name);
    eprintln!("  {} --blank 0.04 120 150 100 540", program_name);
}
