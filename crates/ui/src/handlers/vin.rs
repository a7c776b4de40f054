// VIN handlers
use crate::models::OutputFormat;
use crate::views::{render_json, render_text};
use std::io;

/// Validate a VIN and print the report to stdout.
///
/// Returns whether the VIN passed every check; the caller decides the exit code.
pub fn validate_vin_cli(candidate: &str, format: OutputFormat, verbose: bool) -> io::Result<bool> {
    let result = validators::validate_vin(candidate);

    let output = match format {
        OutputFormat::Text => render_text(&result, verbose),
        OutputFormat::Json => {
            render_json(&result).map_err(io::Error::other)?
        }
    };
    println!("{}", output);

    Ok(result.is_valid())
}

/// Print the check digit a 17-character VIN should carry.
pub fn print_check_digit(candidate: &str) -> Result<char, models::VinError> {
    let check_digit = validators::check_digit_for(candidate)?;
    logging::info(&format!(
        "Computed check digit '{}' for {}",
        check_digit,
        validators::normalize(candidate)
    ));
    println!("{}", check_digit);

    Ok(check_digit)
}
