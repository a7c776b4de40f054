use crate::checksum::compute_checksum;
use crate::transliteration::transliterate_char;
use models::{VinIssue, VinValidation, VIN_LENGTH};

/// Trim surrounding whitespace and uppercase the candidate.
pub fn normalize(candidate: &str) -> String {
    candidate.trim().to_uppercase()
}

/// Validate a candidate VIN.
///
/// Length, character set and checksum are judged independently and every
/// failure ends up in `issues()`. The checksum is only computed when the
/// first two checks pass; otherwise `checksum_valid()` is false.
pub fn validate_vin(candidate: &str) -> VinValidation {
    let value = normalize(candidate);
    let mut issues = Vec::new();

    logging::debug(&format!("Validating VIN candidate '{}'", value));

    let length = value.chars().count();
    let length_valid = length == VIN_LENGTH;
    if !length_valid {
        issues.push(VinIssue::WrongLength { found: length });
    }

    // Every bad character is reported, not just the first one
    let mut chars_valid = true;
    for (position, character) in value.chars().enumerate() {
        if let Err(e) = transliterate_char(character, position) {
            chars_valid = false;
            issues.push(VinIssue::from(&e));
        }
    }

    let checksum = if length_valid && chars_valid {
        match compute_checksum(&value) {
            Ok(report) => {
                if !report.is_match() {
                    issues.push(VinIssue::ChecksumMismatch {
                        check_digit: report.check_digit,
                        expected: report.expected_check_digit,
                    });
                }
                Some(report)
            }
            Err(e) => {
                logging::warning(&format!("Checksum of '{}' not computed: {}", value, e));
                issues.push(VinIssue::ChecksumSkipped);
                None
            }
        }
    } else {
        issues.push(VinIssue::ChecksumSkipped);
        None
    };

    let result = VinValidation::new(value, length_valid, chars_valid, checksum, issues);

    if result.is_valid() {
        logging::info(&format!("VIN '{}' is valid", result.value()));
    } else {
        logging::info(&format!(
            "VIN '{}' failed {} check(s)",
            result.value(),
            result.issues().len()
        ));
    }

    result
}
