use crate::transliteration::transliterate;
use crate::vin::normalize;
use crate::weights::weight;
use models::{ChecksumReport, VinError, CHECK_DIGIT_INDEX, VIN_LENGTH};

/// Run the modulo-11 check over a normalized 17-character VIN.
///
/// The length is checked before any positional access, so short or long
/// input yields `MalformedLength` instead of an out-of-bounds read.
pub fn compute_checksum(vin: &str) -> Result<ChecksumReport, VinError> {
    let chars: Vec<char> = vin.chars().collect();
    if chars.len() != VIN_LENGTH {
        return Err(VinError::MalformedLength { found: chars.len() });
    }

    let values = transliterate(vin)?;
    let sum_product = values
        .iter()
        .enumerate()
        .map(|(i, value)| {
            weight(i + 1)
                .map(|w| value * w)
                .ok_or(VinError::MalformedLength { found: values.len() })
        })
        .sum::<Result<u32, VinError>>()?;
    let remainder = sum_product % 11;

    let check_digit = chars[CHECK_DIGIT_INDEX];
    let expected_check_digit = expected_check_digit(remainder);

    logging::debug(&format!(
        "Checksum of {}: sum product {}, remainder {}, check digit '{}' (expected '{}')",
        vin, sum_product, remainder, check_digit, expected_check_digit
    ));

    Ok(ChecksumReport {
        sum_product,
        remainder,
        check_digit,
        expected_check_digit,
    })
}

/// Compute the check digit a 17-character VIN should carry.
///
/// Whatever currently sits at position 9 is ignored, so this also works for
/// a VIN whose check digit is still a placeholder.
pub fn check_digit_for(candidate: &str) -> Result<char, VinError> {
    let normalized = normalize(candidate);
    let mut chars: Vec<char> = normalized.chars().collect();
    if chars.len() != VIN_LENGTH {
        return Err(VinError::MalformedLength { found: chars.len() });
    }

    // Weight 0 at the check slot, so any mapped character does here
    chars[CHECK_DIGIT_INDEX] = '0';
    let vin: String = chars.into_iter().collect();

    compute_checksum(&vin).map(|report| report.expected_check_digit)
}

fn expected_check_digit(remainder: u32) -> char {
    // A remainder of 10 is written as X
    char::from_digit(remainder, 10).unwrap_or('X')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_valid_vin_with_x_check_digit() {
        let report = compute_checksum("1M8GDM9AXKP042788").unwrap();

        assert_eq!(report.sum_product, 351);
        assert_eq!(report.remainder, 10);
        assert_eq!(report.check_digit, 'X');
        assert_eq!(report.expected_check_digit, 'X');
        assert!(report.is_match());
    }

    #[test]
    fn test_known_valid_vin_with_numeric_check_digit() {
        let report = compute_checksum("1HGCM82633A004352").unwrap();

        assert_eq!(report.remainder, 3);
        assert!(report.is_match());

        let report = compute_checksum("11111111111111111").unwrap();
        assert_eq!(report.sum_product, 89);
        assert!(report.is_match());
    }

    #[test]
    fn test_tampered_vin_fails() {
        let report = compute_checksum("1M8GDM9AXKP042780").unwrap();

        assert_eq!(report.remainder, 5);
        assert_eq!(report.check_digit, 'X');
        assert_eq!(report.expected_check_digit, '5');
        assert!(!report.is_match());
    }

    #[test]
    fn test_letter_check_digit_other_than_x_never_matches() {
        let report = compute_checksum("WP0ZZZ99ZTS392124").unwrap();

        assert_eq!(report.check_digit, 'Z');
        assert_eq!(report.expected_check_digit, '8');
        assert!(!report.is_match());
    }

    #[test]
    fn test_short_input_is_rejected_without_indexing() {
        assert_eq!(
            compute_checksum("1M8"),
            Err(VinError::MalformedLength { found: 3 })
        );
        assert_eq!(
            compute_checksum(""),
            Err(VinError::MalformedLength { found: 0 })
        );
    }

    #[test]
    fn test_long_input_is_rejected() {
        assert_eq!(
            compute_checksum("1M8GDM9AXKP0427881"),
            Err(VinError::MalformedLength { found: 18 })
        );
    }

    #[test]
    fn test_unmapped_character_is_an_error() {
        assert_eq!(
            compute_checksum("1M8GDM9AXKPO42788"),
            Err(VinError::ForbiddenCharacter {
                character: 'O',
                position: 11
            })
        );
    }

    #[test]
    fn test_check_digit_for_ignores_current_check_digit() {
        assert_eq!(check_digit_for("1M8GDM9A0KP042788"), Ok('X'));
        assert_eq!(check_digit_for("1m8gdm9a_kp042788"), Ok('X'));
        assert_eq!(check_digit_for("5YJSA1DN5DFP14705"), Ok('0'));
    }

    #[test]
    fn test_check_digit_for_requires_full_length() {
        assert_eq!(
            check_digit_for("SHORTVIN123"),
            Err(VinError::MalformedLength { found: 11 })
        );
    }
}
