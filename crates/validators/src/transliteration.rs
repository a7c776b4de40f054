use models::{VinError, FORBIDDEN_CHARS};
use once_cell::sync::Lazy;
use std::collections::HashMap;

// Letter values; I, O and Q are deliberately absent
static LETTER_VALUES: Lazy<HashMap<char, u32>> = Lazy::new(|| {
    HashMap::from([
        ('A', 1),
        ('B', 2),
        ('C', 3),
        ('D', 4),
        ('E', 5),
        ('F', 6),
        ('G', 7),
        ('H', 8),
        ('J', 1),
        ('K', 2),
        ('L', 3),
        ('M', 4),
        ('N', 5),
        ('P', 7),
        ('R', 9),
        ('S', 2),
        ('T', 3),
        ('U', 4),
        ('V', 5),
        ('W', 6),
        ('X', 7),
        ('Y', 8),
        ('Z', 9),
    ])
});

/// Numeric value of a single VIN character.
///
/// `position` is 0-based and only used for the error. Anything outside
/// `[A-Z0-9]`, or one of I/O/Q, is rejected rather than guessed.
pub fn transliterate_char(character: char, position: usize) -> Result<u32, VinError> {
    if let Some(digit) = character.to_digit(10) {
        return Ok(digit);
    }

    if let Some(value) = LETTER_VALUES.get(&character) {
        return Ok(*value);
    }

    if FORBIDDEN_CHARS.contains(&character) {
        Err(VinError::ForbiddenCharacter {
            character,
            position,
        })
    } else {
        Err(VinError::UnsupportedCharacter {
            character,
            position,
        })
    }
}

/// Transliterate a normalized VIN, stopping at the first unmapped character.
pub fn transliterate(vin: &str) -> Result<Vec<u32>, VinError> {
    vin.chars()
        .enumerate()
        .map(|(i, c)| transliterate_char(c, i))
        .collect()
}
