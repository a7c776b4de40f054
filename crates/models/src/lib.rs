use serde::Serialize;
use thiserror::Error;

/// Number of characters in a post-1981 VIN.
pub const VIN_LENGTH: usize = 17;

/// 0-based index of the check digit within a VIN.
pub const CHECK_DIGIT_INDEX: usize = 8;

/// Letters that ISO 3779 never assigns because they read like 1, 0 and 0.
pub const FORBIDDEN_CHARS: [char; 3] = ['I', 'O', 'Q'];

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VinError {
    #[error("VIN must be 17 characters long, found {found}")]
    MalformedLength { found: usize },

    #[error("Forbidden character '{character}' at position {}", .position + 1)]
    ForbiddenCharacter { character: char, position: usize },

    #[error("Unsupported character '{character}' at position {}", .position + 1)]
    UnsupportedCharacter { character: char, position: usize },
}

/// A single failed constraint, reported in the order the checks run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum VinIssue {
    WrongLength {
        found: usize,
    },
    ForbiddenCharacter {
        character: char,
        position: usize,
    },
    UnsupportedCharacter {
        character: char,
        position: usize,
    },
    ChecksumMismatch {
        check_digit: char,
        expected: char,
    },
    ChecksumSkipped,
}

impl std::fmt::Display for VinIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VinIssue::WrongLength { found } => write!(
                f,
                "Length is {} characters, expected {}",
                found, VIN_LENGTH
            ),
            VinIssue::ForbiddenCharacter {
                character,
                position,
            } => write!(
                f,
                "Position {}: '{}' is not allowed in a VIN (I, O and Q are never used)",
                position + 1,
                character
            ),
            VinIssue::UnsupportedCharacter {
                character,
                position,
            } => write!(
                f,
                "Position {}: '{}' is not a VIN character (only A-Z and 0-9)",
                position + 1,
                character
            ),
            VinIssue::ChecksumMismatch {
                check_digit,
                expected,
            } => write!(
                f,
                "Check digit is '{}' but the checksum requires '{}'",
                check_digit, expected
            ),
            VinIssue::ChecksumSkipped => {
                write!(f, "Checksum not computed because the VIN is malformed")
            }
        }
    }
}

impl From<&VinError> for VinIssue {
    fn from(err: &VinError) -> Self {
        match *err {
            VinError::MalformedLength { found } => VinIssue::WrongLength { found },
            VinError::ForbiddenCharacter {
                character,
                position,
            } => VinIssue::ForbiddenCharacter {
                character,
                position,
            },
            VinError::UnsupportedCharacter {
                character,
                position,
            } => VinIssue::UnsupportedCharacter {
                character,
                position,
            },
        }
    }
}

/// Intermediate values of the modulo-11 check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChecksumReport {
    pub sum_product: u32,
    pub remainder: u32,
    /// Character found at position 9 of the VIN
    pub check_digit: char,
    /// Character position 9 must hold for the remainder: '0'..='9' or 'X'
    pub expected_check_digit: char,
}

impl ChecksumReport {
    pub fn is_match(&self) -> bool {
        self.check_digit == self.expected_check_digit
    }
}

/// Outcome of validating one candidate VIN.
///
/// Built once by the validator; the flags are independent so callers can
/// see every constraint that failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VinValidation {
    value: String,
    length_valid: bool,
    chars_valid: bool,
    checksum_valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    checksum: Option<ChecksumReport>,
    issues: Vec<VinIssue>,
    is_valid: bool,
}

impl VinValidation {
    pub fn new(
        value: String,
        length_valid: bool,
        chars_valid: bool,
        checksum: Option<ChecksumReport>,
        issues: Vec<VinIssue>,
    ) -> Self {
        // A checksum over the wrong number of positions means nothing
        let checksum_valid = length_valid && checksum.is_some_and(|c| c.is_match());

        VinValidation {
            value,
            length_valid,
            chars_valid,
            checksum_valid,
            checksum,
            issues,
            is_valid: length_valid && chars_valid && checksum_valid,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn length_valid(&self) -> bool {
        self.length_valid
    }

    pub fn chars_valid(&self) -> bool {
        self.chars_valid
    }

    pub fn checksum_valid(&self) -> bool {
        self.checksum_valid
    }

    pub fn checksum(&self) -> Option<&ChecksumReport> {
        self.checksum.as_ref()
    }

    pub fn issues(&self) -> &[VinIssue] {
        &self.issues
    }

    /// True only when length, character set and checksum all pass.
    pub fn is_valid(&self) -> bool {
        self.is_valid
    }
}
