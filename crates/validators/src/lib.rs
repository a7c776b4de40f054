// validators crate

mod checksum;
mod transliteration;
mod vin;
mod weights;

pub use checksum::{check_digit_for, compute_checksum};
pub use transliteration::{transliterate, transliterate_char};
pub use vin::{normalize, validate_vin};
pub use weights::{weight, WEIGHTS};
