// Presentation crate for vinck
//
// This crate is organized into several modules:
// - models: Contains the output options
// - handlers: Runs a command and prints its outcome
// - views: Turns validation results into text or JSON

pub mod handlers;
pub mod models;
pub mod views;

// Re-export main entry points
pub use handlers::vin::{print_check_digit, validate_vin_cli};
pub use models::OutputFormat;
