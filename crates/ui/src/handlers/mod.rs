// Command handlers
pub mod vin;
