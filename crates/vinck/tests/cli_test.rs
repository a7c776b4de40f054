use serde_json::Value;
use std::process::{Command, Output};

fn vinck(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_vinck"))
        .args(args)
        .env("NO_COLOR", "1")
        .output()
        .expect("failed to run vinck")
}

#[test]
fn test_valid_vin_exits_zero() {
    let output = vinck(&["validate", "1M8GDM9AXKP042788"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("Valid VIN"));
    assert!(stdout.contains("1M8GDM9AXKP042788"));
}

#[test]
fn test_invalid_vin_exits_one() {
    let output = vinck(&["validate", "1M8GDM9AXKP042780"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout.contains("Invalid VIN"));
    assert!(stdout.contains("the checksum requires '5'"));
}

#[test]
fn test_short_vin_does_not_crash() {
    let output = vinck(&["validate", "SHORTVIN123"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(1));
    assert!(!stderr.contains("panicked"));
}

#[test]
fn test_json_output() {
    let output = vinck(&["validate", "--format", "json", "1m8gdm9aikp042788"]);
    let json: Value = serde_json::from_slice(&output.stdout).expect("stdout should be JSON");

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(json["value"], "1M8GDM9AIKP042788");
    assert_eq!(json["length_valid"], true);
    assert_eq!(json["chars_valid"], false);
    assert_eq!(json["checksum_valid"], false);
}

#[test]
fn test_debug_logs_go_to_stderr() {
    let output = vinck(&["--debug", "validate", "--format", "json", "1M8GDM9AXKP042788"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(output.status.success());
    assert!(stderr.contains("remainder 10"));
    // stdout stays machine readable
    assert!(serde_json::from_slice::<Value>(&output.stdout).is_ok());
}

#[test]
fn test_missing_vin_is_a_usage_error() {
    let output = vinck(&["validate"]);

    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_check_digit() {
    let output = vinck(&["check-digit", "1M8GDM9A0KP042788"]);

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "X");

    let output = vinck(&["check-digit", "1M8"]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_unknown_format_is_rejected_with_possible_values() {
    let output = vinck(&["validate", "--format", "yaml", "1M8GDM9AXKP042788"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr.contains("text"));
    assert!(stderr.contains("json"));
}

#[test]
fn test_help_lists_output_formats() {
    let output = vinck(&["validate", "--help"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.to_lowercase().contains("possible values"));
    assert!(stdout.contains("text"));
    assert!(stdout.contains("json"));
}
