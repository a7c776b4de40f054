use colored::*;
use models::VinValidation;

fn mark(ok: bool) -> ColoredString {
    if ok {
        "✓".green()
    } else {
        "✗".red()
    }
}

/// Human readable report, one line per check followed by numbered issues.
pub fn render_text(result: &VinValidation, verbose: bool) -> String {
    let mut lines = Vec::new();

    if result.is_valid() {
        lines.push(format!("✅ Valid VIN: {}", result.value().bold()));
    } else {
        lines.push(format!("❌ Invalid VIN: {}", result.value().bold()));
    }

    lines.push(format!("   {} length", mark(result.length_valid())));
    lines.push(format!("   {} characters", mark(result.chars_valid())));
    lines.push(format!("   {} checksum", mark(result.checksum_valid())));

    if verbose {
        if let Some(checksum) = result.checksum() {
            lines.push(format!(
                "   sum product {}, remainder {}, check digit '{}' (expected '{}')",
                checksum.sum_product,
                checksum.remainder,
                checksum.check_digit,
                checksum.expected_check_digit
            ));
        }
    }

    if !result.issues().is_empty() {
        lines.push(String::new());
        for (i, issue) in result.issues().iter().enumerate() {
            lines.push(format!("   {}. {}", i + 1, issue));
        }
    }

    lines.join("\n")
}

pub fn render_json(result: &VinValidation) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(result)
}
