//! Output formatting, progress spinners and JSON export for the CLI

use std::{fs::File, io::BufWriter, path::Path, time::Duration};

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;

/// Create a spinner for long enumerations
pub fn create_spinner(message: &str) -> Result<ProgressBar> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {msg}")
            .context("invalid spinner template")?,
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    Ok(pb)
}

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

/// Print a subsection header
pub fn print_subsection(title: &str) {
    println!("\n{title}");
    println!("{}", "-".repeat(40));
}

/// Format a number with thousands separators
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i.is_multiple_of(3) {
            result.insert(0, ',');
        }
        result.insert(0, c);
    }
    result
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{key}:"), value);
}

/// Write `value` as pretty JSON
pub fn export_json<T: Serialize>(value: &T, path: &Path) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    serde_json::to_writer_pretty(BufWriter::new(file), value)
        .with_context(|| format!("failed to write {}", path.display()))?;
    println!("\nExported to: {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thousands_are_separated() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(255_168), "255,168");
        assert_eq!(format_number(1_000_000), "1,000,000");
    }
}
