//! Parser for `/proc/meminfo`.

use crate::error::{DoctorError, Result};

const SOURCE: &str = "/proc/meminfo";

/// `MemTotal` in kB.
pub fn mem_total_kb(contents: &str) -> Result<u64> {
    let line = contents
        .lines()
        .find(|line| line.starts_with("MemTotal"))
        .ok_or_else(|| DoctorError::parse(SOURCE, "no MemTotal line"))?;

    let value = line
        .split_whitespace()
        .nth(1)
        .ok_or_else(|| DoctorError::parse(SOURCE, "MemTotal has no value"))?;

    value.parse().map_err(|_| {
        DoctorError::parse(SOURCE, format!("MemTotal value '{value}' is not a number"))
    })
}

/// kB to GiB, rounded to one decimal place.
pub fn kb_to_gib(kb: u64) -> f64 {
    let gib = kb as f64 / 1024.0 / 1024.0;
    (gib * 10.0).round() / 10.0
}
