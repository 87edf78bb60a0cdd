//! Parser for `lscpu` output.

use super::{trailing_token, value_after_colon};
use crate::error::{DoctorError, Result};

const SOURCE: &str = "lscpu";

#[derive(Debug, Clone, PartialEq)]
pub struct LscpuInfo {
    pub model_name: String,
    pub logical_cpus: u32,
    /// `None` when lscpu prints no `CPU max MHz` line (common on VMs and ARM).
    pub max_mhz: Option<f64>,
}

/// Expected shape (C locale):
/// ```text
/// CPU(s):                  8
/// Model name:              Intel(R) Core(TM) i7-8565U CPU @ 1.80GHz
/// CPU max MHz:             4600.0000
/// ```
pub fn parse_lscpu(output: &str) -> Result<LscpuInfo> {
    let mut model_name = None;
    let mut logical_cpus = None;
    let mut max_mhz = None;

    for line in output.lines() {
        let line = line.trim_start();
        if model_name.is_none() && line.starts_with("Model name") {
            model_name = value_after_colon(line).map(str::to_string);
        } else if logical_cpus.is_none() && line.starts_with("CPU(s):") {
            let token = trailing_token(line).unwrap_or_default();
            let count = token.parse::<u32>().map_err(|_| {
                DoctorError::parse(SOURCE, format!("CPU(s) value '{token}' is not an integer"))
            })?;
            logical_cpus = Some(count);
        } else if max_mhz.is_none() && line.contains("max MHz") {
            max_mhz = trailing_token(line).and_then(|t| t.parse::<f64>().ok());
        }
    }

    Ok(LscpuInfo {
        model_name: model_name
            .ok_or_else(|| DoctorError::parse(SOURCE, "no 'Model name' line"))?,
        logical_cpus: logical_cpus
            .ok_or_else(|| DoctorError::parse(SOURCE, "no 'CPU(s):' line"))?,
        max_mhz,
    })
}
