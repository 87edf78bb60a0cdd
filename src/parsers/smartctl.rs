//! Parser for `smartctl -H` output.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SmartHealth {
    Passed,
    Failed,
    /// No verdict, e.g. a device without SMART support or insufficient privileges.
    Unknown,
}

pub fn health(output: &str) -> SmartHealth {
    if output.contains("FAILED") {
        SmartHealth::Failed
    } else if output.contains("PASSED") || output.contains("SMART Health Status: OK") {
        SmartHealth::Passed
    } else {
        SmartHealth::Unknown
    }
}
