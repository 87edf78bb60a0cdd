//! Parser for `lsmod` output, looking for a loaded display driver.

/// Kernel modules that drive a display adapter, most specific first.
const DISPLAY_DRIVERS: &[&str] = &["nvidia", "amdgpu", "radeon", "nouveau", "xe", "i915"];

/// First known display driver loaded according to `lsmod`.
pub fn display_driver(output: &str) -> Option<&'static str> {
    let loaded: Vec<&str> = output
        .lines()
        .skip(1)
        .filter_map(|line| line.split_whitespace().next())
        .collect();

    DISPLAY_DRIVERS
        .iter()
        .copied()
        .find(|driver| loaded.contains(driver))
}
