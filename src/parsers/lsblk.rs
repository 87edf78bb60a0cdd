//! Parser for `lsblk -nd -o NAME`.

/// Block device names, one per non-empty line.
pub fn device_names(output: &str) -> Vec<&str> {
    output
        .lines()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .collect()
}
