//! Parser for plain `lspci` output, keeping display-class devices only.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref DISPLAY_CLASS: Regex = Regex::new(r"(?i)vga|3d|display").unwrap();
    static ref REVISION: Regex = Regex::new(r"\s*\(rev [0-9a-fA-F]+\)\s*$").unwrap();
}

/// Lines describing display adapters, in lspci order.
pub fn display_adapters(output: &str) -> Vec<&str> {
    output
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && DISPLAY_CLASS.is_match(line))
        .collect()
}

/// Human name of an adapter line: the part after the device class, minus revision.
///
/// `00:02.0 VGA compatible controller: Intel Corporation UHD Graphics 620 (rev 07)`
/// becomes `Intel Corporation UHD Graphics 620`.
pub fn adapter_name(line: &str) -> &str {
    let name = line.split_once(": ").map_or(line, |(_, rest)| rest);
    match REVISION.find(name) {
        Some(m) => &name[..m.start()],
        None => name.trim(),
    }
}
