//! Grammars for the text output of the external inspection utilities.
//!
//! Each submodule understands exactly one utility and is tested against captured
//! output, so a format change in one tool stays local to its parser.
//!
//! - `lscpu`: model name, logical CPU count, max clock
//! - `lspci`: display-class adapters
//! - `glxinfo`: OpenGL renderer string
//! - `lsmod`: loaded display driver
//! - `/proc/meminfo`: total memory
//! - `lsblk -nd -o NAME`: block device names
//! - `smartctl -H`: overall health verdict

pub mod glxinfo;
pub mod lsblk;
pub mod lscpu;
pub mod lsmod;
pub mod lspci;
pub mod meminfo;
pub mod smartctl;

/// Text after the first colon, trimmed.
pub(crate) fn value_after_colon(line: &str) -> Option<&str> {
    line.split_once(':').map(|(_, value)| value.trim())
}

/// Last whitespace-separated token of a line.
pub(crate) fn trailing_token(line: &str) -> Option<&str> {
    line.split_whitespace().last()
}
