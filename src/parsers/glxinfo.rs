//! Parser for `glxinfo` output.

use super::value_after_colon;

/// Value of the `OpenGL renderer string` line; empty when absent.
pub fn renderer(output: &str) -> String {
    output
        .lines()
        .find(|line| line.contains("OpenGL renderer"))
        .and_then(value_after_colon)
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hardware_renderer() {
        let out = "\
name of display: :0
OpenGL vendor string: Intel
OpenGL renderer string: Mesa Intel(R) UHD Graphics 620 (WHL GT2)
OpenGL core profile version string: 4.6 (Core Profile) Mesa 23.2.1
";
        assert_eq!(renderer(out), "Mesa Intel(R) UHD Graphics 620 (WHL GT2)");
    }

    #[test]
    fn test_software_renderer() {
        let out = "OpenGL renderer string: llvmpipe (LLVM 15.0.7, 256 bits)\n";
        assert!(renderer(out).starts_with("llvmpipe"));
    }

    #[test]
    fn test_absent_tool_output() {
        assert_eq!(renderer(""), "");
        assert_eq!(renderer("Error: unable to open display\n"), "");
    }
}
