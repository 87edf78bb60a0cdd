//! Access to the machine being inspected, and the package installer.

use std::collections::BTreeSet;
use std::env;
use std::ffi::OsStr;
use std::fs;
use std::process::{Command, Stdio};

use tracing::{debug, info};

use crate::config::InstallConfig;
use crate::error::{DoctorError, Result};

/// Everything the collectors are allowed to see of the running system.
pub trait Host {
    /// PATH lookup for `name`.
    fn resolve_executable(&self, name: &str) -> bool;

    /// Captured stdout of `program args...`. Never fails: a missing program or a
    /// non-zero exit shows up as whatever (possibly empty) output was produced.
    fn run(&self, program: &str, args: &[&str]) -> String;

    fn read_to_string(&self, path: &str) -> std::io::Result<String>;
}

/// Installs a set of packages. May need root.
pub trait Installer {
    fn install(&self, packages: &BTreeSet<String>) -> Result<()>;
}

pub struct LocalHost;

impl Host for LocalHost {
    fn resolve_executable(&self, name: &str) -> bool {
        is_command_available(name)
    }

    fn run(&self, program: &str, args: &[&str]) -> String {
        debug!(program, ?args, "running");
        run_cmd_c_locale(program, args).unwrap_or_default()
    }

    fn read_to_string(&self, path: &str) -> std::io::Result<String> {
        fs::read_to_string(path)
    }
}

/// Run a command with C locale so numbers use `.` as decimal separator.
/// stdout is kept even on non-zero exit: smartctl reports disk failure through its
/// exit status bitmask while still printing the health verdict.
fn run_cmd_c_locale(cmd: &str, args: &[&str]) -> Option<String> {
    Command::new(cmd)
        .args(args)
        .env("LC_ALL", "C")
        .env("LANG", "C")
        .stderr(Stdio::null())
        .output()
        .ok()
        .map(|out| String::from_utf8_lossy(&out.stdout).to_string())
}

pub fn is_command_available(cmd: &str) -> bool {
    // Only bare command names; anything with a path or shell syntax is rejected.
    if cmd.is_empty()
        || !cmd
            .chars()
            .all(|c| c.is_alphanumeric() || c == '-' || c == '_' || c == '.')
    {
        return false;
    }

    resolve_in(cmd, env::var_os("PATH").as_deref())
}

/// Look `cmd` up in an explicit PATH-style search list.
fn resolve_in(cmd: &str, search_path: Option<&OsStr>) -> bool {
    let cwd = env::current_dir().unwrap_or_default();
    which::which_in(cmd, search_path, cwd).is_ok()
}

/// Runs the configured package manager, e.g. `apt install -y <packages>`.
pub struct PackageInstaller {
    config: InstallConfig,
}

impl PackageInstaller {
    pub fn new(config: InstallConfig) -> Self {
        Self { config }
    }
}

impl Installer for PackageInstaller {
    fn install(&self, packages: &BTreeSet<String>) -> Result<()> {
        if packages.is_empty() {
            return Ok(());
        }
        if !running_as_root() {
            return Err(DoctorError::InstallFailure(
                "Please run with sudo".to_string(),
            ));
        }

        info!(program = %self.config.program, ?packages, "installing packages");
        // Package manager chatter goes to stderr so `--json` output stays parseable.
        let status = Command::new(&self.config.program)
            .args(&self.config.args)
            .args(packages)
            .stdout(std::io::stderr())
            .status()
            .map_err(|e| {
                DoctorError::InstallFailure(format!("cannot run {}: {e}", self.config.program))
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(DoctorError::InstallFailure(format!(
                "{} exited with {}",
                self.config.program, status
            )))
        }
    }
}

#[cfg(target_os = "linux")]
fn running_as_root() -> bool {
    // SAFETY: geteuid has no preconditions and cannot fail.
    unsafe { libc::geteuid() == 0 }
}

#[cfg(not(target_os = "linux"))]
fn running_as_root() -> bool {
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_command_available_rejects_injection() {
        assert!(!is_command_available("ls; rm -rf /"));
        assert!(!is_command_available("/bin/ls"));
        assert!(!is_command_available("$(whoami)"));
        assert!(!is_command_available(""));
    }

    #[test]
    fn test_resolves_tool_from_search_path_alone() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let tool = dir.path().join("lscpu");
        fs::write(&tool, "#!/bin/sh\necho ok\n").unwrap();
        fs::set_permissions(&tool, fs::Permissions::from_mode(0o755)).unwrap();

        assert!(resolve_in("lscpu", Some(dir.path().as_os_str())));
        assert!(!resolve_in("smartctl", Some(dir.path().as_os_str())));
    }

    #[test]
    fn test_empty_search_path_resolves_nothing() {
        let dir = tempfile::tempdir().unwrap();
        assert!(!resolve_in("lscpu", Some(dir.path().as_os_str())));
    }

    #[test]
    fn test_missing_program_yields_empty_output() {
        let out = LocalHost.run("sys-doctor-definitely-not-a-command", &[]);
        assert!(out.is_empty());
    }

    #[test]
    fn test_installer_with_no_packages_is_noop() {
        let installer = PackageInstaller::new(InstallConfig {
            program: "sys-doctor-definitely-not-a-command".to_string(),
            args: vec![],
        });
        assert!(installer.install(&BTreeSet::new()).is_ok());
    }
}
