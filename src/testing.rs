//! In-memory host and installer doubles for unit tests.

use std::cell::RefCell;
use std::collections::{BTreeSet, HashMap, HashSet};
use std::io;

use crate::error::{DoctorError, Result};
use crate::host::{Host, Installer};
use crate::registry::ToolRegistry;

/// Canned command output keyed by the full command line (`program arg1 arg2`).
#[derive(Default)]
pub struct FakeHost {
    executables: RefCell<HashSet<String>>,
    outputs: HashMap<String, String>,
    files: HashMap<String, String>,
    calls: RefCell<Vec<String>>,
}

impl FakeHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_executables(mut self, names: &[&str]) -> Self {
        self.executables
            .get_mut()
            .extend(names.iter().map(|n| n.to_string()));
        self
    }

    /// Make `name` resolvable from now on, as a package install would.
    pub fn add_executable(&self, name: &str) {
        self.executables.borrow_mut().insert(name.to_string());
    }

    pub fn with_output(mut self, command_line: &str, output: &str) -> Self {
        self.outputs.insert(command_line.to_string(), output.to_string());
        self
    }

    pub fn with_file(mut self, path: &str, contents: &str) -> Self {
        self.files.insert(path.to_string(), contents.to_string());
        self
    }

    pub fn ran(&self, command_line: &str) -> bool {
        self.calls.borrow().iter().any(|c| c == command_line)
    }
}

impl Host for FakeHost {
    fn resolve_executable(&self, name: &str) -> bool {
        self.executables.borrow().contains(name)
    }

    fn run(&self, program: &str, args: &[&str]) -> String {
        let mut line = program.to_string();
        for arg in args {
            line.push(' ');
            line.push_str(arg);
        }
        let out = self.outputs.get(&line).cloned().unwrap_or_default();
        self.calls.borrow_mut().push(line);
        out
    }

    fn read_to_string(&self, path: &str) -> io::Result<String> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, path.to_string()))
    }
}

/// Records every install request; optionally fails.
#[derive(Default)]
pub struct RecordingInstaller {
    pub requests: RefCell<Vec<BTreeSet<String>>>,
    pub fail: bool,
}

impl RecordingInstaller {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn call_count(&self) -> usize {
        self.requests.borrow().len()
    }
}

impl Installer for RecordingInstaller {
    fn install(&self, packages: &BTreeSet<String>) -> Result<()> {
        self.requests.borrow_mut().push(packages.clone());
        if self.fail {
            Err(DoctorError::InstallFailure("apt exited with 100".to_string()))
        } else {
            Ok(())
        }
    }
}

/// Installer that "succeeds" by putting every executable the registry maps to an
/// installed package onto the fake host.
pub struct ProvisioningInstaller<'a> {
    host: &'a FakeHost,
    registry: ToolRegistry,
    pub requests: RefCell<Vec<BTreeSet<String>>>,
}

impl<'a> ProvisioningInstaller<'a> {
    pub fn new(host: &'a FakeHost, registry: ToolRegistry) -> Self {
        Self {
            host,
            registry,
            requests: RefCell::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.requests.borrow().len()
    }
}

impl Installer for ProvisioningInstaller<'_> {
    fn install(&self, packages: &BTreeSet<String>) -> Result<()> {
        self.requests.borrow_mut().push(packages.clone());
        for subsystem in crate::registry::Subsystem::ALL {
            for (executable, package) in self.registry.requirements_for(subsystem) {
                if packages.contains(&package) {
                    self.host.add_executable(&executable);
                }
            }
        }
        Ok(())
    }
}
