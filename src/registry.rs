//! Subsystems and the external tools each one needs.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Subsystem {
    Cpu,
    Gpu,
    Ram,
    Disk,
}

impl Subsystem {
    /// All subsystems in display order.
    pub const ALL: [Subsystem; 4] = [
        Subsystem::Cpu,
        Subsystem::Gpu,
        Subsystem::Ram,
        Subsystem::Disk,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Subsystem::Cpu => "CPU",
            Subsystem::Gpu => "GPU",
            Subsystem::Ram => "RAM",
            Subsystem::Disk => "Disk",
        }
    }

    pub fn max_score(self) -> u8 {
        match self {
            Subsystem::Cpu | Subsystem::Gpu => 25,
            Subsystem::Ram | Subsystem::Disk => 20,
        }
    }
}

impl fmt::Display for Subsystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Subsystems chosen for one run. Iterates in display order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectionSet(BTreeSet<Subsystem>);

impl SelectionSet {
    pub fn all() -> Self {
        Subsystem::ALL.into_iter().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = Subsystem> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<Subsystem> for SelectionSet {
    fn from_iter<I: IntoIterator<Item = Subsystem>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// One external executable a subsystem relies on, and the package that ships it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolRequirement {
    pub subsystem: Subsystem,
    pub executable: String,
    pub package: String,
    /// Offered for installation, but its absence never skips the subsystem.
    #[serde(default)]
    pub optional: bool,
}

impl ToolRequirement {
    fn new(subsystem: Subsystem, executable: &str, package: &str, optional: bool) -> Self {
        Self {
            subsystem,
            executable: executable.to_string(),
            package: package.to_string(),
            optional,
        }
    }
}

/// Immutable tool table, built once and passed down to whoever needs it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolRegistry {
    requirements: Vec<ToolRequirement>,
}

impl Default for ToolRegistry {
    fn default() -> Self {
        use Subsystem::*;
        Self::new(vec![
            ToolRequirement::new(Cpu, "lscpu", "util-linux", false),
            ToolRequirement::new(Gpu, "lspci", "pciutils", false),
            ToolRequirement::new(Gpu, "lsmod", "kmod", true),
            ToolRequirement::new(Gpu, "glxinfo", "mesa-utils", true),
            ToolRequirement::new(Disk, "lsblk", "util-linux", false),
            ToolRequirement::new(Disk, "smartctl", "smartmontools", false),
        ])
    }
}

impl ToolRegistry {
    pub fn new(requirements: Vec<ToolRequirement>) -> Self {
        Self { requirements }
    }

    /// Every tool entry for `subsystem`, optional ones included.
    pub fn tools_for(&self, subsystem: Subsystem) -> impl Iterator<Item = &ToolRequirement> {
        self.requirements
            .iter()
            .filter(move |req| req.subsystem == subsystem)
    }

    /// Executable -> package mapping for `subsystem`; empty when nothing external is needed.
    pub fn requirements_for(&self, subsystem: Subsystem) -> BTreeMap<String, String> {
        self.tools_for(subsystem)
            .map(|req| (req.executable.clone(), req.package.clone()))
            .collect()
    }
}

#[cfg(test)]
impl ToolRegistry {
    pub fn is_optional(&self, subsystem: Subsystem, executable: &str) -> bool {
        self.tools_for(subsystem)
            .any(|req| req.executable == executable && req.optional)
    }
}
