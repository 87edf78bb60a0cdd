//! Dependency checking module
//! Finds which external tools a selection needs, and optionally installs them.

use colored::*;
use std::collections::{BTreeMap, BTreeSet};
use tracing::{info, warn};

use crate::error::{DoctorError, Result};
use crate::host::{Host, Installer};
use crate::registry::{SelectionSet, Subsystem, ToolRegistry};

/// Executable -> package for every tool of the selection that is not on PATH.
/// Re-queries the host on every call.
pub fn missing_tools(
    selection: &SelectionSet,
    registry: &ToolRegistry,
    host: &dyn Host,
) -> BTreeMap<String, String> {
    selection
        .iter()
        .flat_map(|subsystem| registry.requirements_for(subsystem))
        .filter(|(executable, _)| !host.resolve_executable(executable))
        .collect()
}

/// The first required (non-optional) tool of `subsystem` that is absent, as an error.
pub fn check_available(
    subsystem: Subsystem,
    registry: &ToolRegistry,
    host: &dyn Host,
) -> Result<()> {
    match registry
        .tools_for(subsystem)
        .find(|req| !req.optional && !host.resolve_executable(&req.executable))
    {
        Some(req) => Err(DoctorError::ToolUnavailable {
            subsystem,
            executable: req.executable.clone(),
            package: req.package.clone(),
        }),
        None => Ok(()),
    }
}

/// Offer to install whatever the selection is missing.
///
/// `confirm` sees the missing tools and decides; the installer is only called when it
/// says yes. Returns `Ok(true)` when nothing was missing or installation was requested
/// (success is not re-verified), `Ok(false)` when declined.
pub fn prepare(
    selection: &SelectionSet,
    registry: &ToolRegistry,
    host: &dyn Host,
    installer: &dyn Installer,
    confirm: &mut dyn FnMut(&BTreeMap<String, String>) -> bool,
) -> Result<bool> {
    let missing = missing_tools(selection, registry, host);
    if missing.is_empty() {
        return Ok(true);
    }

    warn!(tools = ?missing.keys().collect::<Vec<_>>(), "missing tools for selected tests");
    if !confirm(&missing) {
        info!("installation declined, skipping related tests");
        return Ok(false);
    }

    let packages: BTreeSet<String> = missing.into_values().collect();
    installer.install(&packages)?;
    Ok(true)
}

/// How many registry tools resolve on the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolTally {
    pub available: usize,
    pub total: usize,
}

impl ToolTally {
    pub fn of(registry: &ToolRegistry, host: &dyn Host) -> Self {
        let (available, total) = Subsystem::ALL
            .into_iter()
            .flat_map(|subsystem| registry.tools_for(subsystem))
            .fold((0, 0), |(available, total), req| {
                let found = host.resolve_executable(&req.executable) as usize;
                (available + found, total + 1)
            });
        Self { available, total }
    }

    /// Rounded down; an empty registry counts as fully available.
    pub fn percentage(self) -> u32 {
        if self.total == 0 {
            100
        } else {
            (self.available * 100 / self.total) as u32
        }
    }
}

/// Print every registry tool with its package and availability.
pub fn check_deps(registry: &ToolRegistry, host: &dyn Host) {
    println!("{}", "External Command Dependencies".bold().underline());
    println!();

    for subsystem in Subsystem::ALL {
        println!("{}", subsystem.label().bold());
        let mut any = false;
        for req in registry.tools_for(subsystem) {
            any = true;
            let is_available = host.resolve_executable(&req.executable);
            let status = if is_available {
                "✓".green().bold()
            } else if req.optional {
                "○".yellow()
            } else {
                "✗".red().bold()
            };

            println!(
                "  {} {:<12} {}",
                status,
                req.executable,
                format!("({})", req.package).dimmed()
            );
        }
        if !any {
            println!("  {}", "no external tools needed".dimmed());
        }
        println!();
    }

    let tally = ToolTally::of(registry, host);
    let summary = format!(
        "{} of {} tools found ({}%)",
        tally.available,
        tally.total,
        tally.percentage()
    );
    let summary = match tally.percentage() {
        100 => summary.green(),
        50..=99 => summary.yellow(),
        _ => summary.red(),
    };
    println!("{summary}");
    println!(
        "{}",
        "✓ found   ○ optional, missing   ✗ required, missing (subsystem skipped)".dimmed()
    );
}
