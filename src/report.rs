//! Runs the pipeline for a selection and aggregates the result.

use serde::Serialize;
use std::collections::BTreeMap;
use sysinfo::System;
use tracing::{debug, warn};

use crate::advice;
use crate::collectors;
use crate::deps;
use crate::host::{Host, Installer};
use crate::metrics::MetricRecord;
use crate::parsers::lspci;
use crate::registry::{SelectionSet, Subsystem, ToolRegistry};
use crate::scoring;

/// Scale the total is printed against.
pub const SCORE_SCALE: u32 = 100;

/// What the pipeline needs from the outside world.
pub struct Collaborators<'a> {
    pub registry: &'a ToolRegistry,
    pub host: &'a dyn Host,
    pub installer: &'a dyn Installer,
    pub confirm: &'a mut dyn FnMut(&BTreeMap<String, String>) -> bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportEntry {
    pub subsystem: Subsystem,
    pub line: String,
    pub score: u8,
    pub max_score: u8,
    pub metrics: MetricRecord,
}

#[derive(Debug, Clone, Serialize)]
pub struct SkippedSubsystem {
    pub subsystem: Subsystem,
    pub reason: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct HostSummary {
    pub hostname: String,
    pub distro: String,
    pub kernel: Option<String>,
    pub generated_at: String,
}

impl HostSummary {
    pub fn detect() -> Self {
        Self {
            hostname: whoami::devicename(),
            distro: whoami::distro(),
            kernel: System::kernel_version(),
            generated_at: chrono::Local::now().to_rfc3339(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub host: Option<HostSummary>,
    /// Collected subsystems in CPU, GPU, RAM, Disk order.
    pub entries: Vec<ReportEntry>,
    pub total: u32,
    /// Sum of the maximum scores of the collected subsystems (90 with all four).
    pub possible: u32,
    pub suggestions: Vec<String>,
    pub skipped: Vec<SkippedSubsystem>,
    /// False when installation of missing tools was declined.
    pub tools_ready: bool,
    pub install_error: Option<String>,
}

impl Report {
    pub fn with_host(mut self, host: HostSummary) -> Self {
        self.host = Some(host);
        self
    }

    pub fn score_of(&self, subsystem: Subsystem) -> Option<u8> {
        self.entries
            .iter()
            .find(|e| e.subsystem == subsystem)
            .map(|e| e.score)
    }
}

/// Prepare tools, collect, score and advise for every selected subsystem.
/// Individual subsystem failures end up in `skipped`; the run itself never fails.
pub fn run(selection: &SelectionSet, collab: Collaborators<'_>) -> Report {
    let Collaborators {
        registry,
        host,
        installer,
        confirm,
    } = collab;

    let prepared = deps::prepare(selection, registry, host, installer, confirm);
    let (tools_ready, install_error) = match prepared {
        Ok(ready) => (ready, None),
        Err(e) => {
            warn!(error = %e, "installing missing tools failed");
            (false, Some(e.to_string()))
        }
    };

    let mut entries = Vec::new();
    let mut skipped = Vec::new();

    for subsystem in selection.iter() {
        let outcome = deps::check_available(subsystem, registry, host)
            .and_then(|()| collectors::collect(subsystem, host));

        match outcome {
            Ok(metrics) => {
                let score = scoring::score(&metrics);
                debug!(%subsystem, score, "scored");
                entries.push(ReportEntry {
                    subsystem,
                    line: display_line(&metrics, score),
                    score,
                    max_score: subsystem.max_score(),
                    metrics,
                });
            }
            Err(e) => {
                warn!(%subsystem, error = %e, "skipping subsystem");
                skipped.push(SkippedSubsystem {
                    subsystem,
                    reason: e.to_string(),
                });
            }
        }
    }

    aggregate(entries, skipped, tools_ready, install_error)
}

fn aggregate(
    entries: Vec<ReportEntry>,
    skipped: Vec<SkippedSubsystem>,
    tools_ready: bool,
    install_error: Option<String>,
) -> Report {
    let mut report = Report {
        host: None,
        total: entries.iter().map(|e| e.score as u32).sum(),
        possible: entries.iter().map(|e| e.max_score as u32).sum(),
        entries,
        suggestions: Vec::new(),
        skipped,
        tools_ready,
        install_error,
    };
    report.suggestions = advice::suggestions(
        report.score_of(Subsystem::Cpu),
        report.score_of(Subsystem::Gpu),
        report.score_of(Subsystem::Ram),
        report.score_of(Subsystem::Disk),
    );
    report
}

fn display_line(metrics: &MetricRecord, score: u8) -> String {
    let subsystem = metrics.subsystem();
    let detail = match metrics {
        MetricRecord::Cpu(cpu) => cpu.model.clone(),
        MetricRecord::Gpu(gpu) => {
            let name = gpu
                .adapter
                .lines()
                .next()
                .map(lspci::adapter_name)
                .filter(|name| !name.is_empty())
                .unwrap_or("Unknown adapter");
            match &gpu.driver {
                Some(driver) => format!("{name} [{driver}]"),
                None => name.to_string(),
            }
        }
        MetricRecord::Ram(ram) => format!("{:.1} GB", ram.total_gib),
        MetricRecord::Disk { health } => health.to_string(),
    };
    format!(
        "{:<4}: {} ({}/{})",
        subsystem.label(),
        detail,
        score,
        subsystem.max_score()
    )
}
