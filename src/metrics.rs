//! Structured records extracted from tool output, one kind per subsystem.

use serde::Serialize;
use std::fmt;

use crate::registry::Subsystem;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CpuMetrics {
    pub model: String,
    pub logical_cores: u32,
    /// 0 when the CPU does not report a maximum frequency.
    pub max_mhz: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GpuMetrics {
    /// Raw display-class lspci lines, newline separated. Empty on headless machines.
    pub adapter: String,
    /// OpenGL renderer string, empty if glxinfo is missing or has no display.
    pub renderer: String,
    pub driver: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RamMetrics {
    pub total_gib: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DiskHealth {
    Healthy,
    Failing,
}

impl fmt::Display for DiskHealth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiskHealth::Healthy => f.write_str("Healthy"),
            DiskHealth::Failing => f.write_str("Failing"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "subsystem", rename_all = "lowercase")]
pub enum MetricRecord {
    Cpu(CpuMetrics),
    Gpu(GpuMetrics),
    Ram(RamMetrics),
    Disk { health: DiskHealth },
}

impl MetricRecord {
    pub fn subsystem(&self) -> Subsystem {
        match self {
            MetricRecord::Cpu(_) => Subsystem::Cpu,
            MetricRecord::Gpu(_) => Subsystem::Gpu,
            MetricRecord::Ram(_) => Subsystem::Ram,
            MetricRecord::Disk { .. } => Subsystem::Disk,
        }
    }
}
