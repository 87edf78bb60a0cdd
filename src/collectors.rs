//! Metric collectors: run a subsystem's utilities through the host and parse them.

use tracing::debug;

use crate::error::Result;
use crate::host::Host;
use crate::metrics::{CpuMetrics, DiskHealth, GpuMetrics, MetricRecord, RamMetrics};
use crate::parsers::{glxinfo, lsblk, lscpu, lsmod, lspci, meminfo, smartctl};
use crate::registry::Subsystem;

const MEMINFO_PATH: &str = "/proc/meminfo";

pub fn collect(subsystem: Subsystem, host: &dyn Host) -> Result<MetricRecord> {
    match subsystem {
        Subsystem::Cpu => collect_cpu(host).map(MetricRecord::Cpu),
        Subsystem::Gpu => Ok(MetricRecord::Gpu(collect_gpu(host))),
        Subsystem::Ram => collect_ram(host).map(MetricRecord::Ram),
        Subsystem::Disk => Ok(MetricRecord::Disk {
            health: collect_disk(host),
        }),
    }
}

pub fn collect_cpu(host: &dyn Host) -> Result<CpuMetrics> {
    let info = lscpu::parse_lscpu(&host.run("lscpu", &[]))?;
    Ok(CpuMetrics {
        model: info.model_name,
        logical_cores: info.logical_cpus,
        max_mhz: info.max_mhz.unwrap_or(0.0),
    })
}

pub fn collect_gpu(host: &dyn Host) -> GpuMetrics {
    let pci = host.run("lspci", &[]);
    let adapter = lspci::display_adapters(&pci).join("\n");
    let renderer = glxinfo::renderer(&host.run("glxinfo", &[]));
    let driver = lsmod::display_driver(&host.run("lsmod", &[])).map(str::to_string);
    debug!(%adapter, %renderer, ?driver, "gpu collected");

    GpuMetrics {
        adapter,
        renderer,
        driver,
    }
}

pub fn collect_ram(host: &dyn Host) -> Result<RamMetrics> {
    let contents = host.read_to_string(MEMINFO_PATH)?;
    let kb = meminfo::mem_total_kb(&contents)?;
    Ok(RamMetrics {
        total_gib: meminfo::kb_to_gib(kb),
    })
}

/// Stops at the first device whose SMART verdict is FAILED.
pub fn collect_disk(host: &dyn Host) -> DiskHealth {
    let names = host.run("lsblk", &["-nd", "-o", "NAME"]);
    for name in lsblk::device_names(&names) {
        let device = format!("/dev/{name}");
        let verdict = smartctl::health(&host.run("smartctl", &["-H", &device]));
        debug!(%device, ?verdict, "smart health");
        if verdict == smartctl::SmartHealth::Failed {
            return DiskHealth::Failing;
        }
    }
    DiskHealth::Healthy
}
