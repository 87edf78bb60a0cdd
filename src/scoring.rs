//! Heuristic scores per subsystem. Pure functions, no hidden state.

use crate::metrics::{DiskHealth, MetricRecord};

const CPU_MAX: u8 = 25;
const GPU_MAX: u8 = 25;

const CPU_CORES_GOOD: u32 = 4;
const CPU_MHZ_GOOD: f64 = 3000.0;
const SOFTWARE_RASTERIZER: &str = "llvmpipe";

pub fn cpu_score(cores: u32, max_mhz: f64) -> u8 {
    let mut score = if cores >= CPU_CORES_GOOD { 10 } else { 5 };
    score += if max_mhz >= CPU_MHZ_GOOD { 10 } else { 5 };
    score.min(CPU_MAX)
}

pub fn gpu_score(adapter: &str, renderer: &str) -> u8 {
    let adapter = adapter.to_lowercase();
    let mut score = if adapter.contains("nvidia") || adapter.contains("amd") {
        10
    } else if adapter.contains("intel") {
        7
    } else {
        3
    };

    let hardware_accelerated =
        !renderer.is_empty() && !renderer.to_lowercase().contains(SOFTWARE_RASTERIZER);
    score += if hardware_accelerated { 10 } else { 3 };
    score.min(GPU_MAX)
}

pub fn ram_score(gib: f64) -> u8 {
    if gib >= 16.0 {
        20
    } else if gib >= 8.0 {
        13
    } else if gib >= 4.0 {
        8
    } else {
        4
    }
}

pub fn disk_score(health: DiskHealth) -> u8 {
    match health {
        DiskHealth::Healthy => 20,
        DiskHealth::Failing => 8,
    }
}

pub fn score(record: &MetricRecord) -> u8 {
    match record {
        MetricRecord::Cpu(cpu) => cpu_score(cpu.logical_cores, cpu.max_mhz),
        MetricRecord::Gpu(gpu) => gpu_score(&gpu.adapter, &gpu.renderer),
        MetricRecord::Ram(ram) => ram_score(ram.total_gib),
        MetricRecord::Disk { health } => disk_score(*health),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::{CpuMetrics, GpuMetrics, RamMetrics};

    #[test]
    fn test_cpu_score_strong_and_weak() {
        for cores in [4, 8, 64] {
            for mhz in [3000.0, 3600.0, 5800.0] {
                assert_eq!(cpu_score(cores, mhz), 20);
            }
        }
        for cores in [0, 1, 3] {
            for mhz in [0.0, 1800.0, 2999.9] {
                assert_eq!(cpu_score(cores, mhz), 10);
            }
        }
    }

    #[test]
    fn test_cpu_score_mixed() {
        assert_eq!(cpu_score(8, 2400.0), 15);
        assert_eq!(cpu_score(2, 4000.0), 15);
    }

    #[test]
    fn test_ram_score_tiers() {
        assert_eq!(ram_score(0.0), 4);
        assert_eq!(ram_score(3.9), 4);
        assert_eq!(ram_score(4.0), 8);
        assert_eq!(ram_score(7.7), 8);
        assert_eq!(ram_score(8.0), 13);
        assert_eq!(ram_score(15.5), 13);
        assert_eq!(ram_score(16.0), 20);
        assert_eq!(ram_score(256.0), 20);
    }

    #[test]
    fn test_ram_score_monotonic() {
        let mut previous = 0;
        for tenths in 0..400 {
            let score = ram_score(tenths as f64 / 10.0);
            assert!(score >= previous);
            assert!([4, 8, 13, 20].contains(&score));
            previous = score;
        }
    }

    #[test]
    fn test_disk_score() {
        assert_eq!(disk_score(DiskHealth::Healthy), 20);
        assert_eq!(disk_score(DiskHealth::Failing), 8);
    }

    #[test]
    fn test_gpu_score_nvidia_hardware_renderer() {
        assert_eq!(
            gpu_score(
                "01:00.0 VGA compatible controller: NVIDIA Corporation GA106",
                "NVIDIA GeForce RTX 3060/PCIe/SSE2"
            ),
            20
        );
        assert_eq!(gpu_score("nViDiA", "Mesa NV"), 20);
    }

    #[test]
    fn test_gpu_score_vendor_tiers() {
        assert_eq!(gpu_score("Advanced Micro Devices, Inc. [AMD/ATI]", ""), 13);
        assert_eq!(gpu_score("Intel Corporation UHD Graphics 620", "Mesa Intel(R) UHD"), 17);
        assert_eq!(gpu_score("", ""), 6);
        assert_eq!(gpu_score("Matrox G200eR2", "llvmpipe (LLVM 15.0.7, 256 bits)"), 6);
        assert_eq!(gpu_score("Intel", "LLVMpipe"), 10);
    }

    #[test]
    fn test_gpu_score_bounds() {
        let adapters = ["", "nvidia", "AMD", "intel", "virtio", "NVIDIA and Intel"];
        let renderers = ["", "llvmpipe", "Mesa", "x"];
        for a in adapters {
            for r in renderers {
                let s = gpu_score(a, r);
                assert!((3..=25).contains(&s), "{a}/{r} -> {s}");
            }
        }
    }

    #[test]
    fn test_scores_stay_in_range() {
        let records = [
            MetricRecord::Cpu(CpuMetrics {
                model: "x".into(),
                logical_cores: u32::MAX,
                max_mhz: f64::MAX,
            }),
            MetricRecord::Gpu(GpuMetrics {
                adapter: "nvidia".into(),
                renderer: "x".into(),
                driver: None,
            }),
            MetricRecord::Ram(RamMetrics { total_gib: -1.0 }),
            MetricRecord::Disk {
                health: DiskHealth::Failing,
            },
        ];
        for record in &records {
            assert!(score(record) <= record.subsystem().max_score());
        }
    }

    #[test]
    fn test_scoring_is_idempotent() {
        let record = MetricRecord::Cpu(CpuMetrics {
            model: "Example CPU".into(),
            logical_cores: 8,
            max_mhz: 3600.0,
        });
        assert_eq!(score(&record), score(&record));
        assert_eq!(score(&record), 20);
    }
}
