//! Upgrade suggestions derived from subsystem scores.

pub const CPU_TIP: &str = "CPU is aging. Consider upgrading in the future.";
pub const GPU_TIP: &str = "GPU is outdated. Upgrade recommended for graphics.";
pub const RAM_TIP: &str = "Upgrade RAM to at least 8–16 GB.";
pub const DISK_TIP: &str = "Disk health warning. Backup data and replace disk.";
pub const BALANCED_TIP: &str = "System is well balanced. No upgrade needed now.";

const CPU_THRESHOLD: u8 = 12;
const GPU_THRESHOLD: u8 = 12;
const RAM_THRESHOLD: u8 = 13;
const DISK_THRESHOLD: u8 = 15;

/// Tips for every score below its threshold, in CPU, GPU, RAM, Disk order.
/// `None` means the subsystem was not tested and is never evaluated.
pub fn suggestions(
    cpu: Option<u8>,
    gpu: Option<u8>,
    ram: Option<u8>,
    disk: Option<u8>,
) -> Vec<String> {
    let checks = [
        (cpu, CPU_THRESHOLD, CPU_TIP),
        (gpu, GPU_THRESHOLD, GPU_TIP),
        (ram, RAM_THRESHOLD, RAM_TIP),
        (disk, DISK_THRESHOLD, DISK_TIP),
    ];

    let tips: Vec<String> = checks
        .iter()
        .filter(|(score, threshold, _)| score.is_some_and(|s| s < *threshold))
        .map(|(_, _, tip)| tip.to_string())
        .collect();

    if tips.is_empty() {
        vec![BALANCED_TIP.to_string()]
    } else {
        tips
    }
}
