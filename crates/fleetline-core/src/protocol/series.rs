//! The catalog of recognized gauge series.
//!
//! `Series` is the single source of truth for the recognized-name set: the
//! dispatcher resolves wire names through [`Series::from_name`], the
//! snapshot renderer exports through [`Series::export_name`], and tests
//! enumerate [`Series::ALL`]. Anything outside this catalog is discarded.

/// One of the 15 gauge kinds tracked per (deployment, job, index, id) tuple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Series {
    Healthy,
    LoadAvg01,
    CpuSys,
    CpuUser,
    CpuWait,
    MemKb,
    MemPercent,
    SwapKb,
    SwapPercent,
    SystemDiskInodePercent,
    SystemDiskPercent,
    EphemeralDiskInodePercent,
    EphemeralDiskPercent,
    PersistentDiskInodePercent,
    PersistentDiskPercent,
}

impl Series {
    /// Number of series in the catalog.
    pub const COUNT: usize = 15;

    /// Every series, in export order.
    pub const ALL: [Series; Series::COUNT] = [
        Series::Healthy,
        Series::LoadAvg01,
        Series::CpuSys,
        Series::CpuUser,
        Series::CpuWait,
        Series::MemKb,
        Series::MemPercent,
        Series::SwapKb,
        Series::SwapPercent,
        Series::SystemDiskInodePercent,
        Series::SystemDiskPercent,
        Series::EphemeralDiskInodePercent,
        Series::EphemeralDiskPercent,
        Series::PersistentDiskInodePercent,
        Series::PersistentDiskPercent,
    ];

    /// Resolve a wire metric name. `None` means the message is discarded.
    pub fn from_name(name: &str) -> Option<Series> {
        match name {
            "system.healthy" => Some(Series::Healthy),
            "system.load.1m" => Some(Series::LoadAvg01),
            "system.cpu.sys" => Some(Series::CpuSys),
            "system.cpu.user" => Some(Series::CpuUser),
            "system.cpu.wait" => Some(Series::CpuWait),
            "system.mem.kb" => Some(Series::MemKb),
            "system.mem.percent" => Some(Series::MemPercent),
            "system.swap.kb" => Some(Series::SwapKb),
            "system.swap.percent" => Some(Series::SwapPercent),
            "system.disk.system.inode_percent" => Some(Series::SystemDiskInodePercent),
            "system.disk.system.percent" => Some(Series::SystemDiskPercent),
            "system.disk.ephemeral.inode_percent" => Some(Series::EphemeralDiskInodePercent),
            "system.disk.ephemeral.percent" => Some(Series::EphemeralDiskPercent),
            "system.disk.persistent.inode_percent" => Some(Series::PersistentDiskInodePercent),
            "system.disk.persistent.percent" => Some(Series::PersistentDiskPercent),
            _ => None,
        }
    }

    /// Name as sent on the wire.
    pub fn protocol_name(self) -> &'static str {
        match self {
            Series::Healthy => "system.healthy",
            Series::LoadAvg01 => "system.load.1m",
            Series::CpuSys => "system.cpu.sys",
            Series::CpuUser => "system.cpu.user",
            Series::CpuWait => "system.cpu.wait",
            Series::MemKb => "system.mem.kb",
            Series::MemPercent => "system.mem.percent",
            Series::SwapKb => "system.swap.kb",
            Series::SwapPercent => "system.swap.percent",
            Series::SystemDiskInodePercent => "system.disk.system.inode_percent",
            Series::SystemDiskPercent => "system.disk.system.percent",
            Series::EphemeralDiskInodePercent => "system.disk.ephemeral.inode_percent",
            Series::EphemeralDiskPercent => "system.disk.ephemeral.percent",
            Series::PersistentDiskInodePercent => "system.disk.persistent.inode_percent",
            Series::PersistentDiskPercent => "system.disk.persistent.percent",
        }
    }

    /// Name exported in the scraped snapshot (wire name with dots flattened).
    pub fn export_name(self) -> &'static str {
        match self {
            Series::Healthy => "system_healthy",
            Series::LoadAvg01 => "system_load_1m",
            Series::CpuSys => "system_cpu_sys",
            Series::CpuUser => "system_cpu_user",
            Series::CpuWait => "system_cpu_wait",
            Series::MemKb => "system_mem_kb",
            Series::MemPercent => "system_mem_percent",
            Series::SwapKb => "system_swap_kb",
            Series::SwapPercent => "system_swap_percent",
            Series::SystemDiskInodePercent => "system_disk_system_inode_percent",
            Series::SystemDiskPercent => "system_disk_system_percent",
            Series::EphemeralDiskInodePercent => "system_disk_ephemeral_inode_percent",
            Series::EphemeralDiskPercent => "system_disk_ephemeral_percent",
            Series::PersistentDiskInodePercent => "system_disk_persistent_inode_percent",
            Series::PersistentDiskPercent => "system_disk_persistent_percent",
        }
    }

    /// Help text for the exported metric.
    pub fn help(self) -> &'static str {
        match self {
            Series::Healthy => "Job Healthy (1 for healthy, 0 for unhealthy).",
            Series::LoadAvg01 => "Job Load avg01.",
            Series::CpuSys => "Job CPU System.",
            Series::CpuUser => "Job CPU User.",
            Series::CpuWait => "Job CPU Wait.",
            Series::MemKb => "Job Memory KB.",
            Series::MemPercent => "Job Memory Percent.",
            Series::SwapKb => "Job Swap KB.",
            Series::SwapPercent => "Job Swap Percent.",
            Series::SystemDiskInodePercent => "Job System Disk Inode Percent.",
            Series::SystemDiskPercent => "Job System Disk Percent.",
            Series::EphemeralDiskInodePercent => "Job Ephemeral Disk Inode Percent.",
            Series::EphemeralDiskPercent => "Job Ephemeral Disk Percent.",
            Series::PersistentDiskInodePercent => "Job Persistent Disk Inode Percent.",
            Series::PersistentDiskPercent => "Job Persistent Disk Percent.",
        }
    }

    /// Stable index into per-series storage, aligned with [`Series::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }
}
