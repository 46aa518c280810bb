use crate::constants::*;

/// The bundle of simulated numeric readings shown across the panels.
/// One instance is the single source of truth; the ticker replaces it
/// wholesale each cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricSnapshot {
    /// Overall CPU usage (percent, clamped to [CPU_MIN_PCT, CPU_MAX_PCT]).
    pub cpu_usage: f32,
    /// Memory pressure (percent, clamped to [MEM_MIN_PCT, MEM_MAX_PCT]).
    pub memory_usage: f32,
    /// Disk usage (percent). Fixed; the ticker never touches it.
    pub disk_usage: f32,
    /// Inbound network rate (MB/s, non-negative).
    pub network_in: f64,
    /// Outbound network rate (MB/s, non-negative).
    pub network_out: f64,
}

impl Default for MetricSnapshot {
    fn default() -> Self {
        Self {
            cpu_usage: CPU_INITIAL_PCT,
            memory_usage: MEM_INITIAL_PCT,
            disk_usage: DISK_USAGE_PCT,
            network_in: NET_IN_INITIAL,
            network_out: NET_OUT_INITIAL,
        }
    }
}

impl MetricSnapshot {
    /// CPU time attributed to the system.
    pub fn system_cpu(&self) -> f32 {
        self.cpu_usage * CPU_SYSTEM_SHARE
    }

    /// CPU time attributed to user processes.
    pub fn user_cpu(&self) -> f32 {
        self.cpu_usage * CPU_USER_SHARE
    }

    /// Physical memory currently in use (GB).
    pub fn used_memory_gb(&self) -> f32 {
        PHYSICAL_MEMORY_GB * self.memory_usage / 100.0
    }

    /// Memory pressure attributed to applications (percent).
    pub fn app_memory(&self) -> f32 {
        self.memory_usage * APP_MEMORY_SHARE
    }

    /// Memory pressure attributed to wired allocations (percent).
    pub fn wired_memory(&self) -> f32 {
        self.memory_usage * WIRED_MEMORY_SHARE
    }

    /// Memory pressure attributed to cached files (percent).
    pub fn cached_files(&self) -> f32 {
        self.memory_usage * CACHED_FILES_SHARE
    }
}
