use std::cmp::Ordering;

use crate::constants::{PROC_CPU_HIGH_PCT, PROC_CPU_MEDIUM_PCT};

/// A single entry in the process table. The catalog is fixed at startup;
/// records are never created or destroyed afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessRecord {
    pub pid: u32,
    pub name: &'static str,
    pub cpu: f32,
    pub memory_mb: u32,
    pub threads: u32,
}

/// How heavily a process row leans on the CPU, for color-coding only.
/// Not a stored property; derived at render time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CpuLoad {
    Low,
    Medium,
    High,
}

impl ProcessRecord {
    /// Classify this record's CPU usage for row coloring.
    pub fn cpu_load(&self) -> CpuLoad {
        if self.cpu > PROC_CPU_HIGH_PCT {
            CpuLoad::High
        } else if self.cpu > PROC_CPU_MEDIUM_PCT {
            CpuLoad::Medium
        } else {
            CpuLoad::Low
        }
    }
}

/// The fixed process catalog, in its original (pid-ascending) order.
pub const PROCESS_CATALOG: &[ProcessRecord] = &[
    ProcessRecord { pid: 1, name: "kernel_task", cpu: 8.2, memory_mb: 1024, threads: 156 },
    ProcessRecord { pid: 245, name: "Safari", cpu: 12.5, memory_mb: 890, threads: 42 },
    ProcessRecord { pid: 312, name: "Terminal", cpu: 2.1, memory_mb: 156, threads: 8 },
    ProcessRecord { pid: 421, name: "Finder", cpu: 1.8, memory_mb: 234, threads: 12 },
    ProcessRecord { pid: 523, name: "Hanzo AI", cpu: 15.3, memory_mb: 1250, threads: 24 },
    ProcessRecord { pid: 612, name: "Mail", cpu: 0.5, memory_mb: 180, threads: 6 },
    ProcessRecord { pid: 734, name: "Messages", cpu: 0.3, memory_mb: 145, threads: 5 },
    ProcessRecord { pid: 845, name: "Music", cpu: 3.2, memory_mb: 320, threads: 14 },
    ProcessRecord { pid: 956, name: "Photos", cpu: 0.1, memory_mb: 210, threads: 8 },
    ProcessRecord { pid: 1067, name: "Notes", cpu: 0.2, memory_mb: 95, threads: 4 },
];

/// Borrowed view of the catalog sorted descending by CPU. Pure transform:
/// the catalog's storage order is left untouched.
pub fn sorted_by_cpu(records: &[ProcessRecord]) -> Vec<&ProcessRecord> {
    let mut view: Vec<&ProcessRecord> = records.iter().collect();
    view.sort_by(|a, b| b.cpu.partial_cmp(&a.cpu).unwrap_or(Ordering::Equal));
    view
}
