/*
 * Responsibility
 * - Process / platform facts reported by /health and /api/info
 *   (platform, arch, runtime version, memory, uptime)
 * - sysinfo usage is kept inside this module
 */
use std::time::Instant;

use sysinfo::{Pid, System};
use thiserror::Error;

/// rustc version the binary was built with, captured by build.rs.
pub const RUNTIME_VERSION: &str = env!("DEVOPS_RUSTC_VERSION");

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

#[derive(Debug, Error)]
pub enum SystemError {
    #[error("unable to determine current pid: {0}")]
    Pid(&'static str),
    #[error("process {0} not found in process table")]
    ProcessNotFound(Pid),
}

pub fn platform() -> &'static str {
    std::env::consts::OS
}

pub fn arch() -> &'static str {
    std::env::consts::ARCH
}

/// Memory figures for the current process.
///
/// There is no managed heap to report, so `total` is the address space the
/// process has reserved (virtual size) and `used` is what is actually backed
/// by RAM (resident set). `used <= total` holds for any live process; the
/// gap is typically large because virtual size counts mapped but untouched
/// pages (thread stacks, allocator arenas, shared libraries).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MemoryUsage {
    /// Virtual memory of the process, in bytes.
    pub total_bytes: u64,
    /// Resident memory of the process, in bytes.
    pub used_bytes: u64,
}

impl MemoryUsage {
    pub fn total_mb(&self) -> String {
        format_megabytes(self.total_bytes)
    }

    pub fn used_mb(&self) -> String {
        format_megabytes(self.used_bytes)
    }
}

pub fn memory_usage() -> Result<MemoryUsage, SystemError> {
    let pid = sysinfo::get_current_pid().map_err(SystemError::Pid)?;

    let mut sys = System::new();
    sys.refresh_process(pid);

    let process = sys.process(pid).ok_or(SystemError::ProcessNotFound(pid))?;

    Ok(MemoryUsage {
        total_bytes: process.virtual_memory(),
        used_bytes: process.memory(),
    })
}

/// Seconds elapsed since `started_at`, from a monotonic clock.
pub fn uptime_secs(started_at: Instant) -> f64 {
    started_at.elapsed().as_secs_f64()
}

/// `1_572_864` -> `"2MB"` (rounded to the nearest whole megabyte)
pub fn format_megabytes(bytes: u64) -> String {
    format!("{}MB", (bytes as f64 / BYTES_PER_MB).round() as u64)
}

/// `12.6` -> `"13s"`
pub fn format_uptime(secs: f64) -> String {
    format!("{}s", secs.max(0.0).round() as u64)
}
