#[cfg(feature = "cli")]
use std::sync::Mutex;
#[cfg(feature = "cli")]
use std::time::{Duration, Instant};
#[cfg(feature = "cli")]
use sysinfo::{Pid, RefreshKind, System};

#[cfg(feature = "cli")]
#[derive(Debug, Clone)]
pub struct RunStats {
    pub cpu_usage: f32,
    pub memory_usage_mb: u64,
    pub peak_memory_mb: u64,
    pub elapsed_time: Duration,
}

/// Samples the journal's own process between lessons. Only active when the
/// user passes --monitor; otherwise every call is a no-op.
#[cfg(feature = "cli")]
pub struct RunMonitor {
    inner: Mutex<MonitorState>,
    pid: Pid,
    start_time: Instant,
    enabled: bool,
}

#[cfg(feature = "cli")]
struct MonitorState {
    system: System,
    peak_memory: u64,
}

#[cfg(feature = "cli")]
impl RunMonitor {
    pub fn new(enabled: bool) -> Self {
        let mut system = System::new_with_specifics(RefreshKind::everything());
        system.refresh_all();

        let pid = sysinfo::get_current_pid().expect("Failed to get current PID");

        Self {
            inner: Mutex::new(MonitorState {
                system,
                peak_memory: 0,
            }),
            pid,
            start_time: Instant::now(),
            enabled,
        }
    }

    pub fn sample(&self) -> Option<RunStats> {
        if !self.enabled {
            return None;
        }

        let mut state = self.inner.lock().ok()?;
        state.system.refresh_all();

        // The process borrow must end before peak_memory is updated.
        let (cpu_usage, memory_mb) = {
            let process = state.system.process(self.pid)?;
            (process.cpu_usage(), process.memory() / 1024 / 1024)
        };
        if memory_mb > state.peak_memory {
            state.peak_memory = memory_mb;
        }

        Some(RunStats {
            cpu_usage,
            memory_usage_mb: memory_mb,
            peak_memory_mb: state.peak_memory,
            elapsed_time: self.start_time.elapsed(),
        })
    }

    pub fn log_lesson(&self, lesson: &str) {
        if let Some(stats) = self.sample() {
            tracing::info!(
                "📊 {} - CPU: {:.1}%, Memory: {}MB, Peak: {}MB, Time: {:?}",
                lesson,
                stats.cpu_usage,
                stats.memory_usage_mb,
                stats.peak_memory_mb,
                stats.elapsed_time
            );
        }
    }

    pub fn log_final(&self) {
        if let Some(stats) = self.sample() {
            tracing::info!(
                "📊 Journal done - Total Time: {:?}, Peak Memory: {}MB",
                stats.elapsed_time,
                stats.peak_memory_mb
            );
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

#[cfg(feature = "cli")]
impl Default for RunMonitor {
    fn default() -> Self {
        Self::new(false)
    }
}


// Empty shell for builds without the CLI feature.
#[cfg(not(feature = "cli"))]
pub struct RunMonitor;

#[cfg(not(feature = "cli"))]
impl RunMonitor {
    pub fn new(_enabled: bool) -> Self {
        Self
    }

    pub fn log_lesson(&self, _lesson: &str) {}

    pub fn log_final(&self) {}

    pub fn is_enabled(&self) -> bool {
        false
    }
}
