//! Performance monitoring for the render and drag paths.
//!
//! Two tools:
//!
//! - `PerfMonitor` keeps a rolling window of render times and logs when the
//!   ruler takes longer than a frame budget to rebuild.
//! - `profile_scope!` times a block. It compiles to nothing unless the
//!   `profiling` feature is enabled:
//!
//! ```ignore
//! fn handle_mouse_move() {
//!     profile_scope!("handle_mouse_move");
//!     // ...
//! }
//! ```

use std::collections::VecDeque;
use std::time::Instant;
use tracing::warn;

/// Target frame time for 60 FPS
pub const TARGET_FRAME_MS: f64 = 16.67;

/// Number of samples to keep for rolling averages
const SAMPLE_COUNT: usize = 60;

/// Warn when a render takes this many times the frame budget
const WARN_THRESHOLD: f64 = 2.0;

/// Profile a scope with the given name. Zero-cost when profiling is disabled.
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::new($name, 1.0);
        #[cfg(not(feature = "profiling"))]
        let _ = $name;
    };
    ($name:expr, $threshold_ms:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::new($name, $threshold_ms);
        #[cfg(not(feature = "profiling"))]
        let _ = ($name, $threshold_ms);
    };
}

pub use profile_scope;

/// Rolling render timing statistics.
pub struct PerfMonitor {
    /// Recent render times in milliseconds
    samples: VecDeque<f64>,
    /// When the current render started
    frame_start: Option<Instant>,
    slow_frames: u64,
    total_frames: u64,
}

impl Default for PerfMonitor {
    fn default() -> Self {
        Self::new()
    }
}

impl PerfMonitor {
    pub fn new() -> Self {
        Self {
            samples: VecDeque::with_capacity(SAMPLE_COUNT),
            frame_start: None,
            slow_frames: 0,
            total_frames: 0,
        }
    }

    /// Mark the start of a render.
    pub fn begin_frame(&mut self) {
        self.frame_start = Some(Instant::now());
    }

    /// Mark the end of a render and record its duration.
    ///
    /// Returns the render time in milliseconds, or `None` without a matching
    /// `begin_frame`.
    pub fn end_frame(&mut self) -> Option<f64> {
        let start = self.frame_start.take()?;
        let ms = start.elapsed().as_secs_f64() * 1000.0;
        self.record(ms);
        Some(ms)
    }

    /// Record a render time measured elsewhere.
    pub fn record(&mut self, ms: f64) {
        if self.samples.len() >= SAMPLE_COUNT {
            self.samples.pop_front();
        }
        self.samples.push_back(ms);
        self.total_frames += 1;

        if ms > TARGET_FRAME_MS * WARN_THRESHOLD {
            self.slow_frames += 1;
            warn!(
                frame_time_ms = format!("{:.2}", ms),
                target_ms = format!("{:.2}", TARGET_FRAME_MS),
                "Slow ruler render"
            );
        }
    }

    /// Average render time over recent samples.
    pub fn average_frame_time(&self) -> f64 {
        if self.samples.is_empty() {
            return 0.0;
        }
        self.samples.iter().sum::<f64>() / self.samples.len() as f64
    }

    /// Slowest render in recent samples.
    pub fn max_frame_time(&self) -> f64 {
        self.samples.iter().copied().fold(0.0, f64::max)
    }

    /// Percentage of all renders that exceeded the warning threshold.
    pub fn slow_frame_percentage(&self) -> f64 {
        if self.total_frames == 0 {
            return 0.0;
        }
        (self.slow_frames as f64 / self.total_frames as f64) * 100.0
    }

    pub fn total_frames(&self) -> u64 {
        self.total_frames
    }
}

/// A scoped timer that logs when its scope outlives a threshold.
pub struct ScopedTimer {
    name: &'static str,
    start: Instant,
    threshold_ms: f64,
}

impl ScopedTimer {
    pub fn new(name: &'static str, threshold_ms: f64) -> Self {
        Self {
            name,
            start: Instant::now(),
            threshold_ms,
        }
    }

    /// Elapsed time without stopping the timer.
    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        let elapsed_ms = self.elapsed_ms();
        if elapsed_ms > self.threshold_ms {
            warn!(
                operation = self.name,
                elapsed_ms = format!("{:.2}", elapsed_ms),
                threshold_ms = format!("{:.2}", self.threshold_ms),
                "Slow operation"
            );
        }
    }
}
