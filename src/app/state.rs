//! Application state - the RulerApp struct definition and sub-structs.

use crate::cursor::{CursorId, Cursors};
use crate::geometry::RulerMetrics;
use crate::input::DragState;
use crate::perf::PerfMonitor;
use crate::settings::Settings;
use crate::settings_watcher::SettingsWatcher;

/// The ruler view. Owns every piece of mutable state in the app.
pub struct RulerApp {
    pub ruler: RulerState,
    pub settings: SettingsState,
    pub system: SystemState,
}

/// Cursor positions, the active drag and the metrics they were last checked against
#[derive(Debug, Clone)]
pub struct RulerState {
    pub cursors: Cursors,
    pub drag: DragState,
    pub metrics: RulerMetrics,
}

/// Loaded settings and the watcher that reloads them
pub struct SettingsState {
    pub data: Settings,
    pub watcher: Option<SettingsWatcher>,
}

/// Instrumentation
pub struct SystemState {
    pub perf: PerfMonitor,
}

impl Default for RulerState {
    fn default() -> Self {
        Self::new(Cursors::default())
    }
}

impl RulerState {
    pub fn new(cursors: Cursors) -> Self {
        Self {
            cursors,
            drag: DragState::Idle,
            metrics: RulerMetrics::default(),
        }
    }

    /// Adopt freshly computed metrics, pulling the cursors inside a shorter
    /// ruler. Returns whether the metrics changed.
    pub fn update_metrics(&mut self, metrics: RulerMetrics) -> bool {
        if metrics == self.metrics {
            return false;
        }
        self.metrics = metrics;
        if self.cursors.fit_to_length(metrics.length_cm()) {
            tracing::debug!(
                left = self.cursors.left(),
                right = self.cursors.right(),
                length = metrics.ruler_length,
                "Cursors moved inside resized ruler"
            );
        }
        true
    }

    pub fn distance(&self) -> f32 {
        self.cursors.distance()
    }

    /// Position of a cursor in points from the ruler origin
    pub fn cursor_x(&self, id: CursorId) -> f32 {
        self.metrics.cm_to_points(self.cursors.get(id))
    }
}
