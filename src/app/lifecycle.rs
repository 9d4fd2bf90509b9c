//! Application lifecycle - initialization and settings reload.

use super::{RulerApp, RulerState, SettingsState, SystemState};
use crate::constants::SETTINGS_POLL_MS;
use crate::cursor::Cursors;
use crate::geometry::{DisplayMetrics, RulerMetrics};
use crate::perf::PerfMonitor;
use crate::settings::{Settings, settings_path};
use crate::settings_watcher::{SettingsEvent, SettingsWatcher};
use gpui::*;
use std::time::Duration;

impl RulerApp {
    pub fn new(window: &mut Window, cx: &mut Context<Self>) -> Self {
        let settings = Settings::load();
        let cursors = settings.initial_cursors().unwrap_or_else(Cursors::default);

        let mut ruler = RulerState::new(cursors);
        let display = DisplayMetrics::from_viewport(window.viewport_size(), window.scale_factor());
        ruler.update_metrics(RulerMetrics::from_display(&display, settings.units_per_inch));
        let device_px_per_cm = ruler.metrics.device_pixels_per_cm(&display);
        tracing::info!(
            length_cm = ruler.metrics.ruler_length,
            points_per_cm = ruler.metrics.points_per_cm,
            device_px_per_cm,
            "Ruler ready"
        );

        let watcher = settings_path().and_then(|path| match SettingsWatcher::new(path) {
            Ok(watcher) => Some(watcher),
            Err(e) => {
                tracing::debug!("Settings hot reload unavailable: {}", e);
                None
            }
        });
        if watcher.is_some() {
            Self::spawn_settings_poll(cx);
        }

        Self {
            ruler,
            settings: SettingsState {
                data: settings,
                watcher,
            },
            system: SystemState {
                perf: PerfMonitor::new(),
            },
        }
    }

    fn spawn_settings_poll(cx: &mut Context<Self>) {
        cx.spawn(async move |this, cx| {
            loop {
                cx.background_executor()
                    .timer(Duration::from_millis(SETTINGS_POLL_MS))
                    .await;
                if this
                    .update(cx, |this, cx| this.check_settings_reload(cx))
                    .is_err()
                {
                    break;
                }
            }
        })
        .detach();
    }

    /// Check for settings file changes and reload if needed.
    ///
    /// Cursor positions are never touched: the initial positions only apply
    /// at startup.
    pub fn check_settings_reload(&mut self, cx: &mut Context<Self>) {
        let Some(ref mut watcher) = self.settings.watcher else {
            return;
        };
        let Some(event) = watcher.poll() else {
            return;
        };

        match event {
            SettingsEvent::Modified | SettingsEvent::Created => {
                tracing::info!("Settings file changed, reloading...");
                self.settings.data = Settings::load_or_default(watcher.path());
                cx.notify();
            }
            SettingsEvent::Deleted => {
                tracing::warn!("Settings file deleted, using defaults");
                self.settings.data = Settings::default();
                cx.notify();
            }
            SettingsEvent::Error(e) => {
                tracing::error!("Settings watch error: {}", e);
            }
        }
    }
}
