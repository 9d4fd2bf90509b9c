//! Settings file watcher for hot reload.
//!
//! Watches the directory containing the settings file (editors often replace
//! files instead of writing in place) and reports events for that one file.
//! Events are queued on a channel and drained by `poll` from the UI thread.

use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{Receiver, TryRecvError, channel};

pub use crate::settings::settings_path as default_settings_path;

/// What happened to the settings file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsEvent {
    Created,
    Modified,
    Deleted,
    Error(String),
}

pub struct SettingsWatcher {
    path: PathBuf,
    rx: Receiver<notify::Result<Event>>,
    // Dropping the watcher stops the OS subscription
    _watcher: RecommendedWatcher,
}

impl SettingsWatcher {
    /// Start watching `path`. Its parent directory must exist.
    pub fn new(path: PathBuf) -> notify::Result<Self> {
        let (tx, rx) = channel();
        let mut watcher = notify::recommended_watcher(tx)?;
        let dir = path.parent().unwrap_or_else(|| Path::new("."));
        watcher.watch(dir, RecursiveMode::NonRecursive)?;
        tracing::debug!(path = %path.display(), "Watching settings file");

        Ok(Self {
            path,
            rx,
            _watcher: watcher,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Drain pending events, returning the last one that concerns the
    /// settings file. Bursts of writes collapse into a single reload.
    pub fn poll(&mut self) -> Option<SettingsEvent> {
        let mut latest = None;
        loop {
            match self.rx.try_recv() {
                Ok(Ok(event)) => {
                    if let Some(mapped) = self.map_event(&event) {
                        latest = Some(mapped);
                    }
                }
                Ok(Err(e)) => latest = Some(SettingsEvent::Error(e.to_string())),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    latest = Some(SettingsEvent::Error("watcher disconnected".to_string()));
                    break;
                }
            }
        }
        latest
    }

    fn map_event(&self, event: &Event) -> Option<SettingsEvent> {
        if !event.paths.iter().any(|p| p.file_name() == self.path.file_name()) {
            return None;
        }
        match event.kind {
            EventKind::Create(_) => Some(SettingsEvent::Created),
            EventKind::Modify(_) => Some(SettingsEvent::Modified),
            EventKind::Remove(_) => Some(SettingsEvent::Deleted),
            _ => None,
        }
    }
}
