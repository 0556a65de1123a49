// src/history/mod.rs
use std::sync::{Mutex, MutexGuard};

use crate::models::{Evaluation, GenerationMode, Strength};

/// One generated password together with its evaluation.
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub mode: GenerationMode,
    pub password: String,
    pub evaluation: Evaluation,
}

impl LogEntry {
    pub fn new(mode: GenerationMode, password: String, evaluation: Evaluation) -> Self {
        Self { mode, password, evaluation }
    }

    pub fn strength(&self) -> Strength {
        self.evaluation.strength
    }
}

#[derive(Debug, Clone, Default)]
pub struct LogFilter {
    pub mode: Option<GenerationMode>,
    pub strength: Option<Strength>,
}

impl LogFilter {
    pub fn mode(mode: GenerationMode) -> Self {
        Self { mode: Some(mode), ..Self::default() }
    }

    fn matches(&self, entry: &LogEntry) -> bool {
        if let Some(mode) = self.mode {
            if entry.mode != mode {
                return false;
            }
        }

        if let Some(strength) = self.strength {
            if entry.strength() != strength {
                return false;
            }
        }

        true
    }
}

/// Append-only record of generated passwords.
///
/// Shared between request handlers, so every mutation goes through the mutex.
#[derive(Debug, Default)]
pub struct GenerationLog {
    entries: Mutex<Vec<LogEntry>>,
}

impl GenerationLog {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<LogEntry>> {
        // Entries are pushed whole, so a poisoned lock still holds a consistent list.
        self.entries.lock().unwrap_or_else(|poisoned| {
            log::warn!("Generation log mutex was poisoned, recovering");
            poisoned.into_inner()
        })
    }

    pub fn append(&self, entry: LogEntry) {
        self.lock().push(entry);
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Snapshot of every entry, oldest first.
    pub fn entries(&self) -> Vec<LogEntry> {
        self.lock().clone()
    }

    pub fn count(&self, filter: &LogFilter) -> usize {
        self.lock().iter().filter(|entry| filter.matches(entry)).count()
    }
}
