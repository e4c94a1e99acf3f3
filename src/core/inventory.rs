//! Screen state for the inventory list.
//!
//! `InventoryState` owns the record list, the import stage and the pending
//! notice. Every transition of the import pipeline goes through it, so the
//! GUI only ever reads from it.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use super::error::ImportError;
use super::import::{DocumentPicker, ImportEvent};
use super::progress::ImportStage;
use super::record::Record;

/// Kind of notice to display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    /// Non-fatal condition; the import still completed
    Warning,
    /// The import failed
    Error,
}

/// A modal alert shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: &'static str,
    pub message: &'static str,
}

impl Notice {
    /// The sheet decoded fine but had no data rows.
    pub fn empty_sheet() -> Self {
        Self {
            kind: NoticeKind::Warning,
            title: "Warning",
            message: "Empty sheet.",
        }
    }

    /// Anything went wrong while importing.
    pub fn import_failed() -> Self {
        Self {
            kind: NoticeKind::Error,
            title: "Error",
            message: "Failed to read file.",
        }
    }
}

/// Records, import progress and pending notice for the screen.
#[derive(Debug)]
pub struct InventoryState {
    records: Vec<Record>,
    stage: ImportStage,
    notice: Option<Notice>,
    /// When the `Done` checkpoint was reached
    done_at: Option<Instant>,
    /// How long `Done` stays up before resetting to `Idle`
    done_flash: Duration,
}

impl InventoryState {
    /// Create an empty state.
    pub fn new(done_flash: Duration) -> Self {
        Self {
            records: Vec::new(),
            stage: ImportStage::Idle,
            notice: None,
            done_at: None,
            done_flash,
        }
    }

    /// Currently displayed records.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Current import stage.
    pub fn stage(&self) -> ImportStage {
        self.stage
    }

    /// Pending notice, if any.
    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Dismiss the pending notice.
    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    /// Returns true if a new import may start.
    ///
    /// Only one import runs at a time.
    pub fn can_import(&self) -> bool {
        self.stage == ImportStage::Idle
    }

    /// Enter the first checkpoint after the user confirmed the import.
    ///
    /// Returns false if an import is already in flight.
    pub fn begin(&mut self) -> bool {
        if !self.can_import() {
            return false;
        }
        tracing::info!("import started");
        self.stage = ImportStage::Started;
        true
    }

    /// Run the file picker for a started import.
    ///
    /// A cancelled picker returns the stage to `Idle` and leaves the records
    /// untouched.
    pub fn pick(&mut self, picker: &dyn DocumentPicker) -> Option<PathBuf> {
        if self.stage != ImportStage::Started {
            return None;
        }
        match picker.pick() {
            Some(path) => {
                tracing::info!(path = %path.display(), "file selected");
                Some(path)
            }
            None => {
                tracing::info!("import cancelled");
                self.stage = ImportStage::Idle;
                None
            }
        }
    }

    /// Apply a message from the import worker.
    pub fn apply(&mut self, event: ImportEvent, now: Instant) {
        match event {
            ImportEvent::Stage(stage) => {
                if self.stage.is_active() {
                    self.stage = stage;
                }
            }
            ImportEvent::Finished(Ok(records)) => self.complete(records, now),
            ImportEvent::Finished(Err(error)) => self.fail(error),
        }
    }

    /// Replace the records with a finished import.
    ///
    /// An empty import still replaces the list, with a warning.
    pub fn complete(&mut self, records: Vec<Record>, now: Instant) {
        if records.is_empty() {
            tracing::warn!("imported sheet has no data rows");
            self.notice = Some(Notice::empty_sheet());
        }
        self.records = records;
        self.stage = ImportStage::Done;
        self.done_at = Some(now);
    }

    /// Abandon the import. The records are left as they were.
    pub fn fail(&mut self, error: ImportError) {
        tracing::error!(error = %error, "import failed");
        self.notice = Some(Notice::import_failed());
        self.stage = ImportStage::Idle;
        self.done_at = None;
    }

    /// Advance time-based transitions.
    ///
    /// Returns how long until the next transition is due, if one is pending.
    pub fn tick(&mut self, now: Instant) -> Option<Duration> {
        if self.stage != ImportStage::Done {
            return None;
        }
        let done_at = *self.done_at.get_or_insert(now);
        let elapsed = now.saturating_duration_since(done_at);
        if elapsed >= self.done_flash {
            self.stage = ImportStage::Idle;
            self.done_at = None;
            None
        } else {
            Some(self.done_flash - elapsed)
        }
    }
}
