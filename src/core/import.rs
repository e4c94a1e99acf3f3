//! The import pipeline.
//!
//! File selection happens on the UI thread through a `DocumentPicker`. Reading
//! and decoding run on a worker thread that reports each checkpoint back over
//! a channel, so the UI keeps repainting while a large file is parsed.

use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

use super::config::PacingSettings;
use super::error::{self, ImportError};
use super::progress::ImportStage;
use super::record::Record;
use super::workbook;

/// Source of the file to import.
pub trait DocumentPicker {
    /// Ask the user for a file. `None` means the user cancelled.
    fn pick(&self) -> Option<PathBuf>;
}

/// Native file chooser. Accepts any file type.
pub struct NativePicker;

impl DocumentPicker for NativePicker {
    fn pick(&self) -> Option<PathBuf> {
        rfd::FileDialog::new()
            .set_title("Select Inventory Spreadsheet")
            .pick_file()
    }
}

/// Message sent from the import worker to the UI thread.
#[derive(Debug)]
pub enum ImportEvent {
    /// The pipeline reached a checkpoint
    Stage(ImportStage),
    /// The pipeline finished; this is always the last message
    Finished(Result<Vec<Record>, ImportError>),
}

/// Read, decode and convert the file at `path`.
///
/// `report` is called with each checkpoint as it is reached; the pause from
/// `pacing` follows each report. The `Done` checkpoint is left to the caller,
/// which reaches it only after storing the records.
pub fn run_import(
    path: &Path,
    pacing: &PacingSettings,
    report: &mut dyn FnMut(ImportStage),
) -> Result<Vec<Record>, ImportError> {
    report(ImportStage::FileSelected);
    thread::sleep(pacing.step_delay(0));

    let bytes = std::fs::read(path).map_err(|e| error::from_io_error(path.to_path_buf(), e))?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "file read");

    report(ImportStage::FileRead);
    thread::sleep(pacing.step_delay(1));

    let sheet = workbook::decode_first_sheet(&bytes)?;
    tracing::debug!(
        sheet = sheet.name.as_deref().unwrap_or("<text>"),
        rows = sheet.rows.len(),
        columns = sheet.width(),
        "first sheet decoded"
    );

    report(ImportStage::SheetDecoded);
    thread::sleep(pacing.step_delay(2));

    let records = workbook::grid_to_records(&sheet);
    tracing::info!(path = %path.display(), records = records.len(), "import finished");

    Ok(records)
}

/// An import running on a background thread.
pub struct ImportJob {
    receiver: Receiver<ImportEvent>,
    finished: bool,
}

impl ImportJob {
    /// Start importing `path` on a worker thread.
    ///
    /// `notify` is called after every message so the UI can schedule a
    /// repaint.
    pub fn spawn<F>(path: PathBuf, pacing: PacingSettings, notify: F) -> Result<Self, ImportError>
    where
        F: Fn() + Send + 'static,
    {
        let (sender, receiver) = mpsc::channel();

        thread::Builder::new()
            .name("import".to_string())
            .spawn(move || {
                let mut report = |stage: ImportStage| {
                    // The receiver only goes away when the app is closing
                    let _ = sender.send(ImportEvent::Stage(stage));
                    notify();
                };
                let result = run_import(&path, &pacing, &mut report);
                let _ = sender.send(ImportEvent::Finished(result));
                notify();
            })
            .map_err(ImportError::Worker)?;

        Ok(Self {
            receiver,
            finished: false,
        })
    }

    /// Drain every message that has arrived so far, in order.
    ///
    /// If the worker died without sending its result, a failed `Finished`
    /// event is synthesized so the pipeline always terminates.
    pub fn poll(&mut self) -> Vec<ImportEvent> {
        let mut events = Vec::new();
        loop {
            match self.receiver.try_recv() {
                Ok(event) => {
                    if matches!(event, ImportEvent::Finished(_)) {
                        self.finished = true;
                    }
                    events.push(event);
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    if !self.finished {
                        self.finished = true;
                        events.push(ImportEvent::Finished(Err(ImportError::Disconnected)));
                    }
                    break;
                }
            }
        }
        events
    }
}
