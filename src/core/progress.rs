//! Import progress checkpoints.
//!
//! The pipeline reports a fixed sequence of stages instead of a free-form
//! percentage. Each stage maps to one checkpoint of the loading bar.

/// Pipeline stage, doubling as the loading bar position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum ImportStage {
    /// Nothing in flight; the overlay is hidden
    #[default]
    Idle,
    /// User confirmed; the file picker is about to open
    Started,
    /// A file was chosen and is being read
    FileSelected,
    /// The file is in memory and being decoded
    FileRead,
    /// The first sheet is decoded and being turned into records
    SheetDecoded,
    /// Records are in place; the full bar flashes before resetting
    Done,
}

impl ImportStage {
    /// Loading bar position in `[0, 1]`.
    pub fn fraction(self) -> f32 {
        match self {
            ImportStage::Idle => 0.0,
            ImportStage::Started => 0.1,
            ImportStage::FileSelected => 0.3,
            ImportStage::FileRead => 0.6,
            ImportStage::SheetDecoded => 0.8,
            ImportStage::Done => 1.0,
        }
    }

    /// Loading bar position as a rounded percentage.
    pub fn percent(self) -> u8 {
        (self.fraction() * 100.0).round() as u8
    }

    /// Returns true while the loading overlay should be shown.
    pub fn is_active(self) -> bool {
        self != ImportStage::Idle
    }
}
