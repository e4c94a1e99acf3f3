//! Configuration and settings module.
//!
//! Settings are read once at startup from `config.json` in the user's config
//! directory. Missing or malformed files fall back to defaults; the app never
//! writes the file.

use eframe::egui::Color32;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Settings filename inside the app's config directory.
const SETTINGS_FILENAME: &str = "config.json";

/// Directory name under the platform config directory.
const APP_DIR_NAME: &str = "inventory-viewer";

/// Color settings for the application UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorSettings {
    /// Window background
    pub background: [u8; 3],
    /// Header panel background
    pub header_background: [u8; 3],
    /// Import button fill
    pub button: [u8; 3],
    /// Import button text
    pub button_text: [u8; 3],
    /// Card fill
    pub card: [u8; 3],
    /// Accent for the asset tag and the loading bar fill
    pub accent: [u8; 3],
    /// Money values
    pub money: [u8; 3],
    /// Primary text
    pub text: [u8; 3],
    /// Field labels
    pub label: [u8; 3],
    /// Card index and placeholder text
    pub text_dim: [u8; 3],
    /// Status chip fill
    pub status_background: [u8; 3],
    /// Status chip text
    pub status_text: [u8; 3],
    /// Loading bar track
    pub progress_track: [u8; 3],
    /// Warning notice title
    pub warning: [u8; 3],
    /// Error notice title
    pub error: [u8; 3],
}

impl Default for ColorSettings {
    fn default() -> Self {
        Self {
            background: [245, 245, 245],
            header_background: [255, 255, 255],
            button: [58, 111, 120], // Teal
            button_text: [255, 255, 255],
            card: [255, 255, 255],
            accent: [0, 122, 255], // Blue
            money: [39, 174, 96],  // Green
            text: [51, 51, 51],
            label: [102, 102, 102],
            text_dim: [153, 153, 153],
            status_background: [238, 238, 238],
            status_text: [85, 85, 85],
            progress_track: [224, 224, 224],
            warning: [230, 126, 34], // Orange
            error: [244, 67, 54],    // Red
        }
    }
}

impl ColorSettings {
    /// Convert a color array to egui Color32.
    #[inline]
    pub fn to_color32(color: [u8; 3]) -> Color32 {
        Color32::from_rgb(color[0], color[1], color[2])
    }
}

/// Pauses between pipeline stages so the loading bar visibly advances.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PacingSettings {
    /// Pause after each of the file-selected, file-read and sheet-decoded
    /// checkpoints, in milliseconds
    pub step_delays_ms: [u64; 3],
    /// How long the full bar stays up before the overlay hides, in milliseconds
    pub done_flash_ms: u64,
}

impl Default for PacingSettings {
    fn default() -> Self {
        Self {
            step_delays_ms: [100, 100, 50],
            done_flash_ms: 500,
        }
    }
}

impl PacingSettings {
    /// No pauses at all.
    #[cfg(test)]
    pub fn immediate() -> Self {
        Self {
            step_delays_ms: [0; 3],
            done_flash_ms: 0,
        }
    }

    /// Pause after the given checkpoint (0 = file selected, 1 = file read,
    /// 2 = sheet decoded).
    pub fn step_delay(&self, step: usize) -> Duration {
        Duration::from_millis(self.step_delays_ms.get(step).copied().unwrap_or(0))
    }

    /// Duration of the completed-bar flash.
    pub fn done_flash(&self) -> Duration {
        Duration::from_millis(self.done_flash_ms)
    }
}

/// Application settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    /// Color customization settings.
    #[serde(default)]
    pub colors: ColorSettings,

    /// Import pacing.
    #[serde(default)]
    pub pacing: PacingSettings,

    /// Initial window size (width, height).
    #[serde(default)]
    pub window_size: Option<(f32, f32)>,
}

impl AppSettings {
    /// Default window size, shaped like a phone screen.
    pub const DEFAULT_WINDOW_SIZE: (f32, f32) = (420.0, 760.0);

    /// Get the settings file path in the user's config directory.
    pub fn settings_path() -> Option<PathBuf> {
        dirs::config_dir().map(|mut path| {
            path.push(APP_DIR_NAME);
            path.push(SETTINGS_FILENAME);
            path
        })
    }

    /// Load settings from the user's config directory, returning defaults if
    /// loading fails.
    pub fn load() -> Self {
        match Self::settings_path() {
            Some(path) => Self::load_from(&path),
            None => {
                tracing::debug!("no config directory on this platform, using defaults");
                Self::default()
            }
        }
    }

    /// Load settings from a specific file, returning defaults if loading fails.
    pub fn load_from(path: &Path) -> Self {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "settings not read, using defaults");
                return Self::default();
            }
        };

        match serde_json::from_str(&content) {
            Ok(settings) => {
                tracing::info!(path = %path.display(), "loaded settings");
                settings
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "invalid settings file, using defaults");
                Self::default()
            }
        }
    }

    /// Window size to open with.
    pub fn window_size(&self) -> [f32; 2] {
        let (width, height) = self.window_size.unwrap_or(Self::DEFAULT_WINDOW_SIZE);
        [width.max(320.0), height.max(480.0)]
    }
}
