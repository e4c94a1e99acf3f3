//! Loading overlay shown while an import is in flight.

use eframe::egui::{self, Align2, Color32, FontId, Pos2, Rect, Vec2};

use crate::core::config::ColorSettings;
use crate::core::progress::ImportStage;

/// Share of the window width taken by the loading box.
const BOX_WIDTH_RATIO: f32 = 0.8;

/// Height of the loading box.
const BOX_HEIGHT: f32 = 80.0;

/// Height of the progress bar track.
const TRACK_HEIGHT: f32 = 10.0;

/// Text shown above the bar, e.g. `Loading... 30%`.
pub fn loading_text(stage: ImportStage) -> String {
    format!("Loading... {}%", stage.percent())
}

/// Width of the bar fill for a given track width.
pub fn fill_width(track_width: f32, stage: ImportStage) -> f32 {
    track_width * stage.fraction().clamp(0.0, 1.0)
}

/// Renders the dimmed overlay with the loading box on top of everything.
pub struct LoadingOverlay<'a> {
    stage: ImportStage,
    colors: &'a ColorSettings,
}

impl<'a> LoadingOverlay<'a> {
    /// Create a new overlay for the given stage.
    pub fn new(stage: ImportStage, colors: &'a ColorSettings) -> Self {
        Self { stage, colors }
    }

    /// Paint the overlay. Does nothing when no import is in flight.
    pub fn render(&self, ctx: &egui::Context) {
        if !self.stage.is_active() {
            return;
        }

        let screen_rect = ctx.input(|i| i.viewport_rect());
        let painter = ctx.layer_painter(egui::LayerId::new(
            egui::Order::Foreground,
            egui::Id::new("loading_overlay"),
        ));

        painter.rect_filled(screen_rect, 0.0, Color32::from_black_alpha(128));

        let box_rect = Rect::from_center_size(
            screen_rect.center(),
            Vec2::new(screen_rect.width() * BOX_WIDTH_RATIO, BOX_HEIGHT),
        );
        painter.rect_filled(box_rect, 10.0, ColorSettings::to_color32(self.colors.card));

        let content = box_rect.shrink(20.0);
        painter.text(
            Pos2::new(content.center().x, content.top()),
            Align2::CENTER_TOP,
            loading_text(self.stage),
            FontId::proportional(16.0),
            ColorSettings::to_color32(self.colors.text),
        );

        let track = Rect::from_min_size(
            Pos2::new(content.left(), content.bottom() - TRACK_HEIGHT),
            Vec2::new(content.width(), TRACK_HEIGHT),
        );
        painter.rect_filled(
            track,
            TRACK_HEIGHT / 2.0,
            ColorSettings::to_color32(self.colors.progress_track),
        );

        let fill = Rect::from_min_size(
            track.min,
            Vec2::new(fill_width(track.width(), self.stage), TRACK_HEIGHT),
        );
        painter.rect_filled(
            fill,
            TRACK_HEIGHT / 2.0,
            ColorSettings::to_color32(self.colors.accent),
        );
    }
}
