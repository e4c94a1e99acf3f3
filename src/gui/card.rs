//! Inventory card rendering.
//!
//! Each record is drawn as a fixed-height card so the list can be windowed:
//! only the cards in view are laid out and painted.

use eframe::egui::{self, Align2, FontId, Painter, Pos2, Rect, Vec2};

use crate::core::cell::CellValue;
use crate::core::config::ColorSettings;
use crate::core::record::{InventoryItem, Record};

/// Height of one card in pixels, without spacing.
pub const CARD_HEIGHT: f32 = 150.0;

/// Vertical gap between cards.
pub const CARD_SPACING: f32 = 12.0;

/// Inner padding of a card.
const CARD_PADDING: f32 = 15.0;

/// Corner radius of a card.
const CARD_ROUNDING: f32 = 10.0;

/// Text shown for each part of one card.
#[derive(Debug, Clone, PartialEq)]
pub struct CardView {
    /// One-based position, e.g. `#1`
    pub index: String,
    /// Asset tag line, e.g. `Tomb: 12`
    pub tombamento: String,
    pub denominacao: String,
    pub grupo: String,
    /// Money line, e.g. `R$ 150`
    pub valor: String,
    /// Condition chip text; empty hides the chip
    pub estado: String,
}

impl CardView {
    /// Build the card text for the record at zero-based `index`.
    pub fn new(index: usize, record: &Record) -> Self {
        let item = InventoryItem::from_record(record);
        let text_or = |value: &Option<CellValue>, fallback: &str| {
            value
                .as_ref()
                .map(CellValue::to_string)
                .unwrap_or_else(|| fallback.to_string())
        };

        Self {
            index: format!("#{}", index + 1),
            tombamento: format!("Tomb: {}", text_or(&item.tombamento, "N/A")),
            denominacao: text_or(&item.denominacao, "-"),
            grupo: text_or(&item.grupo, "-"),
            valor: item
                .valor
                .as_ref()
                .map(|v| format!("R$ {}", v))
                .unwrap_or_else(|| "-".to_string()),
            estado: text_or(&item.estado, ""),
        }
    }
}

/// Paints cards with the configured colors.
pub struct CardRenderer<'a> {
    colors: &'a ColorSettings,
}

impl<'a> CardRenderer<'a> {
    /// Create a new card renderer.
    pub fn new(colors: &'a ColorSettings) -> Self {
        Self { colors }
    }

    /// Allocate a full-width card and paint `card` into it.
    pub fn render(&self, ui: &mut egui::Ui, card: &CardView) {
        let width = ui.available_width();
        let (rect, _response) =
            ui.allocate_exact_size(Vec2::new(width, CARD_HEIGHT), egui::Sense::hover());

        if !ui.is_rect_visible(rect) {
            return;
        }

        let painter = ui.painter_at(rect);
        self.draw_background(&painter, rect);

        let content = rect.shrink(CARD_PADDING);
        let mut y = content.top();

        // Header row: index on the left, asset tag on the right
        self.text(
            &painter,
            Pos2::new(content.left(), y),
            Align2::LEFT_TOP,
            &card.index,
            12.0,
            self.colors.text_dim,
        );
        self.text(
            &painter,
            Pos2::new(content.right(), y),
            Align2::RIGHT_TOP,
            &card.tombamento,
            14.0,
            self.colors.accent,
        );
        y += 24.0;

        self.label(&painter, Pos2::new(content.left(), y), "Denomination:");
        y += 13.0;
        self.text(
            &painter,
            Pos2::new(content.left(), y),
            Align2::LEFT_TOP,
            &card.denominacao,
            14.0,
            self.colors.text,
        );
        y += 23.0;

        // Two columns: group and value
        let half = content.left() + content.width() / 2.0;
        self.label(&painter, Pos2::new(content.left(), y), "Group:");
        self.label(&painter, Pos2::new(half, y), "Value:");
        y += 13.0;
        self.text(
            &painter,
            Pos2::new(content.left(), y),
            Align2::LEFT_TOP,
            &card.grupo,
            14.0,
            self.colors.text,
        );
        self.text(
            &painter,
            Pos2::new(half, y),
            Align2::LEFT_TOP,
            &card.valor,
            14.0,
            self.colors.money,
        );
        y += 28.0;

        if !card.estado.is_empty() {
            self.draw_status_chip(&painter, Pos2::new(content.left(), y), &card.estado);
        }
    }

    /// Draw the card fill with a soft shadow.
    fn draw_background(&self, painter: &Painter, rect: Rect) {
        let shadow = rect.translate(Vec2::new(0.0, 2.0));
        painter.rect_filled(shadow, CARD_ROUNDING, egui::Color32::from_black_alpha(20));
        painter.rect_filled(
            rect.shrink2(Vec2::new(0.0, 1.0)),
            CARD_ROUNDING,
            ColorSettings::to_color32(self.colors.card),
        );
    }

    /// Draw a small uppercase field label.
    fn label(&self, painter: &Painter, pos: Pos2, text: &str) {
        self.text(
            painter,
            pos,
            Align2::LEFT_TOP,
            &text.to_uppercase(),
            10.0,
            self.colors.label,
        );
    }

    /// Draw the condition chip.
    fn draw_status_chip(&self, painter: &Painter, pos: Pos2, text: &str) {
        let galley = painter.layout_no_wrap(
            text.to_string(),
            FontId::proportional(10.0),
            ColorSettings::to_color32(self.colors.status_text),
        );
        let chip = Rect::from_min_size(pos, galley.size() + Vec2::new(16.0, 4.0));
        painter.rect_filled(
            chip,
            4.0,
            ColorSettings::to_color32(self.colors.status_background),
        );
        painter.galley(pos + Vec2::new(8.0, 2.0), galley, egui::Color32::PLACEHOLDER);
    }

    fn text(
        &self,
        painter: &Painter,
        pos: Pos2,
        anchor: Align2,
        text: &str,
        size: f32,
        color: [u8; 3],
    ) {
        painter.text(
            pos,
            anchor,
            text,
            FontId::proportional(size),
            ColorSettings::to_color32(color),
        );
    }
}
