//! Main application state and GUI logic.
//!
//! This module defines the main application struct and implements the
//! eframe::App trait. Rendering reads `InventoryState`; user actions and
//! worker messages are the only things that change it.

use eframe::egui;
use std::time::Instant;

use crate::core::config::{AppSettings, ColorSettings};
use crate::core::import::{DocumentPicker, ImportEvent, ImportJob, NativePicker};
use crate::core::inventory::InventoryState;

use super::card::{CARD_HEIGHT, CARD_SPACING, CardRenderer, CardView};
use super::dialogs::{ConfirmAction, ConfirmDialogRenderer, ConfirmDialogState, NoticeDialogRenderer};
use super::loading::LoadingOverlay;

/// Placeholder shown when there is nothing to list.
const PLACEHOLDER_TEXT: &str = "Select a spreadsheet to get started";

/// Main application state and GUI logic.
pub struct InventoryViewerApp {
    /// Records, import stage and pending notice
    state: InventoryState,
    /// Settings loaded at startup
    settings: AppSettings,
    /// Import confirmation dialog
    confirm: ConfirmDialogState,
    /// The picker opens on the frame after confirmation, once the first
    /// checkpoint has been painted
    pick_pending: bool,
    /// Import running in the background
    job: Option<ImportJob>,
    /// Where files come from
    picker: Box<dyn DocumentPicker>,
}

impl InventoryViewerApp {
    /// Create a new application instance.
    pub fn new(cc: &eframe::CreationContext<'_>, settings: AppSettings) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::light());

        Self {
            state: InventoryState::new(settings.pacing.done_flash()),
            settings,
            confirm: ConfirmDialogState::new(),
            pick_pending: false,
            job: None,
            picker: Box::new(NativePicker),
        }
    }

    /// Handle the user's answer to the confirm dialog.
    fn handle_confirm_action(&mut self, action: ConfirmAction, ctx: &egui::Context) {
        match action {
            ConfirmAction::Cancel => {}
            ConfirmAction::Proceed => {
                if self.state.begin() {
                    self.pick_pending = true;
                    ctx.request_repaint();
                }
            }
        }
    }

    /// Open the file picker and start the background import.
    fn open_picker(&mut self, ctx: &egui::Context) {
        self.pick_pending = false;

        let Some(path) = self.state.pick(self.picker.as_ref()) else {
            return;
        };

        let repaint_ctx = ctx.clone();
        match ImportJob::spawn(path, self.settings.pacing.clone(), move || {
            repaint_ctx.request_repaint();
        }) {
            Ok(job) => self.job = Some(job),
            Err(e) => self.state.fail(e),
        }
    }

    /// Apply everything the worker has reported since the last frame.
    fn poll_job(&mut self, now: Instant) {
        let Some(job) = self.job.as_mut() else {
            return;
        };

        let mut finished = false;
        for event in job.poll() {
            finished |= matches!(event, ImportEvent::Finished(_));
            self.state.apply(event, now);
        }

        if finished {
            self.job = None;
        }
    }
}

impl eframe::App for InventoryViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.pick_pending {
            self.open_picker(ctx);
        }

        let now = Instant::now();
        self.poll_job(now);
        if let Some(remaining) = self.state.tick(now) {
            ctx.request_repaint_after(remaining);
        }

        self.render_header(ctx);
        self.render_list(ctx);
        self.render_dialogs(ctx);

        LoadingOverlay::new(self.state.stage(), &self.settings.colors).render(ctx);
    }
}

impl InventoryViewerApp {
    /// Render the header with the title and the import button.
    fn render_header(&mut self, ctx: &egui::Context) {
        let colors = &self.settings.colors;
        let can_import = self.state.can_import() && !self.confirm.is_open;
        let label = if self.state.records().is_empty() {
            "IMPORT LIST"
        } else {
            "REPLACE FILE"
        };

        let mut clicked = false;
        egui::TopBottomPanel::top("header")
            .frame(
                egui::Frame::new()
                    .fill(ColorSettings::to_color32(colors.header_background))
                    .inner_margin(20.0),
            )
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(
                        egui::RichText::new("Inventory")
                            .size(24.0)
                            .strong()
                            .color(ColorSettings::to_color32(colors.text)),
                    );
                });
                ui.add_space(10.0);

                let button = egui::Button::new(
                    egui::RichText::new(label)
                        .size(16.0)
                        .strong()
                        .color(ColorSettings::to_color32(colors.button_text)),
                )
                .fill(ColorSettings::to_color32(colors.button))
                .corner_radius(0.0)
                .min_size(egui::vec2(ui.available_width(), 44.0));

                if ui.add_enabled(can_import, button).clicked() {
                    clicked = true;
                }
            });

        if clicked {
            self.confirm.open();
        }
    }

    /// Render the card list, or the placeholder when it is empty.
    fn render_list(&self, ctx: &egui::Context) {
        let colors = &self.settings.colors;
        let records = self.state.records();

        egui::CentralPanel::default()
            .frame(
                egui::Frame::new()
                    .fill(ColorSettings::to_color32(colors.background))
                    .inner_margin(15.0),
            )
            .show(ctx, |ui| {
                if records.is_empty() {
                    ui.centered_and_justified(|ui| {
                        ui.label(
                            egui::RichText::new(PLACEHOLDER_TEXT)
                                .size(16.0)
                                .color(ColorSettings::to_color32(colors.text_dim)),
                        );
                    });
                    return;
                }

                let renderer = CardRenderer::new(colors);
                ui.spacing_mut().item_spacing.y = CARD_SPACING;
                egui::ScrollArea::vertical()
                    .auto_shrink([false; 2])
                    .show_rows(ui, CARD_HEIGHT, records.len(), |ui, row_range| {
                        for index in row_range {
                            let card = CardView::new(index, &records[index]);
                            renderer.render(ui, &card);
                        }
                    });
            });
    }

    /// Render the confirm dialog and any pending notice.
    fn render_dialogs(&mut self, ctx: &egui::Context) {
        if let Some(action) = ConfirmDialogRenderer::new(&mut self.confirm).render(ctx) {
            self.handle_confirm_action(action, ctx);
        }

        if let Some(notice) = self.state.notice().cloned() {
            let dismissed = NoticeDialogRenderer::new(&notice, &self.settings.colors).render(ctx);
            if dismissed {
                self.state.dismiss_notice();
            }
        }
    }
}
