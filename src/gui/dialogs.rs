//! Dialog components for the inventory viewer.
//!
//! The confirm dialog gates the import; the notice dialog shows the warning
//! or error left behind by an import.

use eframe::egui;

use crate::core::config::ColorSettings;
use crate::core::inventory::{Notice, NoticeKind};

/// Title of the confirm dialog.
pub const CONFIRM_TITLE: &str = "Import List";

/// Body of the confirm dialog.
pub const CONFIRM_MESSAGE: &str = "Import the demand list file to start your inventory.";

/// Actions that can be triggered from the confirm dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmAction {
    /// User closed the dialog without importing
    Cancel,
    /// User wants to pick a file
    Proceed,
}

/// State for managing the confirm dialog.
#[derive(Debug, Clone, Default)]
pub struct ConfirmDialogState {
    /// Whether the dialog is currently open
    pub is_open: bool,
}

impl ConfirmDialogState {
    /// Create a new, closed dialog state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the dialog.
    pub fn open(&mut self) {
        self.is_open = true;
    }

    /// Close the dialog and return the action to report.
    pub fn resolve(&mut self, action: ConfirmAction) -> ConfirmAction {
        self.is_open = false;
        action
    }
}

/// Renderer for the confirm dialog.
pub struct ConfirmDialogRenderer<'a> {
    state: &'a mut ConfirmDialogState,
}

impl<'a> ConfirmDialogRenderer<'a> {
    /// Create a new confirm dialog renderer.
    pub fn new(state: &'a mut ConfirmDialogState) -> Self {
        Self { state }
    }

    /// Render the dialog and return the action taken.
    ///
    /// Returns `Some(action)` if the user clicked a button, `None` otherwise.
    pub fn render(&mut self, ctx: &egui::Context) -> Option<ConfirmAction> {
        if !self.state.is_open {
            return None;
        }

        let mut action: Option<ConfirmAction> = None;

        let response = egui::Modal::new(egui::Id::new("confirm_dialog")).show(ctx, |ui| {
            ui.set_width(300.0);
            ui.heading(CONFIRM_TITLE);
            ui.add_space(8.0);
            ui.add(egui::Label::new(CONFIRM_MESSAGE).wrap());
            ui.add_space(12.0);

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Load File").clicked() {
                    action = Some(ConfirmAction::Proceed);
                }
                if ui.button("Cancel").clicked() {
                    action = Some(ConfirmAction::Cancel);
                }
            });
        });

        // Escape or a click on the backdrop counts as Cancel
        if action.is_none() && response.should_close() {
            action = Some(ConfirmAction::Cancel);
        }

        action.map(|a| self.state.resolve(a))
    }
}

/// Renderer for a pending notice.
pub struct NoticeDialogRenderer<'a> {
    notice: &'a Notice,
    colors: &'a ColorSettings,
}

impl<'a> NoticeDialogRenderer<'a> {
    /// Create a new notice dialog renderer.
    pub fn new(notice: &'a Notice, colors: &'a ColorSettings) -> Self {
        Self { notice, colors }
    }

    /// Render the notice. Returns true when the user dismissed it.
    pub fn render(&self, ctx: &egui::Context) -> bool {
        let mut dismissed = false;

        let (icon, color) = match self.notice.kind {
            NoticeKind::Warning => ("⚠", self.colors.warning),
            NoticeKind::Error => ("✖", self.colors.error),
        };

        let response = egui::Modal::new(egui::Id::new("notice_dialog")).show(ctx, |ui| {
            ui.set_width(280.0);
            ui.label(
                egui::RichText::new(format!("{} {}", icon, self.notice.title))
                    .size(16.0)
                    .strong()
                    .color(ColorSettings::to_color32(color)),
            );
            ui.add_space(8.0);
            ui.label(self.notice.message);
            ui.add_space(12.0);

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("OK").clicked() {
                    dismissed = true;
                }
            });
        });

        dismissed || response.should_close()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confirm_dialog_state_new() {
        let state = ConfirmDialogState::new();
        assert!(!state.is_open);
    }

    #[test]
    fn test_confirm_dialog_open_and_resolve() {
        let mut state = ConfirmDialogState::new();
        state.open();
        assert!(state.is_open);

        assert_eq!(state.resolve(ConfirmAction::Proceed), ConfirmAction::Proceed);
        assert!(!state.is_open);
    }

    #[test]
    fn test_confirm_dialog_cancel_closes() {
        let mut state = ConfirmDialogState::new();
        state.open();

        assert_eq!(state.resolve(ConfirmAction::Cancel), ConfirmAction::Cancel);
        assert!(!state.is_open);
    }
}
