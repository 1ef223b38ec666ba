use crate::app::app::{RigsyncApp, Status};
use crate::ui::theme;

use eframe::egui::{self, RichText, Ui};
use egui_phosphor::regular as icons;

impl RigsyncApp {
    pub fn display_panel_top(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            let dirty = self.is_dirty();

            let save_btn = ui.add_enabled(
                dirty,
                egui::Button::new(format!("{} Save", icons::FLOPPY_DISK)),
            );
            if save_btn.clicked() {
                self.save();
            }

            if ui
                .button(format!("{} Reload", icons::ARROW_CLOCKWISE))
                .on_hover_text("Discard changes and read the config file again")
                .clicked()
            {
                self.reload();
            }

            ui.separator();
            ui.label(RichText::new(self.config_path.display().to_string()).color(theme::TEXT_MUTED));
            if dirty {
                ui.label(RichText::new("(modified)").italics());
            }
        });
    }

    pub fn display_panel_status(&mut self, ui: &mut Ui) {
        match &self.status {
            Some(Status::Info(msg)) => {
                ui.label(RichText::new(msg).color(theme::SUCCESS));
            }
            Some(Status::Error(msg)) => {
                ui.label(RichText::new(msg).color(theme::ERROR));
            }
            None => {
                ui.label(RichText::new("Ready").color(theme::TEXT_MUTED));
            }
        }
    }
}
