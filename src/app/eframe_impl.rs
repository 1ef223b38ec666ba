//! eframe::App implementation for rigsync

use crate::app::app::RigsyncApp;

use eframe::egui;

impl eframe::App for RigsyncApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("top_bar")
            .frame(egui::Frame::NONE.inner_margin(egui::Margin::symmetric(8, 6)))
            .show(ctx, |ui| {
                self.display_panel_top(ui);
            });

        egui::TopBottomPanel::bottom("status_bar")
            .frame(egui::Frame::NONE.inner_margin(egui::Margin::symmetric(8, 4)))
            .show(ctx, |ui| {
                self.display_panel_status(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                egui::CollapsingHeader::new("Hamlib rigs")
                    .default_open(true)
                    .show(ui, |ui| self.display_rigs(ui));

                ui.add_space(8.0);

                egui::CollapsingHeader::new("Transports")
                    .default_open(true)
                    .show(ui, |ui| self.display_transports(ui));
            });
        });
    }
}
