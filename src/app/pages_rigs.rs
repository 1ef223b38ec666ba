//! Hamlib rigs section
//!
//! One editable row per rig. Any name change, add or remove resyncs the
//! transport selectors before the next frame reads them.

use crate::app::app::RigsyncApp;
use crate::ui::theme;

use eframe::egui::{self, RichText, Ui};
use egui_phosphor::regular as icons;

const RIG_NETWORKS: &[&str] = &["tcp", "serial"];

impl RigsyncApp {
    pub fn display_rigs(&mut self, ui: &mut Ui) {
        ui.label("Rigs controlled through hamlib (rigctld or a local serial port).");
        ui.add_space(4.0);

        let mut rename: Option<(usize, String)> = None;
        let mut remove_idx = None;

        if self.page.rows.is_empty() {
            ui.label(RichText::new("No rigs configured yet.").color(theme::TEXT_MUTED));
        } else {
            egui::Grid::new("rig_rows")
                .num_columns(5)
                .spacing([8.0, 4.0])
                .show(ui, |ui| {
                    ui.label(RichText::new("Name").strong());
                    ui.label(RichText::new("Network").strong());
                    ui.label(RichText::new("Address").strong());
                    ui.label(RichText::new("VFO").strong());
                    ui.label("");
                    ui.end_row();

                    for (i, row) in self.page.rows.iter_mut().enumerate() {
                        // Name edits go through rename_rig so the selectors resync
                        let mut name = row.name.clone();
                        let edit = ui.add(
                            egui::TextEdit::singleline(&mut name)
                                .desired_width(120.0)
                                .hint_text("rig name"),
                        );
                        if edit.changed() {
                            rename = Some((i, name));
                        }

                        egui::ComboBox::from_id_salt(format!("rig_network_{i}"))
                            .selected_text(row.network.as_str())
                            .width(80.0)
                            .show_ui(ui, |ui| {
                                for network in RIG_NETWORKS {
                                    ui.selectable_value(
                                        &mut row.network,
                                        network.to_string(),
                                        *network,
                                    );
                                }
                            });

                        ui.add(
                            egui::TextEdit::singleline(&mut row.address)
                                .desired_width(160.0)
                                .hint_text("localhost:4532"),
                        );
                        ui.add(
                            egui::TextEdit::singleline(&mut row.vfo)
                                .desired_width(60.0)
                                .hint_text("VFOA"),
                        );

                        if ui.button(icons::TRASH).on_hover_text("Remove rig").clicked() {
                            remove_idx = Some(i);
                        }
                        ui.end_row();
                    }
                });
        }

        if let Some(i) = remove_idx {
            self.page.remove_rig(i);
        } else if let Some((i, name)) = rename {
            self.page.rename_rig(i, &name);
        }

        ui.add_space(4.0);
        if ui.button(format!("{} Add rig", icons::PLUS)).clicked() {
            self.page.add_rig();
        }
    }
}
