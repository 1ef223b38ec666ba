//! Transport rig selection section

use crate::app::app::RigsyncApp;
use crate::config::Transport;
use crate::ui::components::dropdown::{render_dropdown, rig_items};

use eframe::egui::{self, Ui};

impl RigsyncApp {
    pub fn display_transports(&mut self, ui: &mut Ui) {
        ui.label("Rig used by each transport for frequency control and PTT.");
        ui.add_space(4.0);

        let mut picked: Option<(Transport, String)> = None;

        egui::Grid::new("transport_rigs")
            .num_columns(2)
            .spacing([12.0, 6.0])
            .show(ui, |ui| {
                for transport in Transport::ALL {
                    let Some(select) = self.page.select(transport) else {
                        continue;
                    };
                    ui.label(transport.label());

                    let items = rig_items(select);
                    let response = render_dropdown(
                        ui,
                        select.id(),
                        select.selected_label(),
                        160.0,
                        &items,
                    );
                    if let Some(value) = response.selected {
                        picked = Some((transport, value));
                    }
                    ui.end_row();
                }
            });

        if let Some((transport, rig)) = picked {
            self.page.select_rig(transport, &rig);
        }
    }
}
