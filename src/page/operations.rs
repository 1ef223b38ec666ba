//! Row edits on the radio config page
//!
//! Every edit that can change the rig names ends with a selector sync.

use crate::config::Transport;
use crate::page::types::{RigPage, RigRow};
use crate::rig_select::{reconcile, SelectorWidget};

impl RigPage {
    /// Rebuild all transport selectors from the current rows
    pub fn sync_rig_selects(&mut self) {
        reconcile(&self.rows, self.selects.iter_mut().map(|ts| &mut ts.select));
    }

    /// Append a blank rig row, returning its index
    pub fn add_rig(&mut self) -> usize {
        self.rows.push(RigRow::blank());
        self.sync_rig_selects();
        self.rows.len() - 1
    }

    /// Remove the row at `index`
    pub fn remove_rig(&mut self, index: usize) -> Option<RigRow> {
        if index >= self.rows.len() {
            return None;
        }
        let removed = self.rows.remove(index);
        tracing::debug!(name = %removed.name, index, "removed rig row");
        self.sync_rig_selects();
        Some(removed)
    }

    /// Change the name of the row at `index`
    ///
    /// Returns false if there is no such row.
    pub fn rename_rig(&mut self, index: usize, name: &str) -> bool {
        let Some(row) = self.rows.get_mut(index) else {
            return false;
        };
        row.name = name.to_string();
        self.sync_rig_selects();
        true
    }

    /// Point `transport` at the rig called `name` ("" for none)
    ///
    /// Ignored when `name` is not one of the selector's options.
    pub fn select_rig(&mut self, transport: Transport, name: &str) {
        if let Some(select) = self.select_mut(transport) {
            select.set_selection(name);
        }
    }
}
