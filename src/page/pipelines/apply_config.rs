//! Config load pipeline

use crate::config::{RigsyncConfig, Transport};
use crate::page::types::{RigPage, RigRow};
use crate::rig_select::SelectorWidget;

/// Build the page from a loaded config
///
/// The order matters: rows first, then the selector sync, then the
/// transport selections. A selection set before the sync would refer to
/// an option that does not exist yet and be dropped.
pub fn apply_config(config: &RigsyncConfig) -> RigPage {
    let mut page = RigPage::default();

    // Step 1: rig rows, in hamlib_rigs order. An empty key is not a rig name.
    if config.hamlib_rigs.contains_key("") {
        tracing::warn!("hamlib_rigs has an entry with an empty name, leaving it as is");
    }
    page.rows = config
        .hamlib_rigs
        .iter()
        .filter(|(name, _)| !name.is_empty())
        .map(|(name, rig)| RigRow::from_config(name, rig))
        .collect();

    // Step 2: selector options
    page.sync_rig_selects();

    // Step 3: transport selections
    for transport in Transport::ALL {
        let wanted = config.transport(transport).rig.as_str();
        let Some(select) = page.select_mut(transport) else {
            continue;
        };
        select.set_selection(wanted);
        if select.selection() != wanted {
            tracing::warn!(
                transport = transport.key(),
                rig = wanted,
                "configured rig is not defined in hamlib_rigs, using None"
            );
        }
    }

    tracing::debug!(rows = page.rows.len(), "applied config to rig page");
    page
}
