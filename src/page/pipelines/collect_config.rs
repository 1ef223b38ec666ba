//! Config save pipeline

use crate::config::RigsyncConfig;
use crate::page::types::RigPage;
use crate::rig_select::SelectorWidget;

use std::collections::BTreeMap;

/// Merge the page state into `base`, ready to save
///
/// Unnamed rows are left out. When two rows share a name the later one
/// wins, since `hamlib_rigs` is keyed by name. Everything in `base` that
/// the page does not edit is kept, including what the page cannot show:
/// an entry of `hamlib_rigs` keyed `""`, and a transport rig missing from
/// `base.hamlib_rigs` while its selector is still at None.
pub fn collect_config(page: &RigPage, base: &RigsyncConfig) -> RigsyncConfig {
    let mut config = base.clone();

    let mut rigs = BTreeMap::new();
    if let Some(unnamed) = base.hamlib_rigs.get("") {
        rigs.insert(String::new(), unnamed.clone());
    }
    for row in page.rows.iter().filter(|row| !row.name.is_empty()) {
        if rigs.insert(row.name.clone(), row.to_config()).is_some() {
            tracing::warn!(name = %row.name, "duplicate rig name, keeping the last row");
        }
    }
    config.hamlib_rigs = rigs;

    for ts in &page.selects {
        let selection = ts.select.selection();
        let configured = base.transport(ts.transport).rig.as_str();
        // Never shown by the selector, so the user cannot have cleared it
        let unresolved = selection.is_empty()
            && !configured.is_empty()
            && !base.hamlib_rigs.contains_key(configured);

        if !unresolved {
            config.transport_mut(ts.transport).rig = selection.to_string();
        }
    }

    config
}
