//! Radio config page type definitions

use crate::config::{HamlibRig, Transport};
use crate::rig_select::{NameRow, RigSelect};

/// Network used for newly added rigs
pub const DEFAULT_RIG_NETWORK: &str = "tcp";

/// One editable row of the hamlib rigs list
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RigRow {
    /// Rig name, empty while the row is being filled in
    pub name: String,
    pub network: String,
    pub address: String,
    pub vfo: String,
    /// Unknown fields from the loaded config, written back on save
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl RigRow {
    /// Blank row as created by "Add rig"
    pub fn blank() -> Self {
        Self {
            network: DEFAULT_RIG_NETWORK.to_string(),
            ..Default::default()
        }
    }

    pub fn from_config(name: &str, rig: &HamlibRig) -> Self {
        Self {
            name: name.to_string(),
            network: rig.network.clone(),
            address: rig.address.clone(),
            vfo: rig.vfo.clone(),
            extra: rig.extra.clone(),
        }
    }

    pub fn to_config(&self) -> HamlibRig {
        HamlibRig {
            network: self.network.clone(),
            address: self.address.clone(),
            vfo: self.vfo.clone(),
            extra: self.extra.clone(),
        }
    }
}

impl NameRow for RigRow {
    fn name(&self) -> &str {
        &self.name
    }
}

/// Rig selector bound to a transport
#[derive(Clone, Debug)]
pub struct TransportSelect {
    pub transport: Transport,
    pub select: RigSelect,
}

/// State of the radio config page
#[derive(Clone, Debug)]
pub struct RigPage {
    pub rows: Vec<RigRow>,
    /// Created once, one per transport, in `Transport::ALL` order
    pub selects: Vec<TransportSelect>,
}

impl Default for RigPage {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            selects: Transport::ALL
                .iter()
                .map(|&transport| TransportSelect {
                    transport,
                    select: RigSelect::new(transport.widget_id()),
                })
                .collect(),
        }
    }
}

impl RigPage {
    pub fn select(&self, transport: Transport) -> Option<&RigSelect> {
        self.selects
            .iter()
            .find(|ts| ts.transport == transport)
            .map(|ts| &ts.select)
    }

    pub fn select_mut(&mut self, transport: Transport) -> Option<&mut RigSelect> {
        self.selects
            .iter_mut()
            .find(|ts| ts.transport == transport)
            .map(|ts| &mut ts.select)
    }
}
