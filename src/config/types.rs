use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Transports that can be bound to a hamlib rig
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Transport {
    Ardop,
    Pactor,
    VaraHf,
    VaraFm,
    Ax25,
}

impl Transport {
    pub const ALL: [Transport; 5] = [
        Transport::Ardop,
        Transport::Pactor,
        Transport::VaraHf,
        Transport::VaraFm,
        Transport::Ax25,
    ];

    /// Section name in config.json
    pub fn key(&self) -> &'static str {
        match self {
            Transport::Ardop => "ardop",
            Transport::Pactor => "pactor",
            Transport::VaraHf => "varahf",
            Transport::VaraFm => "varafm",
            Transport::Ax25 => "ax25",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Transport::Ardop => "ARDOP",
            Transport::Pactor => "PACTOR",
            Transport::VaraHf => "VARA HF",
            Transport::VaraFm => "VARA FM",
            Transport::Ax25 => "AX.25",
        }
    }

    /// Id of the rig selector for this transport
    pub fn widget_id(&self) -> &'static str {
        match self {
            Transport::Ardop => "ardop_rig",
            Transport::Pactor => "pactor_rig",
            Transport::VaraHf => "vara_hf_rig",
            Transport::VaraFm => "vara_fm_rig",
            Transport::Ax25 => "ax25_rig",
        }
    }
}

/// A hamlib rig definition, keyed by its name in `hamlib_rigs`
///
/// Network and address are stored as typed; they are not validated.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct HamlibRig {
    /// "tcp" for rigctld, "serial" for a local device
    #[serde(default)]
    pub network: String,
    /// e.g. "localhost:4532" or "/dev/ttyUSB0"
    #[serde(default)]
    pub address: String,
    #[serde(rename = "VFO", default, skip_serializing_if = "String::is_empty")]
    pub vfo: String,
    /// Fields this editor does not know about, written back unchanged
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The part of a transport section this editor manages
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TransportConfig {
    /// Name of the hamlib rig, empty for none
    #[serde(default)]
    pub rig: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Radio section of config.json
///
/// Every other top-level key is kept in `extra` so saving never drops
/// settings owned by other pages.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RigsyncConfig {
    /// Rigs by name. Key order is the row order on the rigs page.
    #[serde(default)]
    pub hamlib_rigs: BTreeMap<String, HamlibRig>,
    #[serde(default)]
    pub ardop: TransportConfig,
    #[serde(default)]
    pub pactor: TransportConfig,
    #[serde(default)]
    pub varahf: TransportConfig,
    #[serde(default)]
    pub varafm: TransportConfig,
    #[serde(default)]
    pub ax25: TransportConfig,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RigsyncConfig {
    pub fn transport(&self, transport: Transport) -> &TransportConfig {
        match transport {
            Transport::Ardop => &self.ardop,
            Transport::Pactor => &self.pactor,
            Transport::VaraHf => &self.varahf,
            Transport::VaraFm => &self.varafm,
            Transport::Ax25 => &self.ax25,
        }
    }

    pub fn transport_mut(&mut self, transport: Transport) -> &mut TransportConfig {
        match transport {
            Transport::Ardop => &mut self.ardop,
            Transport::Pactor => &mut self.pactor,
            Transport::VaraHf => &mut self.varahf,
            Transport::VaraFm => &mut self.varafm,
            Transport::Ax25 => &mut self.ax25,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_keys_match_config_sections() {
        let cfg = RigsyncConfig::default();
        let json = serde_json::to_value(&cfg).unwrap();
        for transport in Transport::ALL {
            assert!(json.get(transport.key()).is_some(), "{}", transport.key());
        }
    }

    #[test]
    fn test_parse_keeps_unknown_fields() {
        let json = r#"{
            "mycall": "N0CALL",
            "hamlib_rigs": {
                "digirig": {"network": "tcp", "address": "localhost:4532", "VFO": "VFOA", "baud": 9600}
            },
            "ardop": {"rig": "digirig", "ptt_ctrl": true, "addr": "localhost:8515"}
        }"#;
        let cfg: RigsyncConfig = serde_json::from_str(json).unwrap();

        assert_eq!(cfg.extra.get("mycall"), Some(&Value::from("N0CALL")));
        let rig = &cfg.hamlib_rigs["digirig"];
        assert_eq!(rig.vfo, "VFOA");
        assert_eq!(rig.extra.get("baud"), Some(&Value::from(9600)));
        assert_eq!(cfg.ardop.rig, "digirig");
        assert_eq!(cfg.ardop.extra.get("ptt_ctrl"), Some(&Value::Bool(true)));
        assert_eq!(cfg.transport(Transport::Pactor).rig, "");
    }

    #[test]
    fn test_rigs_serialize_in_name_order() {
        let mut cfg = RigsyncConfig::default();
        cfg.hamlib_rigs.insert("ic7300".into(), HamlibRig::default());
        cfg.hamlib_rigs.insert("digirig".into(), HamlibRig::default());

        let names: Vec<&String> = cfg.hamlib_rigs.keys().collect();
        assert_eq!(names, vec!["digirig", "ic7300"]);
    }
}
