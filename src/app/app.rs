// Core app structure: config file, page state and status line

use std::path::PathBuf;

use crate::config::{load_config, save_config, RigsyncConfig};
use crate::page::{apply_config, collect_config, RigPage};

/// Outcome of the last save/reload, shown in the status bar
pub enum Status {
    Info(String),  // Saved or reloaded
    Error(String), // IO or JSON error text
}

pub struct RigsyncApp {
    pub config_path: PathBuf, // File read by Reload and written by Save
    /// Config as last loaded or saved; the page is merged into it on save
    pub base: RigsyncConfig,
    pub page: RigPage, // Rows and transport selectors being edited
    pub status: Option<Status>, // None until the first save/reload
}

impl RigsyncApp {
    pub fn new(config_path: PathBuf, config: RigsyncConfig) -> Self {
        let page = apply_config(&config);
        Self {
            config_path,
            base: config,
            page,
            status: None,
        }
    }

    /// Would Save write anything different from the last load/save
    pub fn is_dirty(&self) -> bool {
        collect_config(&self.page, &self.base) != self.base
    }

    pub fn save(&mut self) {
        let config = collect_config(&self.page, &self.base);
        match save_config(&self.config_path, &config) {
            Ok(()) => {
                self.base = config;
                self.status = Some(Status::Info(format!(
                    "Saved {}",
                    self.config_path.display()
                )));
            }
            Err(e) => {
                tracing::error!("save failed: {e}");
                self.status = Some(Status::Error(e.to_string()));
            }
        }
    }

    /// Discard edits and rebuild the page from disk
    pub fn reload(&mut self) {
        match load_config(&self.config_path) {
            Ok(config) => {
                self.page = apply_config(&config);
                self.base = config;
                self.status = Some(Status::Info(format!(
                    "Reloaded {}",
                    self.config_path.display()
                )));
            }
            Err(e) => {
                tracing::error!("reload failed: {e}");
                self.status = Some(Status::Error(e.to_string()));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Transport;
    use crate::rig_select::SelectorWidget;

    #[test]
    fn test_edit_save_reload_cycle() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        let mut app = RigsyncApp::new(path.clone(), RigsyncConfig::default());
        assert!(!app.is_dirty());

        let idx = app.page.add_rig();
        app.page.rename_rig(idx, "digirig");
        app.page.select_rig(Transport::VaraFm, "digirig");
        assert!(app.is_dirty());

        app.save();
        assert!(matches!(app.status, Some(Status::Info(_))));
        assert!(!app.is_dirty());

        app.page.rename_rig(idx, "ft991");
        app.reload();

        assert_eq!(app.page.rows.len(), 1);
        assert_eq!(app.page.rows[0].name, "digirig");
        let vara_fm = app.page.select(Transport::VaraFm).unwrap();
        assert_eq!(vara_fm.selection(), "digirig");
    }

    fn app_from_json(json: &str) -> RigsyncApp {
        let config: RigsyncConfig = serde_json::from_str(json).unwrap();
        RigsyncApp::new(PathBuf::from("config.json"), config)
    }

    #[test]
    fn test_undefined_transport_rig_is_not_dirty_on_load() {
        let app = app_from_json(
            r#"{
                "hamlib_rigs": {"digirig": {"network": "tcp", "address": "localhost:4532"}},
                "ardop": {"rig": "ft991"}
            }"#,
        );

        assert!(!app.is_dirty());
        assert_eq!(collect_config(&app.page, &app.base).ardop.rig, "ft991");
    }

    #[test]
    fn test_empty_rig_key_is_not_dirty_on_load() {
        let app = app_from_json(r#"{"hamlib_rigs": {"": {"network": "tcp"}}}"#);

        assert!(app.page.rows.is_empty());
        assert!(!app.is_dirty());
        assert_eq!(collect_config(&app.page, &app.base).hamlib_rigs.len(), 1);
    }

    #[test]
    fn test_save_error_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        // A directory where the file should be
        let path = dir.path().to_path_buf();
        let mut app = RigsyncApp::new(path, RigsyncConfig::default());

        app.save();

        assert!(matches!(app.status, Some(Status::Error(_))));
    }
}
