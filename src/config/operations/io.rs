use crate::config::types::RigsyncConfig;
use crate::error::{ConfigError, Result};

use std::fs::File;
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::Path;

/// Load the config at `path`, or the default config if the file is missing
pub fn load_config(path: &Path) -> Result<RigsyncConfig> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::info!(path = %path.display(), "no config file, starting from defaults");
            return Ok(RigsyncConfig::default());
        }
        Err(source) => {
            return Err(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let config: RigsyncConfig =
        serde_json::from_reader(BufReader::new(file)).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })?;

    tracing::info!(
        path = %path.display(),
        rigs = config.hamlib_rigs.len(),
        "loaded config"
    );
    Ok(config)
}

/// Write `config` to `path` as pretty-printed JSON
pub fn save_config(path: &Path, config: &RigsyncConfig) -> Result<()> {
    let io_err = |source: std::io::Error| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(io_err)?;
    }

    let mut writer = BufWriter::new(File::create(path).map_err(io_err)?);
    serde_json::to_writer_pretty(&mut writer, config).map_err(|source| ConfigError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    writer.write_all(b"\n").map_err(io_err)?;
    writer.flush().map_err(io_err)?;

    tracing::info!(
        path = %path.display(),
        rigs = config.hamlib_rigs.len(),
        "saved config"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::types::HamlibRig;

    #[test]
    fn test_missing_file_gives_default() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = load_config(&dir.path().join("config.json")).unwrap();
        assert_eq!(cfg, RigsyncConfig::default());
    }

    #[test]
    fn test_malformed_file_is_json_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = load_config(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Json { .. }));
    }

    #[test]
    fn test_save_then_load_keeps_rigs_and_extras() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pat").join("config.json");

        let mut cfg = RigsyncConfig::default();
        cfg.hamlib_rigs.insert(
            "digirig".to_string(),
            HamlibRig {
                network: "tcp".to_string(),
                address: "localhost:4532".to_string(),
                ..Default::default()
            },
        );
        cfg.varahf.rig = "digirig".to_string();
        cfg.extra
            .insert("mycall".to_string(), serde_json::Value::from("N0CALL"));

        save_config(&path, &cfg).unwrap();
        let loaded = load_config(&path).unwrap();

        assert_eq!(loaded, cfg);
    }
}
