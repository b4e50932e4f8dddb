use std::fs;
use std::io::Write;
use std::path::Path;

use client_logging::{client_error, client_info, client_warn};
use serde::{Deserialize, Serialize};

pub(crate) const CONFIG_FILENAME: &str = ".annotator.ron";

/// Client scope and runtime options, loaded from `.annotator.ron` in the
/// working directory. A missing or unreadable file falls back to defaults;
/// configuration problems are never fatal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct ClientConfig {
    pub base_url: String,
    pub project: u64,
    pub coding_job: u64,
    pub coder: u64,
    pub log_to_file: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000/api/v4/".to_string(),
            project: 1,
            coding_job: 1,
            coder: 1,
            log_to_file: false,
        }
    }
}

pub(crate) fn load_config(dir: &Path) -> ClientConfig {
    let path = dir.join(CONFIG_FILENAME);
    let content = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return ClientConfig::default();
        }
        Err(err) => {
            client_warn!("Failed to read config from {:?}: {}", path, err);
            return ClientConfig::default();
        }
    };

    match ron::from_str(&content) {
        Ok(config) => {
            client_info!("Loaded config from {:?}", path);
            config
        }
        Err(err) => {
            client_warn!("Failed to parse config from {:?}: {}", path, err);
            ClientConfig::default()
        }
    }
}

/// Writes the config atomically: temp file in the same directory, then
/// rename over the target.
pub(crate) fn save_config(dir: &Path, config: &ClientConfig) {
    let pretty = ron::ser::PrettyConfig::new();
    let content = match ron::ser::to_string_pretty(config, pretty) {
        Ok(text) => text,
        Err(err) => {
            client_error!("Failed to serialize config: {}", err);
            return;
        }
    };

    let target = dir.join(CONFIG_FILENAME);
    let result = tempfile::NamedTempFile::new_in(dir).and_then(|mut tmp| {
        tmp.write_all(content.as_bytes())?;
        tmp.flush()?;
        tmp.persist(&target).map_err(|err| err.error)?;
        Ok(())
    });
    if let Err(err) = result {
        client_error!("Failed to write config to {:?}: {}", target, err);
    }
}
