//! `sizhu.toml` settings and reference-data path resolution.
//!
//! ```toml
//! data = "data/sample_reference.txt"
//! gender = "female"
//! json = true
//! ```
//!
//! Every key is optional. Command-line flags win over the environment,
//! which wins over this file.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use sizhu_chart::BaziGender;
use tracing::debug;

use crate::error::CliError;

/// File looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "sizhu.toml";
/// Reference tables used when nothing else names one.
pub const DEFAULT_DATA_FILE: &str = "data/sample_reference.txt";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SizhuConfig {
    /// Reference table path, relative to the working directory.
    pub data: Option<PathBuf>,
    pub gender: Option<BaziGender>,
    /// Print charts as JSON by default.
    pub json: Option<bool>,
}

impl SizhuConfig {
    pub fn load(path: &Path) -> Result<Self, CliError> {
        let content = std::fs::read_to_string(path).map_err(|e| CliError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::parse(&content).map_err(|message| CliError::Config {
            path: path.to_path_buf(),
            message,
        })
    }

    pub fn parse(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    /// Load `explicit` if given, else `./sizhu.toml` when present, else
    /// the empty config.
    pub fn discover(explicit: Option<&Path>) -> Result<Self, CliError> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        let local = Path::new(DEFAULT_CONFIG_FILE);
        if local.is_file() {
            debug!(path = %local.display(), "using local config");
            return Self::load(local);
        }
        Ok(Self::default())
    }

    /// `flag_or_env` is the clap value of `--data`, which already folds in
    /// `SIZHU_DATA`.
    pub fn data_path(&self, flag_or_env: Option<PathBuf>) -> PathBuf {
        flag_or_env
            .or_else(|| self.data.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE))
    }

    pub fn gender(&self, flag: Option<BaziGender>) -> BaziGender {
        flag.or(self.gender).unwrap_or(BaziGender::Male)
    }

    pub fn json(&self, flag: bool) -> bool {
        flag || self.json.unwrap_or(false)
    }
}
