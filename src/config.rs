use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{LgError, Result};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    /// File analyzed when no path argument is given.
    pub path: PathBuf,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("input.txt"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Print per-record status lines in human output.
    pub detail: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { detail: true }
    }
}

impl Config {
    /// Load configuration: defaults, then the global config file if present,
    /// then an explicit `--config`/`LG_CONFIG` file (which replaces the
    /// global layer), then environment overrides.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        let mut config = Self::default();

        let explicit = explicit_path
            .map(PathBuf::from)
            .or_else(|| std::env::var("LG_CONFIG").ok().map(PathBuf::from));

        if let Some(path) = explicit {
            if let Some(patch) = Self::load_patch(&path)? {
                config.merge_patch(patch);
            }
        } else if let Some(global) = Self::load_global()? {
            config.merge_patch(global);
        }

        config.apply_env_overrides()?;

        Ok(config)
    }

    fn load_global() -> Result<Option<ConfigPatch>> {
        match dirs::config_dir() {
            Some(dir) => Self::load_patch(&dir.join("lg/config.toml")),
            None => Ok(None),
        }
    }

    fn load_patch(path: &Path) -> Result<Option<ConfigPatch>> {
        if !path.exists() {
            return Ok(None);
        }

        let raw = std::fs::read_to_string(path)
            .map_err(|err| LgError::Config(format!("read config {}: {err}", path.display())))?;
        let patch = toml::from_str(&raw)
            .map_err(|err| LgError::Config(format!("parse config {}: {err}", path.display())))?;
        Ok(Some(patch))
    }

    fn merge_patch(&mut self, patch: ConfigPatch) {
        if let Some(input) = patch.input {
            if let Some(path) = input.path {
                self.input.path = path;
            }
        }
        if let Some(output) = patch.output {
            if let Some(detail) = output.detail {
                self.output.detail = detail;
            }
        }
    }

    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(path) = std::env::var("LG_INPUT") {
            self.input.path = PathBuf::from(path);
        }
        if let Ok(raw) = std::env::var("LG_DETAIL") {
            self.output.detail = parse_bool(&raw)
                .ok_or_else(|| LgError::Config(format!("invalid LG_DETAIL value: {raw}")))?;
        }
        Ok(())
    }
}

#[derive(Debug, Default, Deserialize)]
struct ConfigPatch {
    input: Option<InputPatch>,
    output: Option<OutputPatch>,
}

#[derive(Debug, Default, Deserialize)]
struct InputPatch {
    path: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize)]
struct OutputPatch {
    detail: Option<bool>,
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
