//! Optional TOML configuration: package manager command and tool table.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::registry::{ToolRegistry, ToolRequirement};

const CONFIG_DIR: &str = ".config/sys-doctor";
const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct InstallConfig {
    pub program: String,
    #[serde(default)]
    pub args: Vec<String>,
}

impl Default for InstallConfig {
    fn default() -> Self {
        Self {
            program: "apt".to_string(),
            args: vec!["install".to_string(), "-y".to_string()],
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    install: Option<InstallConfig>,
    #[serde(default)]
    tool: Vec<ToolRequirement>,
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub install: InstallConfig,
    pub registry: ToolRegistry,
}

impl Config {
    /// Load from `explicit` if given (must exist), else from the user config file if
    /// present, else defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => match default_config_path().filter(|p| p.exists()) {
                Some(path) => Self::from_file(&path),
                None => Ok(Self::default()),
            },
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)
            .with_context(|| format!("Unable to read {}", path.display()))?;
        Self::from_toml(&data).with_context(|| format!("{} is invalid", path.display()))
    }

    pub fn from_toml(data: &str) -> Result<Self> {
        let parsed: ConfigFile = toml::from_str(data).context("invalid TOML")?;
        let registry = if parsed.tool.is_empty() {
            ToolRegistry::default()
        } else {
            ToolRegistry::new(parsed.tool)
        };
        Ok(Self {
            install: parsed.install.unwrap_or_default(),
            registry,
        })
    }
}

fn default_config_path() -> Option<PathBuf> {
    user_home_dir().map(|home| home.join(CONFIG_DIR).join(CONFIG_FILE))
}

fn user_home_dir() -> Option<PathBuf> {
    env::var("HOME").map(PathBuf::from).ok()
}
