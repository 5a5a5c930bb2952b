use crate::error::{self, Error};
use crate::naming::{CaseRule, Convention, Preset};
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

pub const LOCAL_CONFIG_FILE: &str = ".wordcase.toml";
pub const DEFAULT_CONVENTION: &str = "snake_case";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Unset means [`DEFAULT_CONVENTION`]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_convention: Option<String>,

    #[serde(default)]
    pub conventions: BTreeMap<String, CustomConvention>,
}

/// A user defined convention, e.g.
///
/// ```toml
/// [conventions.train]
/// first = "title"
/// rest = "title"
/// separator = "-"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomConvention {
    pub first: CaseRule,
    pub rest: CaseRule,
    #[serde(default)]
    pub separator: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_convention: None,
            conventions: BTreeMap::new(),
        }
    }
}

impl Config {
    /// Load configuration with priority: explicit file > local config > global config > defaults
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                config = config.merge(Self::from_file(&global_path)?);
            }
        }

        let local_path = PathBuf::from(LOCAL_CONFIG_FILE);
        if local_path.exists() {
            config = config.merge(Self::from_file(&local_path)?);
        }

        if let Some(path) = explicit {
            config = config.merge(Self::from_file(path)?);
        }

        config.validate()?;
        log::debug!(
            "default convention {}, {} custom convention(s)",
            config.default_convention_name(),
            config.conventions.len()
        );
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        log::debug!("reading config file {}", path.display());
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents)?;
        Ok(config)
    }

    fn merge(mut self, other: Self) -> Self {
        if other.default_convention.is_some() {
            self.default_convention = other.default_convention;
        }
        self.conventions.extend(other.conventions);
        self
    }

    /// Reject custom conventions that would shadow a built-in one, and a
    /// default convention that does not resolve.
    pub fn validate(&self) -> error::Result<()> {
        if let Some(name) = self.conventions.keys().find(|n| n.parse::<Preset>().is_ok()) {
            return Err(Error::DuplicateConvention(name.clone()));
        }
        self.default_convention().map(|_| ())
    }

    /// Look up a convention by preset name, preset alias or custom name.
    pub fn resolve(&self, name: &str) -> error::Result<Convention> {
        if let Ok(preset) = name.parse::<Preset>() {
            return Ok(preset.convention().clone());
        }

        self.conventions
            .get(name)
            .map(|custom| custom.to_convention(name))
            .ok_or_else(|| Error::UnknownConvention(name.to_string()))
    }

    pub fn default_convention_name(&self) -> &str {
        self.default_convention.as_deref().unwrap_or(DEFAULT_CONVENTION)
    }

    pub fn default_convention(&self) -> error::Result<Convention> {
        self.resolve(self.default_convention_name())
    }

    /// All custom conventions, in name order
    pub fn custom_conventions(&self) -> Vec<Convention> {
        self.conventions
            .iter()
            .map(|(name, custom)| custom.to_convention(name))
            .collect()
    }

    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "wordcase").map(|dirs| dirs.config_dir().join("config.toml"))
    }
}

impl CustomConvention {
    pub fn to_convention(&self, name: &str) -> Convention {
        Convention::new(
            name.to_string(),
            self.first.rule(),
            self.rest.rule(),
            self.separator.clone(),
        )
    }
}
