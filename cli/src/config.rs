//! Configuration for the mapgen CLI
//!
//! Handles loading `mapgen.toml`. Paths in the file are relative to the
//! directory holding it.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use mapgen_codegen::GeneratorConfig;

pub const CONFIG_FILE: &str = "mapgen.toml";

fn default_input() -> PathBuf {
    PathBuf::from("tables.json")
}

fn default_out() -> PathBuf {
    PathBuf::from("./generated")
}

/// Contents of `mapgen.toml`
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Introspected metadata, `{ "tables": [...] }`
    #[serde(default = "default_input")]
    pub input: PathBuf,

    /// Directory receiving `<Domain>Mapper.xml` and `<Domain>Mapper.java`
    #[serde(default = "default_out")]
    pub out: PathBuf,

    /// Overrides `generator.mapper_package`
    #[serde(default)]
    pub mapper_package: Option<String>,

    /// Overrides `generator.model_package`
    #[serde(default)]
    pub model_package: Option<String>,

    #[serde(default)]
    pub generator: GeneratorConfig,

    #[serde(skip)]
    base_dir: PathBuf,
}

impl Config {
    /// Load from default config file
    pub fn load() -> Result<Self, Error> {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    /// Load from specific path
    pub fn load_from(path: &Path) -> Result<Self, Error> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::NotFound(path.into())
            } else {
                Error::Io(path.into(), e)
            }
        })?;

        let mut config: Self =
            toml::from_str(&content).map_err(|e| Error::Parse(path.into(), e))?;
        config.base_dir = path.parent().map(Path::to_path_buf).unwrap_or_default();

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), Error> {
        if self.input.as_os_str().is_empty() {
            return Err(Error::Invalid("'input' must name a metadata file".into()));
        }
        if self.generator.stages.is_empty() {
            return Err(Error::Invalid("'generator.stages' is empty".into()));
        }
        Ok(())
    }

    /// Metadata file, resolved against the config directory
    pub fn input_path(&self) -> PathBuf {
        self.base_dir.join(&self.input)
    }

    /// Output directory, resolved against the config directory
    pub fn out_dir(&self) -> PathBuf {
        self.base_dir.join(&self.out)
    }

    /// Generator options with the top-level package overrides applied
    pub fn generator_config(&self) -> GeneratorConfig {
        let mut generator = self.generator.clone();
        if let Some(package) = &self.mapper_package {
            generator.mapper_package = package.clone();
        }
        if let Some(package) = &self.model_package {
            generator.model_package = package.clone();
        }
        generator
    }
}

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("config not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read {}: {}", .0.display(), .1)]
    Io(PathBuf, #[source] std::io::Error),

    #[error("failed to parse {}: {}", .0.display(), .1)]
    Parse(PathBuf, #[source] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

pub type ConfigError = Error;

// ============================================================================
// Tests
// ============================================================================
