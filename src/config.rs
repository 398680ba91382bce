//! Configuration System
//!
//! Layered configuration for the generator: built-in defaults, the project file
//! `composer-codegen.toml`, an explicit `--config` file and `COMPOSER_CODEGEN__*`
//! environment variables, in increasing priority. CLI flags are applied on top by the binary.

use crate::error::GenerateError;
use crate::generator::{Generator, DEFAULT_INTERFACE_COUNT};
use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

mod facade;
mod merge;
mod sources;

pub use facade::ConfigLoader;
pub use sources::{ENV_PREFIX, PROJECT_CONFIG_FILE};

/// Kotlin source file the generated declarations belong in, relative to the project root.
pub const DEFAULT_OUTPUT: &str =
    "src/main/kotlin/com/kamelia/sprinkler/binary/decoder/composer/DecoderComposerContexts.kt";

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CodegenConfig {
    /// Generation settings
    #[serde(default)]
    pub generator: GeneratorConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// What to generate and where
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Number of `Contextk` stages. Signed so a negative value is reported, not truncated.
    #[serde(default = "default_interface_count")]
    pub interface_count: i64,

    /// Destination file; relative paths resolve against the project root
    #[serde(default = "default_output")]
    pub output: PathBuf,
}

fn default_interface_count() -> i64 {
    DEFAULT_INTERFACE_COUNT as i64
}

fn default_output() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT)
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            interface_count: default_interface_count(),
            output: default_output(),
        }
    }
}

impl GeneratorConfig {
    /// Validate generator settings
    pub fn validate(&self) -> Result<(), GenerateError> {
        if self.interface_count < 0 {
            return Err(GenerateError::InvalidInterfaceCount(self.interface_count));
        }
        if self.output.as_os_str().is_empty() {
            return Err(GenerateError::ConfigError(
                "Output path cannot be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Validated generator for the configured count.
    pub fn to_generator(&self) -> Result<Generator, GenerateError> {
        self.validate()?;
        Generator::from_count(self.interface_count)
    }

    /// Absolute (or root-relative) destination path.
    pub fn resolve_output(&self, project_root: &Path) -> PathBuf {
        if self.output.is_absolute() {
            self.output.clone()
        } else {
            project_root.join(&self.output)
        }
    }
}

impl CodegenConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), GenerateError> {
        self.generator.validate()
    }

    /// Pretty TOML for a starter `composer-codegen.toml`.
    pub fn to_toml(&self) -> Result<String, GenerateError> {
        toml::to_string_pretty(self)
            .map_err(|e| GenerateError::ConfigError(format!("Failed to serialize config: {}", e)))
    }
}
