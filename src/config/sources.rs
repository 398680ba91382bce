//! Configuration sources: the project file, an explicit file and the environment.

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::{Environment, File, FileFormat};
use std::path::Path;
use tracing::debug;

/// Project-level configuration file name, looked up in the project root.
pub const PROJECT_CONFIG_FILE: &str = "composer-codegen.toml";

/// Prefix for environment overrides, e.g. `COMPOSER_CODEGEN__GENERATOR__INTERFACE_COUNT=8`.
pub const ENV_PREFIX: &str = "COMPOSER_CODEGEN";

/// Add `composer-codegen.toml` from the project root if it exists.
pub fn add_project_file(
    builder: ConfigBuilder<DefaultState>,
    project_root: &Path,
) -> ConfigBuilder<DefaultState> {
    let path = project_root.join(PROJECT_CONFIG_FILE);
    if path.is_file() {
        debug!(config_path = %path.display(), "Using project configuration");
        builder.add_source(File::from(path).format(FileFormat::Toml).required(false))
    } else {
        builder
    }
}

/// Add an explicitly requested file; a missing file is an error.
pub fn add_explicit_file(
    builder: ConfigBuilder<DefaultState>,
    path: &Path,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    if !path.is_file() {
        return Err(ConfigError::Message(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }
    Ok(builder.add_source(File::from(path).format(FileFormat::Toml).required(true)))
}

/// Add `COMPOSER_CODEGEN__SECTION__KEY` environment overrides.
pub fn add_environment(builder: ConfigBuilder<DefaultState>) -> ConfigBuilder<DefaultState> {
    builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("__")
            .separator("__")
            .try_parsing(true),
    )
}
