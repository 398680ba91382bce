//! Merge rules: defaults applied before any file or environment source.

use crate::config::DEFAULT_OUTPUT;
use crate::generator::DEFAULT_INTERFACE_COUNT;
use config::Config;
use config::ConfigBuilder;
use config::ConfigError;

/// Create a Config builder with merge policy defaults applied.
pub fn builder_with_defaults() -> Result<ConfigBuilder<config::builder::DefaultState>, ConfigError>
{
    Config::builder()
        .set_default("generator.interface_count", DEFAULT_INTERFACE_COUNT as i64)?
        .set_default("generator.output", DEFAULT_OUTPUT)
}
