//! ConfigLoader: the single entry point assembling sources in priority order.
//! Loading only merges and deserializes; callers validate once CLI overrides are applied.

use crate::config::merge::builder_with_defaults;
use crate::config::sources;
use crate::config::CodegenConfig;
use crate::error::GenerateError;
use std::path::Path;

/// Loads [`CodegenConfig`] from defaults, files and the environment.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Defaults, then `<project_root>/composer-codegen.toml`, then the environment.
    pub fn load(project_root: &Path) -> Result<CodegenConfig, GenerateError> {
        Self::load_with(project_root, None)
    }

    /// Defaults, then the given file, then the environment.
    pub fn load_from_file(path: &Path) -> Result<CodegenConfig, GenerateError> {
        let builder = sources::add_explicit_file(builder_with_defaults()?, path)?;
        let builder = sources::add_environment(builder);
        Ok(builder.build()?.try_deserialize()?)
    }

    /// Full layering: defaults, project file, optional explicit file, environment.
    pub fn load_with(
        project_root: &Path,
        explicit: Option<&Path>,
    ) -> Result<CodegenConfig, GenerateError> {
        let mut builder = sources::add_project_file(builder_with_defaults()?, project_root);
        if let Some(path) = explicit {
            builder = sources::add_explicit_file(builder, path)?;
        }
        let builder = sources::add_environment(builder);
        Ok(builder.build()?.try_deserialize()?)
    }
}
