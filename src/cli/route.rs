//! CLI route: single route table and run context. Dispatches to the generator.

use crate::cli::command_name;
use crate::cli::parse::Commands;
use crate::config::{CodegenConfig, ConfigLoader, PROJECT_CONFIG_FILE};
use crate::error::GenerateError;
use crate::generator::Generator;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info};

/// CLI values that take precedence over every configuration source.
#[derive(Debug, Clone, Default)]
pub struct GeneratorOverrides {
    pub interface_count: Option<i64>,
    pub output: Option<PathBuf>,
}

/// Runtime context for CLI execution: project root and resolved configuration.
pub struct RunContext {
    project_root: PathBuf,
    config: CodegenConfig,
}

impl RunContext {
    /// Load configuration for `project_root` and apply CLI overrides.
    pub fn new(
        project_root: PathBuf,
        config_path: Option<PathBuf>,
        overrides: GeneratorOverrides,
    ) -> Result<Self, GenerateError> {
        let mut config = ConfigLoader::load_with(&project_root, config_path.as_deref())?;

        if let Some(count) = overrides.interface_count {
            config.generator.interface_count = count;
        }
        if let Some(output) = overrides.output {
            config.generator.output = output;
        }
        config.validate()?;

        Ok(Self::from_config(project_root, config))
    }

    /// Build directly from an already resolved configuration.
    pub fn from_config(project_root: PathBuf, config: CodegenConfig) -> Self {
        Self {
            project_root,
            config,
        }
    }

    pub fn config(&self) -> &CodegenConfig {
        &self.config
    }

    /// Destination of the generated file.
    pub fn output_path(&self) -> PathBuf {
        self.config.generator.resolve_output(&self.project_root)
    }

    /// Execute a command and return the text destined for stdout.
    pub fn execute(&self, command: &Commands) -> Result<String, GenerateError> {
        let started = Instant::now();
        info!(command = command_name(command), "Running command");

        let result = match command {
            Commands::Generate => self.handle_generate(),
            Commands::Check => self.handle_check(),
            Commands::Print => self.handle_print(),
            Commands::Init { force } => self.handle_init(*force),
        };

        debug!(
            command = command_name(command),
            ok = result.is_ok(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Command finished"
        );
        result
    }

    fn generator(&self) -> Result<Generator, GenerateError> {
        self.config.generator.to_generator()
    }

    fn handle_generate(&self) -> Result<String, GenerateError> {
        let generator = self.generator()?;
        let path = self.output_path();
        let bytes = generator.write_to(&path)?;
        Ok(format!(
            "Generated {} context interfaces into {} ({} bytes)\n",
            generator.section_count(),
            path.display(),
            bytes
        ))
    }

    fn handle_check(&self) -> Result<String, GenerateError> {
        let path = self.output_path();
        self.generator()?.ensure_fresh(&path)?;
        Ok(format!("{} is up to date\n", path.display()))
    }

    fn handle_print(&self) -> Result<String, GenerateError> {
        Ok(self.generator()?.render())
    }

    fn handle_init(&self, force: bool) -> Result<String, GenerateError> {
        let path = self.project_root.join(PROJECT_CONFIG_FILE);
        if path.exists() && !force {
            return Err(GenerateError::ConfigError(format!(
                "{} already exists (use --force to overwrite)",
                path.display()
            )));
        }
        write_file(&path, &CodegenConfig::default().to_toml()?)?;
        Ok(format!("Wrote {}\n", path.display()))
    }
}

fn write_file(path: &Path, content: &str) -> Result<(), GenerateError> {
    std::fs::write(path, content).map_err(|e| GenerateError::io(path, e))
}
