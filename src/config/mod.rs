#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::domain::ports::SettingsProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use std::path::Path;
use toml_config::AppConfig;

pub use toml_config::{OutputConfig, StatsConfig, UiConfig};

/// Settings for one import-and-report run.
#[derive(Debug, Clone)]
pub struct RunSettings {
    pub input_path: String,
    pub output_path: String,
    pub recent_games: usize,
    pub pretty: bool,
}

impl RunSettings {
    /// Combines the loaded config with the input file and an optional output override.
    pub fn from_config(config: &AppConfig, input_path: &str, output_dir: Option<&str>) -> Self {
        let directory = output_dir.unwrap_or_else(|| config.output_directory());
        let output_path = Path::new(directory)
            .join(config.report_filename())
            .to_string_lossy()
            .into_owned();

        Self {
            input_path: input_path.to_string(),
            output_path,
            recent_games: config.recent_games(),
            pretty: config.pretty_report(),
        }
    }
}

impl Validate for RunSettings {
    fn validate(&self) -> Result<()> {
        validation::validate_path("input", &self.input_path)?;
        validation::validate_file_extension("input", &self.input_path, &["json", "csv"])?;
        validation::validate_path("output", &self.output_path)?;
        validation::validate_range("recent_games", self.recent_games, 1, 100)?;
        Ok(())
    }
}

impl SettingsProvider for RunSettings {
    fn input_path(&self) -> &str {
        &self.input_path
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn recent_games(&self) -> usize {
        self.recent_games
    }

    fn pretty_report(&self) -> bool {
        self.pretty
    }
}
