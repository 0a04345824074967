use crate::core::stats::DEFAULT_RECENT_GAMES;
use crate::utils::error::{AnalyticsError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub stats: StatsConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Timings and selectors used by the page initializer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UiConfig {
    pub card_stagger_ms: Option<u64>,
    pub card_fade_ms: Option<u64>,
    pub card_offset_px: Option<u32>,
    pub alert_dismiss_ms: Option<u64>,
    pub tooltip_attribute: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatsConfig {
    pub recent_games: Option<usize>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub directory: Option<String>,
    pub filename: Option<String>,
    pub format: Option<String>,
}

pub const REPORT_FORMATS: [&str; 2] = ["pretty", "compact"];

impl AppConfig {
    /// Reads and parses a TOML configuration file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed)?)
    }

    /// Replaces `${VAR}` with the environment value; unknown variables are left as is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = regex::Regex::new(r"\$\{([^}]+)\}").map_err(|e| {
            AnalyticsError::ConfigValidationError {
                field: "environment".to_string(),
                message: e.to_string(),
            }
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    pub fn card_stagger(&self) -> Duration {
        Duration::from_millis(self.ui.card_stagger_ms.unwrap_or(100))
    }

    pub fn card_fade(&self) -> Duration {
        Duration::from_millis(self.ui.card_fade_ms.unwrap_or(500))
    }

    pub fn card_offset_px(&self) -> u32 {
        self.ui.card_offset_px.unwrap_or(20)
    }

    pub fn alert_dismiss(&self) -> Duration {
        Duration::from_millis(self.ui.alert_dismiss_ms.unwrap_or(5000))
    }

    pub fn tooltip_attribute(&self) -> &str {
        self.ui.tooltip_attribute.as_deref().unwrap_or("data-bs-toggle")
    }

    pub fn recent_games(&self) -> usize {
        self.stats.recent_games.unwrap_or(DEFAULT_RECENT_GAMES)
    }

    pub fn output_directory(&self) -> &str {
        self.output.directory.as_deref().unwrap_or("./output")
    }

    pub fn report_filename(&self) -> &str {
        self.output.filename.as_deref().unwrap_or("dashboard.json")
    }

    pub fn pretty_report(&self) -> bool {
        self.output.format.as_deref().unwrap_or("pretty") == "pretty"
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        if let Some(ms) = self.ui.card_stagger_ms {
            validation::validate_range("ui.card_stagger_ms", ms, 0, 10_000)?;
        }
        if let Some(ms) = self.ui.card_fade_ms {
            validation::validate_range("ui.card_fade_ms", ms, 0, 10_000)?;
        }
        if let Some(ms) = self.ui.alert_dismiss_ms {
            validation::validate_range("ui.alert_dismiss_ms", ms, 0, 120_000)?;
        }
        if let Some(recent) = self.stats.recent_games {
            validation::validate_range("stats.recent_games", recent, 1, 100)?;
        }
        if let Some(dir) = &self.output.directory {
            validation::validate_path("output.directory", dir)?;
        }
        if let Some(name) = &self.output.filename {
            validation::validate_file_extension("output.filename", name, &["json"])?;
        }
        if let Some(format) = &self.output.format {
            validation::validate_one_of("output.format", format, &REPORT_FORMATS)?;
        }
        Ok(())
    }
}
