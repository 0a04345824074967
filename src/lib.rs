pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod ui;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::{CliArgs, Command};

pub use crate::adapters::storage::LocalStorage;
pub use crate::app::{
    calculate_percentage, check_frame_field, clear_validation_error, format_number,
    show_validation_error, validate_frame_score,
};
pub use crate::config::{toml_config::AppConfig, RunSettings};
pub use crate::core::{
    engine::{AnalyticsEngine, AnalyticsPipeline},
    stats::DashboardStats,
};
pub use crate::domain::model::{FrameResult, FrameViolation, ValidationOutcome};
pub use crate::utils::error::{AnalyticsError, Result};
