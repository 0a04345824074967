pub mod engine;
pub mod form;
pub mod source;
pub mod stats;
pub mod validator;

pub use crate::domain::model::{FrameResult, FrameViolation, Game, ValidationOutcome};
pub use crate::domain::ports::{Pipeline, SettingsProvider, Storage};
pub use crate::utils::error::Result;
