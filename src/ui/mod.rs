//! Presentation helpers over an abstract element tree.

pub mod effects;
pub mod framework;
pub mod init;
pub mod scheduler;
pub mod tree;

pub use effects::{clear_validation_error, show_validation_error};
pub use framework::ComponentLibrary;
pub use init::{InitSummary, PageInitializer};
pub use scheduler::ManualScheduler;
pub use tree::UiTree;
