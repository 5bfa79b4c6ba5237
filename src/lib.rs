// Public API for presentation layers and integration tests

pub mod clipboard;
pub mod config;
pub mod letters;
pub mod mask;
pub mod message;
pub mod poll;
pub mod state;

pub use config::HelperConfig;
pub use state::{HelperInputs, HelperState, HelperView, StateStore};
