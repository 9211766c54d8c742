//! Configuration management module

pub mod loader;
pub mod settings;

pub use loader::Config;
pub use settings::{Overrides, Settings};
