pub mod adapters;
#[cfg(feature = "cli")]
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{StdinSource, StringSource};
pub use core::{classifier::classify, engine::SignEngine};
pub use domain::model::{Classification, Sign};
pub use utils::error::{Result, SignError};
