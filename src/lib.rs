//! Quoridor host application
//!
//! Configuration, command-line handling and the engine-vs-engine driver
//! around the `quoridor_engine` crate.

pub mod cli;
pub mod error;
pub mod selfplay;
pub mod settings;

pub use error::{SettingsError, SettingsResult};
pub use selfplay::{play, play_from, GameRecord};
pub use settings::Settings;
