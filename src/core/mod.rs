//! Configuration, constants, strings and timers shared by the game.

pub mod config;
pub mod constants;
pub mod i18n;
pub mod timers;

pub use config::{GameConfig, Variant};
pub use i18n::Language;
