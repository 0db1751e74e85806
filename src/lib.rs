//! Rouky Jump - terminal endless runner.
//!
//! This module exposes the game logic for testing and for the headless
//! simulator.

pub mod build_info;
pub mod core;
pub mod input;
pub mod run;
pub mod scene;
pub mod ui;
pub mod utils;
pub mod world;
