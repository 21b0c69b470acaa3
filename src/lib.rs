//! cvgen library
//!
//! Generators for the ConVenuence iOS project: a scaffold for the CVCore Swift
//! package and Xcode color asset catalogs built from a named light/dark palette.

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod generator;
pub mod models;

pub use generator::{generate_color_assets, generate_scaffold};
pub use models::hex_to_srgb;
