//! Configuration module for certwatch
//!
//! Handles loading and managing configuration from TOML files.

pub mod settings;

pub use settings::{CheckSettings, Settings};
