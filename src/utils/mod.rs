//! Utility modules for certwatch
//!
//! This module contains error types and progress indicators.

pub mod error;
pub mod progress;

pub use error::{CertwatchError, ConfigError, ExpiryParseError, FetchError, Result};
pub use progress::create_progress_bar;
