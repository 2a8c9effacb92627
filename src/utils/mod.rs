//! Utility modules for common functionality
//!
//! This module provides logging, progress reporting and output helpers.

pub mod logger;
mod progress;
pub mod write_utils;
