//! CLI module for nl2aud
//!
//! This module contains all CLI command definitions and handlers using clap.

pub mod audience;
pub mod commands;
pub mod config;

pub use commands::{Cli, Commands};
