//! nl2aud - A TUI viewer for precomputed audience recommendations
//!
//! This library loads the audience recommendation datasets produced upstream
//! and exposes both a TUI and a CLI for browsing the recommended audiences,
//! their detailed summaries and their attribute expressions.

pub mod cli;
pub mod core;
pub mod error;
pub mod tui;

pub use error::{Nl2audError, Result};
