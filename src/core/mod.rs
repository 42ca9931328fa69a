//! Core functionality for nl2aud
//!
//! This module contains the shared logic behind both interfaces:
//! - Dataset loading and description filtering
//! - Attribute expression splitting
//! - Audience image lookup
//! - View navigation state
//! - View models for the presenters
//! - Application configuration

pub mod attributes;
pub mod config;
pub mod dataset;
pub mod images;
pub mod navigation;
pub mod view;

pub use config::Config;
pub use dataset::{AudienceIndex, AudienceRecord, CsvDataProvider, DataProvider, DatasetVersion};
pub use images::{ImageDir, ImageLookup};
pub use navigation::{ActiveView, NavigationState, ViewController};
