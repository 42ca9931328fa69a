//! View models shared by the TUI and the CLI printer

use std::path::PathBuf;

use serde::Serialize;

use crate::core::attributes::attribute_lines;
use crate::core::dataset::{AudienceIndex, AudienceRecord};
use crate::core::images::{missing_image_message, ImageLookup};

/// Availability of an audience image
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "path", rename_all = "snake_case")]
pub enum ImageStatus {
    Available(PathBuf),
    Missing,
}

impl ImageStatus {
    pub fn lookup(images: &dyn ImageLookup, index: AudienceIndex) -> Self {
        if images.image_exists(index) {
            ImageStatus::Available(images.image_path(index))
        } else {
            ImageStatus::Missing
        }
    }

    /// Text to show in place of the picture
    pub fn describe(&self, index: AudienceIndex) -> String {
        match self {
            ImageStatus::Available(path) => {
                format!("[Audience {}] {}", index, path.display())
            }
            ImageStatus::Missing => missing_image_message(index),
        }
    }
}

/// One card of the three-column list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardView {
    pub index: AudienceIndex,
    pub name: String,
    pub oneliner: String,
    pub image: ImageStatus,
}

/// Details page of one audience
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailsView {
    pub index: AudienceIndex,
    pub title: String,
    pub image: ImageStatus,
    pub summary: String,
}

/// Attributes page of one audience
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttributesView {
    pub index: AudienceIndex,
    pub title: String,
    /// Clauses interleaved with `AND` lines
    pub lines: Vec<String>,
}

/// Cards for every audience of a row, in index order
pub fn cards(record: &AudienceRecord, images: &dyn ImageLookup) -> Vec<CardView> {
    AudienceIndex::ALL
        .iter()
        .map(|&index| {
            let audience = record.audience(index);
            CardView {
                index,
                name: audience.name.clone(),
                oneliner: audience.oneliner.clone(),
                image: ImageStatus::lookup(images, index),
            }
        })
        .collect()
}

pub fn details(
    record: &AudienceRecord,
    index: AudienceIndex,
    images: &dyn ImageLookup,
) -> DetailsView {
    let audience = record.audience(index);
    DetailsView {
        index,
        title: audience.name.clone(),
        image: ImageStatus::lookup(images, index),
        summary: audience.summary.clone(),
    }
}

pub fn attributes(record: &AudienceRecord, index: AudienceIndex) -> AttributesView {
    let audience = record.audience(index);
    AttributesView {
        index,
        title: format!("Attributes for {}", audience.name),
        lines: attribute_lines(&audience.attribute),
    }
}
