//! Audience CLI command handlers
//!
//! Plain-text and JSON renditions of the list, details and attributes views.

use std::io::{self, Write};
use std::path::PathBuf;

use regex::Regex;
use serde::Serialize;

use crate::cli::commands::{DescriptionsArgs, PageArgs, ShowArgs};
use crate::core::config::Config;
use crate::core::dataset::{AudienceIndex, AudienceRecord, CsvDataProvider, DatasetVersion};
use crate::core::images::ImageDir;
use crate::core::navigation::ViewController;
use crate::core::view::{self, AttributesView, CardView, DetailsView};
use crate::error::{Nl2audError, Result};

/// Where to read datasets and images from, after applying flags and config
#[derive(Debug, Clone)]
pub struct Sources {
    pub data_dir: PathBuf,
    pub images_dir: PathBuf,
    pub default_dataset: DatasetVersion,
}

impl Sources {
    /// Command-line flags win over the configuration file
    pub fn resolve(
        data_dir: Option<PathBuf>,
        images_dir: Option<PathBuf>,
        config: &Config,
    ) -> Self {
        Self {
            data_dir: data_dir.unwrap_or_else(|| config.resolved_data_dir()),
            images_dir: images_dir.unwrap_or_else(|| config.resolved_images_dir()),
            default_dataset: config.default_dataset,
        }
    }

    pub fn controller(&self, dataset: Option<DatasetVersion>) -> ViewController<CsvDataProvider> {
        ViewController::new(
            CsvDataProvider::new(&self.data_dir),
            dataset.unwrap_or(self.default_dataset),
        )
    }

    pub fn images(&self) -> ImageDir {
        ImageDir::new(&self.images_dir)
    }
}

/// Handle `descriptions`
pub fn handle_descriptions(sources: &Sources, args: DescriptionsArgs) -> Result<()> {
    let controller = sources.controller(args.dataset);
    let filter = args.matching.as_deref().map(Regex::new).transpose()?;

    let descriptions: Vec<String> = controller
        .dataset()?
        .into_iter()
        .map(|r| r.description)
        .filter(|d| filter.as_ref().map_or(true, |re| re.is_match(d)))
        .collect();

    let mut out = io::stdout().lock();
    if args.json {
        write_json(&mut out, &descriptions)
    } else {
        if descriptions.is_empty() {
            writeln!(out, "No audience descriptions found.")?;
        }
        for description in &descriptions {
            writeln!(out, "{}", description)?;
        }
        Ok(())
    }
}

/// Handle `show`
pub fn handle_show(sources: &Sources, args: ShowArgs) -> Result<()> {
    let mut controller = sources.controller(args.dataset);
    let record = select_record(&mut controller, &args.description)?;
    let cards = view::cards(&record, &sources.images());

    let mut out = io::stdout().lock();
    if args.json {
        write_json(&mut out, &cards)
    } else {
        write_cards(&mut out, &record.description, controller.version(), &cards)
    }
}

/// Handle `details`
pub fn handle_details(sources: &Sources, args: PageArgs) -> Result<()> {
    let index = AudienceIndex::new(args.index)?;
    let mut controller = sources.controller(args.dataset);
    let record = select_record(&mut controller, &args.description)?;
    controller.show_details(index)?;

    let page = view::details(&record, index, &sources.images());
    let mut out = io::stdout().lock();
    if args.json {
        write_json(&mut out, &page)
    } else {
        write_details(&mut out, &page)
    }
}

/// Handle `attributes`
pub fn handle_attributes(sources: &Sources, args: PageArgs) -> Result<()> {
    let index = AudienceIndex::new(args.index)?;
    let mut controller = sources.controller(args.dataset);
    let record = select_record(&mut controller, &args.description)?;
    controller.show_attributes(index)?;

    let page = view::attributes(&record, index);
    let mut out = io::stdout().lock();
    if args.json {
        write_json(&mut out, &page)
    } else {
        write_attributes(&mut out, &page)
    }
}

/// The row for a description; scripts need a failure when nothing matches
fn select_record(
    controller: &mut ViewController<CsvDataProvider>,
    description: &str,
) -> Result<AudienceRecord> {
    controller
        .select_description(description)?
        .into_iter()
        .next()
        .ok_or_else(|| Nl2audError::DescriptionNotFound(description.to_string()))
}

fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

pub fn write_cards<W: Write>(
    out: &mut W,
    description: &str,
    version: DatasetVersion,
    cards: &[CardView],
) -> Result<()> {
    writeln!(out, "Recommended Audiences for \"{}\" ({})", description, version)?;
    for card in cards {
        writeln!(out)?;
        writeln!(out, "[{}] {}", card.index, card.name)?;
        writeln!(out, "    {}", card.oneliner)?;
        writeln!(out, "    {}", card.image.describe(card.index))?;
    }
    Ok(())
}

pub fn write_details<W: Write>(out: &mut W, page: &DetailsView) -> Result<()> {
    writeln!(out, "{}", page.title)?;
    writeln!(out, "{}", "=".repeat(page.title.chars().count()))?;
    writeln!(out, "{}", page.image.describe(page.index))?;
    writeln!(out)?;
    writeln!(out, "{}", page.summary)?;
    Ok(())
}

pub fn write_attributes<W: Write>(out: &mut W, page: &AttributesView) -> Result<()> {
    writeln!(out, "{}", page.title)?;
    writeln!(out, "{}", "=".repeat(page.title.chars().count()))?;
    for line in &page.lines {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::view::ImageStatus;

    fn index(i: usize) -> AudienceIndex {
        AudienceIndex::new(i).unwrap()
    }

    #[test]
    fn test_sources_prefer_flags_over_config() {
        let config = Config {
            data_dir: Some(PathBuf::from("/configured")),
            images_dir: Some(PathBuf::from("/configured/images")),
            default_dataset: DatasetVersion::NaiveClustering,
        };

        let sources = Sources::resolve(Some(PathBuf::from("/flag")), None, &config);
        assert_eq!(sources.data_dir, PathBuf::from("/flag"));
        assert_eq!(sources.images_dir, PathBuf::from("/configured/images"));
        assert_eq!(
            sources.controller(None).version(),
            DatasetVersion::NaiveClustering
        );
        assert_eq!(
            sources
                .controller(Some(DatasetVersion::AttributeSwap))
                .version(),
            DatasetVersion::AttributeSwap
        );
    }

    #[test]
    fn test_write_cards_text() {
        let cards = vec![CardView {
            index: index(1),
            name: "Urban Joggers".to_string(),
            oneliner: "Runs before work".to_string(),
            image: ImageStatus::Missing,
        }];

        let mut out = Vec::new();
        write_cards(&mut out, "Young runners", DatasetVersion::AttributeSwap, &cards).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with("Recommended Audiences for \"Young runners\" (attribute_swap)"));
        assert!(text.contains("[1] Urban Joggers"));
        assert!(text.contains("Image for Audience 1 not found"));
    }

    #[test]
    fn test_write_attributes_text() {
        let page = AttributesView {
            index: index(2),
            title: "Attributes for Budget Travellers".to_string(),
            lines: vec!["Intent: Travel".into(), "AND".into(), "Price: Low".into()],
        };

        let mut out = Vec::new();
        write_attributes(&mut out, &page).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Attributes for Budget Travellers");
        assert_eq!(&lines[2..], &["Intent: Travel", "AND", "Price: Low"]);
    }

    #[test]
    fn test_write_details_json_shape() {
        let page = DetailsView {
            index: index(3),
            title: "Road Trippers".to_string(),
            image: ImageStatus::Available(PathBuf::from("images/audience_3.png")),
            summary: "Families travelling by car.".to_string(),
        };

        let mut out = Vec::new();
        write_json(&mut out, &page).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();

        assert_eq!(value["index"], 3);
        assert_eq!(value["image"]["status"], "available");
        assert_eq!(value["image"]["path"], "images/audience_3.png");
    }
}
