//! Audience recommendation datasets
//!
//! The recommendations are generated offline and shipped as two CSV files,
//! one per generation strategy. Each row holds a user-entered audience
//! description and the three audiences recommended for it.

use std::io::Read;
use std::path::PathBuf;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::{Nl2audError, Result};

/// Number of audiences recommended per description
pub const AUDIENCES_PER_ROW: usize = 3;

/// Available dataset versions
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default, ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum DatasetVersion {
    /// Attribute swap strategy (default)
    #[default]
    #[value(name = "attribute_swap")]
    AttributeSwap,
    /// Naive clustering strategy
    #[value(name = "naive_clustering")]
    NaiveClustering,
}

impl DatasetVersion {
    /// Get the selector name
    pub fn name(&self) -> &'static str {
        match self {
            DatasetVersion::AttributeSwap => "attribute_swap",
            DatasetVersion::NaiveClustering => "naive_clustering",
        }
    }

    /// Get the fixed CSV file name backing this version
    pub fn file_name(&self) -> &'static str {
        match self {
            DatasetVersion::AttributeSwap => "nl2aud_demo_attribute_swap_v2.csv",
            DatasetVersion::NaiveClustering => "nl2aud_demo_attribute_naive_clustering_v1.csv",
        }
    }

    /// Parse from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "attribute_swap" => Some(DatasetVersion::AttributeSwap),
            "naive_clustering" => Some(DatasetVersion::NaiveClustering),
            _ => None,
        }
    }

    /// Get all available versions, in selector order
    pub fn all() -> &'static [DatasetVersion] {
        &[DatasetVersion::AttributeSwap, DatasetVersion::NaiveClustering]
    }

    /// The version after this one, wrapping around
    pub fn next(&self) -> Self {
        match self {
            DatasetVersion::AttributeSwap => DatasetVersion::NaiveClustering,
            DatasetVersion::NaiveClustering => DatasetVersion::AttributeSwap,
        }
    }
}

impl std::fmt::Display for DatasetVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Position of an audience within a row, always 1, 2 or 3
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(into = "usize")]
pub struct AudienceIndex(u8);

impl AudienceIndex {
    /// All indices in display order
    pub const ALL: [AudienceIndex; AUDIENCES_PER_ROW] =
        [AudienceIndex(1), AudienceIndex(2), AudienceIndex(3)];

    /// Validate a 1-based index
    pub fn new(index: usize) -> Result<Self> {
        if (1..=AUDIENCES_PER_ROW).contains(&index) {
            Ok(AudienceIndex(index as u8))
        } else {
            Err(Nl2audError::InvalidAudienceIndex(index))
        }
    }

    /// 1-based value
    pub fn get(&self) -> usize {
        self.0 as usize
    }

    /// 0-based position, for slices and column layouts
    pub fn position(&self) -> usize {
        self.get() - 1
    }
}

impl From<AudienceIndex> for usize {
    fn from(index: AudienceIndex) -> usize {
        index.get()
    }
}

impl std::fmt::Display for AudienceIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One recommended audience within a row
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct AudienceSlot {
    pub name: String,
    pub oneliner: String,
    pub summary: String,
    /// Attribute expression, clauses joined by `AND`
    pub attribute: String,
}

/// One row of a dataset
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AudienceRecord {
    /// The user-entered audience description this row answers
    pub description: String,
    pub audiences: [AudienceSlot; AUDIENCES_PER_ROW],
}

impl AudienceRecord {
    /// Get the audience at the given index
    pub fn audience(&self, index: AudienceIndex) -> &AudienceSlot {
        &self.audiences[index.position()]
    }
}

/// Raw CSV row as written by the upstream generator
#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(rename = "Audience Description")]
    description: String,
    #[serde(rename = "audience_name_1")]
    name_1: String,
    #[serde(rename = "audience_oneliner_1")]
    oneliner_1: String,
    #[serde(rename = "audience_summary_1")]
    summary_1: String,
    attribute_1: String,
    #[serde(rename = "audience_name_2")]
    name_2: String,
    #[serde(rename = "audience_oneliner_2")]
    oneliner_2: String,
    #[serde(rename = "audience_summary_2")]
    summary_2: String,
    attribute_2: String,
    #[serde(rename = "audience_name_3")]
    name_3: String,
    #[serde(rename = "audience_oneliner_3")]
    oneliner_3: String,
    #[serde(rename = "audience_summary_3")]
    summary_3: String,
    attribute_3: String,
}

impl From<CsvRow> for AudienceRecord {
    fn from(row: CsvRow) -> Self {
        AudienceRecord {
            description: row.description,
            audiences: [
                AudienceSlot {
                    name: row.name_1,
                    oneliner: row.oneliner_1,
                    summary: row.summary_1,
                    attribute: row.attribute_1,
                },
                AudienceSlot {
                    name: row.name_2,
                    oneliner: row.oneliner_2,
                    summary: row.summary_2,
                    attribute: row.attribute_2,
                },
                AudienceSlot {
                    name: row.name_3,
                    oneliner: row.oneliner_3,
                    summary: row.summary_3,
                    attribute: row.attribute_3,
                },
            ],
        }
    }
}

/// Column holding the user-entered description
pub const DESCRIPTION_COLUMN: &str = "Audience Description";

/// Every column a dataset must carry, in generator order
pub fn required_columns() -> Vec<String> {
    let mut columns = vec![DESCRIPTION_COLUMN.to_string()];
    for index in AudienceIndex::ALL {
        columns.push(format!("audience_name_{}", index));
        columns.push(format!("audience_oneliner_{}", index));
        columns.push(format!("audience_summary_{}", index));
        columns.push(format!("attribute_{}", index));
    }
    columns
}

/// Parse audience records from CSV text.
///
/// Unknown columns are ignored, so files exported with an index column
/// load unchanged. A missing required column is an error even when the
/// file has no rows.
pub fn parse_dataset<R: Read>(reader: R) -> Result<Vec<AudienceRecord>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let missing: Vec<String> = required_columns()
        .into_iter()
        .filter(|column| !headers.iter().any(|h| h == column.as_str()))
        .collect();
    if !missing.is_empty() {
        return Err(Nl2audError::Csv(format!(
            "missing column(s): {}",
            missing.join(", ")
        )));
    }

    let mut records = Vec::new();
    for row in csv_reader.deserialize::<CsvRow>() {
        records.push(AudienceRecord::from(row?));
    }
    Ok(records)
}

/// Rows whose description equals `text` exactly
pub fn filter_by_description(records: &[AudienceRecord], text: &str) -> Vec<AudienceRecord> {
    records
        .iter()
        .filter(|r| r.description == text)
        .cloned()
        .collect()
}

/// Source of audience records
#[cfg_attr(test, mockall::automock)]
pub trait DataProvider {
    /// Load every row of the given dataset, in file order
    fn load_dataset(&self, version: DatasetVersion) -> Result<Vec<AudienceRecord>>;
}

/// Reads the fixed-name CSV files from a data directory
#[derive(Debug, Clone)]
pub struct CsvDataProvider {
    data_dir: PathBuf,
}

impl CsvDataProvider {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Full path of the CSV backing a version
    pub fn path_for(&self, version: DatasetVersion) -> PathBuf {
        self.data_dir.join(version.file_name())
    }
}

impl DataProvider for CsvDataProvider {
    fn load_dataset(&self, version: DatasetVersion) -> Result<Vec<AudienceRecord>> {
        let path = self.path_for(version);
        if !path.is_file() {
            return Err(Nl2audError::DatasetNotFound { version, path });
        }

        let file = std::fs::File::open(&path)?;
        let records = parse_dataset(file)?;
        tracing::debug!(
            "Loaded dataset {} from {} ({} rows)",
            version,
            path.display(),
            records.len()
        );
        Ok(records)
    }
}
