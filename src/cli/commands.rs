//! CLI command definitions using clap
//!
//! Defines the command structure for the `nl2aud` CLI tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::core::dataset::DatasetVersion;

/// nl2aud - Audience Recommendation Agent viewer
///
/// Browse precomputed audience recommendations in the terminal.
/// Run without arguments to launch the TUI mode.
#[derive(Parser, Debug)]
#[command(name = "nl2aud", version, about, long_about = None)]
pub struct Cli {
    /// Directory containing the dataset CSV files
    #[arg(long, global = true, env = "NL2AUD_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Directory containing the audience images
    #[arg(long, global = true, env = "NL2AUD_IMAGES_DIR")]
    pub images_dir: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the audience descriptions of a dataset
    Descriptions(DescriptionsArgs),

    /// Show the three recommended audiences for a description
    Show(ShowArgs),

    /// Show the detailed summary of one recommended audience
    Details(PageArgs),

    /// Show the attribute clauses of one recommended audience
    Attributes(PageArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

// ─────────────────────────────────────────────────────────────────────────────
// Audience Commands
// ─────────────────────────────────────────────────────────────────────────────

/// Arguments for listing descriptions
#[derive(Parser, Debug)]
pub struct DescriptionsArgs {
    /// Dataset version (defaults to the configured one)
    #[arg(short, long, value_enum)]
    pub dataset: Option<DatasetVersion>,

    /// Only list descriptions matching this regular expression
    #[arg(short, long)]
    pub matching: Option<String>,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the card list
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Audience description, exactly as stored in the dataset
    pub description: String,

    /// Dataset version (defaults to the configured one)
    #[arg(short, long, value_enum)]
    pub dataset: Option<DatasetVersion>,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the details and attributes pages
#[derive(Parser, Debug)]
pub struct PageArgs {
    /// Audience description, exactly as stored in the dataset
    pub description: String,

    /// Audience index (1, 2 or 3)
    pub index: usize,

    /// Dataset version (defaults to the configured one)
    #[arg(short, long, value_enum)]
    pub dataset: Option<DatasetVersion>,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

// ─────────────────────────────────────────────────────────────────────────────
// Config Commands
// ─────────────────────────────────────────────────────────────────────────────

/// Configuration commands
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Set a configuration value
    Set {
        /// Configuration key
        key: ConfigKey,
        /// Value to set
        value: String,
    },
    /// Get a configuration value
    Get {
        /// Configuration key
        key: ConfigKey,
    },
    /// Remove a configuration value
    Remove {
        /// Configuration key
        key: ConfigKey,
    },
    /// Print the configuration file location
    Path,
}

/// Configuration keys
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ConfigKey {
    /// Directory containing the dataset CSV files
    DataDir,
    /// Directory containing the audience images
    ImagesDir,
    /// Dataset selected at startup
    DefaultDataset,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_launches_tui() {
        let cli = Cli::try_parse_from(["nl2aud"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_parse_attributes_command() {
        let cli = Cli::try_parse_from([
            "nl2aud",
            "--data-dir",
            "/data",
            "attributes",
            "Young runners",
            "2",
            "--dataset",
            "naive_clustering",
        ])
        .unwrap();

        assert_eq!(cli.data_dir, Some(PathBuf::from("/data")));
        match cli.command {
            Some(Commands::Attributes(args)) => {
                assert_eq!(args.description, "Young runners");
                assert_eq!(args.index, 2);
                assert_eq!(args.dataset, Some(DatasetVersion::NaiveClustering));
                assert!(!args.json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_unknown_dataset_rejected() {
        assert!(Cli::try_parse_from(["nl2aud", "descriptions", "-d", "kmeans"]).is_err());
    }
}
