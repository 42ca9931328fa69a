use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const ATTRIBUTE_SWAP_CSV: &str = "nl2aud_demo_attribute_swap_v2.csv";
pub const NAIVE_CLUSTERING_CSV: &str = "nl2aud_demo_attribute_naive_clustering_v1.csv";

const HEADER: &str = "Audience Description,audience_name_1,audience_oneliner_1,audience_summary_1,attribute_1,audience_name_2,audience_oneliner_2,audience_summary_2,attribute_2,audience_name_3,audience_oneliner_3,audience_summary_3,attribute_3";

/// Isolated data, images and config directories for one test
pub struct TestEnv {
    _tmp: TempDir,
    pub home: PathBuf,
    pub data: PathBuf,
    pub images: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let home = tmp.path().join("home");
        let data = tmp.path().join("data");
        let images = tmp.path().join("images");
        for dir in [&home, &data, &images] {
            fs::create_dir_all(dir).expect("create fixture dir");
        }

        Self {
            _tmp: tmp,
            home,
            data,
            images,
        }
    }

    /// Environment with the attribute_swap dataset and one image
    pub fn with_attribute_swap() -> Self {
        let env = Self::new();
        env.write_dataset(ATTRIBUTE_SWAP_CSV, &attribute_swap_rows());
        fs::write(env.images.join("audience_1.png"), b"png").expect("write image");
        env
    }

    pub fn write_dataset(&self, file_name: &str, rows: &[&str]) {
        let mut contents = String::from(HEADER);
        for row in rows {
            contents.push('\n');
            contents.push_str(row);
        }
        contents.push('\n');
        fs::write(self.data.join(file_name), contents).expect("write dataset");
    }

    /// Command with isolated config and explicit data sources
    pub fn cmd(&self) -> Command {
        let mut cmd = self.bare_cmd();
        cmd.arg("--data-dir")
            .arg(&self.data)
            .arg("--images-dir")
            .arg(&self.images);
        cmd
    }

    /// Command with isolated config and no source flags
    pub fn bare_cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("nl2aud").expect("binary built");
        cmd.env("HOME", &self.home)
            .env("XDG_CONFIG_HOME", self.home.join(".config"))
            .env_remove("NL2AUD_DATA_DIR")
            .env_remove("NL2AUD_IMAGES_DIR")
            .env_remove("RUST_LOG");
        cmd
    }

    pub fn data_dir(&self) -> &Path {
        &self.data
    }
}

pub fn attribute_swap_rows() -> Vec<&'static str> {
    vec![
        "Young runners in the city,Urban Joggers,Runs before work,Adults 18-34 who run in metro areas.,Age 18-34 AND Interest: Running AND Metro: Yes,Marathon Hopefuls,Training for a race,Registered runners.,Interest: Marathon,Gear Shoppers,Buys shoes often,Frequent sportswear buyers.,Purchase: Running Shoes AND Frequency: High",
        "Parents planning trips,Family Planners,Books summer holidays,Parents with children under 12.,Parent: Yes AND Intent: Travel,Budget Travellers,Looks for deals,Price sensitive travellers.,Intent: Travel AND Price Sensitivity: High,Road Trippers,Drives on vacation,Families travelling by car.,Owns Car AND Intent: Road Trip",
    ]
}
