pub mod cli;
pub mod toml_config;

use crate::core::{Cents, ConfigProvider, Point3};
use crate::utils::error::Result;
use crate::utils::validation::{validate_min_len, validate_path, validate_range, Validate};
use clap::Parser;

pub const MAX_SORT_SIZE: usize = 10_000;
pub const MAX_READ_POINTS: usize = 1_000;

#[derive(Debug, Clone, Parser)]
#[command(name = "cents-point")]
#[command(about = "Walks through arithmetic, ordering and stream formatting on Cents and Point3")]
pub struct CliConfig {
    #[arg(long, default_value = ".")]
    pub output_dir: String,

    #[arg(long, default_value = "out.txt")]
    pub output_file: String,

    /// Amounts chained with `+` in the addition lesson
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true, default_values_t = [6, 8, 20])]
    pub addends: Vec<i64>,

    #[arg(long, default_value = "20")]
    pub sort_size: usize,

    /// Fixed shuffle seed, for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,

    /// Sample point as three whitespace-separated numbers; repeatable
    #[arg(long = "point", default_values = ["2.01 3.02 4.04", "11.1 22.2 33.3"])]
    pub points: Vec<Point3>,

    /// Number of points to read from stdin after printing the samples
    #[arg(long, default_value = "0")]
    pub read_points: usize,

    /// Load settings from a TOML file instead of the flags above
    #[arg(long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub log_json: bool,
}

impl ConfigProvider for CliConfig {
    fn output_dir(&self) -> &str {
        &self.output_dir
    }

    fn output_file(&self) -> &str {
        &self.output_file
    }

    fn addends(&self) -> Vec<Cents> {
        self.addends.iter().copied().map(Cents::new).collect()
    }

    fn sort_size(&self) -> usize {
        self.sort_size
    }

    fn shuffle_seed(&self) -> Option<u64> {
        self.seed
    }

    fn sample_points(&self) -> Vec<Point3> {
        self.points.clone()
    }

    fn read_points(&self) -> usize {
        self.read_points
    }
}

/// Shared checks for anything that can drive the demo.
pub fn validate_provider<C: ConfigProvider>(config: &C) -> Result<()> {
    validate_path("output.dir", config.output_dir())?;
    validate_path("output.file", config.output_file())?;
    validate_min_len("money.addends", &config.addends(), 2)?;
    validate_range("money.sort_size", config.sort_size(), 1, MAX_SORT_SIZE)?;
    validate_range("points.read_count", config.read_points(), 0, MAX_READ_POINTS)?;
    Ok(())
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_provider(self)
    }
}
