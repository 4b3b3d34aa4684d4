use crate::config::validate_provider;
use crate::core::{Cents, ConfigProvider, Point3};
use crate::utils::error::{DemoError, Result};
use crate::utils::validation::Validate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub output: OutputConfig,
    pub money: MoneyConfig,
    pub points: PointsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub dir: String,
    pub file: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoneyConfig {
    pub addends: Vec<Cents>,
    pub sort_size: usize,
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PointsConfig {
    pub samples: Vec<Point3>,
    pub read_count: Option<usize>,
}

impl TomlConfig {
    /// Loads the config from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// Parses the config from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| DemoError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Expands `${VAR}` references from the environment; unset variables are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| DemoError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

impl ConfigProvider for TomlConfig {
    fn output_dir(&self) -> &str {
        &self.output.dir
    }

    fn output_file(&self) -> &str {
        &self.output.file
    }

    fn addends(&self) -> Vec<Cents> {
        self.money.addends.clone()
    }

    fn sort_size(&self) -> usize {
        self.money.sort_size
    }

    fn shuffle_seed(&self) -> Option<u64> {
        self.money.seed
    }

    fn sample_points(&self) -> Vec<Point3> {
        self.points.samples.clone()
    }

    fn read_points(&self) -> usize {
        self.points.read_count.unwrap_or(0)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_provider(self)
    }
}
