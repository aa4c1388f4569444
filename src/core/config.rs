use crate::core::aggregator::AggregationMode;
use crate::core::code::{CategoryOrder, MEROPS_CATEGORIES};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Category letters in report order
    pub categories: Vec<char>,
    pub input: InputConfig,
    pub aggregation: AggregationConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Summary file location relative to each species directory
    pub summary_path: String,
    pub code_column: String,
    pub count_column: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AggregationConfig {
    pub mode: AggregationMode,
    pub merge_subfamilies: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub combined_file: String,
    pub statistics_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            categories: MEROPS_CATEGORIES.to_vec(),
            input: InputConfig::default(),
            aggregation: AggregationConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            summary_path: "peptidases/summary.txt".to_string(),
            code_column: "Merops family".to_string(),
            count_column: "proteins".to_string(),
        }
    }
}

impl Default for AggregationConfig {
    fn default() -> Self {
        Self {
            mode: AggregationMode::Family,
            merge_subfamilies: false,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            combined_file: "combined_summary.csv".to_string(),
            statistics_file: "summary_statistics.csv".to_string(),
        }
    }
}

impl Config {
    /// Build the category enumeration, rejecting duplicates
    pub fn category_order(&self) -> Result<CategoryOrder, crate::PepsumError> {
        CategoryOrder::new(self.categories.clone())
    }

    pub fn validate(&self) -> Result<(), crate::PepsumError> {
        if self.categories.is_empty() {
            return Err(crate::PepsumError::Config(
                "at least one category is required".to_string(),
            ));
        }
        self.category_order()?;

        let input = &self.input;
        for (name, value) in [
            ("input.summary_path", &input.summary_path),
            ("input.code_column", &input.code_column),
            ("input.count_column", &input.count_column),
            ("output.combined_file", &self.output.combined_file),
            ("output.statistics_file", &self.output.statistics_file),
        ] {
            if value.trim().is_empty() {
                return Err(crate::PepsumError::Config(format!("{} must not be empty", name)));
            }
        }
        if input.code_column == input.count_column {
            return Err(crate::PepsumError::Config(
                "code and count columns must differ".to_string(),
            ));
        }
        if self.output.combined_file == self.output.statistics_file {
            return Err(crate::PepsumError::Config(
                "combined and statistics outputs must be different files".to_string(),
            ));
        }
        Ok(())
    }
}

pub fn default_config() -> Config {
    Config::default()
}

pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, crate::PepsumError> {
    let contents = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&contents)
        .map_err(|e| crate::PepsumError::Config(format!("Failed to parse config: {}", e)))?;
    config.validate()?;
    Ok(config)
}

pub fn save_config<P: AsRef<Path>>(path: P, config: &Config) -> Result<(), crate::PepsumError> {
    let contents = toml::to_string_pretty(config)
        .map_err(|e| crate::PepsumError::Config(format!("Failed to serialize config: {}", e)))?;
    std::fs::write(path, contents)?;
    Ok(())
}
