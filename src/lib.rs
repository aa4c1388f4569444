pub mod cli;
pub mod core;
pub mod report;

pub use crate::core::{
    aggregator::{aggregate, AggregationMode, SummaryTable},
    code::{CategoryOrder, ClassificationCode},
    combiner::{combine, CombinedTable},
    config::Config,
    pipeline::Pipeline,
};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PepsumError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("{path}: missing required column '{column}'")]
    MissingColumn { path: String, column: String },

    #[error("{path}: classification code '{code}' appears more than once")]
    DuplicateCode { path: String, code: String },

    #[error("No species summary files found under {0}")]
    NoSpecies(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, PepsumError>;
