use crate::cli::output::{
    collection_spinner, format_number, info, info_stderr, section_header_with_line, success,
    success_stderr, tree_item,
};
use crate::core::aggregator::AggregationMode;
use crate::core::config::{default_config, load_config, Config};
use crate::core::pipeline::{Pipeline, PipelineOutcome};
use crate::report::{ReportFormat, ReportGenerator};
use anyhow::Context;
use clap::Args;
use std::path::PathBuf;
use tracing::debug;

#[derive(Args)]
pub struct SummarizeArgs {
    /// Folder containing one sub-folder of results per species
    #[arg(short = 'i', long = "input-path", alias = "input_path", value_name = "DIR")]
    pub input_path: PathBuf,

    /// Fold subfamily rows of the statistics table into their family
    #[arg(long)]
    pub merge_subfamilies: bool,

    /// Rows after the category rows: one per family or one per code
    #[arg(short, long, value_name = "family|code")]
    pub mode: Option<AggregationMode>,

    /// Directory the two CSV tables are written to
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print the statistics table after writing (text, json, none)
    #[arg(long, default_value = "none")]
    pub format: ReportFormat,
}

impl SummarizeArgs {
    /// Configuration file values with command-line overrides applied
    pub fn resolve_config(&self) -> anyhow::Result<Config> {
        let mut config = match &self.config {
            Some(path) => load_config(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => default_config(),
        };

        if let Some(mode) = self.mode {
            config.aggregation.mode = mode;
        }
        if self.merge_subfamilies {
            config.aggregation.merge_subfamilies = true;
        }
        Ok(config)
    }
}

pub fn run(args: SummarizeArgs) -> anyhow::Result<()> {
    let config = args.resolve_config()?;
    debug!(
        "Aggregation mode {}, merge subfamilies: {}",
        config.aggregation.mode, config.aggregation.merge_subfamilies
    );

    std::fs::create_dir_all(&args.output_dir).with_context(|| {
        format!("Failed to create output directory {}", args.output_dir.display())
    })?;

    let pipeline = Pipeline::new(config)?.with_progress(collection_spinner());
    let outcome = pipeline
        .run(&args.input_path, &args.output_dir)
        .with_context(|| format!("Failed to summarize {}", args.input_path.display()))?;

    if let Some(report) = ReportGenerator::new(args.format).generate(&outcome.summary)? {
        if args.format == ReportFormat::Text {
            print_overview(&outcome, pipeline.config());
        }
        println!("{}", report);
    }

    // Keep stdout parseable when it carries JSON
    let json = args.format == ReportFormat::Json;
    let completed = format!(
        "Summary completed! '{}' and '{}' have been generated.",
        outcome.combined_path.display(),
        outcome.summary_path.display()
    );
    if json {
        success_stderr(&completed);
    } else {
        success(&completed);
    }
    if pipeline.config().aggregation.merge_subfamilies {
        let merged = "Subfamily rows merged into their families";
        if json {
            info_stderr(merged);
        } else {
            info(merged);
        }
    }

    Ok(())
}

fn print_overview(outcome: &PipelineOutcome, config: &Config) {
    section_header_with_line("Peptidase Summary");
    tree_item(false, "Species", Some(&outcome.combined.species.len().to_string()));
    tree_item(
        false,
        "Classification codes",
        Some(&format_number(outcome.combined.rows.len() as u64)),
    );
    let total = outcome
        .combined
        .column_sums(|_| true)
        .iter()
        .fold(0u64, |acc, n| acc.saturating_add(*n));
    tree_item(false, "Peptidases", Some(&format_number(total)));
    let mode = match config.aggregation.mode {
        AggregationMode::Family => "family",
        AggregationMode::Code => "classification code",
    };
    tree_item(true, "Grouping", Some(mode));
    println!();
}
