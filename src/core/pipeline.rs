/// Collect → combine → aggregate, then write both tables
use crate::core::aggregator::{aggregate, SummaryTable};
use crate::core::code::CategoryOrder;
use crate::core::collector::Collector;
use crate::core::combiner::{combine, CombinedTable};
use crate::core::config::Config;
use crate::core::merger::merge_subfamilies_file;
use crate::report::csv::{write_combined, write_summary};
use crate::Result;
use indicatif::ProgressBar;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug)]
pub struct PipelineOutcome {
    pub combined: CombinedTable,
    pub summary: SummaryTable,
    pub combined_path: PathBuf,
    pub summary_path: PathBuf,
}

pub struct Pipeline {
    config: Config,
    order: CategoryOrder,
    progress: ProgressBar,
}

impl Pipeline {
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        let order = config.category_order()?;
        Ok(Self {
            config,
            order,
            progress: ProgressBar::hidden(),
        })
    }

    pub fn with_progress(mut self, progress: ProgressBar) -> Self {
        self.progress = progress;
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn category_order(&self) -> &CategoryOrder {
        &self.order
    }

    /// Build both tables in memory without touching the output directory
    pub fn build(&self, input_dir: &Path) -> Result<(CombinedTable, SummaryTable)> {
        let wide = Collector::new(&self.config.input)
            .with_progress(self.progress.clone())
            .collect(input_dir)?;
        let combined = combine(wide, &self.order);
        let summary = aggregate(&combined, &self.order, self.config.aggregation.mode);
        Ok((combined, summary))
    }

    /// Run every step and write the outputs into `output_dir`
    pub fn run(&self, input_dir: &Path, output_dir: &Path) -> Result<PipelineOutcome> {
        let (combined, mut summary) = self.build(input_dir)?;

        let combined_path = output_dir.join(&self.config.output.combined_file);
        let summary_path = output_dir.join(&self.config.output.statistics_file);

        write_combined(&combined_path, &combined, &self.config.input.code_column)?;
        info!("Wrote {}", combined_path.display());
        write_summary(&summary_path, &summary)?;
        info!("Wrote {}", summary_path.display());

        if self.config.aggregation.merge_subfamilies {
            summary = merge_subfamilies_file(&summary_path)?;
        }

        Ok(PipelineOutcome {
            combined,
            summary,
            combined_path,
            summary_path,
        })
    }
}
