pub mod commands;
pub mod output;

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "pepsum",
    version,
    about = "Summarize peptidase prediction results across multiple species",
    long_about = "pepsum reads <species>/peptidases/summary.txt under the input directory, \
                  combines the per-species MEROPS family counts into combined_summary.csv and \
                  writes Total, per-category and per-family rollups to summary_statistics.csv."
)]
pub struct Cli {
    #[command(flatten)]
    pub summarize: commands::summarize::SummarizeArgs,

    /// Verbosity level (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

impl Cli {
    /// Default log filter for the requested verbosity
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
