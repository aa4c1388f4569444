pub mod aggregator;
pub mod code;
pub mod collector;
pub mod combiner;
pub mod config;
pub mod merger;
pub mod pipeline;

pub use config::Config;
pub use pipeline::Pipeline;
