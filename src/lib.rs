pub mod config;
pub mod error;
pub mod models;
pub mod github;
pub mod taxonomy;
pub mod analysis;
pub mod render;
pub mod fallback;
pub mod output;

#[cfg(test)]
pub(crate) mod test_support;

pub use config::{Config, PipelineConfig};
pub use error::{Error, Result};
pub use github::{GitHubClient, StatsSource};
pub use analysis::BadgePipeline;
pub use render::Theme;
