pub mod languages;
pub mod pipeline;
pub mod stars;
pub mod streak;

pub use languages::{aggregate_languages, language_stats_from_totals};
pub use pipeline::{BadgePipeline, DataSource, GenerationReport};
pub use stars::total_stars;
pub use streak::compute_streaks;
