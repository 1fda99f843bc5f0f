use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use readme_stats::{BadgePipeline, Config, GitHubClient, PipelineConfig, Theme};

#[derive(Parser, Debug)]
#[command(name = "readme-stats")]
#[command(version = "0.1.0")]
#[command(about = "Generate GitHub stats, top-language and streak SVG badges")]
struct Args {
    /// GitHub username (overrides USERNAME)
    #[arg(short, long)]
    username: Option<String>,

    /// Directory the SVG files are written to (overrides OUTPUT_DIR)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Per-request timeout in seconds (overrides REQUEST_TIMEOUT_SECS)
    #[arg(long)]
    timeout: Option<u64>,

    /// Write placeholders instead of sample data when a fetch fails
    #[arg(long)]
    no_sample_data: bool,
}

impl Args {
    fn apply(self, mut config: Config) -> Config {
        if let Some(username) = self.username {
            config.username = username;
        }
        if let Some(dir) = self.output_dir {
            config.output_dir = dir;
        }
        if let Some(secs) = self.timeout {
            config.request_timeout = Duration::from_secs(secs);
        }
        if self.no_sample_data {
            config.use_sample_data = false;
        }
        config
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("readme_stats=info".parse()?)
                .add_directive("reqwest=warn".parse()?),
        )
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    let args = Args::parse();
    let config = args.apply(Config::from_env()?);

    tracing::info!("Generating stats for: {}", config.username);

    let github = GitHubClient::new(config.github_token.as_deref(), config.request_timeout)?;
    let pipeline = BadgePipeline::new(github, Theme::default(), PipelineConfig::from(&config));

    // Partial failures never fail the run; the files are always written when
    // the output directory is usable.
    match pipeline.run(&config.username).await {
        Ok(report) => {
            for badge in &report.badges {
                tracing::info!(
                    "{} ({}, {} data)",
                    badge.path.display(),
                    if badge.generated { "generated" } else { "placeholder" },
                    badge.source
                );
            }
            tracing::info!(
                "Generation complete: {}/{} SVGs generated successfully",
                report.generated_count(),
                report.total()
            );
        }
        Err(e) => tracing::error!("Could not write badges to {}: {}", config.output_dir.display(), e),
    }

    Ok(())
}
