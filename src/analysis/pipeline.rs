use std::fmt;
use std::path::PathBuf;

use chrono::{Local, NaiveDate};

use crate::analysis::languages::aggregate_languages;
use crate::analysis::stars::total_stars;
use crate::analysis::streak::compute_streaks;
use crate::config::PipelineConfig;
use crate::error::Result;
use crate::fallback::{sample_contributions, sample_languages, sample_user};
use crate::github::StatsSource;
use crate::models::{ContributionStats, UserProfile};
use crate::output::{ensure_dir, write_badge};
use crate::render::{
    render_languages_card, render_stats_card, render_streak_card, Badge, Theme,
};

pub const STATS_FILE: &str = "stats.svg";
pub const LANGUAGES_FILE: &str = "top-langs.svg";
pub const STREAK_FILE: &str = "streak.svg";

/// Where the data behind a badge came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSource {
    Live,
    Sample,
    Unavailable,
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::Live => write!(f, "live"),
            DataSource::Sample => write!(f, "sample"),
            DataSource::Unavailable => write!(f, "unavailable"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct BadgeOutcome {
    pub path: PathBuf,
    pub generated: bool,
    pub source: DataSource,
}

#[derive(Debug, Clone, Default)]
pub struct GenerationReport {
    pub badges: Vec<BadgeOutcome>,
}

impl GenerationReport {
    pub fn generated_count(&self) -> usize {
        self.badges.iter().filter(|b| b.generated).count()
    }

    pub fn total(&self) -> usize {
        self.badges.len()
    }
}

pub struct BadgePipeline<S> {
    source: S,
    theme: Theme,
    config: PipelineConfig,
}

impl<S: StatsSource> BadgePipeline<S> {
    pub fn new(source: S, theme: Theme, config: PipelineConfig) -> Self {
        Self {
            source,
            theme,
            config,
        }
    }

    pub async fn run(&self, username: &str) -> Result<GenerationReport> {
        self.run_on(username, Local::now().date_naive()).await
    }

    /// Runs the whole fetch/render/write pass. `today` anchors the sample
    /// calendar. Fetch failures degrade to sample data or placeholders; only
    /// failures writing the output propagate.
    pub async fn run_on(&self, username: &str, today: NaiveDate) -> Result<GenerationReport> {
        ensure_dir(&self.config.output_dir)?;

        // Step 1: Profile
        let (user, user_source) = self.fetch_user(username).await;

        // Step 2: Repositories, stars and languages
        let repos = match self.source.fetch_repositories(username).await {
            Ok(repos) => repos,
            Err(e) => {
                tracing::warn!("Could not fetch repositories for {}: {}", username, e);
                Vec::new()
            }
        };
        let stars = total_stars(&repos);

        let mut languages = aggregate_languages(&self.source, &repos).await;
        let languages_source = if !languages.is_empty() {
            DataSource::Live
        } else if self.config.use_sample_data {
            tracing::warn!("No language data, using sample language mix");
            languages = sample_languages();
            DataSource::Sample
        } else {
            DataSource::Unavailable
        };

        // Step 3: Contributions and streaks
        let (contributions, contributions_source) = self.fetch_contributions(username, today).await;
        let streaks = contributions
            .as_ref()
            .map(|c| compute_streaks(&c.calendar))
            .unwrap_or_default();
        tracing::info!(
            "Streaks: current={} longest={} active_days={}",
            streaks.current,
            streaks.longest,
            streaks.active_days
        );

        // Step 4: Render and write
        let stats_source = match (user_source, contributions_source) {
            (DataSource::Unavailable, _) => DataSource::Unavailable,
            (DataSource::Sample, _) | (_, DataSource::Sample) => DataSource::Sample,
            _ => DataSource::Live,
        };

        let stats = render_stats_card(user.as_ref(), stars, contributions.as_ref(), &self.theme);
        let langs = render_languages_card(&languages, &self.theme);
        let streak = render_streak_card(
            contributions.as_ref().map(|c| &c.calendar),
            &streaks,
            &self.theme,
        );

        let mut report = GenerationReport::default();
        for (file_name, badge, source) in [
            (STATS_FILE, stats, stats_source),
            (LANGUAGES_FILE, langs, languages_source),
            (STREAK_FILE, streak, contributions_source),
        ] {
            report.badges.push(self.write(file_name, &badge, source)?);
        }

        Ok(report)
    }

    async fn fetch_user(&self, username: &str) -> (Option<UserProfile>, DataSource) {
        match self.source.fetch_user(username).await {
            Ok(user) => (Some(user), DataSource::Live),
            Err(e) => {
                tracing::warn!("Could not fetch user {}: {}", username, e);
                if self.config.use_sample_data {
                    tracing::warn!("Using sample profile for {}", username);
                    (Some(sample_user(username)), DataSource::Sample)
                } else {
                    (None, DataSource::Unavailable)
                }
            }
        }
    }

    async fn fetch_contributions(
        &self,
        username: &str,
        today: NaiveDate,
    ) -> (Option<ContributionStats>, DataSource) {
        match self.source.fetch_contribution_stats(username).await {
            Ok(stats) => (Some(stats), DataSource::Live),
            Err(e) => {
                tracing::warn!("Could not fetch contributions for {}: {}", username, e);
                if self.config.use_sample_data {
                    tracing::warn!("Using sample contribution calendar");
                    (Some(sample_contributions(today)), DataSource::Sample)
                } else {
                    (None, DataSource::Unavailable)
                }
            }
        }
    }

    fn write(&self, file_name: &str, badge: &Badge, source: DataSource) -> Result<BadgeOutcome> {
        let path = write_badge(&self.config.output_dir, file_name, badge)?;
        Ok(BadgeOutcome {
            path,
            generated: badge.is_generated(),
            source,
        })
    }
}
