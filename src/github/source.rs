use async_trait::async_trait;

use crate::error::Result;
use crate::models::{ContributionStats, Repository, UserProfile};

/// Everything the badge pipeline needs from the hosting platform.
#[async_trait]
pub trait StatsSource: Send + Sync {
    async fn fetch_user(&self, username: &str) -> Result<UserProfile>;

    async fn fetch_repositories(&self, username: &str) -> Result<Vec<Repository>>;

    /// Byte counts per language, in the order the platform reports them.
    async fn fetch_languages(&self, languages_url: &str) -> Result<Vec<(String, u64)>>;

    async fn fetch_contribution_stats(&self, username: &str) -> Result<ContributionStats>;
}
