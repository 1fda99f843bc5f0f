use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::{Error, Result};
use crate::github::StatsSource;
use crate::models::{ContributionStats, Repository, UserProfile};

pub fn languages_url(name: &str) -> String {
    format!("fake://repos/{}/languages", name)
}

pub fn repo(name: &str, fork: bool, stars: u64) -> Repository {
    Repository {
        name: name.to_string(),
        fork,
        stargazers_count: stars,
        languages_url: Some(languages_url(name)),
    }
}

pub fn user(login: &str) -> UserProfile {
    UserProfile {
        login: login.to_string(),
        name: None,
        followers: 12,
        public_repos: 3,
    }
}

/// In-memory [`StatsSource`]; anything not configured fails like a 500.
#[derive(Default)]
pub struct FakeSource {
    user: Option<UserProfile>,
    repositories: Option<Vec<Repository>>,
    languages: HashMap<String, Vec<(String, u64)>>,
    contributions: Option<ContributionStats>,
    requested: Mutex<Vec<String>>,
}

impl FakeSource {
    pub fn with_user(mut self, user: UserProfile) -> Self {
        self.user = Some(user);
        self
    }

    pub fn with_repositories(mut self, repositories: Vec<Repository>) -> Self {
        self.repositories = Some(repositories);
        self
    }

    pub fn with_languages(mut self, repo_name: &str, breakdown: &[(&str, u64)]) -> Self {
        self.languages.insert(
            languages_url(repo_name),
            breakdown.iter().map(|(n, b)| (n.to_string(), *b)).collect(),
        );
        self
    }

    pub fn with_contributions(mut self, contributions: ContributionStats) -> Self {
        self.contributions = Some(contributions);
        self
    }

    pub fn languages_requested(&self, repo_name: &str) -> bool {
        let url = languages_url(repo_name);
        self.requested
            .lock()
            .map(|r| r.contains(&url))
            .unwrap_or(false)
    }

    fn unavailable(what: &str) -> Error {
        Error::GitHubApi(format!("{}: 500 Internal Server Error", what))
    }
}

#[async_trait]
impl StatsSource for FakeSource {
    async fn fetch_user(&self, username: &str) -> Result<UserProfile> {
        self.user
            .clone()
            .ok_or_else(|| Error::UserNotFound(username.to_string()))
    }

    async fn fetch_repositories(&self, _username: &str) -> Result<Vec<Repository>> {
        self.repositories
            .clone()
            .ok_or_else(|| Self::unavailable("repositories"))
    }

    async fn fetch_languages(&self, languages_url: &str) -> Result<Vec<(String, u64)>> {
        if let Ok(mut requested) = self.requested.lock() {
            requested.push(languages_url.to_string());
        }
        self.languages
            .get(languages_url)
            .cloned()
            .ok_or_else(|| Self::unavailable(languages_url))
    }

    async fn fetch_contribution_stats(&self, _username: &str) -> Result<ContributionStats> {
        self.contributions.clone().ok_or(Error::MissingToken)
    }
}
