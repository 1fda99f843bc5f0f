use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use reqwest::{header, Client, Response, StatusCode};

use crate::error::{Error, Result};
use crate::github::graphql::{
    into_contribution_stats, ContributionVariables, ContributionsData, GraphQlRequest,
    GraphQlResponse, CONTRIBUTIONS_QUERY,
};
use crate::github::paginator::Paginator;
use crate::github::rate_limiter::RateLimiter;
use crate::github::source::StatsSource;
use crate::models::{ContributionStats, Repository, UserProfile};

pub const GITHUB_API_BASE: &str = "https://api.github.com";
const REPOS_PER_PAGE: u32 = 100;

pub struct GitHubClient {
    client: Client,
    rate_limiter: RateLimiter,
    base_url: String,
    authenticated: bool,
}

impl GitHubClient {
    pub fn new(token: Option<&str>, timeout: Duration) -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        if let Some(token) = token {
            headers.insert(
                header::AUTHORIZATION,
                header::HeaderValue::from_str(&format!("Bearer {}", token))?,
            );
        }
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            "X-GitHub-Api-Version",
            header::HeaderValue::from_static("2022-11-28"),
        );
        headers.insert(
            header::USER_AGENT,
            header::HeaderValue::from_static("readme-stats/0.1"),
        );

        let client = Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            rate_limiter: RateLimiter::new(),
            base_url: GITHUB_API_BASE.to_string(),
            authenticated: token.is_some(),
        })
    }

    /// Points the client at another API root, e.g. a GitHub Enterprise host.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn rate_limiter(&self) -> &RateLimiter {
        &self.rate_limiter
    }

    async fn get(&self, url: &str) -> Result<Response> {
        self.rate_limiter.check()?;
        tracing::debug!("GET {}", url);

        let response = self.client.get(url).send().await?;
        self.rate_limiter.update_from_response(&response);
        Ok(response)
    }

    async fn error_from(context: &str, response: Response) -> Error {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Error::GitHubApi(format!("{}: {} - {}", context, status, body))
    }
}

#[async_trait]
impl StatsSource for GitHubClient {
    async fn fetch_user(&self, username: &str) -> Result<UserProfile> {
        let url = format!("{}/users/{}", self.base_url, username);
        tracing::info!("Fetching user data for {}", username);

        let response = self.get(&url).await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(Error::UserNotFound(username.to_string()));
        }
        if !response.status().is_success() {
            let context = format!("Failed to fetch user {}", username);
            return Err(Self::error_from(&context, response).await);
        }

        Ok(response.json().await?)
    }

    async fn fetch_repositories(&self, username: &str) -> Result<Vec<Repository>> {
        let url = format!(
            "{}/users/{}/repos?type=owner&sort=updated",
            self.base_url, username
        );
        tracing::info!("Fetching repositories for {}", username);

        let paginator = Paginator::new(&self.client, &self.rate_limiter);
        let repos: Vec<Repository> = paginator.fetch_all(&url, REPOS_PER_PAGE).await?;
        tracing::info!("Found {} repositories", repos.len());
        Ok(repos)
    }

    async fn fetch_languages(&self, languages_url: &str) -> Result<Vec<(String, u64)>> {
        let response = self.get(languages_url).await?;

        if !response.status().is_success() {
            return Err(Self::error_from("Failed to fetch languages", response).await);
        }

        let breakdown: serde_json::Map<String, serde_json::Value> = response.json().await?;
        Ok(breakdown
            .into_iter()
            .filter_map(|(name, bytes)| bytes.as_u64().map(|b| (name, b)))
            .collect())
    }

    async fn fetch_contribution_stats(&self, username: &str) -> Result<ContributionStats> {
        if !self.authenticated {
            return Err(Error::MissingToken);
        }
        self.rate_limiter.check()?;
        tracing::info!("Fetching contributions calendar for {}", username);

        let request = GraphQlRequest {
            query: CONTRIBUTIONS_QUERY,
            variables: ContributionVariables::trailing_year(username, Utc::now()),
        };

        let url = format!("{}/graphql", self.base_url);
        let response = self.client.post(&url).json(&request).send().await?;
        self.rate_limiter.update_from_response(&response);

        if !response.status().is_success() {
            return Err(Self::error_from("GraphQL request failed", response).await);
        }

        let envelope: GraphQlResponse<ContributionsData> = response.json().await?;
        into_contribution_stats(username, envelope)
    }
}
