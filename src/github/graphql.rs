use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::models::{ContributionCalendar, ContributionStats};

pub const CONTRIBUTIONS_QUERY: &str = r#"
query($login: String!, $from: DateTime!, $to: DateTime!) {
  user(login: $login) {
    contributionsCollection(from: $from, to: $to) {
      totalCommitContributions
      totalPullRequestContributions
      totalIssueContributions
      totalPullRequestReviewContributions
      contributionCalendar {
        totalContributions
        weeks {
          contributionDays {
            date
            contributionCount
            color
          }
        }
      }
    }
  }
}
"#;

#[derive(Debug, Serialize)]
pub struct GraphQlRequest<'a> {
    pub query: &'a str,
    pub variables: ContributionVariables,
}

#[derive(Debug, Serialize)]
pub struct ContributionVariables {
    pub login: String,
    pub from: DateTime<Utc>,
    pub to: DateTime<Utc>,
}

impl ContributionVariables {
    /// Variables for the trailing twelve months ending at `now`.
    pub fn trailing_year(login: &str, now: DateTime<Utc>) -> Self {
        Self {
            login: login.to_string(),
            from: now - Duration::days(365),
            to: now,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct GraphQlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Option<Vec<GraphQlError>>,
}

#[derive(Debug, Deserialize)]
pub struct GraphQlError {
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct ContributionsData {
    pub user: Option<ContributionsUser>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionsUser {
    pub contributions_collection: ContributionsCollection,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionsCollection {
    #[serde(default)]
    pub total_commit_contributions: u64,
    #[serde(default)]
    pub total_pull_request_contributions: u64,
    #[serde(default)]
    pub total_issue_contributions: u64,
    #[serde(default)]
    pub total_pull_request_review_contributions: u64,
    pub contribution_calendar: ContributionCalendar,
}

impl From<ContributionsCollection> for ContributionStats {
    fn from(collection: ContributionsCollection) -> Self {
        Self {
            calendar: collection.contribution_calendar,
            commits: collection.total_commit_contributions,
            pull_requests: collection.total_pull_request_contributions,
            issues: collection.total_issue_contributions,
            reviews: collection.total_pull_request_review_contributions,
        }
    }
}

/// Turns a raw GraphQL envelope into contribution stats, rejecting reported
/// errors and a missing user.
pub fn into_contribution_stats(
    username: &str,
    response: GraphQlResponse<ContributionsData>,
) -> Result<ContributionStats> {
    if let Some(errors) = response.errors.filter(|e| !e.is_empty()) {
        let messages: Vec<_> = errors.into_iter().map(|e| e.message).collect();
        return Err(Error::GraphQl(messages.join("; ")));
    }

    response
        .data
        .and_then(|data| data.user)
        .map(|user| user.contributions_collection.into())
        .ok_or_else(|| Error::UserNotFound(username.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_trailing_year_window() {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        let vars = ContributionVariables::trailing_year("octocat", now);
        assert_eq!(vars.to, now);
        assert_eq!((vars.to - vars.from).num_days(), 365);
    }

    #[test]
    fn test_reported_errors_are_rejected() {
        let response: GraphQlResponse<ContributionsData> = serde_json::from_str(
            r#"{"data": null, "errors": [{"message": "Could not resolve to a User"}]}"#,
        )
        .unwrap();
        match into_contribution_stats("ghost", response) {
            Err(Error::GraphQl(msg)) => assert!(msg.contains("Could not resolve")),
            other => panic!("expected GraphQL error, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_user_is_not_found() {
        let response: GraphQlResponse<ContributionsData> =
            serde_json::from_str(r#"{"data": {"user": null}}"#).unwrap();
        assert!(matches!(
            into_contribution_stats("ghost", response),
            Err(Error::UserNotFound(_))
        ));
    }

    #[test]
    fn test_collection_maps_to_stats() {
        let response: GraphQlResponse<ContributionsData> = serde_json::from_str(
            r#"{"data": {"user": {"contributionsCollection": {
                "totalCommitContributions": 120,
                "totalPullRequestContributions": 14,
                "totalIssueContributions": 5,
                "totalPullRequestReviewContributions": 9,
                "contributionCalendar": {"totalContributions": 148, "weeks": []}
            }}}}"#,
        )
        .unwrap();
        let stats = into_contribution_stats("octocat", response).unwrap();
        assert_eq!(stats.commits, 120);
        assert_eq!(stats.pull_requests, 14);
        assert_eq!(stats.issues, 5);
        assert_eq!(stats.reviews, 9);
        assert_eq!(stats.calendar.total_contributions, 148);
    }
}
