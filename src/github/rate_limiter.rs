use std::sync::Mutex;

use chrono::Utc;
use reqwest::Response;

use crate::error::{Error, Result};

/// Remaining budget below which every response logs a warning.
const LOW_BUDGET_WARNING: u32 = 10;

/// Tracks the REST/GraphQL rate-limit budget reported by GitHub.
///
/// The run makes at most one attempt per resource, so this never sleeps: once
/// the budget is exhausted further calls fail fast with
/// [`Error::RateLimited`] and the caller falls back.
pub struct RateLimiter {
    state: Mutex<RateLimitState>,
}

#[derive(Debug, Clone, Copy)]
struct RateLimitState {
    remaining: Option<u32>,
    reset_epoch: Option<i64>,
}

impl RateLimiter {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(RateLimitState {
                remaining: None,
                reset_epoch: None,
            }),
        }
    }

    pub fn check(&self) -> Result<()> {
        let state = self.snapshot();
        if state.remaining != Some(0) {
            return Ok(());
        }

        let now = Utc::now().timestamp();
        match state.reset_epoch {
            Some(reset) if reset > now => Err(Error::RateLimited((reset - now) as u64)),
            _ => Ok(()),
        }
    }

    pub fn update_from_response(&self, response: &Response) {
        let header = |name: &str| {
            response
                .headers()
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string)
        };
        let remaining = header("x-ratelimit-remaining").and_then(|v| v.parse().ok());
        let reset = header("x-ratelimit-reset").and_then(|v| v.parse().ok());
        self.record(remaining, reset);
    }

    pub fn remaining(&self) -> Option<u32> {
        self.snapshot().remaining
    }

    fn record(&self, remaining: Option<u32>, reset_epoch: Option<i64>) {
        let Some(remaining) = remaining else {
            return;
        };

        if let Ok(mut state) = self.state.lock() {
            state.remaining = Some(remaining);
            if reset_epoch.is_some() {
                state.reset_epoch = reset_epoch;
            }
        }

        if remaining < LOW_BUDGET_WARNING {
            tracing::warn!("GitHub rate limit nearly exhausted: {} requests left", remaining);
        }
    }

    fn snapshot(&self) -> RateLimitState {
        match self.state.lock() {
            Ok(state) => *state,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new()
    }
}
