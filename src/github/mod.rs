pub mod client;
pub mod graphql;
pub mod paginator;
pub mod rate_limiter;
pub mod source;

pub use client::GitHubClient;
pub use paginator::Paginator;
pub use rate_limiter::RateLimiter;
pub use source::StatsSource;
