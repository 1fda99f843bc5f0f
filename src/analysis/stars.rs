use crate::models::Repository;

/// Stars across the user's own repositories; forks don't count.
pub fn total_stars(repositories: &[Repository]) -> u64 {
    repositories
        .iter()
        .filter(|r| !r.fork)
        .map(|r| r.stargazers_count)
        .sum()
}
