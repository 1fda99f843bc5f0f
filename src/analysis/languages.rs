use std::collections::HashMap;

use indicatif::{ProgressBar, ProgressStyle};

use crate::github::StatsSource;
use crate::models::{LanguageStat, Repository};
use crate::taxonomy::language_color;

pub const TOP_LANGUAGES: usize = 6;

/// Sums language bytes over non-fork repositories and keeps the top six.
///
/// Breakdowns are fetched one repository at a time. A repository whose
/// breakdown cannot be fetched contributes nothing.
pub async fn aggregate_languages<S>(source: &S, repositories: &[Repository]) -> Vec<LanguageStat>
where
    S: StatsSource + ?Sized,
{
    let own: Vec<_> = repositories
        .iter()
        .filter(|r| !r.fork)
        .filter_map(|r| r.languages_url.as_deref().map(|url| (r.name.as_str(), url)))
        .collect();

    tracing::info!("Aggregating language data across {} repositories", own.len());

    let pb = ProgressBar::new(own.len() as u64);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} repos")
    {
        pb.set_style(style.progress_chars("#>-"));
    }

    let mut totals = LanguageTotals::default();
    for (name, url) in own {
        match source.fetch_languages(url).await {
            Ok(breakdown) => totals.add_all(breakdown),
            Err(e) => tracing::debug!("Skipping languages for {}: {}", name, e),
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    let stats = language_stats_from_totals(totals.into_vec());
    tracing::info!("Found {} languages", stats.len());
    stats
}

/// Top languages by bytes with percentages of the top-six subtotal.
///
/// `totals` must be in first-encounter order: equal byte counts keep that
/// order because the sort is stable.
pub fn language_stats_from_totals(mut totals: Vec<(String, u64)>) -> Vec<LanguageStat> {
    totals.sort_by(|a, b| b.1.cmp(&a.1));
    totals.truncate(TOP_LANGUAGES);

    let subtotal: u64 = totals.iter().map(|(_, bytes)| bytes).sum();
    if subtotal == 0 {
        return Vec::new();
    }

    totals
        .into_iter()
        .map(|(name, bytes)| LanguageStat {
            color: language_color(&name).to_string(),
            percentage: bytes as f64 / subtotal as f64 * 100.0,
            name,
            bytes,
        })
        .collect()
}

/// Byte totals per language that remember first-encounter order.
#[derive(Default)]
struct LanguageTotals {
    index: HashMap<String, usize>,
    entries: Vec<(String, u64)>,
}

impl LanguageTotals {
    fn add_all(&mut self, breakdown: Vec<(String, u64)>) {
        for (name, bytes) in breakdown {
            match self.index.get(&name) {
                Some(&i) => self.entries[i].1 += bytes,
                None => {
                    self.index.insert(name.clone(), self.entries.len());
                    self.entries.push((name, bytes));
                }
            }
        }
    }

    fn into_vec(self) -> Vec<(String, u64)> {
        self.entries
    }
}
