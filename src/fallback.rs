//! Deterministic stand-in data used when live fetches fail.
//!
//! Everything here is sample data and is logged as such by the pipeline.

use chrono::{Datelike, Duration, NaiveDate};

use crate::models::{
    ContributionCalendar, ContributionDay, ContributionStats, ContributionWeek, LanguageStat,
    UserProfile,
};
use crate::taxonomy::language_color;

pub const SAMPLE_WEEKS: usize = 20;

const SAMPLE_LANGUAGES: &[(&str, f64)] = &[
    ("Python", 35.0),
    ("JavaScript", 25.0),
    ("TypeScript", 15.0),
    ("HTML", 10.0),
    ("CSS", 8.0),
    ("Shell", 7.0),
];

pub fn sample_user(username: &str) -> UserProfile {
    UserProfile {
        login: username.to_string(),
        name: None,
        followers: 0,
        public_repos: 0,
    }
}

/// Fixed six-language mix summing to 100%. Byte counts mirror the percentages.
pub fn sample_languages() -> Vec<LanguageStat> {
    SAMPLE_LANGUAGES
        .iter()
        .map(|(name, percentage)| LanguageStat {
            name: name.to_string(),
            bytes: (*percentage * 1000.0) as u64,
            percentage: *percentage,
            color: language_color(name).to_string(),
        })
        .collect()
}

/// Twenty weeks of synthetic activity, oldest week first. Weeks run Sunday to
/// Saturday like GitHub's calendar, so the last week is partial and ends on
/// `today`.
pub fn sample_contributions(today: NaiveDate) -> ContributionStats {
    let days_into_week = i64::from(today.weekday().num_days_from_sunday());
    let start = today - Duration::days(days_into_week + (SAMPLE_WEEKS as i64 - 1) * 7);

    let mut total = 0u64;
    let weeks = (0..SAMPLE_WEEKS)
        .map(|w| {
            let contribution_days = (0..7)
                .map(|d| (d, start + Duration::days((w * 7 + d) as i64)))
                .take_while(|(_, date)| *date <= today)
                .map(|(d, date)| {
                    let count = ((w * 7 + d * 3) % 10) as u32;
                    total += u64::from(count);
                    ContributionDay {
                        date: date.format("%Y-%m-%d").to_string(),
                        contribution_count: count,
                        color: None,
                    }
                })
                .collect();
            ContributionWeek { contribution_days }
        })
        .collect();

    ContributionStats {
        calendar: ContributionCalendar {
            total_contributions: total,
            weeks,
        },
        commits: 420,
        pull_requests: 36,
        issues: 18,
        reviews: 24,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    #[test]
    fn test_sample_languages_sum_to_hundred() {
        let langs = sample_languages();
        assert_eq!(langs.len(), 6);
        let sum: f64 = langs.iter().map(|l| l.percentage).sum();
        assert!((sum - 100.0).abs() < 0.01);
        assert_eq!(langs[0].name, "Python");
        assert_eq!(langs[0].color, "#3572A5");
    }

    #[test]
    fn test_sample_calendar_shape_and_anchor() {
        // A Sunday: the last week holds a single day.
        let today = NaiveDate::from_ymd_opt(2024, 6, 30).unwrap();
        let stats = sample_contributions(today);
        let weeks = &stats.calendar.weeks;

        assert_eq!(weeks.len(), SAMPLE_WEEKS);
        assert!(weeks[..SAMPLE_WEEKS - 1]
            .iter()
            .all(|w| w.contribution_days.len() == 7));
        assert_eq!(weeks[SAMPLE_WEEKS - 1].contribution_days.len(), 1);

        let last = weeks.last().unwrap().contribution_days.last().unwrap();
        assert_eq!(last.date, "2024-06-30");
        let first = weeks[0].contribution_days[0].parsed_date().unwrap();
        assert_eq!(first, NaiveDate::from_ymd_opt(2024, 2, 18).unwrap());
        assert_eq!(first.weekday(), Weekday::Sun);
    }

    #[test]
    fn test_sample_rows_follow_weekdays() {
        for day in 1..=7 {
            let today = NaiveDate::from_ymd_opt(2024, 7, day).unwrap();
            let stats = sample_contributions(today);
            let weeks = &stats.calendar.weeks;

            for week in weeks {
                for (row, d) in week.contribution_days.iter().enumerate() {
                    let date = d.parsed_date().unwrap();
                    assert_eq!(date.weekday().num_days_from_sunday() as usize, row);
                }
            }
            let last = weeks.last().unwrap().contribution_days.last().unwrap();
            assert_eq!(last.parsed_date(), Some(today));
        }
    }

    #[test]
    fn test_sample_calendar_is_deterministic() {
        let today = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let a = sample_contributions(today);
        let b = sample_contributions(today);
        assert_eq!(a, b);

        let counts: Vec<u32> = a.calendar.weeks[1]
            .contribution_days
            .iter()
            .map(|d| d.contribution_count)
            .collect();
        assert_eq!(counts, vec![7, 0, 3, 6, 9, 2, 5]);

        let summed: u64 = a.calendar.days().map(|d| u64::from(d.contribution_count)).sum();
        assert_eq!(a.calendar.total_contributions, summed);
        assert_eq!(a.commits, 420);
    }
}
