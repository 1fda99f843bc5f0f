use chrono::NaiveDate;

use crate::models::{ContributionCalendar, StreakSummary};

/// Derives current/longest streaks and the number of active days.
///
/// Days are flattened across weeks and re-sorted by date, since the
/// calendar's own ordering is only trusted for layout. `current` is the
/// streak ending at the latest day present in the data, so it is 0 when that
/// day had no contributions.
pub fn compute_streaks(calendar: &ContributionCalendar) -> StreakSummary {
    let mut days: Vec<(NaiveDate, bool)> = Vec::new();
    for day in calendar.days() {
        match day.parsed_date() {
            Some(date) => days.push((date, day.is_active())),
            None => tracing::warn!("Skipping contribution day with invalid date: {}", day.date),
        }
    }
    days.sort_by_key(|(date, _)| *date);

    let mut summary = StreakSummary::default();
    let mut previous: Option<(NaiveDate, bool)> = None;

    for (date, active) in days {
        if active {
            summary.current = match previous {
                Some((prev_date, true)) if (date - prev_date).num_days() == 1 => {
                    summary.current + 1
                }
                _ => 1,
            };
            summary.longest = summary.longest.max(summary.current);
            summary.active_days += 1;
        } else {
            summary.current = 0;
        }
        previous = Some((date, active));
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ContributionDay, ContributionWeek};

    fn day(date: &str, count: u32) -> ContributionDay {
        ContributionDay {
            date: date.to_string(),
            contribution_count: count,
            color: None,
        }
    }

    fn calendar(weeks: Vec<Vec<ContributionDay>>) -> ContributionCalendar {
        ContributionCalendar {
            total_contributions: 0,
            weeks: weeks
                .into_iter()
                .map(|contribution_days| ContributionWeek { contribution_days })
                .collect(),
        }
    }

    #[test]
    fn test_streak_broken_by_trailing_inactive_day() {
        let cal = calendar(vec![vec![
            day("2024-05-01", 2),
            day("2024-05-02", 1),
            day("2024-05-03", 0),
        ]]);
        let summary = compute_streaks(&cal);
        assert_eq!(summary.current, 0);
        assert_eq!(summary.longest, 2);
        assert_eq!(summary.active_days, 2);
    }

    #[test]
    fn test_gap_between_active_days_restarts_streak() {
        let cal = calendar(vec![vec![day("2024-01-01", 1), day("2024-01-03", 5)]]);
        let summary = compute_streaks(&cal);
        assert_eq!(summary.current, 1);
        assert_eq!(summary.longest, 1);
        assert_eq!(summary.active_days, 2);
    }

    #[test]
    fn test_days_are_sorted_across_weeks() {
        // Weeks delivered newest first.
        let cal = calendar(vec![
            vec![day("2024-02-04", 1), day("2024-02-05", 1)],
            vec![day("2024-02-01", 1), day("2024-02-02", 1), day("2024-02-03", 1)],
        ]);
        let summary = compute_streaks(&cal);
        assert_eq!(summary.current, 5);
        assert_eq!(summary.longest, 5);
        assert_eq!(summary.active_days, 5);
    }

    #[test]
    fn test_longest_keeps_earlier_run() {
        let cal = calendar(vec![vec![
            day("2024-03-01", 1),
            day("2024-03-02", 1),
            day("2024-03-03", 1),
            day("2024-03-04", 0),
            day("2024-03-05", 3),
            day("2024-03-06", 3),
        ]]);
        let summary = compute_streaks(&cal);
        assert_eq!(summary.current, 2);
        assert_eq!(summary.longest, 3);
        assert_eq!(summary.active_days, 5);
    }

    #[test]
    fn test_invalid_dates_are_skipped() {
        let cal = calendar(vec![vec![day("not-a-date", 4), day("2024-01-10", 1)]]);
        let summary = compute_streaks(&cal);
        assert_eq!(summary.active_days, 1);
        assert_eq!(summary.current, 1);
    }

    #[test]
    fn test_empty_calendar() {
        assert_eq!(compute_streaks(&calendar(vec![])), StreakSummary::default());
    }
}
