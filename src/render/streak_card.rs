use std::collections::HashSet;

use chrono::Datelike;

use super::{card_open, escape_xml, format_count, render_placeholder, Badge, Theme};
use crate::models::{ContributionCalendar, StreakSummary};

pub const CELL_SIZE: u32 = 12;
pub const CELL_GAP: u32 = 3;
const CELL_TOTAL: u32 = CELL_SIZE + CELL_GAP;
const LEFT_MARGIN: u32 = 35;
const TOP_MARGIN: u32 = 35;
const RIGHT_MARGIN: u32 = 20;
/// Legend row plus streak caption below the grid.
const FOOTER_HEIGHT: u32 = 70;

const DAY_LABELS: [&str; 7] = ["", "Mon", "", "Wed", "", "Fri", ""];
const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Heatmap bucket for a day's count: 0, 1–3, 4–6, 7–9, 10+.
pub fn contribution_level(count: u32) -> usize {
    match count {
        0 => 0,
        1..=3 => 1,
        4..=6 => 2,
        7..=9 => 3,
        _ => 4,
    }
}

pub fn streak_card_width(weeks: usize) -> u32 {
    LEFT_MARGIN + weeks as u32 * CELL_TOTAL + RIGHT_MARGIN
}

pub fn streak_card_height() -> u32 {
    TOP_MARGIN + 7 * CELL_TOTAL + FOOTER_HEIGHT
}

/// Contribution heatmap with month/weekday labels, legend and streak caption.
///
/// Cells keep the calendar's own week/day order.
pub fn render_streak_card(
    calendar: Option<&ContributionCalendar>,
    streaks: &StreakSummary,
    theme: &Theme,
) -> Badge {
    let Some(calendar) = calendar else {
        return render_placeholder("Contribution data unavailable", theme);
    };
    if calendar.weeks.is_empty() {
        return render_placeholder("No contribution data", theme);
    }

    let width = streak_card_width(calendar.weeks.len());
    let height = streak_card_height();
    let label_style = format!(
        r#"fill="{}" font-family="{}" font-size="10""#,
        theme.muted, theme.font_family
    );

    let mut parts = vec![
        card_open(width, height, "streakGrad", theme),
        format!(
            r#"  <text x="{}" y="20" fill="{}" font-family="{}" font-size="14" font-weight="bold" text-anchor="middle">{} contributions in the last year</text>"#,
            f64::from(width) / 2.0,
            theme.title,
            theme.font_family,
            format_count(calendar.total_contributions)
        ),
    ];

    for (i, label) in DAY_LABELS.iter().enumerate() {
        if label.is_empty() {
            continue;
        }
        let y = TOP_MARGIN + i as u32 * CELL_TOTAL + CELL_SIZE - 2;
        parts.push(format!(r#"  <text x="5" y="{}" {}>{}</text>"#, y, label_style, label));
    }

    let mut months_added = HashSet::new();
    for (week_idx, week) in calendar.weeks.iter().enumerate() {
        let Some(date) = week.contribution_days.first().and_then(|d| d.parsed_date()) else {
            continue;
        };
        if date.day() > 7 || !months_added.insert((date.year(), date.month())) {
            continue;
        }
        let x = LEFT_MARGIN + week_idx as u32 * CELL_TOTAL;
        parts.push(format!(
            r#"  <text x="{}" y="{}" {}>{}</text>"#,
            x,
            TOP_MARGIN - 8,
            label_style,
            MONTH_NAMES[date.month0() as usize]
        ));
    }

    for (week_idx, week) in calendar.weeks.iter().enumerate() {
        for (day_idx, day) in week.contribution_days.iter().enumerate() {
            let color = day
                .color
                .as_deref()
                .filter(|c| !c.is_empty())
                .unwrap_or_else(|| theme.contribution_color(day.contribution_count));
            parts.push(format!(
                r#"  <rect x="{}" y="{}" width="{s}" height="{s}" fill="{}" rx="2"/>"#,
                LEFT_MARGIN + week_idx as u32 * CELL_TOTAL,
                TOP_MARGIN + day_idx as u32 * CELL_TOTAL,
                escape_xml(color),
                s = CELL_SIZE,
            ));
        }
    }

    let legend_y = TOP_MARGIN + 7 * CELL_TOTAL + 15;
    // Right-aligned, but never left of the grid on narrow calendars.
    let less_x = width.saturating_sub(120).max(LEFT_MARGIN);
    let legend_x = less_x + 25;
    parts.push(format!(
        r#"  <text x="{}" y="{}" {}>Less</text>"#,
        less_x, legend_y, label_style
    ));
    for (i, color) in theme.contribution_levels.iter().enumerate() {
        parts.push(format!(
            r#"  <rect x="{}" y="{}" width="12" height="12" fill="{}" rx="2"/>"#,
            legend_x + i as u32 * 15,
            legend_y - 10,
            color
        ));
    }
    parts.push(format!(
        r#"  <text x="{}" y="{}" {}>More</text>"#,
        legend_x + 75,
        legend_y,
        label_style
    ));

    parts.push(format!(
        r#"  <text x="{}" y="{}" fill="{}" font-family="{}" font-size="11">{}</text>"#,
        LEFT_MARGIN,
        legend_y + 30,
        theme.value,
        theme.font_family,
        streak_caption(streaks)
    ));

    parts.push("</svg>\n".to_string());
    Badge::Generated(parts.join("\n"))
}

fn streak_caption(streaks: &StreakSummary) -> String {
    format!(
        "Current streak: {} | Longest streak: {} | Active days: {}",
        days(streaks.current),
        days(streaks.longest),
        format_count(u64::from(streaks.active_days))
    )
}

fn days(n: u32) -> String {
    if n == 1 {
        "1 day".to_string()
    } else {
        format!("{} days", n)
    }
}
