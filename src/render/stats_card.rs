use super::{card_open, escape_xml, format_count, render_placeholder, Badge, Theme};
use crate::models::{ContributionStats, UserProfile};

pub const STATS_WIDTH: u32 = 400;
const ROW_TOP: u32 = 50;
const ROW_SPACING: u32 = 30;
const BOTTOM_PADDING: u32 = 20;
const VALUE_X: u32 = 150;

struct StatRow {
    icon: &'static str,
    label: &'static str,
    value: Option<u64>,
}

/// Overall stats card. Contribution rows read `N/A` when counts are absent.
pub fn render_stats_card(
    user: Option<&UserProfile>,
    total_stars: u64,
    contributions: Option<&ContributionStats>,
    theme: &Theme,
) -> Badge {
    let Some(user) = user else {
        return render_placeholder("User data unavailable", theme);
    };

    let rows = [
        StatRow {
            icon: "⭐",
            label: "Total Stars:",
            value: Some(total_stars),
        },
        StatRow {
            icon: "📦",
            label: "Public Repos:",
            value: Some(user.public_repos),
        },
        StatRow {
            icon: "👥",
            label: "Followers:",
            value: Some(user.followers),
        },
        StatRow {
            icon: "📝",
            label: "Commits:",
            value: contributions.map(|c| c.commits),
        },
        StatRow {
            icon: "🔀",
            label: "Pull Requests:",
            value: contributions.map(|c| c.pull_requests),
        },
        StatRow {
            icon: "❗",
            label: "Issues Opened:",
            value: contributions.map(|c| c.issues),
        },
        StatRow {
            icon: "👀",
            label: "Reviews:",
            value: contributions.map(|c| c.reviews),
        },
    ];

    let height = stats_card_height(rows.len());
    let mut parts = vec![
        card_open(STATS_WIDTH, height, "statsGrad", theme),
        format!(
            r#"  <text x="25" y="35" fill="{}" font-family="{}" font-size="18" font-weight="bold">{}'s GitHub Stats</text>"#,
            theme.title,
            theme.font_family,
            escape_xml(&user.login)
        ),
    ];

    for (i, row) in rows.iter().enumerate() {
        let value = row.value.map(format_count).unwrap_or_else(|| "N/A".to_string());
        parts.push(format!(
            r#"  <g transform="translate(25, {y})">
    <text y="20" fill="{icon_color}" font-family="{font}" font-size="14">{icon}</text>
    <text x="25" y="20" fill="{text}" font-family="{font}" font-size="14">{label}</text>
    <text x="{value_x}" y="20" fill="{value_color}" font-family="{font}" font-size="14" font-weight="bold">{value}</text>
  </g>"#,
            y = ROW_TOP + i as u32 * ROW_SPACING,
            icon_color = theme.icon,
            font = theme.font_family,
            icon = row.icon,
            text = theme.text,
            label = row.label,
            value_x = VALUE_X,
            value_color = theme.value,
            value = value,
        ));
    }

    parts.push("</svg>\n".to_string());
    Badge::Generated(parts.join("\n"))
}

pub fn stats_card_height(rows: usize) -> u32 {
    ROW_TOP + rows as u32 * ROW_SPACING + BOTTOM_PADDING
}
