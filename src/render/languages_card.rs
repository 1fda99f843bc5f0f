use super::{card_open, escape_xml, render_placeholder, Badge, Theme};
use crate::models::LanguageStat;

pub const LANGUAGES_WIDTH: u32 = 400;
pub const MAX_BAR_WIDTH: f64 = 300.0;
const HEADER_HEIGHT: u32 = 45;
const ROW_HEIGHT: u32 = 35;
const PADDING: u32 = 25;

pub fn render_languages_card(languages: &[LanguageStat], theme: &Theme) -> Badge {
    if languages.is_empty() {
        return render_placeholder("Language data unavailable", theme);
    }

    let height = languages_card_height(languages.len());
    let mut parts = vec![
        card_open(LANGUAGES_WIDTH, height, "langGrad", theme),
        format!(
            r#"  <text x="25" y="30" fill="{}" font-family="{}" font-size="18" font-weight="bold">Most Used Languages</text>"#,
            theme.title, theme.font_family
        ),
    ];

    for (i, lang) in languages.iter().enumerate() {
        let y = HEADER_HEIGHT + i as u32 * ROW_HEIGHT;
        parts.push(format!(
            r#"  <g transform="translate(25, {y})">
    <circle cx="8" cy="10" r="6" fill="{color}"/>
    <text x="22" y="14" fill="{text}" font-family="{font}" font-size="12">{name}</text>
    <text x="350" y="14" fill="{value}" font-family="{font}" font-size="12" text-anchor="end">{pct:.1}%</text>
    <rect x="0" y="20" width="{max:.0}" height="8" fill="{track}" rx="4"/>
    <rect x="0" y="20" width="{bar:.2}" height="8" fill="{color}" rx="4"/>
  </g>"#,
            y = y,
            color = escape_xml(&lang.color),
            text = theme.text,
            font = theme.font_family,
            name = escape_xml(&lang.name),
            value = theme.value,
            pct = lang.percentage,
            max = MAX_BAR_WIDTH,
            track = theme.bar_track,
            bar = bar_width(lang.percentage),
        ));
    }

    parts.push("</svg>\n".to_string());
    Badge::Generated(parts.join("\n"))
}

pub fn languages_card_height(count: usize) -> u32 {
    HEADER_HEIGHT + count as u32 * ROW_HEIGHT + PADDING
}

/// Fill width for a percentage, clamped to the track.
pub fn bar_width(percentage: f64) -> f64 {
    (percentage / 100.0 * MAX_BAR_WIDTH).clamp(0.0, MAX_BAR_WIDTH)
}
