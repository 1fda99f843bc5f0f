//! SVG badge rendering.
//!
//! Every renderer is a pure function of its inputs and a [`Theme`]. Missing
//! or empty input yields a [`Badge::Placeholder`] rather than an error.

pub mod languages_card;
pub mod placeholder;
pub mod stats_card;
pub mod streak_card;
pub mod theme;

pub use languages_card::render_languages_card;
pub use placeholder::render_placeholder;
pub use stats_card::render_stats_card;
pub use streak_card::{contribution_level, render_streak_card};
pub use theme::Theme;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Badge {
    Generated(String),
    Placeholder(String),
}

impl Badge {
    pub fn svg(&self) -> &str {
        match self {
            Badge::Generated(svg) | Badge::Placeholder(svg) => svg,
        }
    }

    pub fn is_generated(&self) -> bool {
        matches!(self, Badge::Generated(_))
    }
}

/// Escapes text for use in SVG element content and attribute values.
pub fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Formats a count with comma thousands separators, e.g. `12,345`.
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Opening `<svg>` tag plus the card background gradient.
fn card_open(width: impl std::fmt::Display, height: u32, gradient_id: &str, theme: &Theme) -> String {
    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">
  <defs>
    <linearGradient id="{id}" x1="0%" y1="0%" x2="100%" y2="100%">
      <stop offset="0%" style="stop-color:{start};stop-opacity:1" />
      <stop offset="100%" style="stop-color:{end};stop-opacity:1" />
    </linearGradient>
  </defs>
  <rect width="{w}" height="{h}" fill="url(#{id})" rx="10"/>"#,
        w = width,
        h = height,
        id = gradient_id,
        start = theme.background_start,
        end = theme.background_end,
    )
}
