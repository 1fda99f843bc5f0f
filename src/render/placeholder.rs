use super::{escape_xml, Badge, Theme};

pub const PLACEHOLDER_WIDTH: u32 = 400;
pub const PLACEHOLDER_HEIGHT: u32 = 150;

pub fn render_placeholder(message: &str, theme: &Theme) -> Badge {
    let svg = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">
  <rect width="{w}" height="{h}" fill="{bg}" rx="10"/>
  <text x="200" y="75" fill="{text}" font-family="{font}" font-size="16" text-anchor="middle" dominant-baseline="middle">{message}</text>
  <text x="200" y="100" fill="{hint}" font-family="{font}" font-size="12" text-anchor="middle" dominant-baseline="middle">Please try again later</text>
</svg>
"#,
        w = PLACEHOLDER_WIDTH,
        h = PLACEHOLDER_HEIGHT,
        bg = theme.background_start,
        text = theme.text,
        hint = theme.hint,
        font = theme.font_family,
        message = escape_xml(message),
    );
    Badge::Placeholder(svg)
}
