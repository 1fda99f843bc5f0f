/// Colors and fonts shared by every card.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub background_start: String,
    pub background_end: String,
    pub title: String,
    pub text: String,
    pub value: String,
    pub icon: String,
    pub muted: String,
    pub hint: String,
    pub bar_track: String,
    /// Five-step heatmap ramp, from no contributions to most.
    pub contribution_levels: [String; 5],
    pub font_family: String,
}

impl Theme {
    pub fn contribution_color(&self, count: u32) -> &str {
        &self.contribution_levels[super::contribution_level(count)]
    }
}

impl Default for Theme {
    /// Dark "radical" palette with GitHub's heatmap greens.
    fn default() -> Self {
        Self {
            background_start: "#1a1a2e".to_string(),
            background_end: "#16213e".to_string(),
            title: "#fe428e".to_string(),
            text: "#ffffff".to_string(),
            value: "#a9fef7".to_string(),
            icon: "#f8d847".to_string(),
            muted: "#8b949e".to_string(),
            hint: "#888888".to_string(),
            bar_track: "#2d2d44".to_string(),
            contribution_levels: [
                "#161b22".to_string(),
                "#0e4429".to_string(),
                "#006d32".to_string(),
                "#26a641".to_string(),
                "#39d353".to_string(),
            ],
            font_family: "Arial, sans-serif".to_string(),
        }
    }
}
