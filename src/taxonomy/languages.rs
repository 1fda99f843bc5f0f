/// Color used for languages missing from the table.
pub const UNKNOWN_LANGUAGE_COLOR: &str = "#858585";

const LANGUAGE_COLORS: &[(&str, &str)] = &[
    ("Python", "#3572A5"),
    ("JavaScript", "#f1e05a"),
    ("TypeScript", "#2b7489"),
    ("HTML", "#e34c26"),
    ("CSS", "#563d7c"),
    ("Java", "#b07219"),
    ("C++", "#f34b7d"),
    ("C", "#555555"),
    ("C#", "#178600"),
    ("Go", "#00ADD8"),
    ("Rust", "#dea584"),
    ("Ruby", "#701516"),
    ("PHP", "#4F5D95"),
    ("Swift", "#ffac45"),
    ("Kotlin", "#F18E33"),
    ("Shell", "#89e051"),
    ("Jupyter Notebook", "#DA5B0B"),
    ("MATLAB", "#e16737"),
    ("R", "#198CE7"),
    ("Scala", "#c22d40"),
];

/// Linguist-style color for a language name, exact match.
pub fn language_color(name: &str) -> &'static str {
    LANGUAGE_COLORS
        .iter()
        .find(|(lang, _)| *lang == name)
        .map(|(_, color)| *color)
        .unwrap_or(UNKNOWN_LANGUAGE_COLOR)
}
