pub mod languages;

pub use languages::{language_color, UNKNOWN_LANGUAGE_COLOR};
