use std::sync::OnceLock;

use regex::Regex;

use crate::parsing::blocks::types::HeadingLevel;

/// `#`-prefixed heading: up to 3 spaces, 1 to 6 `#`, then the content.
pub struct AtxHeading;

impl AtxHeading {
    fn regex() -> &'static Regex {
        static ATX_REGEX: OnceLock<Regex> = OnceLock::new();
        ATX_REGEX.get_or_init(|| Regex::new(r"^ {0,3}(#{1,6}) *(.*)$").expect("Invalid ATX regex"))
    }

    /// Returns the level and content of a heading line.
    ///
    /// A seventh `#` is not part of the marker; it stays in the content.
    pub fn parse(line: &str) -> Option<(HeadingLevel, &str)> {
        let caps = Self::regex().captures(line)?;
        let marker = caps.get(1)?.as_str();
        let level = HeadingLevel::new(u8::try_from(marker.len()).ok()?)?;
        let content = caps.get(2).map_or("", |m| m.as_str());
        Some((level, content))
    }
}

/// Underline that turns the paragraph above it into a heading.
///
/// `=` gives level 1, `-` gives level 2.
pub struct SetextUnderline;

impl SetextUnderline {
    fn regex() -> &'static Regex {
        static SETEXT_REGEX: OnceLock<Regex> = OnceLock::new();
        SETEXT_REGEX
            .get_or_init(|| Regex::new(r"^ {0,3}(=+|-+) *$").expect("Invalid setext regex"))
    }

    /// Whether `line` is an underline made only of `ch`.
    pub fn matches(line: &str, ch: char) -> bool {
        Self::regex()
            .captures(line)
            .and_then(|caps| caps.get(1))
            .is_some_and(|run| run.as_str().starts_with(ch))
    }

    /// Level of the heading produced by an underline of `ch`.
    pub fn level_for(ch: char) -> Option<HeadingLevel> {
        match ch {
            '=' => Some(HeadingLevel::H1),
            '-' => Some(HeadingLevel::H2),
            _ => None,
        }
    }
}
