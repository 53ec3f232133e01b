use std::sync::OnceLock;

use regex::Regex;

/// List item markers and the indentation that continues an item.
pub struct ListMarker;

impl ListMarker {
    /// Body lines of an item are indented by this much; it is stripped
    /// before the body is parsed on its own.
    pub const ITEM_INDENT: &'static str = "  ";

    fn bullet_regex() -> &'static Regex {
        static BULLET_REGEX: OnceLock<Regex> = OnceLock::new();
        BULLET_REGEX.get_or_init(|| {
            Regex::new(r"^ {0,3}([-+*])(?: (.*))?$").expect("Invalid bullet marker regex")
        })
    }

    fn ordered_regex() -> &'static Regex {
        static ORDERED_REGEX: OnceLock<Regex> = OnceLock::new();
        ORDERED_REGEX.get_or_init(|| {
            Regex::new(r"^ {0,3}([0-9]+)\.(?: (.*))?$").expect("Invalid ordered marker regex")
        })
    }

    /// `-`, `+` or `*` followed by a space and content, or by nothing.
    ///
    /// Returns the symbol and the content after it.
    pub fn bullet(line: &str) -> Option<(char, &str)> {
        let caps = Self::bullet_regex().captures(line)?;
        let symbol = caps.get(1)?.as_str().chars().next()?;
        let content = caps.get(2).map_or("", |m| m.as_str());
        Some((symbol, content))
    }

    /// Digits and a `.` followed by a space and content, or by nothing.
    ///
    /// Returns the digits as written and the content after them. The digits
    /// are not converted here: they may not fit in a counter.
    pub fn ordered(line: &str) -> Option<(&str, &str)> {
        let caps = Self::ordered_regex().captures(line)?;
        let numeral = caps.get(1)?.as_str();
        let content = caps.get(2).map_or("", |m| m.as_str());
        Some((numeral, content))
    }

    /// Content of a line indented as an item continuation.
    pub fn strip_item_indent(line: &str) -> Option<&str> {
        line.strip_prefix(Self::ITEM_INDENT)
    }
}
