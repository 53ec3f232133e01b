/// Backtick fence delimiting a raw code block.
///
/// Everything between an opening and a closing fence is data: no other
/// classification happens inside.
pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";
    /// Fences may be indented by at most this many spaces.
    pub const MAX_INDENT: usize = 3;

    /// Returns the text after a leading indent of at most [`Self::MAX_INDENT`] spaces.
    fn strip_indent(line: &str) -> Option<&str> {
        let rest = line.trim_start_matches(' ');
        (line.len() - rest.len() <= Self::MAX_INDENT).then_some(rest)
    }

    /// Three backticks, optionally followed by anything (e.g. an info string).
    pub fn opens(line: &str) -> bool {
        Self::strip_indent(line).is_some_and(|rest| rest.starts_with(Self::BACKTICKS))
    }

    /// Exactly three backticks and nothing after them.
    pub fn closes(line: &str) -> bool {
        Self::strip_indent(line) == Some(Self::BACKTICKS)
    }
}
