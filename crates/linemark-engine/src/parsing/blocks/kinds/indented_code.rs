/// Code block introduced by a four-space indent.
pub struct IndentedCode;

impl IndentedCode {
    pub const INDENT: &'static str = "    ";

    /// Content of a line that opens an indented block: the indent must be
    /// followed by something other than whitespace.
    pub fn strip_opener(line: &str) -> Option<&str> {
        line.strip_prefix(Self::INDENT)
            .filter(|rest| !rest.trim().is_empty())
    }

    /// Content of a continuation line: exactly one indent is removed, any
    /// deeper indentation is kept. A bare indent is not a continuation.
    pub fn strip_continuation(line: &str) -> Option<&str> {
        line.strip_prefix(Self::INDENT).filter(|rest| !rest.is_empty())
    }
}
