/// Blank lines carry no content; they only end or pad other constructs.
pub struct BlankLine;

impl BlankLine {
    /// A line is blank when it is empty or whitespace only.
    pub fn is_blank(line: &str) -> bool {
        line.trim().is_empty()
    }
}
