/// Recoverable anomalies observed while parsing.
///
/// Parsing itself never fails: a line that trips one of these is demoted to
/// paragraph text and the issue is reported alongside the finished document.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// An ordered list marker whose numeral does not fit in a list counter.
    #[error("ordered list start `{numeral}` on line {line} is out of range")]
    InvalidListStart {
        /// The digits as written in the source.
        numeral: String,
        /// 1-based line number within the line sequence being parsed.
        line: usize,
    },
}
