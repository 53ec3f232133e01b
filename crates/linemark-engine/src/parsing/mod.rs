pub mod blocks;
pub mod rope;
pub mod snapshot;

#[cfg(test)]
mod tests;

use blocks::{DocumentBuilder, LineCtx, chains};

use crate::error::ParseError;

pub use blocks::Document;

/// A finished parse: the document plus every recoverable issue observed,
/// including those from nested list bodies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedDoc {
    pub document: Document,
    pub issues: Vec<ParseError>,
}

impl ParsedDoc {
    /// The document, or the first issue if there was any.
    pub fn into_result(self) -> Result<Document, ParseError> {
        match self.issues.into_iter().next() {
            Some(issue) => Err(issue),
            None => Ok(self.document),
        }
    }
}

/// Parses a sequence of lines in one forward pass.
///
/// Never fails: unrecognized lines become paragraphs. Lines must not contain
/// newlines; see [`rope::split_lines`].
pub fn parse_lines<S: AsRef<str>>(lines: &[S]) -> ParsedDoc {
    let mut builder = DocumentBuilder::new();
    let total = lines.len();

    for (index, text) in lines.iter().enumerate() {
        let line = LineCtx {
            text: text.as_ref(),
            index,
            total,
        };
        chains::step(&line, &mut builder);
    }

    builder.finish()
}

/// Like [`parse_lines`], discarding issues.
pub fn parse_document<S: AsRef<str>>(lines: &[S]) -> Document {
    parse_lines(lines).document
}

/// Strict variant of [`parse_lines`]: fails with the first issue observed.
///
/// # Errors
/// Returns [`ParseError::InvalidListStart`] when an ordered list marker's
/// numeral cannot be represented.
pub fn try_parse_lines<S: AsRef<str>>(lines: &[S]) -> Result<Document, ParseError> {
    parse_lines(lines).into_result()
}

/// Splits `text` into lines and parses them.
pub fn parse_str(text: &str) -> ParsedDoc {
    parse_lines(rope::split_lines(text).as_slice())
}
