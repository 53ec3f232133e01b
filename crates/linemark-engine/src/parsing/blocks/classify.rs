//! Line classifiers.
//!
//! Each classifier looks at one line and, when it recognizes the shape it is
//! responsible for, performs exactly one change on the [`DocumentBuilder`]
//! before reporting [`Outcome::Matched`]. Classifiers that may see the last
//! line of input check [`LineCtx::is_last`] and close their construct
//! immediately instead of waiting for a line that never arrives.
//!
//! The `*_finish` classifiers are the exception: they always act (closing the
//! open construct) and then report [`Outcome::Pass`] so the line is handed on.

use crate::error::ParseError;

use super::{
    builder::DocumentBuilder,
    containers::OpenList,
    kinds::{AtxHeading, BlankLine, CodeFence, IndentedCode, ListMarker, SetextUnderline},
    types::ListKind,
};

/// One input line plus its position, for end-of-input lookahead.
#[derive(Debug, Clone, Copy)]
pub struct LineCtx<'a> {
    pub text: &'a str,
    pub index: usize,
    pub total: usize,
}

impl LineCtx<'_> {
    #[must_use]
    pub fn is_last(&self) -> bool {
        self.index + 1 == self.total
    }

    /// 1-based line number, for diagnostics.
    #[must_use]
    pub fn number(&self) -> usize {
        self.index + 1
    }
}

/// Result of offering a line to a classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The line was consumed; later classifiers are not tried.
    Matched,
    /// Try the next classifier.
    Pass,
}

impl From<bool> for Outcome {
    fn from(matched: bool) -> Self {
        if matched {
            Outcome::Matched
        } else {
            Outcome::Pass
        }
    }
}

/// A classifier: test the line and, on a match, apply its effect.
pub type Classifier = fn(&LineCtx<'_>, &mut DocumentBuilder) -> Outcome;

// Standard context

pub fn blank(line: &LineCtx<'_>, b: &mut DocumentBuilder) -> Outcome {
    let matched = BlankLine::is_blank(line.text);
    if matched {
        b.set_standard();
    }
    matched.into()
}

pub fn atx_heading(line: &LineCtx<'_>, b: &mut DocumentBuilder) -> Outcome {
    match AtxHeading::parse(line.text) {
        Some((level, content)) => {
            b.add_heading(level, content);
            Outcome::Matched
        }
        None => Outcome::Pass,
    }
}

pub fn fence_open(line: &LineCtx<'_>, b: &mut DocumentBuilder) -> Outcome {
    let matched = CodeFence::opens(line.text);
    if matched {
        b.start_code_fence();
    }
    matched.into()
}

pub fn indented_code(line: &LineCtx<'_>, b: &mut DocumentBuilder) -> Outcome {
    match IndentedCode::strip_opener(line.text) {
        Some(content) => {
            b.start_code_indent(content);
            Outcome::Matched
        }
        None => Outcome::Pass,
    }
}

pub fn bullet_list(line: &LineCtx<'_>, b: &mut DocumentBuilder) -> Outcome {
    match ListMarker::bullet(line.text) {
        Some((symbol, content)) => {
            b.start_list(ListKind::Unordered { symbol }, content);
            Outcome::Matched
        }
        None => Outcome::Pass,
    }
}

/// Opens an ordered list. A numeral too large for a counter is reported and
/// the line is left for the paragraph classifier.
pub fn ordered_list(line: &LineCtx<'_>, b: &mut DocumentBuilder) -> Outcome {
    let Some((numeral, content)) = ListMarker::ordered(line.text) else {
        return Outcome::Pass;
    };
    match numeral.parse::<u64>() {
        Ok(start) => {
            b.start_list(ListKind::Ordered { start }, content);
            Outcome::Matched
        }
        Err(_) => {
            b.record(ParseError::InvalidListStart {
                numeral: numeral.to_string(),
                line: line.number(),
            });
            Outcome::Pass
        }
    }
}

/// Fallback: anything else is a paragraph.
pub fn paragraph(line: &LineCtx<'_>, b: &mut DocumentBuilder) -> Outcome {
    b.add_paragraph(line.text);
    Outcome::Matched
}

// After text

fn setext(line: &LineCtx<'_>, b: &mut DocumentBuilder, ch: char) -> Outcome {
    let Some(level) = SetextUnderline::level_for(ch) else {
        return Outcome::Pass;
    };
    (SetextUnderline::matches(line.text, ch) && b.convert_last_paragraph(level)).into()
}

pub fn setext_level_one(line: &LineCtx<'_>, b: &mut DocumentBuilder) -> Outcome {
    setext(line, b, '=')
}

pub fn setext_level_two(line: &LineCtx<'_>, b: &mut DocumentBuilder) -> Outcome {
    setext(line, b, '-')
}

// Fenced code

pub fn fence_close(line: &LineCtx<'_>, b: &mut DocumentBuilder) -> Outcome {
    let matched = CodeFence::closes(line.text);
    if matched {
        b.end_code_fence();
    }
    matched.into()
}

/// Inside a fence every line is data.
pub fn fence_content(line: &LineCtx<'_>, b: &mut DocumentBuilder) -> Outcome {
    b.push_code_line(line.text);
    Outcome::Matched
}

// Indented code

pub fn indent_continuation(line: &LineCtx<'_>, b: &mut DocumentBuilder) -> Outcome {
    let Some(content) = IndentedCode::strip_continuation(line.text) else {
        return Outcome::Pass;
    };
    b.push_code_line(content);
    if line.is_last() {
        b.end_code_indent();
    }
    Outcome::Matched
}

/// A blank line does not end an indented block by itself, nor is it kept.
pub fn indent_blank(line: &LineCtx<'_>, b: &mut DocumentBuilder) -> Outcome {
    if !BlankLine::is_blank(line.text) {
        return Outcome::Pass;
    }
    if line.is_last() {
        b.end_code_indent();
    }
    Outcome::Matched
}

pub fn indent_finish(_line: &LineCtx<'_>, b: &mut DocumentBuilder) -> Outcome {
    b.end_code_indent();
    Outcome::Pass
}

// Lists

/// A line indented by the item indent belongs to the current item. With
/// nothing after the indent it is consumed without adding a body line and
/// without counting towards a blank run.
pub fn list_continuation(line: &LineCtx<'_>, b: &mut DocumentBuilder) -> Outcome {
    let Some(content) = ListMarker::strip_item_indent(line.text) else {
        return Outcome::Pass;
    };
    if !content.is_empty() {
        b.push_list_line(content);
    }
    if line.is_last() {
        b.end_list();
    }
    Outcome::Matched
}

pub fn list_item(line: &LineCtx<'_>, b: &mut DocumentBuilder) -> Outcome {
    let Some(content) = b.open_list().and_then(|open| open.item_content(line.text)) else {
        return Outcome::Pass;
    };
    b.add_list_item(content);
    if line.is_last() {
        b.end_list();
    }
    Outcome::Matched
}

/// Absorbs up to [`OpenList::MAX_BLANK_RUN`] consecutive blank lines. A
/// longer run is passed on so the list finishes on it.
pub fn list_blank(line: &LineCtx<'_>, b: &mut DocumentBuilder) -> Outcome {
    if !BlankLine::is_blank(line.text) {
        return Outcome::Pass;
    }
    if b.bump_blank_run() > OpenList::MAX_BLANK_RUN {
        return Outcome::Pass;
    }
    if line.is_last() {
        b.end_list();
    }
    Outcome::Matched
}

pub fn list_finish(_line: &LineCtx<'_>, b: &mut DocumentBuilder) -> Outcome {
    b.end_list();
    Outcome::Pass
}
