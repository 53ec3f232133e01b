use crate::{error::ParseError, parsing::ParsedDoc};

use super::{
    containers::OpenList,
    types::{
        Block, CodeBlock, CodeOrigin, Document, Heading, HeadingLevel, List, ListItem, ListKind,
        Paragraph,
    },
};

/// What kind of block the builder is in the middle of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseState {
    /// Idle: the next line starts a new block.
    #[default]
    Standard,
    /// A paragraph was just emitted and may still become a setext heading.
    AfterText,
    /// Inside a backtick fence.
    CodeFence,
    /// Inside a block opened by four-space indentation.
    CodeIndent,
    /// Collecting the items of a bullet list.
    ListUnordered,
    /// Collecting the items of a numbered list.
    ListOrdered,
}

/// Mutable context of one parse call.
///
/// Owns the blocks emitted so far, the current state and, while a list is
/// open, its bookkeeping. Every mutation goes through the methods below; the
/// most recently appended block is the only one that is ever changed.
#[derive(Debug, Default)]
pub struct DocumentBuilder {
    state: ParseState,
    list: Option<OpenList>,
    blocks: Vec<Block>,
    issues: Vec<ParseError>,
}

impl DocumentBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ParseState {
        self.state
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn set_standard(&mut self) {
        self.state = ParseState::Standard;
    }

    pub fn record(&mut self, issue: ParseError) {
        self.issues.push(issue);
    }

    // Headings and paragraphs

    pub fn add_heading(&mut self, level: HeadingLevel, content: &str) {
        self.blocks.push(Block::Heading(Heading {
            level,
            content: content.to_string(),
        }));
        self.state = ParseState::Standard;
    }

    pub fn add_paragraph(&mut self, content: &str) {
        self.blocks.push(Block::Paragraph(Paragraph {
            content: content.to_string(),
        }));
        self.state = ParseState::AfterText;
    }

    /// Turns the last block into a heading if it is a paragraph.
    ///
    /// Returns whether a conversion happened.
    pub fn convert_last_paragraph(&mut self, level: HeadingLevel) -> bool {
        match self.blocks.pop() {
            Some(Block::Paragraph(paragraph)) => {
                self.blocks
                    .push(Block::Heading(paragraph.into_heading(level)));
                self.state = ParseState::Standard;
                true
            }
            Some(other) => {
                self.blocks.push(other);
                false
            }
            None => false,
        }
    }

    // Code

    pub fn start_code_fence(&mut self) {
        self.blocks
            .push(Block::Code(CodeBlock::new(CodeOrigin::Fence)));
        self.state = ParseState::CodeFence;
    }

    pub fn end_code_fence(&mut self) {
        self.state = ParseState::Standard;
    }

    pub fn start_code_indent(&mut self, first_line: &str) {
        let mut code = CodeBlock::new(CodeOrigin::Indent);
        code.push_line(first_line);
        self.blocks.push(Block::Code(code));
        self.state = ParseState::CodeIndent;
    }

    pub fn push_code_line(&mut self, line: &str) {
        if let Some(Block::Code(code)) = self.blocks.last_mut() {
            code.push_line(line);
        }
    }

    pub fn end_code_indent(&mut self) {
        if let Some(Block::Code(code)) = self.blocks.last_mut() {
            code.trim_trailing_blank_lines();
        }
        self.state = ParseState::Standard;
    }

    // Lists

    pub fn open_list(&self) -> Option<&OpenList> {
        self.list.as_ref()
    }

    pub fn start_list(&mut self, kind: ListKind, content: &str) {
        self.blocks
            .push(Block::List(List::new(kind, ListItem::seeded(content))));
        self.list = Some(OpenList::new(kind));
        self.state = match kind {
            ListKind::Unordered { .. } => ParseState::ListUnordered,
            ListKind::Ordered { .. } => ParseState::ListOrdered,
        };
    }

    /// Starts another item.
    pub fn add_list_item(&mut self, content: &str) {
        self.reset_blank_run();
        if let Some(Block::List(list)) = self.blocks.last_mut() {
            list.push_item(ListItem::seeded(content));
        }
    }

    /// Appends a continuation line to the current item. Blank lines absorbed
    /// since the previous body line are not part of the body.
    pub fn push_list_line(&mut self, content: &str) {
        self.reset_blank_run();
        if let Some(Block::List(list)) = self.blocks.last_mut()
            && let Some(item) = list.last_item_mut()
        {
            item.push_line(content);
        }
    }

    fn reset_blank_run(&mut self) {
        if let Some(open) = self.list.as_mut() {
            open.reset_blank_run();
        }
    }

    /// Counts a blank line inside the open list and returns the run length.
    pub fn bump_blank_run(&mut self) -> usize {
        self.list.as_mut().map_or(0, OpenList::bump_blank_run)
    }

    /// Closes the open list and parses every item body into its own document.
    pub fn end_list(&mut self) {
        if self.list.take().is_some()
            && let Some(Block::List(list)) = self.blocks.last_mut()
        {
            let issues = list.identify();
            self.issues.extend(issues);
        }
        self.state = ParseState::Standard;
    }

    /// Closes whatever is still open at end of input.
    pub fn finish(mut self) -> ParsedDoc {
        match self.state {
            ParseState::ListUnordered | ParseState::ListOrdered => self.end_list(),
            ParseState::CodeIndent => self.end_code_indent(),
            ParseState::Standard | ParseState::AfterText | ParseState::CodeFence => {}
        }
        ParsedDoc {
            document: Document::new(self.blocks),
            issues: self.issues,
        }
    }
}
