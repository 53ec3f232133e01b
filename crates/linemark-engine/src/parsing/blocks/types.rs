use serde::Serialize;

use crate::error::ParseError;

/// An ordered sequence of blocks in source order.
///
/// Built by a single parse pass and treated as read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Document {
    pub blocks: Vec<Block>,
}

impl Document {
    pub fn new(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

/// Heading level, always within `1..=6`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct HeadingLevel(u8);

impl HeadingLevel {
    pub const H1: Self = Self(1);
    pub const H2: Self = Self(2);
    pub const MAX: u8 = 6;

    /// Returns `None` when `level` is outside `1..=6`.
    pub fn new(level: u8) -> Option<Self> {
        (1..=Self::MAX).contains(&level).then_some(Self(level))
    }

    #[must_use]
    pub fn get(self) -> u8 {
        self.0
    }
}

/// One structural unit of a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    Heading(Heading),
    Paragraph(Paragraph),
    Code(CodeBlock),
    List(List),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Heading {
    pub level: HeadingLevel,
    pub content: String,
}

/// A single line of plain text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Paragraph {
    pub content: String,
}

impl Paragraph {
    /// Reinterprets this paragraph as a heading, keeping its content.
    pub fn into_heading(self, level: HeadingLevel) -> Heading {
        Heading {
            level,
            content: self.content,
        }
    }
}

/// How a code block was opened, which decides how it is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CodeOrigin {
    /// Opened by a backtick fence; lines are kept exactly as written.
    Fence,
    /// Opened by 4-space indentation; trailing blank lines are trimmed on close.
    Indent,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodeBlock {
    origin: CodeOrigin,
    lines: Vec<String>,
}

impl CodeBlock {
    pub fn new(origin: CodeOrigin) -> Self {
        Self {
            origin,
            lines: Vec::new(),
        }
    }

    pub fn origin(&self) -> CodeOrigin {
        self.origin
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn push_line(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// Drops whitespace-only lines from the end of an indented block.
    ///
    /// Fenced blocks are left untouched.
    pub fn trim_trailing_blank_lines(&mut self) {
        if self.origin != CodeOrigin::Indent {
            return;
        }
        while self
            .lines
            .last()
            .is_some_and(|line| line.trim().is_empty())
        {
            self.lines.pop();
        }
    }
}

/// Whether a list is bulleted or numbered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ListKind {
    /// Bullet list; `symbol` is the marker that opened it (`-`, `+` or `*`).
    Unordered { symbol: char },
    /// Numbered list; `start` is the numeral of the first marker.
    Ordered { start: u64 },
}

/// A non-empty sequence of list items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct List {
    kind: ListKind,
    items: Vec<ListItem>,
}

impl List {
    /// Lists always start with their first item.
    pub fn new(kind: ListKind, first: ListItem) -> Self {
        Self {
            kind,
            items: vec![first],
        }
    }

    pub fn kind(&self) -> ListKind {
        self.kind
    }

    #[must_use]
    pub fn is_ordered(&self) -> bool {
        matches!(self.kind, ListKind::Ordered { .. })
    }

    /// The first ordinal of an ordered list.
    pub fn start(&self) -> Option<u64> {
        match self.kind {
            ListKind::Ordered { start } => Some(start),
            ListKind::Unordered { .. } => None,
        }
    }

    pub fn items(&self) -> &[ListItem] {
        &self.items
    }

    pub fn push_item(&mut self, item: ListItem) {
        self.items.push(item);
    }

    pub fn last_item_mut(&mut self) -> Option<&mut ListItem> {
        self.items.last_mut()
    }

    /// Marker shown in front of the item at `index` when rendering as text.
    ///
    /// Numbering follows `start + index`, never the numerals in the source.
    pub fn symbol(&self, index: usize) -> String {
        match self.kind {
            ListKind::Unordered { .. } => "*".to_string(),
            ListKind::Ordered { start } => {
                let offset = u64::try_from(index).unwrap_or(u64::MAX);
                format!("{}.", start.saturating_add(offset))
            }
        }
    }

    /// Parses every item body into its nested document.
    ///
    /// Returns the issues raised by the nested parses, in item order.
    pub fn identify(&mut self) -> Vec<ParseError> {
        self.items.iter_mut().flat_map(ListItem::identify).collect()
    }
}

/// One list entry: its de-indented body lines and, once identified, the
/// document parsed from them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ListItem {
    lines: Vec<String>,
    nested: Option<Document>,
}

impl ListItem {
    pub fn new() -> Self {
        Self::default()
    }

    /// A new item whose body starts with the text after its marker, if any.
    pub fn seeded(content: &str) -> Self {
        let mut item = Self::new();
        if !content.is_empty() {
            item.push_line(content);
        }
        item
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn push_line(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// `None` until [`ListItem::identify`] has run.
    pub fn nested(&self) -> Option<&Document> {
        self.nested.as_ref()
    }

    /// Runs a fresh parse over the body lines and stores the result.
    ///
    /// The nested document is computed once; later calls are no-ops.
    pub fn identify(&mut self) -> Vec<ParseError> {
        if self.nested.is_some() {
            return Vec::new();
        }
        let parsed = crate::parsing::parse_lines(self.lines.as_slice());
        self.nested = Some(parsed.document);
        parsed.issues
    }
}
