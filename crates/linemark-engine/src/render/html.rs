use std::borrow::Cow;

use crate::parsing::blocks::{Block, Document, List, ListItem};

/// Form of closing tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClosingTag {
    /// `<\p>`, the established output of this renderer.
    #[default]
    Backslash,
    /// Conventional `</p>`.
    Slash,
}

impl ClosingTag {
    fn close(self, tag: &str) -> String {
        match self {
            ClosingTag::Backslash => format!("<\\{tag}>"),
            ClosingTag::Slash => format!("</{tag}>"),
        }
    }
}

/// Options for [`Document::render_html_with`].
///
/// The default reproduces the established output byte for byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HtmlOptions {
    pub closing_tag: ClosingTag,
    /// Escape `<`, `>` and `&` in text content.
    pub escape_text: bool,
}

impl HtmlOptions {
    fn text<'a>(&self, content: &'a str) -> Cow<'a, str> {
        if self.escape_text {
            html_escape::encode_text(content)
        } else {
            Cow::Borrowed(content)
        }
    }

    fn element(&self, tag: &str, content: &str) -> String {
        format!(
            "<{tag}>{}{}",
            self.text(content),
            self.closing_tag.close(tag)
        )
    }
}

impl Document {
    /// One fragment per top-level block, with default options.
    pub fn render_html(&self) -> Vec<String> {
        self.render_html_with(&HtmlOptions::default())
    }

    pub fn render_html_with(&self, options: &HtmlOptions) -> Vec<String> {
        self.blocks
            .iter()
            .map(|block| block.render_html_with(options))
            .collect()
    }

    /// [`Document::render_html`] joined with newlines.
    pub fn to_html(&self) -> String {
        self.render_html().join("\n")
    }
}

impl Block {
    pub fn render_html(&self) -> String {
        self.render_html_with(&HtmlOptions::default())
    }

    pub fn render_html_with(&self, options: &HtmlOptions) -> String {
        match self {
            Block::Heading(h) => options.element(&format!("h{}", h.level.get()), &h.content),
            Block::Paragraph(p) => options.element("p", &p.content),
            Block::Code(code) => options.element("code", &code.lines().join("\n")),
            Block::List(list) => list.render_html_with(options),
        }
    }
}

impl List {
    /// The items' fragments, concatenated in order.
    pub fn render_html_with(&self, options: &HtmlOptions) -> String {
        self.items()
            .iter()
            .map(|item| item.render_html_with(options))
            .collect()
    }
}

impl ListItem {
    /// The nested document's fragments concatenated; empty before
    /// identification.
    pub fn render_html_with(&self, options: &HtmlOptions) -> String {
        self.nested()
            .map(|doc| doc.render_html_with(options).concat())
            .unwrap_or_default()
    }
}
