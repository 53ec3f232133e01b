use std::iter;

use crate::parsing::blocks::{Block, CodeBlock, Document, List, ListItem};

/// Indent in front of every code line.
const CODE_INDENT: &str = "    ";
/// Indent in front of an item's marker.
const MARKER_INDENT: &str = "    ";
/// Indent in front of an item's lines after the first.
const ITEM_INDENT: &str = "      ";

impl Document {
    /// The normalized text form, flattened to one entry per output line.
    pub fn render_text(&self) -> Vec<String> {
        self.blocks.iter().flat_map(Block::render_text).collect()
    }

    /// [`Document::render_text`] joined with newlines.
    pub fn to_text(&self) -> String {
        self.render_text().join("\n")
    }
}

impl Block {
    pub fn render_text(&self) -> Vec<String> {
        match self {
            Block::Heading(h) => vec![String::new(), h.content.clone(), String::new()],
            Block::Paragraph(p) => vec![p.content.clone()],
            Block::Code(code) => code.render_text(),
            Block::List(list) => list.render_text(),
        }
    }
}

impl CodeBlock {
    /// Every stored line indented by four spaces, between two blank lines.
    pub fn render_text(&self) -> Vec<String> {
        iter::once(String::new())
            .chain(self.lines().iter().map(|line| format!("{CODE_INDENT}{line}")))
            .chain(iter::once(String::new()))
            .collect()
    }
}

impl List {
    pub fn render_text(&self) -> Vec<String> {
        self.items()
            .iter()
            .enumerate()
            .flat_map(|(index, item)| item.render_text(&self.symbol(index)))
            .collect()
    }
}

impl ListItem {
    /// The nested document's lines, the first behind `symbol`.
    ///
    /// An identified item with an empty body renders nothing; an item that
    /// was never identified renders its bare marker.
    pub fn render_text(&self, symbol: &str) -> Vec<String> {
        let Some(nested) = self.nested() else {
            return vec![format!("{MARKER_INDENT}{symbol} ")];
        };
        nested
            .render_text()
            .into_iter()
            .enumerate()
            .map(|(index, line)| {
                if index == 0 {
                    format!("{MARKER_INDENT}{symbol} {line}")
                } else {
                    format!("{ITEM_INDENT}{line}")
                }
            })
            .collect()
    }
}
