pub mod error;
pub mod parsing;
pub mod render;

// Re-export key types for easier usage
pub use error::ParseError;
pub use parsing::{
    ParsedDoc,
    blocks::{
        Block, CodeBlock, CodeOrigin, Document, Heading, HeadingLevel, List, ListItem, ListKind,
        Paragraph,
    },
    parse_document, parse_lines, parse_str,
    rope::split_lines,
    try_parse_lines,
};
pub use render::{ClosingTag, HtmlOptions};
