//! # Rendering
//!
//! Two views of a finished [`Document`](crate::parsing::blocks::Document):
//!
//! - **`text`**: a normalized plain-text form, as a flat sequence of lines
//! - **`html`**: one HTML fragment per top-level block
//!
//! Rendering only reads the document, so rendering twice gives the same output.

pub mod html;
pub mod text;

pub use html::{ClosingTag, HtmlOptions};
