//! # Block Parsing
//!
//! A line-driven state machine that turns a sequence of lines into a
//! [`Document`](types::Document).
//!
//! ## Parsing Model
//!
//! 1. **Classification** (`classify`): each classifier recognizes one line
//!    shape and, on a match, applies one change to the builder.
//!
//! 2. **Chains** (`chains`): the builder's current [`ParseState`] selects an
//!    ordered chain of classifiers; the first match wins. A line left over by
//!    a state-specific chain is reprocessed once by the standard chain.
//!
//! 3. **Construction** (`builder`): `DocumentBuilder` owns the emitted blocks
//!    and the state. Closing a list parses every item body with a fresh
//!    builder, so nesting needs no special casing.
//!
//! ## Modules
//!
//! - **`types`**: the block model (`Document`, `Block`, `List`, `ListItem`, ...)
//! - **`kinds`**: per-construct syntax knowledge (fences, headings, markers)
//! - **`classify`**: the classifiers and `LineCtx`
//! - **`chains`**: per-state classifier chains and the `step` driver
//! - **`containers`**: `OpenList` bookkeeping for the list being collected
//! - **`builder`**: `DocumentBuilder` and `ParseState`
//!
//! ## Key Invariants
//!
//! - Blocks are kept in source order; only the last block is ever mutated
//! - Lists are never empty
//! - Fenced code blocks are raw zones: no classification inside
//! - Nesting depth is bounded only by the call stack

pub mod builder;
pub mod chains;
pub mod classify;
pub mod containers;
pub mod kinds;
pub mod types;

pub use builder::{DocumentBuilder, ParseState};
pub use classify::{LineCtx, Outcome};
pub use types::{
    Block, CodeBlock, CodeOrigin, Document, Heading, HeadingLevel, List, ListItem, ListKind,
    Paragraph,
};
