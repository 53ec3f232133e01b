use crate::parsing::blocks::{Block, Document, HeadingLevel};

/// Validates parser output invariants, recursing into list items.
///
/// Asserts that:
/// - Every heading level is within `1..=6`
/// - Every list has at least one item
/// - Every list item has been identified into a nested document
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(doc: &Document) {
    for block in &doc.blocks {
        match block {
            Block::Heading(h) => assert!(
                (1..=HeadingLevel::MAX).contains(&h.level.get()),
                "heading level out of range: {:?}",
                h
            ),
            Block::List(list) => {
                assert!(!list.items().is_empty(), "empty list: {list:?}");
                for item in list.items() {
                    let nested = item
                        .nested()
                        .unwrap_or_else(|| panic!("list item never identified: {item:?}"));
                    check(nested);
                }
            }
            Block::Paragraph(_) | Block::Code(_) => {}
        }
    }
}
