use crate::parsing::blocks::{Block, CodeOrigin, Document, ListKind};

/// Renders the structure of `doc` as an indented outline, one node per line.
///
/// ```text
/// List(unordered '-')
///   Item
///     Paragraph "a"
/// ```
pub fn normalize(doc: &Document) -> String {
    let mut out = String::new();
    write_document(&mut out, doc, 0);
    out
}

fn write_document(out: &mut String, doc: &Document, depth: usize) {
    for block in &doc.blocks {
        write_block(out, block, depth);
    }
}

fn write_block(out: &mut String, block: &Block, depth: usize) {
    let pad = "  ".repeat(depth);
    match block {
        Block::Heading(h) => {
            out.push_str(&format!("{pad}Heading({}) {:?}\n", h.level.get(), h.content));
        }
        Block::Paragraph(p) => out.push_str(&format!("{pad}Paragraph {:?}\n", p.content)),
        Block::Code(code) => {
            let origin = match code.origin() {
                CodeOrigin::Fence => "fence",
                CodeOrigin::Indent => "indent",
            };
            out.push_str(&format!("{pad}Code({origin}) {:?}\n", code.lines()));
        }
        Block::List(list) => {
            match list.kind() {
                ListKind::Unordered { symbol } => {
                    out.push_str(&format!("{pad}List(unordered {symbol:?})\n"));
                }
                ListKind::Ordered { start } => {
                    out.push_str(&format!("{pad}List(ordered {start})\n"));
                }
            }
            for item in list.items() {
                match item.nested() {
                    Some(nested) => {
                        out.push_str(&format!("{pad}  Item\n"));
                        write_document(out, nested, depth + 2);
                    }
                    None => out.push_str(&format!("{pad}  Item (unidentified)\n")),
                }
            }
        }
    }
}
