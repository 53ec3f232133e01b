use xi_rope::Rope;

/// Splits loaded text into the line sequence the parser consumes.
///
/// Uses `lines_raw` so a final newline does not produce a phantom empty
/// line; the `\n` and one preceding `\r` are then stripped from each line.
pub fn split_lines(text: &str) -> Vec<String> {
    let rope = Rope::from(text);
    rope.lines_raw(..)
        .map(|raw| {
            let raw: &str = &raw;
            let line = raw.strip_suffix('\n').unwrap_or(raw);
            line.strip_suffix('\r').unwrap_or(line).to_string()
        })
        .collect()
}
