use super::{
    builder::{DocumentBuilder, ParseState},
    classify::{self, Classifier, LineCtx, Outcome},
};

/// Classifiers of the idle context, in priority order. The last one always
/// matches, so a line offered to this chain is always consumed.
pub const STANDARD: &[Classifier] = &[
    classify::blank,
    classify::atx_heading,
    classify::fence_open,
    classify::indented_code,
    classify::bullet_list,
    classify::ordered_list,
    classify::paragraph,
];

const AFTER_TEXT: &[Classifier] = &[classify::setext_level_one, classify::setext_level_two];

const CODE_FENCE: &[Classifier] = &[classify::fence_close, classify::fence_content];

const CODE_INDENT: &[Classifier] = &[
    classify::indent_continuation,
    classify::indent_blank,
    classify::indent_finish,
];

const LIST: &[Classifier] = &[
    classify::list_continuation,
    classify::list_item,
    classify::list_blank,
    classify::list_finish,
];

/// The state-specific classifiers tried before falling back to [`STANDARD`].
pub fn for_state(state: ParseState) -> &'static [Classifier] {
    match state {
        ParseState::Standard => STANDARD,
        ParseState::AfterText => AFTER_TEXT,
        ParseState::CodeFence => CODE_FENCE,
        ParseState::CodeIndent => CODE_INDENT,
        ParseState::ListUnordered | ParseState::ListOrdered => LIST,
    }
}

/// Offers `line` to each classifier in order until one matches.
pub fn run(chain: &[Classifier], line: &LineCtx<'_>, b: &mut DocumentBuilder) -> Outcome {
    chain
        .iter()
        .map(|classifier| classifier(line, b))
        .find(|outcome| *outcome == Outcome::Matched)
        .unwrap_or(Outcome::Pass)
}

/// Classifies one line in the builder's current state.
///
/// A line no state-specific classifier consumes is reprocessed once through
/// [`STANDARD`], which always consumes it.
pub fn step(line: &LineCtx<'_>, b: &mut DocumentBuilder) {
    let state = b.state();
    if run(for_state(state), line, b) == Outcome::Pass && state != ParseState::Standard {
        run(STANDARD, line, b);
    }
}
