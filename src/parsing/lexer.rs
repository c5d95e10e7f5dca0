//! Preprocessing of raw screenplay text into paragraph blocks

use tracing::trace;

use crate::compile;

/// Normalize raw text and split it into blocks on blank lines. Indentation
/// and line ending conventions are discarded here, so every later stage
/// sees `\n` only and no leading tabs.
pub fn preprocess(content: &str) -> Vec<String> {
    let text = standardize_line_endings(content);
    let text = isolate_boneyard(&text);
    let text = text.trim_matches('\n');
    let text = strip_indentation(text);

    let blocks: Vec<String> = compile!(r"\n{2,}")
        .split(&text)
        .filter(|block| !block.is_empty())
        .map(str::to_string)
        .collect();

    trace!(blocks = blocks.len());
    blocks
}

fn standardize_line_endings(content: &str) -> String {
    compile!(r"\r\n|\r")
        .replace_all(content, "\n")
        .into_owned()
}

/// A boneyard delimiter alone on a line becomes a block of its own, even if
/// the author didn't put blank lines around it.
fn isolate_boneyard(content: &str) -> String {
    compile!(r"(?m)^(/\*|\*/)$")
        .replace_all(content, "\n${1}\n")
        .into_owned()
}

/// Leading tabs, or a leading run of three or more spaces, are removed from
/// every line. Exactly two spaces is left alone; on a line by itself that is
/// a deliberate line break.
fn strip_indentation(content: &str) -> String {
    compile!(r"(?m)^(?:\t+| {3,})")
        .replace_all(content, "")
        .into_owned()
}
