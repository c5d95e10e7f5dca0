//! Inline markup within a token's text: emphasis, notes, line breaks

use regex::{Captures, Regex};

use crate::compile;

// Stand-ins for escaped markers while emphasis is being resolved. Drawn
// from the Private Use Area so they can't collide with real text.
const STAR: char = '\u{E000}';
const UNDERSCORE: char = '\u{E001}';

pub const LINE_BREAK: &str = "<br />";

/// Resolve inline markup in a token's text, returning the sanitized HTML
/// fragment. Unbalanced markers are left as they are.
pub fn lex(text: &str) -> String {
    let text = compile!(r"(?s)\[\[(.+?)\]\]").replace_all(text, |cap: &Captures| {
        format!("<!-- {} -->", comment_safe(&cap[1]))
    });

    let text = text
        .replace(r"\*", &STAR.to_string())
        .replace(r"\_", &UNDERSCORE.to_string());

    // emphasis never reaches across a line
    let lines: Vec<String> = text
        .split('\n')
        .map(emphasize)
        .collect();

    lines
        .join(LINE_BREAK)
        .replace(STAR, "*")
        .replace(UNDERSCORE, "_")
        .trim()
        .to_string()
}

/// Break up any `--` so the text can sit inside an HTML comment without
/// closing it.
pub fn comment_safe(text: &str) -> String {
    let mut text = text.to_string();
    while text.contains("--") {
        text = text.replace("--", "- -");
    }
    text
}

/// Emphasis rules, applied in this order. Combined markers have to be
/// replaced before any of the single ones.
fn emphasis() -> [(&'static Regex, &'static str); 7] {
    [
        (
            compile!(r"_\*{3}(.+?)\*{3}_|\*{3}_(.+?)_\*{3}"),
            r#"<span class="bold italic underline">${1}${2}</span>"#,
        ),
        (
            compile!(r"_\*{2}(.+?)\*{2}_|\*{2}_(.+?)_\*{2}"),
            r#"<span class="bold underline">${1}${2}</span>"#,
        ),
        (
            compile!(r"_\*(.+?)\*_|\*_(.+?)_\*"),
            r#"<span class="italic underline">${1}${2}</span>"#,
        ),
        (
            compile!(r"\*{3}(.+?)\*{3}"),
            r#"<span class="bold italic">${1}</span>"#,
        ),
        (
            compile!(r"\*{2}(.+?)\*{2}"),
            r#"<span class="bold">${1}</span>"#,
        ),
        (
            compile!(r"\*(.+?)\*"),
            r#"<span class="italic">${1}</span>"#,
        ),
        (
            compile!(r"_(.+?)_"),
            r#"<span class="underline">${1}</span>"#,
        ),
    ]
}

fn emphasize(line: &str) -> String {
    let mut line = line.to_string();

    if !line.contains(&['*', '_'][..]) {
        return line;
    }

    for (re, replacement) in emphasis() {
        if re.is_match(&line) {
            line = re
                .replace_all(&line, replacement)
                .into_owned();
        }
    }

    line
}
