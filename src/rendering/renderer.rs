use tracing::debug;

use crate::compile;
use crate::language::{Token, TokenKind};
use crate::parsing::inline::LINE_BREAK;

/// Trait for rendering backends. Each token maps to one fragment of output;
/// the fragments are concatenated in token order.
pub trait Render {
    fn fragment(&self, token: &Token) -> String;

    /// Adjust a fragment that lies within the boneyard. The default leaves
    /// it as it is.
    fn conceal(&self, fragment: String) -> String {
        fragment
    }
}

/// The two output streams of a rendered screenplay, plus the title pulled
/// out of them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rendered {
    pub title: Option<String>,
    pub title_page: String,
    pub body: String,
}

/// Walk the tokens once, which must already be in document order, sending
/// each fragment to either the title page or the body.
pub fn render(renderer: &impl Render, tokens: &[Token]) -> Rendered {
    let mut output = Rendered::default();
    let mut boneyard = 0usize;

    for token in tokens {
        let fragment = renderer.fragment(token);

        let fragment = match token.kind {
            TokenKind::BoneyardBegin => {
                boneyard += 1;
                if boneyard > 1 {
                    renderer.conceal(fragment)
                } else {
                    fragment
                }
            }
            TokenKind::BoneyardEnd => {
                boneyard = boneyard.saturating_sub(1);
                if boneyard > 0 {
                    renderer.conceal(fragment)
                } else {
                    fragment
                }
            }
            _ if boneyard > 0 => renderer.conceal(fragment),
            _ => fragment,
        };

        if token
            .kind
            .is_title_page()
        {
            if token.kind == TokenKind::Title {
                output.title = token
                    .text()
                    .map(|text| plain_text(text, " "));
            }
            output
                .title_page
                .push_str(&fragment);
        } else {
            output
                .body
                .push_str(&fragment);
        }
    }

    debug!(
        title_page = output
            .title_page
            .len(),
        body = output
            .body
            .len(),
        "Rendered"
    );
    output
}

/// Reduce a fragment of markup to plain text. Line breaks become the given
/// separator; every other tag, and any comment, is dropped.
pub fn plain_text(markup: &str, line_break: &str) -> String {
    let text = markup.replace(LINE_BREAK, line_break);

    compile!(r"(?s)<!--.*?-->|<.*?>")
        .replace_all(&text, "")
        .into_owned()
}
