//! HTML fragments for each kind of token

use crate::language::{Token, TokenKind};
use crate::parsing::inline::comment_safe;

use super::Render;

/// Render tokens as HTML. Containers (dialogue and dual dialogue) are opened
/// and closed by their own begin and end tokens; boneyard content is wrapped
/// in a comment so that it is kept but not displayed. Nothing inside that
/// comment may close it early, so concealed fragments have their `--`
/// broken up.
pub struct Html;

impl Render for Html {
    fn fragment(&self, token: &Token) -> String {
        let text = token
            .text()
            .unwrap_or("");

        match token.kind {
            TokenKind::Title => element("h1", None, text),
            TokenKind::Credit => element("p", Some("credit"), text),
            TokenKind::Author => element("p", Some("authors"), text),
            TokenKind::Authors => element("p", Some("authors"), text),
            TokenKind::Source => element("p", Some("source"), text),
            TokenKind::Notes => element("p", Some("notes"), text),
            TokenKind::DraftDate => element("p", Some("draft-date"), text),
            TokenKind::Date => element("p", Some("date"), text),
            TokenKind::Contact => element("p", Some("contact"), text),
            TokenKind::Copyright => element("p", Some("copyright"), text),

            TokenKind::SceneHeading => match &token.scene_number {
                Some(number) => format!("<h3 id=\"{}\">{}</h3>", number, text),
                None => element("h3", None, text),
            },
            TokenKind::Transition => element("h2", None, text),

            TokenKind::DualDialogueBegin => "<div class=\"dual-dialogue\">".to_string(),
            TokenKind::DialogueBegin => match token.dual {
                Some(dual) => format!("<div class=\"dialogue {}\">", dual.as_str()),
                None => "<div class=\"dialogue\">".to_string(),
            },
            TokenKind::Character => element("h4", None, text),
            TokenKind::Parenthetical => element("p", Some("parenthetical"), text),
            TokenKind::Dialogue => element("p", None, text),
            TokenKind::DialogueEnd => "</div>".to_string(),
            TokenKind::DualDialogueEnd => "</div>".to_string(),

            TokenKind::Section => format!(
                "<p class=\"section\" data-depth=\"{}\">{}</p>",
                token
                    .depth
                    .unwrap_or(1),
                text
            ),
            TokenKind::Synopsis => element("p", Some("synopsis"), text),

            TokenKind::Note => format!("<!-- {} -->", comment_safe(text)),
            TokenKind::BoneyardBegin => "<!-- ".to_string(),
            TokenKind::BoneyardEnd => " -->".to_string(),

            TokenKind::Action => element("p", None, text),
            TokenKind::Centered => element("p", Some("centered"), text),

            TokenKind::PageBreak => "<hr />".to_string(),
            TokenKind::LineBreak => "<br />".to_string(),
        }
    }

    fn conceal(&self, fragment: String) -> String {
        comment_safe(&fragment)
    }
}

fn element(tag: &str, class: Option<&str>, content: &str) -> String {
    let mut result = String::with_capacity(2 * tag.len() + content.len() + 16);

    result.push('<');
    result.push_str(tag);
    if let Some(class) = class {
        result.push_str(" class=\"");
        result.push_str(class);
        result.push('"');
    }
    result.push('>');
    result.push_str(content);
    result.push_str("</");
    result.push_str(tag);
    result.push('>');
    result
}
