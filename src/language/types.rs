//! Types representing the token stream of a parsed screenplay

use serde::Serialize;
use std::fmt;

/// The closed set of things a block of screenplay text can turn out to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    // title page
    Title,
    Credit,
    Author,
    Authors,
    Source,
    Notes,
    DraftDate,
    Date,
    Contact,
    Copyright,

    // script body
    SceneHeading,
    Transition,
    Centered,
    DualDialogueBegin,
    DialogueBegin,
    Character,
    Parenthetical,
    Dialogue,
    DialogueEnd,
    DualDialogueEnd,
    Section,
    Synopsis,
    Note,
    BoneyardBegin,
    BoneyardEnd,
    PageBreak,
    LineBreak,
    Action,
}

impl TokenKind {
    /// Map a title page label such as "Draft date" onto its kind. Matching
    /// ignores case; interior spaces become underscores.
    pub fn from_label(label: &str) -> Option<TokenKind> {
        let label = label
            .trim()
            .to_lowercase()
            .replace(' ', "_");

        match label.as_str() {
            "title" => Some(TokenKind::Title),
            "credit" => Some(TokenKind::Credit),
            "author" => Some(TokenKind::Author),
            "authors" => Some(TokenKind::Authors),
            "source" => Some(TokenKind::Source),
            "notes" => Some(TokenKind::Notes),
            "draft_date" => Some(TokenKind::DraftDate),
            "date" => Some(TokenKind::Date),
            "contact" => Some(TokenKind::Contact),
            "copyright" => Some(TokenKind::Copyright),
            _ => None,
        }
    }

    /// Whether tokens of this kind are rendered onto the title page rather
    /// than into the body of the script.
    pub fn is_title_page(&self) -> bool {
        matches!(
            self,
            TokenKind::Title
                | TokenKind::Credit
                | TokenKind::Author
                | TokenKind::Authors
                | TokenKind::Source
                | TokenKind::Notes
                | TokenKind::DraftDate
                | TokenKind::Date
                | TokenKind::Contact
                | TokenKind::Copyright
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Title => "title",
            TokenKind::Credit => "credit",
            TokenKind::Author => "author",
            TokenKind::Authors => "authors",
            TokenKind::Source => "source",
            TokenKind::Notes => "notes",
            TokenKind::DraftDate => "draft_date",
            TokenKind::Date => "date",
            TokenKind::Contact => "contact",
            TokenKind::Copyright => "copyright",
            TokenKind::SceneHeading => "scene_heading",
            TokenKind::Transition => "transition",
            TokenKind::Centered => "centered",
            TokenKind::DualDialogueBegin => "dual_dialogue_begin",
            TokenKind::DialogueBegin => "dialogue_begin",
            TokenKind::Character => "character",
            TokenKind::Parenthetical => "parenthetical",
            TokenKind::Dialogue => "dialogue",
            TokenKind::DialogueEnd => "dialogue_end",
            TokenKind::DualDialogueEnd => "dual_dialogue_end",
            TokenKind::Section => "section",
            TokenKind::Synopsis => "synopsis",
            TokenKind::Note => "note",
            TokenKind::BoneyardBegin => "boneyard_begin",
            TokenKind::BoneyardEnd => "boneyard_end",
            TokenKind::PageBreak => "page_break",
            TokenKind::LineBreak => "line_break",
            TokenKind::Action => "action",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which side of a dual dialogue pair a speech sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Dual {
    Left,
    Right,
}

impl Dual {
    pub fn as_str(&self) -> &'static str {
        match self {
            Dual::Left => "left",
            Dual::Right => "right",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Token {
    #[serde(rename = "type")]
    pub kind: TokenKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scene_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub character: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parenthetical: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dual: Option<Dual>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depth: Option<usize>,
}

impl Token {
    /// A structural token, carrying no text.
    pub fn new(kind: TokenKind) -> Token {
        Token {
            kind,
            text: None,
            scene_number: None,
            character: None,
            parenthetical: None,
            dual: None,
            depth: None,
        }
    }

    pub fn with_text(kind: TokenKind, text: impl Into<String>) -> Token {
        Token {
            text: Some(text.into()),
            ..Token::new(kind)
        }
    }

    pub fn text(&self) -> Option<&str> {
        self.text
            .as_deref()
    }
}

/// Knobs for a single parse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Options {
    /// Hand the token list back in the result. Off by default, as callers
    /// who only want the markup needn't pay for keeping it.
    pub tokens: bool,
}

/// The result of parsing a screenplay. Built fresh on every call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Screenplay {
    /// The document title as plain text, markup stripped.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "titlePageMarkup")]
    pub title_page: String,
    #[serde(rename = "bodyMarkup")]
    pub body: String,
    /// In document order, and present only when asked for.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tokens: Option<Vec<Token>>,
}
