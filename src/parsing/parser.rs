//! Classification of paragraph blocks into tokens

use tracing::debug;

use crate::compile;
use crate::language::{Dual, Token, TokenKind};

/// Classify every block, scanning from the last block to the first. The
/// returned tokens are therefore in reverse document order; pass them
/// through [`into_document_order()`] before handing them to anyone else.
pub fn classify<S: AsRef<str>>(blocks: &[S]) -> Vec<Token> {
    let mut parser = Parser::new();

    for block in blocks
        .iter()
        .rev()
    {
        parser.read_block(block.as_ref());
    }

    let tokens = parser.finish();
    debug!(
        "Classified {} block{} into {} token{}",
        blocks.len(),
        if blocks.len() == 1 { "" } else { "s" },
        tokens.len(),
        if tokens.len() == 1 { "" } else { "s" }
    );
    tokens
}

/// Undo the backwards scan.
pub fn into_document_order(mut tokens: Vec<Token>) -> Vec<Token> {
    tokens.reverse();
    tokens
}

/// Scanning state. Tokens accumulate in reverse document order, so for any
/// one block they are pushed last-first.
#[derive(Debug, Default)]
pub struct Parser {
    tokens: Vec<Token>,
    // Set when the block just scanned (the next one in reading order) was
    // the right hand half of a dual dialogue pair; holds the length of the
    // token list immediately after that block was pushed.
    dual: Option<usize>,
}

impl Parser {
    pub fn new() -> Parser {
        Parser::default()
    }

    /// Whether the block after the current one in reading order carried a
    /// `^` on its cue.
    pub fn previous_was_dual_right(&self) -> bool {
        self.dual
            .is_some()
    }

    /// Apply the classification rules in order to one block; the first
    /// rule that recognizes the block wins and everything else falls
    /// through to action.
    pub fn read_block(&mut self, block: &str) {
        if let Some(records) = read_title_page(block) {
            self.push_all(records);
            return;
        }
        if let Some(tokens) = read_scene_heading(block) {
            self.push_all(tokens);
            return;
        }
        if let Some(token) = read_centered(block) {
            self.push(token);
            return;
        }
        if let Some(token) = read_transition(block) {
            self.push(token);
            return;
        }
        if self.read_dialogue(block) {
            return;
        }
        if let Some(token) = read_section(block) {
            self.push(token);
            return;
        }
        if let Some(token) = read_synopsis(block) {
            self.push(token);
            return;
        }
        if let Some(token) = read_note(block) {
            self.push(token);
            return;
        }
        if let Some(token) = read_boneyard(block) {
            self.push(token);
            return;
        }
        if is_page_break(block) {
            self.push(Token::new(TokenKind::PageBreak));
            return;
        }
        if is_line_break(block) {
            self.push(Token::new(TokenKind::LineBreak));
            return;
        }

        self.push(Token::with_text(TokenKind::Action, block));
    }

    /// Hand back the accumulated tokens, still in reverse document order.
    pub fn finish(mut self) -> Vec<Token> {
        // A right hand speech with no speech before it to pair with already
        // closed its pair; open it again just ahead of that speech.
        if let Some(position) = self
            .dual
            .take()
        {
            self.tokens
                .insert(position, Token::new(TokenKind::DualDialogueBegin));
        }
        self.tokens
    }

    fn push(&mut self, token: Token) {
        self.tokens
            .push(token);
    }

    /// Given tokens in reading order, push them in reverse.
    fn push_all(&mut self, tokens: Vec<Token>) {
        self.tokens
            .extend(
                tokens
                    .into_iter()
                    .rev(),
            );
    }

    /// A character cue line followed directly by what they say. Returns
    /// false, pushing nothing, if the block isn't dialogue.
    fn read_dialogue(&mut self, block: &str) -> bool {
        let re = compile!(r"^([A-Z*_]+[0-9A-Z (._\-'*)]*)(\^?)\n([^\n][\s\S]*)$");

        let cap = match re.captures(block) {
            Some(cap) => cap,
            None => return false,
        };

        let cue = &cap[1];
        if ends_in_two_spaces(cue) {
            return false;
        }
        let right = !cap[2].is_empty();
        let left = self.previous_was_dual_right();

        let dual = if right {
            Some(Dual::Right)
        } else if left {
            Some(Dual::Left)
        } else {
            None
        };

        let mut speech = Vec::new();

        let mut begin = Token::new(TokenKind::DialogueBegin);
        begin.dual = dual;
        speech.push(begin);
        speech.push(Token::with_text(TokenKind::Character, cue.trim()));
        speech.extend(read_speech(&cap[3]));
        speech.push(Token::new(TokenKind::DialogueEnd));

        if right {
            self.push(Token::new(TokenKind::DualDialogueEnd));
        }
        self.push_all(speech);

        if left {
            self.push(Token::new(TokenKind::DualDialogueBegin));
        }

        self.dual = if right {
            Some(
                self.tokens
                    .len(),
            )
        } else {
            None
        };

        true
    }
}

/// Split a speech into alternating dialogue and parenthetical tokens, in
/// reading order. A parenthetical is a line wrapped entirely in brackets.
fn read_speech(body: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut lines: Vec<&str> = Vec::new();

    for line in body.lines() {
        if is_parenthetical(line) {
            if !lines.is_empty() {
                tokens.push(Token::with_text(TokenKind::Dialogue, lines.join("\n")));
                lines.clear();
            }
            tokens.push(Token::with_text(TokenKind::Parenthetical, line));
        } else {
            lines.push(line);
        }
    }

    if !lines.is_empty() {
        tokens.push(Token::with_text(TokenKind::Dialogue, lines.join("\n")));
    }

    tokens
}

fn is_parenthetical(line: &str) -> bool {
    let re = compile!(r"^\(.+\)$");
    re.is_match(line)
}

/// Both scene headings and character cues can be forced back to being
/// plain text by ending the line in exactly two spaces.
fn ends_in_two_spaces(line: &str) -> bool {
    line.ends_with("  ") && !line.ends_with("   ")
}

/// A title page block is a run of `Label: value` records. Values can carry
/// on over subsequent lines until the next recognized label.
fn read_title_page(block: &str) -> Option<Vec<Token>> {
    let re = compile!(
        r"(?i)^(title|credit|authors|author|source|notes|draft date|date|contact|copyright):"
    );

    if !re.is_match(block) {
        return None;
    }

    let mut records: Vec<(TokenKind, String)> = Vec::new();

    for line in block.lines() {
        if let Some(cap) = re.captures(line) {
            let kind = TokenKind::from_label(&cap[1])?;
            let value = &line[cap[0].len()..];
            records.push((kind, value.to_string()));
        } else if let Some((_, value)) = records.last_mut() {
            value.push('\n');
            value.push_str(line);
        }
    }

    let tokens = records
        .into_iter()
        .map(|(kind, value)| Token::with_text(kind, value.trim()))
        .collect();

    Some(tokens)
}

/// The heading is the first line of the block. Any lines after it are
/// action following the heading.
fn read_scene_heading(block: &str) -> Option<Vec<Token>> {
    let re = compile!(r"(?i)^((?:\*{0,3}_?)?(?:int|ext|est|i/e)[. ].+)|^\.([^.\n].*)");

    let cap = re.captures(block)?;
    let text = cap
        .get(1)
        .or(cap.get(2))?
        .as_str();

    if ends_in_two_spaces(text) {
        return None;
    }

    let re = compile!(r"( *#(.+)# *)");

    let mut token = match re.captures(text) {
        Some(number) => {
            let mut token =
                Token::with_text(TokenKind::SceneHeading, re.replace(text, "").into_owned());
            token.scene_number = Some(number[2].to_string());
            token
        }
        None => Token::with_text(TokenKind::SceneHeading, text),
    };

    if let Some(text) = token
        .text
        .as_mut()
    {
        *text = text
            .trim()
            .to_string();
    }

    let mut tokens = vec![token];

    if let Some((_, rest)) = block.split_once('\n') {
        if !rest
            .trim()
            .is_empty()
        {
            tokens.push(Token::with_text(TokenKind::Action, rest));
        }
    }

    Some(tokens)
}

/// Every line of the block has to be wrapped in `>` and `<`.
fn read_centered(block: &str) -> Option<Token> {
    let re = compile!(r"^> *(.*?) *<$");

    let mut lines = Vec::new();
    for line in block.lines() {
        let cap = re.captures(line)?;
        lines.push(
            cap.get(1)?
                .as_str(),
        );
    }

    if lines.is_empty() {
        return None;
    }

    Some(Token::with_text(TokenKind::Centered, lines.join("\n")))
}

fn read_transition(block: &str) -> Option<Token> {
    if block.contains('\n') {
        return None;
    }

    let re = compile!(r"^(?:(?:FADE (?:TO BLACK|OUT)|CUT TO BLACK)\.|.+ TO:)$");
    if re.is_match(block) {
        return Some(Token::with_text(TokenKind::Transition, block));
    }

    let re = compile!(r"^> *(.+)$");
    let cap = re.captures(block)?;

    Some(Token::with_text(TokenKind::Transition, &cap[1]))
}

fn read_section(block: &str) -> Option<Token> {
    let re = compile!(r"^(#+) *(.*)");

    let cap = re.captures(block)?;
    let mut token = Token::with_text(TokenKind::Section, &cap[2]);
    token.depth = Some(cap[1].len());

    Some(token)
}

fn read_synopsis(block: &str) -> Option<Token> {
    if block.starts_with("==") {
        return None;
    }

    let re = compile!(r"^= *(.*)");
    let cap = re.captures(block)?;

    Some(Token::with_text(TokenKind::Synopsis, &cap[1]))
}

fn read_note(block: &str) -> Option<Token> {
    let re = compile!(r"(?s)^\[\[([^\[].*)\]\]$");

    let cap = re.captures(block)?;

    Some(Token::with_text(TokenKind::Note, &cap[1]))
}

fn read_boneyard(block: &str) -> Option<Token> {
    match block {
        "/*" => Some(Token::new(TokenKind::BoneyardBegin)),
        "*/" => Some(Token::new(TokenKind::BoneyardEnd)),
        _ => None,
    }
}

fn is_page_break(block: &str) -> bool {
    let re = compile!(r"^={3,}$");
    re.is_match(block)
}

fn is_line_break(block: &str) -> bool {
    block == "  "
}
