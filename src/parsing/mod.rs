//! Parser for plain text screenplays

use std::path::Path;
use tracing::debug;

use crate::language::{LoadingError, Options, ParsingError, Screenplay, Token};
use crate::rendering::{render, Html};

pub mod inline;
pub mod lexer;
pub mod parser;

/// Read a file and return its raw bytes. Decoding them as text is left to
/// [`parse_bytes()`] so that a badly encoded file is reported as such.
pub fn load(filename: &Path) -> Result<Vec<u8>, LoadingError<'_>> {
    match std::fs::read(filename) {
        Ok(content) => Ok(content),
        Err(error) => {
            debug!(?error);
            match error.kind() {
                std::io::ErrorKind::NotFound => Err(LoadingError {
                    problem: "File not found".to_string(),
                    details: String::new(),
                    filename,
                }),
                _ => Err(LoadingError {
                    problem: "Failed reading".to_string(),
                    details: error
                        .kind()
                        .to_string(),
                    filename,
                }),
            }
        }
    }
}

/// Parse screenplay text into its title, title page markup, and body
/// markup. Never fails; text that isn't recognized as anything else is
/// action.
pub fn parse(content: &str, options: &Options) -> Screenplay {
    let blocks = lexer::preprocess(content);
    debug!(
        "Found {} block{}",
        blocks.len(),
        if blocks.len() == 1 { "" } else { "s" }
    );

    let tokens = parser::classify(&blocks);
    let tokens = parser::into_document_order(tokens);
    let tokens = lex_inline(tokens);

    let rendered = render(&Html, &tokens);

    Screenplay {
        title: rendered.title,
        title_page: rendered.title_page,
        body: rendered.body,
        tokens: if options.tokens { Some(tokens) } else { None },
    }
}

/// As [`parse()`], but handing the result to a completion function rather
/// than returning it. The parse runs to completion on the calling thread
/// and `on_complete` is called exactly once before this returns.
pub fn parse_then<F>(content: &str, options: &Options, on_complete: F)
where
    F: FnOnce(Screenplay),
{
    let screenplay = parse(content, options);
    on_complete(screenplay);
}

/// Parse raw bytes. Input which doesn't decode as UTF-8 is rejected
/// outright rather than partially parsed.
pub fn parse_bytes(content: &[u8], options: &Options) -> Result<Screenplay, ParsingError> {
    match std::str::from_utf8(content) {
        Ok(text) => Ok(parse(text, options)),
        Err(error) => {
            debug!(?error);
            Err(ParsingError::InvalidInput {
                offset: error.valid_up_to(),
            })
        }
    }
}

fn lex_inline(mut tokens: Vec<Token>) -> Vec<Token> {
    for token in &mut tokens {
        if let Some(text) = token
            .text
            .as_mut()
        {
            *text = inline::lex(text);
        }
    }
    tokens
}
