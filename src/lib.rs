//! Parser and renderer for plain text screenplays.
//!
//! Raw text goes in; a list of tokens and two HTML fragments (the title page
//! and the script body) come out. See [`parsing::parse`].

pub mod language;
pub mod parsing;
pub mod problem;
pub mod regex;
pub mod rendering;
pub mod templating;
