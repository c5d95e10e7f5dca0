use owo_colors::OwoColorize;
use std::path::Path;

use crate::language::{LoadingError, ParsingError};

/// Format a parsing error with full details including an excerpt of the
/// offending line. The source is bytes, not text, as the usual reason for
/// failing is that it isn't valid UTF-8.
pub fn full_parsing_error(error: &ParsingError, filename: &Path, source: &[u8]) -> String {
    let offset = error
        .offset()
        .min(source.len());

    let i = calculate_line_number(source, offset);
    let j = calculate_column_number(source, offset);

    let text = String::from_utf8_lossy(source);
    let code = text
        .lines()
        .nth(i)
        .unwrap_or("?");
    let line = i + 1;
    let column = j + 1;
    let width = 3.max(
        line.to_string()
            .len(),
    );

    format!(
        r#"
{}: {}:{}:{} {}

{:width$} {}
{:width$} {} {}
{:width$} {} {:>column$}

The file needs to be saved as UTF-8 text.
        "#,
        "error".bright_red(),
        filename.to_string_lossy(),
        line,
        column,
        error
            .message()
            .bold(),
        ' ',
        '|'.bright_blue(),
        line.bright_blue(),
        '|'.bright_blue(),
        code,
        ' ',
        '|'.bright_blue(),
        '^'.bright_red(),
    )
    .trim_ascii()
    .to_string()
}

/// Format a parsing error with concise single-line output
pub fn concise_parsing_error(error: &ParsingError, filename: &Path, source: &[u8]) -> String {
    let offset = error
        .offset()
        .min(source.len());
    let line = calculate_line_number(source, offset) + 1;
    let column = calculate_column_number(source, offset) + 1;

    format!(
        "{}: {}:{}:{} {}",
        "error".bright_red(),
        filename.to_string_lossy(),
        line,
        column,
        error
            .message()
            .bold(),
    )
}

/// Format a LoadingError with concise single-line output
pub fn concise_loading_error(error: &LoadingError<'_>) -> String {
    let mut result = format!(
        "{}: {}: {}",
        "error".bright_red(),
        error
            .filename
            .display(),
        error
            .problem
            .bold()
    );
    if !error
        .details
        .is_empty()
    {
        result.push_str(" (");
        result.push_str(&error.details);
        result.push(')');
    }
    result
}

// This returns a zero-origin result so that it can subsequently be used for
// splitting; for display to humans you'll have to add 1.
fn calculate_line_number(content: &[u8], offset: usize) -> usize {
    content[..offset]
        .iter()
        .filter(|&&b| b == b'\n')
        .count()
}

// Zero-origin as well; counts bytes, as the line may not be valid text.
fn calculate_column_number(content: &[u8], offset: usize) -> usize {
    let before = &content[..offset];
    match before
        .iter()
        .rposition(|&b| b == b'\n')
    {
        Some(start) => offset - start - 1,
        None => offset,
    }
}
