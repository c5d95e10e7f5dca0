use std::{fmt, path::Path};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadingError<'i> {
    pub problem: String,
    pub details: String,
    pub filename: &'i Path,
}

impl<'i> fmt::Display for LoadingError<'i> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.problem, self.details)
    }
}

impl<'i> std::error::Error for LoadingError<'i> {}

/// The grammar is permissive, so anything that decodes to text parses.
/// The only failure is input that isn't text in the first place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsingError {
    InvalidInput { offset: usize },
}

impl ParsingError {
    /// Byte offset into the input of the problem.
    pub fn offset(&self) -> usize {
        match self {
            ParsingError::InvalidInput { offset } => *offset,
        }
    }

    pub fn message(&self) -> String {
        match self {
            ParsingError::InvalidInput { .. } => "input is not valid UTF-8 text".to_string(),
        }
    }
}

impl fmt::Display for ParsingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at byte {}", self.message(), self.offset())
    }
}

impl std::error::Error for ParsingError {}
