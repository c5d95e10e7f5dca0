// Presentation of errors to the person at the terminal

mod format;

// Re-export all public symbols
pub use format::*;
