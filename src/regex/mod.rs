// Cached compilation of the literal patterns used throughout the parser

mod cache;
