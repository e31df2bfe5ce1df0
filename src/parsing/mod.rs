//*** START FILE: src/parsing/mod.rs ***//
pub mod chapter_parser;
pub mod text_window;

// Re-export the segmenter for convenience
pub use chapter_parser::{parse_chapter_number, split_into_chapters};
pub use text_window::{collapse_whitespace, leading_chars, split_into_windows};
//*** END FILE: src/parsing/mod.rs ***//
