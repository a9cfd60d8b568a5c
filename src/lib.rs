pub mod error;
pub mod hangul;
pub mod matcher;

pub use error::{HangulError, Result};
pub use matcher::approx::is_match;
pub use matcher::text_match::{Matches, TextMatch};
pub use matcher::text_matcher::{KoreanTextMatcher, MatchOptions};
