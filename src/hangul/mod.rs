//! 한글 코덱: 자모/음절의 판별, 분해, 조합

pub mod jamo;
pub mod syllable;
