//! 음절 근사 매칭: 문자 비교와 문자열 검색

pub mod approx;
pub mod text_match;
pub mod text_matcher;
