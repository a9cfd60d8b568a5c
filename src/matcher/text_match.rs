//! 검색 결과 값 객체와 지연 반복자

use std::sync::Arc;

use crate::matcher::text_matcher::{self, CompiledPattern};

/// 검색 결과 하나
///
/// 성공 여부, 텍스트 내 시작 위치(문자 단위), 부합 길이(문자 수),
/// 부합한 부분 문자열을 담는다. `next_match`로 다음 출현을 이어서
/// 찾을 수 있으며, 실패 결과에 대한 `next_match`는 다시 실패 결과다.
#[derive(Debug, Clone)]
pub struct TextMatch<'t> {
    success: bool,
    index: usize,
    length: usize,
    value: &'t str,
    text: &'t str,
    pattern: Option<Arc<CompiledPattern>>,
}

impl<'t> TextMatch<'t> {
    /// 실패 센티널
    pub fn empty() -> TextMatch<'static> {
        TextMatch {
            success: false,
            index: 0,
            length: 0,
            value: "",
            text: "",
            pattern: None,
        }
    }

    pub(crate) fn found(
        pattern: Arc<CompiledPattern>,
        text: &'t str,
        index: usize,
        length: usize,
        value: &'t str,
    ) -> TextMatch<'t> {
        TextMatch {
            success: true,
            index,
            length,
            value,
            text,
            pattern: Some(pattern),
        }
    }

    /// 검색 성공 여부
    pub fn success(&self) -> bool {
        self.success
    }

    /// 부합 시작 위치 (문자 단위, 0 기준)
    pub fn index(&self) -> usize {
        self.index
    }

    /// 부합 길이 (문자 수)
    pub fn length(&self) -> usize {
        self.length
    }

    /// 부합한 부분 문자열
    pub fn value(&self) -> &'t str {
        self.value
    }

    /// 현재 부합 바로 뒤에서 다음 출현을 찾는다
    ///
    /// 더 없으면, 또는 이미 실패 결과면 실패 센티널이 돌아온다.
    pub fn next_match(&self) -> TextMatch<'t> {
        let Some(pattern) = &self.pattern else {
            return TextMatch::empty();
        };
        if !self.success {
            return TextMatch::empty();
        }
        // 길이 0 부합에서도 전진하도록 최소 한 글자 이동
        let advance = self.length.max(1);
        let char_count = self.text.chars().count();
        if self.index + advance > char_count {
            return TextMatch::empty();
        }
        text_matcher::search(pattern, self.text, self.index + advance)
    }
}

/// 성공한 부합들을 앞에서 뒤로 내놓는 지연 반복자
///
/// 첫 실패에서 멈추며 재시작은 지원하지 않는다.
pub struct Matches<'t> {
    current: TextMatch<'t>,
}

impl<'t> Matches<'t> {
    pub(crate) fn new(first: TextMatch<'t>) -> Matches<'t> {
        Matches { current: first }
    }
}

impl<'t> Iterator for Matches<'t> {
    type Item = TextMatch<'t>;

    fn next(&mut self) -> Option<TextMatch<'t>> {
        if !self.current.success() {
            return None;
        }
        let following = self.current.next_match();
        Some(std::mem::replace(&mut self.current, following))
    }
}
