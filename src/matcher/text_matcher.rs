//! 문자열 수준 음절 근사 검색
//!
//! [`crate::matcher::approx`]의 문자 비교를 문자열 위로 끌어올린 검색기.
//! 패턴 양끝의 정규식 앵커 `^`/`$`로 출현 위치를 텍스트의 시작과 끝으로
//! 한정할 수 있다. 위치와 길이는 모두 문자 단위다.

use std::sync::Arc;

use crate::error::{HangulError, Result};
use crate::hangul::syllable;
use crate::matcher::approx;
use crate::matcher::text_match::{Matches, TextMatch};

/// 검색 옵션
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchOptions {
    /// 두벌식 입력 중 발생하는 도깨비불 현상을 감지해 보정한다
    pub dubeolsik: bool,
    /// 영문을 비교할 때 대소문자를 구분하지 않는다
    pub ignore_case: bool,
    /// 텍스트 안의 공백을 건너뛰고 매칭한다
    pub ignore_whitespace: bool,
}

/// 앵커 제거와 분리형 패턴 전개를 마친 검색용 패턴
#[derive(Debug)]
pub(crate) struct CompiledPattern {
    chars: Vec<char>,
    split_chars: Option<Vec<char>>,
    has_start_anchor: bool,
    has_end_anchor: bool,
    options: MatchOptions,
}

fn compile(pattern: &str, options: MatchOptions) -> CompiledPattern {
    let raw: Vec<char> = pattern.chars().collect();
    if raw.is_empty() {
        return CompiledPattern {
            chars: raw,
            split_chars: None,
            has_start_anchor: false,
            has_end_anchor: false,
            options,
        };
    }

    let has_start_anchor = raw[0] == '^';
    let has_end_anchor = raw[raw.len() - 1] == '$';
    let from = usize::from(has_start_anchor);
    let to = raw.len() - usize::from(has_end_anchor);
    let chars: Vec<char> = raw[from..to].to_vec();

    // 마지막 글자에 받침이 있으면 도깨비불 보정용 분리형 패턴을 미리 만들어 둔다
    let mut split_chars = None;
    if options.dubeolsik {
        if let Some(&last) = chars.last() {
            if syllable::is_syllable(last) {
                if let Ok(tail) = syllable::split_trailing_consonant(last) {
                    if tail.chars().count() == 2 {
                        let mut split = chars[..chars.len() - 1].to_vec();
                        split.extend(tail.chars());
                        split_chars = Some(split);
                    }
                }
            }
        }
    }

    CompiledPattern {
        chars,
        split_chars,
        has_start_anchor,
        has_end_anchor,
        options,
    }
}

/// 앵커 제약으로 실제 검사할 텍스트 구간을 좁힌다
///
/// 패턴이 들어갈 수 없는 구간이면 None. `(시작, 길이)`는 문자 단위.
fn search_range(
    pattern: &CompiledPattern,
    text_len: usize,
    hint_index: usize,
) -> Option<(usize, usize)> {
    let hint_len = pattern.chars.len();
    let mut start = hint_index;
    let mut length = text_len.checked_sub(hint_index)?;

    if length < hint_len {
        return None;
    }

    if pattern.has_start_anchor && pattern.has_end_anchor {
        if text_len != hint_len {
            return None;
        }
    } else if pattern.has_end_anchor {
        start = text_len - hint_len;
        length = hint_len;
    } else if pattern.has_start_anchor {
        if hint_index != 0 {
            return None;
        }
        // 분리형 패턴은 원 패턴보다 한 글자 길 수 있다
        length = if pattern.options.dubeolsik && pattern.split_chars.is_some() {
            hint_len + 1
        } else {
            hint_len
        };
    }
    Some((start, length))
}

fn is_latin_alphabet(c: char) -> bool {
    c.is_ascii_alphabetic()
}

fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}

/// 문자 인덱스를 바이트 오프셋으로. 끝 너머는 텍스트 끝.
fn byte_at(chars: &[(usize, char)], text: &str, index: usize) -> usize {
    chars.get(index).map_or(text.len(), |&(byte, _)| byte)
}

fn make_match<'t>(
    pattern: &Arc<CompiledPattern>,
    text: &'t str,
    chars: &[(usize, char)],
    index: usize,
    length: usize,
) -> TextMatch<'t> {
    let begin = byte_at(chars, text, index);
    let end = byte_at(chars, text, index + length);
    TextMatch::found(Arc::clone(pattern), text, index, length, &text[begin..end])
}

/// `start_index`부터 패턴의 첫 출현을 찾는다. 호출자가 범위를 보장한다.
pub(crate) fn search<'t>(
    pattern: &Arc<CompiledPattern>,
    text: &'t str,
    start_index: usize,
) -> TextMatch<'t> {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let Some((start, length)) = search_range(pattern, chars.len(), start_index) else {
        log::trace!("검색 구간 없음: start_index {start_index}, 텍스트 길이 {}", chars.len());
        return TextMatch::empty();
    };

    if pattern.chars.is_empty() {
        return make_match(pattern, text, &chars, start, 0);
    }

    let opts = pattern.options;
    let pattern_len = pattern.chars.len();
    let split: &[char] = pattern.split_chars.as_deref().unwrap_or(&[]);
    // 분리형 패턴 길이만큼 구간이 늘어도 텍스트 밖은 읽지 않는다
    let limit = (start + length).min(chars.len());
    let end_index = start + length + 1 - pattern_len;

    'outer: for i in start..end_index {
        if opts.ignore_whitespace && i < chars.len() && is_whitespace(chars[i].1) {
            continue;
        }

        let mut whitespace_count = 0;
        let mut split_mode = false;
        let mut j = 0;
        while j < pattern_len + usize::from(split_mode) {
            let mut k = i + whitespace_count + j;
            if k >= limit {
                continue 'outer;
            }
            if opts.ignore_whitespace {
                while is_whitespace(chars[k].1) {
                    whitespace_count += 1;
                    k += 1;
                    if k == limit {
                        break 'outer;
                    }
                }
            }

            let text_char = chars[k].1;
            let pattern_char = if split_mode { split[j] } else { pattern.chars[j] };

            if is_latin_alphabet(text_char) && is_latin_alphabet(pattern_char) {
                let matched = if opts.ignore_case {
                    text_char.eq_ignore_ascii_case(&pattern_char)
                } else {
                    text_char == pattern_char
                };
                if !matched {
                    continue 'outer;
                }
            } else if !approx::is_match(text_char, pattern_char) {
                // 원 패턴의 마지막 글자에서 막히면 분리형 패턴으로 재시도
                if opts.dubeolsik
                    && !split_mode
                    && j + 1 == pattern_len
                    && !split.is_empty()
                    && i + split.len() <= limit
                    && approx::is_match(text_char, split[j])
                {
                    split_mode = true;
                } else {
                    continue 'outer;
                }
            } else if split_mode {
                return make_match(pattern, text, &chars, i, split.len() + whitespace_count);
            }
            j += 1;
        }

        return make_match(pattern, text, &chars, i, pattern_len + whitespace_count);
    }

    TextMatch::empty()
}

/// 한글 음절 근사 매칭 검색기
///
/// 패턴을 한 번 컴파일해 여러 텍스트에 재사용한다. 패턴의 한글 음절은
/// 자모 일부만 일치해도 부합으로 간주된다. '밝'에 'ㅂ', '바', '발'이
/// 모두 부합하지만 그 역은 성립하지 않는다.
///
/// ```
/// use hansearch::KoreanTextMatcher;
///
/// let matcher = KoreanTextMatcher::new("ㅎㄴ");
/// let m = matcher.find("푸른 하늘");
/// assert!(m.success());
/// assert_eq!(m.index(), 3);
/// assert_eq!(m.value(), "하늘");
/// ```
pub struct KoreanTextMatcher {
    pattern: Arc<CompiledPattern>,
}

impl KoreanTextMatcher {
    /// 기본 옵션으로 패턴을 컴파일한다
    pub fn new(pattern: &str) -> KoreanTextMatcher {
        KoreanTextMatcher::with_options(pattern, MatchOptions::default())
    }

    /// 옵션을 지정해 패턴을 컴파일한다
    pub fn with_options(pattern: &str, options: MatchOptions) -> KoreanTextMatcher {
        let compiled = compile(pattern, options);
        log::debug!(
            "패턴 컴파일: {:?} (앵커 ^{} ${}, 분리형 {})",
            compiled.chars.iter().collect::<String>(),
            compiled.has_start_anchor,
            compiled.has_end_anchor,
            compiled.split_chars.is_some()
        );
        KoreanTextMatcher {
            pattern: Arc::new(compiled),
        }
    }

    /// 텍스트에서 패턴의 첫 출현을 찾는다
    ///
    /// 결과는 [`TextMatch::success`]가 참일 때만 유효하다.
    pub fn find<'t>(&self, text: &'t str) -> TextMatch<'t> {
        search(&self.pattern, text, 0)
    }

    /// `start_index`(문자 단위)부터 패턴의 첫 출현을 찾는다
    pub fn find_at<'t>(&self, text: &'t str, start_index: usize) -> Result<TextMatch<'t>> {
        let len = text.chars().count();
        if start_index > len {
            return Err(HangulError::StartIndexOutOfRange {
                index: start_index,
                len,
            });
        }
        Ok(search(&self.pattern, text, start_index))
    }

    /// 텍스트 내 모든 출현을 앞에서 뒤로 내놓는 반복자
    pub fn find_iter<'t>(&self, text: &'t str) -> Matches<'t> {
        Matches::new(self.find(text))
    }

    /// `start_index`부터의 모든 출현을 내놓는 반복자
    pub fn find_iter_at<'t>(&self, text: &'t str, start_index: usize) -> Result<Matches<'t>> {
        Ok(Matches::new(self.find_at(text, start_index)?))
    }

    /// 텍스트 내에 패턴이 존재하는지 한 번에 조사한다
    pub fn is_match(text: &str, pattern: &str, options: MatchOptions) -> bool {
        KoreanTextMatcher::find_first(text, pattern, options).success()
    }

    /// 패턴의 첫 출현을 한 번에 찾는다
    pub fn find_first<'t>(text: &'t str, pattern: &str, options: MatchOptions) -> TextMatch<'t> {
        KoreanTextMatcher::with_options(pattern, options).find(text)
    }

    /// 패턴의 모든 출현을 한 번에 찾는다
    pub fn find_all<'t>(text: &'t str, pattern: &str, options: MatchOptions) -> Matches<'t> {
        KoreanTextMatcher::with_options(pattern, options).find_iter(text)
    }
}
