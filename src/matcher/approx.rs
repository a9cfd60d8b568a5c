//! 문자 수준 음절 근사 매칭
//!
//! 질의 문자와 텍스트 문자를 비교해 질의가 텍스트에 부합하는지 판정한다.
//! 관계는 비대칭이다: 자모가 적은 쪽이 많은 쪽에 부합하며 그 역은
//! 성립하지 않는다 ('발'은 '밝'에 부합, '밝'은 '발'에 불부합).

use crate::hangul::jamo::{self, NUL};
use crate::hangul::syllable;

/// 슬롯 하나의 단순 자모 열 (겹자모 최대 2자)
#[derive(Clone, Copy, PartialEq, Eq)]
struct Slot {
    parts: [char; 2],
    len: usize,
}

impl Slot {
    const EMPTY: Slot = Slot {
        parts: [NUL; 2],
        len: 0,
    };

    fn from_jamo(jamo: char) -> Option<Slot> {
        if jamo == NUL {
            return Some(Slot::EMPTY);
        }
        let mut parts = [NUL; 2];
        let len = jamo::split_jamo_into(jamo, &mut parts).ok()?;
        Some(Slot { parts, len })
    }

    /// `self`가 `other`의 접두 열인지 (빈 열은 모든 열의 접두)
    fn is_prefix_of(&self, other: &Slot) -> bool {
        self.len <= other.len && self.parts[..self.len] == other.parts[..self.len]
    }
}

/// 문자 하나를 (초성, 중성, 종성) 슬롯별 호환용 단순 자모 열로 전개
///
/// 음절은 완전 분해, 초성이 될 수 있는 자음은 초성 슬롯 하나로 전개된다.
/// 홑모음이나 종성 전용 자모처럼 이 체계에 속하지 않는 문자는 None.
struct Slots {
    cho: Slot,
    jung: Slot,
    jong: Slot,
}

fn components(c: char) -> Option<Slots> {
    if syllable::is_syllable(c) {
        return Some(Slots {
            cho: Slot::from_jamo(syllable::get_compat_choseong(c).ok()?)?,
            jung: Slot::from_jamo(syllable::get_compat_jungseong(c).ok()?)?,
            jong: Slot::from_jamo(syllable::get_compat_jongseong(c).ok()?)?,
        });
    }
    let compat = if jamo::is_choseong(c) {
        jamo::choseong_to_compat_choseong(c).ok()?
    } else if jamo::is_compat_choseong(c) {
        c
    } else {
        return None;
    };
    Some(Slots {
        cho: Slot::from_jamo(compat)?,
        jung: Slot::EMPTY,
        jong: Slot::EMPTY,
    })
}

fn is_hangul(c: char) -> bool {
    syllable::is_syllable(c) || jamo::is_jamo(c)
}

/// 질의 문자 `query`가 텍스트 문자 `text`에 부합하는지 판정
///
/// 한글이 아닌 문자끼리는 코드포인트 단위로 정확히 비교한다
/// (영문 대소문자 무시는 상위 계층의 몫). 한글끼리는 슬롯별로
/// 질의의 자모 열이 텍스트의 자모 열의 접두이면 부합한다.
pub fn is_match(text: char, query: char) -> bool {
    if !is_hangul(text) && !is_hangul(query) {
        return text == query;
    }
    let (Some(text_slots), Some(query_slots)) = (components(text), components(query)) else {
        return false;
    };
    query_slots.cho.is_prefix_of(&text_slots.cho)
        && query_slots.jung.is_prefix_of(&text_slots.jung)
        && query_slots.jong.is_prefix_of(&text_slots.jong)
}
