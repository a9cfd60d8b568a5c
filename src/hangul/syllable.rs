//! 완성형 한글 음절의 분해/조합
//!
//! 음절 공간은 U+AC00부터 초성 19 × 중성 21 × 종성 28개의 연속 코드포인트다.
//! 분해는 Hangul Jamo 블록과 호환용 자모 블록 양쪽으로 지원한다.

use crate::error::{HangulError, Result};
use crate::hangul::jamo::{self, NUL};

/// 한글 음절 시작 코드포인트 (가)
const HANGUL_SYLLABLE_BASE: u32 = 0xAC00;

/// 초성 개수
const CHOSEONG_COUNT: u32 = 19;
/// 중성 개수
const JUNGSEONG_COUNT: u32 = 21;
/// 종성 개수 (종성 없음 포함)
const JONGSEONG_COUNT: u32 = 28;

const HANGUL_SYLLABLE_COUNT: u32 = CHOSEONG_COUNT * JUNGSEONG_COUNT * JONGSEONG_COUNT;

/// 완성형 한글 음절인지 검사
pub fn is_syllable(c: char) -> bool {
    (HANGUL_SYLLABLE_BASE..HANGUL_SYLLABLE_BASE + HANGUL_SYLLABLE_COUNT).contains(&(c as u32))
}

/// (초성, 중성, 종성) 인덱스 분해. 종성 없음은 0.
fn syllable_indices(syllable: char) -> Result<(u32, u32, u32)> {
    if !is_syllable(syllable) {
        return Err(HangulError::NotASyllable(syllable));
    }
    let offset = syllable as u32 - HANGUL_SYLLABLE_BASE;
    let jongseong = offset % JONGSEONG_COUNT;
    let jungseong = (offset / JONGSEONG_COUNT) % JUNGSEONG_COUNT;
    let choseong = offset / (JUNGSEONG_COUNT * JONGSEONG_COUNT);
    Ok((choseong, jungseong, jongseong))
}

fn syllable_char(code: u32) -> char {
    // 음절 공간 내 코드만 들어오므로 실패하지 않는다
    char::from_u32(code).unwrap_or(NUL)
}

/// 음절의 Hangul Jamo 초성 추출
pub fn get_choseong(syllable: char) -> Result<char> {
    let (cho, _, _) = syllable_indices(syllable)?;
    Ok(syllable_char(jamo::CHOSEONG_BASE + cho))
}

/// 음절의 Hangul Jamo 중성 추출
pub fn get_jungseong(syllable: char) -> Result<char> {
    let (_, jung, _) = syllable_indices(syllable)?;
    Ok(syllable_char(jamo::JUNGSEONG_BASE + jung))
}

/// 음절의 Hangul Jamo 종성 추출. 종성이 없으면 NUL.
pub fn get_jongseong(syllable: char) -> Result<char> {
    let (_, _, jong) = syllable_indices(syllable)?;
    if jong == 0 {
        return Ok(NUL);
    }
    Ok(syllable_char(jamo::JONGSEONG_BASE + jong))
}

/// 음절의 호환용 자모 초성 추출
pub fn get_compat_choseong(syllable: char) -> Result<char> {
    jamo::choseong_to_compat_choseong(get_choseong(syllable)?)
}

/// 음절의 호환용 자모 중성 추출
pub fn get_compat_jungseong(syllable: char) -> Result<char> {
    jamo::jungseong_to_compat_jungseong(get_jungseong(syllable)?)
}

/// 음절의 호환용 자모 종성 추출. 종성이 없으면 NUL.
pub fn get_compat_jongseong(syllable: char) -> Result<char> {
    let jong = get_jongseong(syllable)?;
    if jong == NUL {
        return Ok(NUL);
    }
    jamo::jongseong_to_compat_jongseong(jong)
}

/// 음절을 Hangul Jamo 구성 자모 열로 분해
///
/// 슬롯별 문자열을 돌려주며 겹자모는 단순 자모 열로 풀린다.
/// 종성이 없으면 두 슬롯만 돌아온다. 예: 밝 -> ["ᄇ", "ᅡ", "ᆯᆨ"]
pub fn decompose(syllable: char) -> Result<Vec<String>> {
    let mut slots = vec![
        jamo::split_jamo(get_choseong(syllable)?)?,
        jamo::split_jamo(get_jungseong(syllable)?)?,
    ];
    let jong = get_jongseong(syllable)?;
    if jong != NUL {
        slots.push(jamo::split_jamo(jong)?);
    }
    Ok(slots)
}

/// 음절을 호환용 자모 구성 열로 분해. 예: 밝 -> ["ㅂ", "ㅏ", "ㄹㄱ"]
pub fn decompose_compat(syllable: char) -> Result<Vec<String>> {
    let mut slots = vec![
        jamo::split_jamo(get_compat_choseong(syllable)?)?,
        jamo::split_jamo(get_compat_jungseong(syllable)?)?,
    ];
    let jong = get_compat_jongseong(syllable)?;
    if jong != NUL {
        slots.push(jamo::split_jamo(jong)?);
    }
    Ok(slots)
}

/// `decompose`의 무할당 버전
///
/// Hangul Jamo 구성 자모를 이어서 버퍼에 쓰고 총 개수를 돌려준다.
/// 음절 하나는 최대 6자이므로 `[char; 6]`이면 충분하다.
pub fn decompose_into(syllable: char, buf: &mut [char]) -> Result<usize> {
    let mut written = 0;
    for part in [
        get_choseong(syllable)?,
        get_jungseong(syllable)?,
        get_jongseong(syllable)?,
    ] {
        written += jamo::split_jamo_into(part, &mut buf[written..])?;
    }
    Ok(written)
}

/// 초성/중성/종성으로 음절 조합. `decompose`의 역연산.
///
/// 각 인자는 Hangul Jamo와 호환용 자모 어느 쪽이든 받아 자동 변환한다.
/// `jong`이 `None` 또는 NUL이면 종성 없는 음절이 된다.
pub fn compose(cho: char, jung: char, jong: Option<char>) -> Result<char> {
    let cho_index = if jamo::is_choseong(cho) {
        cho as u32 - jamo::CHOSEONG_BASE
    } else {
        jamo::compat_choseong_to_choseong(cho)? as u32 - jamo::CHOSEONG_BASE
    };
    let jung_index = if jamo::is_jungseong(jung) {
        jung as u32 - jamo::JUNGSEONG_BASE
    } else {
        jamo::compat_jungseong_to_jungseong(jung)? as u32 - jamo::JUNGSEONG_BASE
    };
    let jong_index = match jong {
        None => 0,
        Some(c) if c == NUL => 0,
        Some(c) if jamo::is_jongseong(c) => c as u32 - jamo::JONGSEONG_BASE,
        Some(c) => jamo::compat_jongseong_to_jongseong(c)? as u32 - jamo::JONGSEONG_BASE,
    };
    let code = HANGUL_SYLLABLE_BASE
        + (cho_index * JUNGSEONG_COUNT + jung_index) * JONGSEONG_COUNT
        + jong_index;
    Ok(syllable_char(code))
}

/// 두벌식 도깨비불 보정용: 마지막 받침 자음을 분리한다
///
/// 종성의 마지막 단순 자음을 떼어 "열린 음절 + 홑 호환 자모" 꼴의
/// 문자열로 만든다 (받 -> "바ㄷ", 밝 -> "발ㄱ"). 종성이 없으면
/// 음절 그대로 한 글자 문자열이 돌아온다.
pub fn split_trailing_consonant(syllable: char) -> Result<String> {
    let jong = get_jongseong(syllable)?;
    if jong == NUL {
        return Ok(syllable.to_string());
    }
    let mut parts = [NUL; 2];
    let count = jamo::split_jamo_into(jong, &mut parts)?;
    let (remaining, moved) = if count == 2 {
        (Some(parts[0]), parts[1])
    } else {
        (None, parts[0])
    };
    let open = compose(get_choseong(syllable)?, get_jungseong(syllable)?, remaining)?;
    let glyph = jamo::jongseong_to_compat_jongseong(moved)?;
    Ok(format!("{open}{glyph}"))
}
