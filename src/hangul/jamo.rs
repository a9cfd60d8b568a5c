//! 자모 판별/변환과 복합 자모 조합·분해 테이블
//!
//! Unicode Hangul Jamo (U+1100~)와 Hangul Compatibility Jamo (U+3131~)를
//! 모두 지원한다. 복합 자모(겹자음, 이중 모음)는 닫힌 테이블로만
//! 조합/분해하며 테이블에 없는 입력은 오류로 처리한다.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::error::{HangulError, Result};

/// 초성 블록 시작 (ᄀ)
pub(crate) const CHOSEONG_BASE: u32 = 0x1100;
/// 중성 블록 시작 (ᅡ)
pub(crate) const JUNGSEONG_BASE: u32 = 0x1161;
/// 종성 인덱스 기준점 (종성 문자는 0x11A8부터, 인덱스 1에 대응)
pub(crate) const JONGSEONG_BASE: u32 = 0x11A7;

/// 호환용 중성 블록 시작 (ㅏ)
const COMPAT_JUNGSEONG_BASE: u32 = 0x314F;

/// "자모 없음" 센티널
pub const NUL: char = '\0';

/// 초성 인덱스 -> 호환용 자모 코드
#[rustfmt::skip]
const COMPAT_CHOSEONG_MAP: [u32; 19] = [
    0x3131, // ㄱ
    0x3132, // ㄲ
    0x3134, // ㄴ
    0x3137, // ㄷ
    0x3138, // ㄸ
    0x3139, // ㄹ
    0x3141, // ㅁ
    0x3142, // ㅂ
    0x3143, // ㅃ
    0x3145, // ㅅ
    0x3146, // ㅆ
    0x3147, // ㅇ
    0x3148, // ㅈ
    0x3149, // ㅉ
    0x314A, // ㅊ
    0x314B, // ㅋ
    0x314C, // ㅌ
    0x314D, // ㅍ
    0x314E, // ㅎ
];

/// 종성 인덱스 1~27 -> 호환용 자모 코드 (ㄸ/ㅃ/ㅉ는 종성 불가로 제외)
#[rustfmt::skip]
const COMPAT_JONGSEONG_MAP: [u32; 27] = [
    0x3131, // ㄱ
    0x3132, // ㄲ
    0x3133, // ㄳ
    0x3134, // ㄴ
    0x3135, // ㄵ
    0x3136, // ㄶ
    0x3137, // ㄷ
    0x3139, // ㄹ
    0x313A, // ㄺ
    0x313B, // ㄻ
    0x313C, // ㄼ
    0x313D, // ㄽ
    0x313E, // ㄾ
    0x313F, // ㄿ
    0x3140, // ㅀ
    0x3141, // ㅁ
    0x3142, // ㅂ
    0x3144, // ㅄ
    0x3145, // ㅅ
    0x3146, // ㅆ
    0x3147, // ㅇ
    0x3148, // ㅈ
    0x314A, // ㅊ
    0x314B, // ㅋ
    0x314C, // ㅌ
    0x314D, // ㅍ
    0x314E, // ㅎ
];

/// 복합 자모 -> 구성 자모 열 (양쪽 블록 공통 테이블)
#[rustfmt::skip]
const COMPOUND_JAMO: &[(char, &str)] = &[
    // 호환용 겹자음
    ('ㄲ', "ㄱㄱ"),
    ('ㄳ', "ㄱㅅ"),
    ('ㄵ', "ㄴㅈ"),
    ('ㄶ', "ㄴㅎ"),
    ('ㄸ', "ㄷㄷ"),
    ('ㄺ', "ㄹㄱ"),
    ('ㄻ', "ㄹㅁ"),
    ('ㄼ', "ㄹㅂ"),
    ('ㄽ', "ㄹㅅ"),
    ('ㄾ', "ㄹㅌ"),
    ('ㄿ', "ㄹㅍ"),
    ('ㅀ', "ㄹㅎ"),
    ('ㅃ', "ㅂㅂ"),
    ('ㅄ', "ㅂㅅ"),
    ('ㅆ', "ㅅㅅ"),
    ('ㅉ', "ㅈㅈ"),
    // 호환용 이중 모음
    ('ㅘ', "ㅗㅏ"),
    ('ㅙ', "ㅗㅐ"),
    ('ㅚ', "ㅗㅣ"),
    ('ㅝ', "ㅜㅓ"),
    ('ㅞ', "ㅜㅔ"),
    ('ㅟ', "ㅜㅣ"),
    ('ㅢ', "ㅡㅣ"),
    // 초성 겹자음 (ᄁ ᄄ ᄈ ᄊ ᄍ)
    ('\u{1101}', "\u{1100}\u{1100}"),
    ('\u{1104}', "\u{1103}\u{1103}"),
    ('\u{1108}', "\u{1107}\u{1107}"),
    ('\u{110A}', "\u{1109}\u{1109}"),
    ('\u{110D}', "\u{110C}\u{110C}"),
    // 중성 이중 모음 (ᅪ ᅫ ᅬ ᅯ ᅰ ᅱ ᅴ)
    ('\u{116A}', "\u{1169}\u{1161}"),
    ('\u{116B}', "\u{1169}\u{1162}"),
    ('\u{116C}', "\u{1169}\u{1175}"),
    ('\u{116F}', "\u{116E}\u{1165}"),
    ('\u{1170}', "\u{116E}\u{1166}"),
    ('\u{1171}', "\u{116E}\u{1175}"),
    ('\u{1174}', "\u{1173}\u{1175}"),
    // 종성 겹자음 (ᆩ ᆪ ᆬ ᆭ ᆰ ᆱ ᆲ ᆳ ᆴ ᆵ ᆶ ᆹ ᆻ)
    ('\u{11A9}', "\u{11A8}\u{11A8}"),
    ('\u{11AA}', "\u{11A8}\u{11BA}"),
    ('\u{11AC}', "\u{11AB}\u{11BD}"),
    ('\u{11AD}', "\u{11AB}\u{11C2}"),
    ('\u{11B0}', "\u{11AF}\u{11A8}"),
    ('\u{11B1}', "\u{11AF}\u{11B7}"),
    ('\u{11B2}', "\u{11AF}\u{11B8}"),
    ('\u{11B3}', "\u{11AF}\u{11BA}"),
    ('\u{11B4}', "\u{11AF}\u{11C0}"),
    ('\u{11B5}', "\u{11AF}\u{11C1}"),
    ('\u{11B6}', "\u{11AF}\u{11C2}"),
    ('\u{11B9}', "\u{11B8}\u{11BA}"),
    ('\u{11BB}', "\u{11BA}\u{11BA}"),
];

/// 복합 자모 -> 구성 자모 열
static SPLIT_TABLE: LazyLock<HashMap<char, &'static str>> =
    LazyLock::new(|| COMPOUND_JAMO.iter().copied().collect());

/// 구성 자모 열 -> 복합 자모
static JOIN_TABLE: LazyLock<HashMap<&'static str, char>> =
    LazyLock::new(|| COMPOUND_JAMO.iter().map(|&(jamo, parts)| (parts, jamo)).collect());

/// Unicode Hangul Jamo 초성인지 검사
pub fn is_choseong(c: char) -> bool {
    ('\u{1100}'..='\u{1112}').contains(&c)
}

/// Unicode Hangul Jamo 중성인지 검사
pub fn is_jungseong(c: char) -> bool {
    ('\u{1161}'..='\u{1175}').contains(&c)
}

/// Unicode Hangul Jamo 종성인지 검사
pub fn is_jongseong(c: char) -> bool {
    ('\u{11A8}'..='\u{11C2}').contains(&c)
}

/// 호환용 자모 중 초성으로 쓸 수 있는 자음인지 검사
///
/// ㄳ처럼 종성 전용인 겹자음은 제외된다.
pub fn is_compat_choseong(c: char) -> bool {
    COMPAT_CHOSEONG_MAP.contains(&(c as u32))
}

/// 호환용 자모 중성(모음)인지 검사
pub fn is_compat_jungseong(c: char) -> bool {
    ('\u{314F}'..='\u{3163}').contains(&c)
}

/// 호환용 자모 중 종성으로 쓸 수 있는 자음인지 검사
///
/// ㄸ/ㅃ/ㅉ는 종성 불가로 제외된다.
pub fn is_compat_jongseong(c: char) -> bool {
    COMPAT_JONGSEONG_MAP.contains(&(c as u32))
}

/// 어느 블록이든 유효한 자모 문자인지 검사
pub fn is_jamo(c: char) -> bool {
    is_choseong(c)
        || is_jungseong(c)
        || is_jongseong(c)
        || ('\u{3131}'..='\u{314E}').contains(&c) // 호환용 자음 전체
        || is_compat_jungseong(c)
}

fn jamo_char(code: u32) -> char {
    // 테이블 유래 코드만 들어오므로 실패하지 않는다
    char::from_u32(code).unwrap_or(NUL)
}

/// 호환용 초성 -> Hangul Jamo 초성
pub fn compat_choseong_to_choseong(c: char) -> Result<char> {
    let index = COMPAT_CHOSEONG_MAP
        .iter()
        .position(|&code| code == c as u32)
        .ok_or(HangulError::InvalidJamo(c))?;
    Ok(jamo_char(CHOSEONG_BASE + index as u32))
}

/// Hangul Jamo 초성 -> 호환용 초성
pub fn choseong_to_compat_choseong(c: char) -> Result<char> {
    if !is_choseong(c) {
        return Err(HangulError::InvalidJamo(c));
    }
    Ok(jamo_char(COMPAT_CHOSEONG_MAP[(c as u32 - CHOSEONG_BASE) as usize]))
}

/// 호환용 중성 -> Hangul Jamo 중성
pub fn compat_jungseong_to_jungseong(c: char) -> Result<char> {
    if !is_compat_jungseong(c) {
        return Err(HangulError::InvalidJamo(c));
    }
    Ok(jamo_char(JUNGSEONG_BASE + (c as u32 - COMPAT_JUNGSEONG_BASE)))
}

/// Hangul Jamo 중성 -> 호환용 중성
pub fn jungseong_to_compat_jungseong(c: char) -> Result<char> {
    if !is_jungseong(c) {
        return Err(HangulError::InvalidJamo(c));
    }
    Ok(jamo_char(COMPAT_JUNGSEONG_BASE + (c as u32 - JUNGSEONG_BASE)))
}

/// 호환용 종성 -> Hangul Jamo 종성
pub fn compat_jongseong_to_jongseong(c: char) -> Result<char> {
    let index = COMPAT_JONGSEONG_MAP
        .iter()
        .position(|&code| code == c as u32)
        .ok_or(HangulError::InvalidJamo(c))?;
    Ok(jamo_char(JONGSEONG_BASE + 1 + index as u32))
}

/// Hangul Jamo 종성 -> 호환용 종성
pub fn jongseong_to_compat_jongseong(c: char) -> Result<char> {
    if !is_jongseong(c) {
        return Err(HangulError::InvalidJamo(c));
    }
    Ok(jamo_char(COMPAT_JONGSEONG_MAP[(c as u32 - JONGSEONG_BASE - 1) as usize]))
}

/// 복합 자모를 구성 자모 열로 분해
///
/// 단일 자모는 그대로, NUL 센티널은 빈 문자열로 돌아온다.
pub fn split_jamo(jamo: char) -> Result<String> {
    if jamo == NUL {
        return Ok(String::new());
    }
    if let Some(parts) = SPLIT_TABLE.get(&jamo) {
        return Ok((*parts).to_string());
    }
    if is_jamo(jamo) {
        return Ok(jamo.to_string());
    }
    Err(HangulError::InvalidJamo(jamo))
}

/// `split_jamo`의 무할당 버전: 구성 자모를 버퍼에 쓰고 개수를 돌려준다
pub fn split_jamo_into(jamo: char, buf: &mut [char]) -> Result<usize> {
    if jamo == NUL {
        return Ok(0);
    }
    if let Some(parts) = SPLIT_TABLE.get(&jamo) {
        let needed = parts.chars().count();
        if buf.len() < needed {
            return Err(HangulError::BufferTooSmall { needed });
        }
        for (slot, c) in buf.iter_mut().zip(parts.chars()) {
            *slot = c;
        }
        return Ok(needed);
    }
    if is_jamo(jamo) {
        if buf.is_empty() {
            return Err(HangulError::BufferTooSmall { needed: 1 });
        }
        buf[0] = jamo;
        return Ok(1);
    }
    Err(HangulError::InvalidJamo(jamo))
}

/// 구성 자모 열을 복합 자모로 조합
///
/// 빈 열은 NUL 센티널로, 단일 자모는 그대로 돌아온다.
pub fn join_jamo(sequence: &str) -> Result<char> {
    if sequence.is_empty() {
        return Ok(NUL);
    }
    if let Some(&jamo) = JOIN_TABLE.get(sequence) {
        return Ok(jamo);
    }
    let mut chars = sequence.chars();
    if let (Some(jamo), None) = (chars.next(), chars.next()) {
        if is_jamo(jamo) {
            return Ok(jamo);
        }
    }
    Err(HangulError::InvalidJamoSequence(sequence.to_string()))
}
