//! 통합 테스트 - 코덱과 검색기를 공개 API로 관통

use hansearch::hangul::{jamo, syllable};
use hansearch::{KoreanTextMatcher, MatchOptions};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn is_match(text: &str, pattern: &str) -> bool {
    KoreanTextMatcher::is_match(text, pattern, MatchOptions::default())
}

#[test]
fn test_is_match_table() {
    init_logger();
    let matched: &[(&str, &str)] = &[
        ("", "^$"),
        ("하늘", ""),
        ("하늘", "^"),
        ("하늘", "$"),
        ("하늘", "하늘"),
        (" 하늘", "하늘"),
        ("하늘 ", "하늘"),
        (" 하늘 ", "하늘"),
        ("하늘", "^하늘"),
        ("하늘 ", "^하늘"),
        ("하늘", "하늘$"),
        (" 하늘", "하늘$"),
        ("하늘", "^하늘$"),
        ("하늘", "하ㄴ"),
        ("하늘", "^하ㄴ"),
        ("하늘", "하ㄴ$"),
        ("하늘", "^하ㄴ$"),
        ("하늘", "ㅎ늘"),
        ("하늘", "^ㅎ늘"),
        ("하늘", "ㅎ늘$"),
        ("하늘", "^ㅎ늘$"),
        ("하늘", "ㅎㄴ"),
        ("하늘 ", "ㅎㄴ"),
        (" 하늘", "ㅎㄴ"),
        (" 하늘 ", "ㅎㄴ"),
        ("하늘", "^ㅎㄴ"),
        ("하늘", "ㅎㄴ$"),
        ("하늘", "^ㅎㄴ$"),
        ("하늘", "ㅎ느"),
        ("하늘", "^ㅎ느"),
        ("하늘", "ㅎ느$"),
        ("하늘", "^ㅎ느$"),
        (" 방준영 ", "ㅂㅈㅇ"),
        ("방ㅈㅇ", "ㅂㅈㅇ"),
        (" 방ㅈㅇ ", "ㅂㅈㅇ"),
        ("방ㅈㅇ", "^ㅂㅈㅇ"),
        (" 방ㅈㅇ", "ㅂㅈㅇ$"),
        ("방준영", "\u{1107}\u{110C}\u{110B}"),
        ("\u{1107}준영", "\u{1107}\u{110C}\u{110B}"),
    ];
    for &(text, pattern) in matched {
        assert!(is_match(text, pattern), "text: {text}, pattern: {pattern}");
    }

    let unmatched: &[(&str, &str)] = &[
        ("하늘", "^$"),
        ("하늘", "ㅎㄴㅎㄴ"),
        ("하늘", "한"),
        ("하 늘", "하늘"),
        (" 하 늘", "하늘"),
        ("하 늘 ", "하늘"),
        (" 하 늘 ", "하늘"),
        ("하늘", "하를"),
        ("하늘", "하ㄹ"),
        ("하늘", "^하ㄹ"),
        ("하늘", "하ㄹ$"),
        ("하늘", "^ㅎㄹ"),
        ("하늘", "ㅎㄹ$"),
        (" 하늘", "^하늘"),
        (" 하늘 ", "^하늘"),
        ("하늘 ", "하늘$"),
        (" 하늘 ", "하늘$"),
        (" 하늘", "^하늘$"),
        ("하늘 ", "^하늘$"),
        ("방준영", "ㅂㅇㅈ"),
        ("방ㅈㅇ", "ㅂㅇㅈ"),
        ("방준", "ㅂㅈㅇ"),
    ];
    for &(text, pattern) in unmatched {
        assert!(!is_match(text, pattern), "text: {text}, pattern: {pattern}");
    }
}

#[test]
fn test_find_first_table() {
    let cases: &[(&str, &str, bool, usize, usize)] = &[
        ("", "", true, 0, 0),
        ("", "^$", true, 0, 0),
        ("하늘", "", true, 0, 0),
        ("하늘", "^", true, 0, 0),
        ("하늘", "$", true, 2, 0),
        ("하늘", "하", true, 0, 1),
        ("하늘", "늘", true, 1, 1),
        ("하늘", "하늘", true, 0, 2),
        ("하늘", "ㅎㄴ", true, 0, 2),
        ("하늘", "ㅎ", true, 0, 1),
        ("하늘", "ㄴ", true, 1, 1),
        ("푸른 하늘", "하늘", true, 3, 2),
        ("푸른 하늘", "ㅎㄴ", true, 3, 2),
        ("하늘", "^$", false, 0, 0),
        ("푸른 하늘", "^ㅎㄴ", false, 0, 0),
        ("푸른 하늘", "푸른$", false, 0, 0),
        ("푸른 하늘", "ㅎㄹ", false, 0, 0),
    ];
    for &(text, pattern, success, index, length) in cases {
        let m = KoreanTextMatcher::find_first(text, pattern, MatchOptions::default());
        assert_eq!(m.success(), success, "text: {text}, pattern: {pattern}");
        if success {
            assert_eq!(m.index(), index, "text: {text}, pattern: {pattern}");
            assert_eq!(m.length(), length, "text: {text}, pattern: {pattern}");
            assert_eq!(m.value().chars().count(), m.length());
            assert!(text.contains(m.value()));
        }
    }
}

#[test]
fn test_find_all_counts() {
    let cases: &[(&str, &str, usize)] = &[
        // 호환용 자모 패턴
        ("하늘 ㅎ늘 하느 ㅎㄴ", "ㅎㄹ", 0),
        ("하늘 ㅎ늘 하느 ㅎㄴ", "하늘", 1),
        ("하늘 ㅎ늘 하느 ㅎㄴ", "ㅎ늘", 2),
        ("하늘 ㅎ늘 하느 ㅎㄴ", "ㅎ느", 3),
        ("하늘 ㅎ늘 하느 ㅎㄴ", "ㅎㄴ", 4),
        // 한글 자모 패턴
        ("하늘 \u{1112}늘 하느 \u{1112}\u{1102}", "\u{1112}\u{1105}", 0),
        ("하늘 \u{1112}늘 하느 \u{1112}\u{1102}", "하늘", 1),
        ("하늘 \u{1112}늘 하느 \u{1112}\u{1102}", "\u{1112}늘", 2),
        ("하늘 \u{1112}늘 하느 \u{1112}\u{1102}", "\u{1112}느", 3),
        ("하늘 \u{1112}늘 하느 \u{1112}\u{1102}", "\u{1112}\u{1102}", 4),
    ];
    for &(text, pattern, expected) in cases {
        let mut count = 0;
        for m in KoreanTextMatcher::find_all(text, pattern, MatchOptions::default()) {
            assert!(text.contains(m.value()), "text: {text}, pattern: {pattern}");
            count += 1;
        }
        assert_eq!(count, expected, "text: {text}, pattern: {pattern}");
    }
}

#[test]
fn test_next_match_counts() {
    let cases: &[(&str, &str, usize)] = &[
        ("", "파란", 0),
        ("파란", "파란", 1),
        ("파란", "^파란$", 1),
        (" 파란", "^파란$", 0),
        ("파란 하늘 파란 나라", "^파란", 1),
        ("파란 하늘 파란 나라", "파란", 2),
        ("하얀 나라 파란 나라", "나라$", 1),
        ("하늘 별 하늘", "하늘", 2),
        ("하늘 별 하늘 달", "하늘", 2),
        ("하늘하늘하늘", "ㅎㄴ", 3),
    ];
    for &(text, pattern, expected) in cases {
        let matcher = KoreanTextMatcher::new(pattern);
        let chars: Vec<char> = text.chars().collect();
        let mut m = matcher.find(text);
        let mut count = 0;
        while m.success() {
            let span: String = chars[m.index()..m.index() + m.length()].iter().collect();
            assert_eq!(span, m.value(), "text: {text}, pattern: {pattern}");
            count += 1;
            m = m.next_match();
        }
        assert_eq!(count, expected, "text: {text}, pattern: {pattern}");
    }
}

#[test]
fn test_option_combinations() {
    let opts = MatchOptions {
        dubeolsik: true,
        ignore_whitespace: true,
        ..MatchOptions::default()
    };
    // 도깨비불 보정과 공백 무시를 함께
    let m = KoreanTextMatcher::find_first("바 다", "받", opts);
    assert!(m.success());
    assert_eq!(m.index(), 0);
    assert_eq!(m.length(), 3);
    assert_eq!(m.value(), "바 다");

    let opts = MatchOptions {
        ignore_case: true,
        ignore_whitespace: true,
        ..MatchOptions::default()
    };
    let m = KoreanTextMatcher::find_first("한글 Search 엔진", "seARCH", opts);
    assert!(m.success());
    assert_eq!(m.value(), "Search");
}

#[test]
fn test_find_iter_at() {
    let matcher = KoreanTextMatcher::new("하늘");
    let indices: Vec<usize> = matcher
        .find_iter_at("하늘 별 하늘", 1)
        .unwrap()
        .map(|m| m.index())
        .collect();
    assert_eq!(indices, vec![5]);
}

#[test]
fn test_matcher_reuse_across_texts() {
    let matcher = KoreanTextMatcher::new("ㄱㅅ");
    assert!(matcher.find("근사 매칭").success());
    assert!(matcher.find("검색 엔진").success());
    assert!(!matcher.find("매칭 엔진").success());
}

#[test]
fn test_codec_matcher_agreement() {
    // 분해한 초성만으로 만든 패턴은 원문에 항상 부합한다
    let text = "동해물과 백두산이";
    let pattern: String = text
        .chars()
        .map(|c| {
            if syllable::is_syllable(c) {
                syllable::get_compat_choseong(c).unwrap()
            } else {
                c
            }
        })
        .collect();
    assert!(is_match(text, &pattern));
}

#[test]
fn test_codec_roundtrip_through_split() {
    for syl in ['한', '글', '밝', '값', '하'] {
        let cho = syllable::get_compat_choseong(syl).unwrap();
        let jung = syllable::get_compat_jungseong(syl).unwrap();
        let jong = syllable::get_compat_jongseong(syl).unwrap();
        let jong = (jong != jamo::NUL).then_some(jong);
        assert_eq!(syllable::compose(cho, jung, jong), Ok(syl));
    }
}
