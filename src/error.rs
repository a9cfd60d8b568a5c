//! 오류 타입 정의

use thiserror::Error;

/// 코덱/매처 공용 오류
///
/// 모든 오류는 호출 시점에 즉시 보고되며 재시도나 부분 결과는 없다.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HangulError {
    /// 한글 음절이 아닌 문자를 분해하려 할 때
    #[error("한글 음절이 아님: {0:?}")]
    NotASyllable(char),

    /// 요청한 역할의 자모가 아닌 문자
    #[error("유효한 자모가 아님: {0:?}")]
    InvalidJamo(char),

    /// 조합 테이블에 없는 자모 열
    #[error("조합할 수 없는 자모 열: {0:?}")]
    InvalidJamoSequence(String),

    /// 호출자 제공 버퍼가 부족할 때
    #[error("출력 버퍼 부족: {needed}자 필요")]
    BufferTooSmall { needed: usize },

    /// 검색 시작 위치가 텍스트 범위를 벗어날 때
    #[error("검색 시작 위치 초과: {index} (텍스트 길이 {len})")]
    StartIndexOutOfRange { index: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, HangulError>;
