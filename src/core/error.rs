//! # 에러 타입
//!
//! 바이너리화, 검색 공간, 샘플링 컴파일러, 에너지 평가에서 발생하는 모든 에러

use thiserror::Error;

use super::search_space::BitVector;

/// autoqubo 공용 결과 타입
pub type Result<T> = std::result::Result<T, QuboError>;

/// 라이브러리 에러
///
/// 모두 호출자 측 계약 위반이다. 목적 함수가 2차가 아니라는 판정은 에러가 아니라
/// `test_qubo_matrix`의 `false` 결과로 표현된다.
#[derive(Error, Debug)]
pub enum QuboError {
    /// 스킴이 표현할 수 없는 값
    #[error("{scheme} 스킴 도메인 밖의 값: {reason}")]
    Domain { scheme: &'static str, reason: String },

    /// 스킴이 지원하지 않는 비트 폭
    #[error("{scheme} 스킴은 폭 {width}를 지원하지 않습니다: {reason}")]
    InvalidWidth {
        scheme: &'static str,
        width: usize,
        reason: String,
    },

    #[error("이미 등록된 변수 이름: {0}")]
    DuplicateName(String),

    #[error("등록되지 않은 변수: {0}")]
    UnknownVariable(String),

    #[error("할당에서 누락된 변수: {0}")]
    MissingVariable(String),

    #[error("비트 벡터 길이 불일치: 기대 {expected}, 실제 {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// 목적 함수 호출 실패 (복구하지 않음)
    #[error("목적 함수 평가 실패 (비트 {bits}): {source}")]
    ObjectiveEvaluation {
        bits: BitVector,
        #[source]
        source: anyhow::Error,
    },

    /// 프로브 비트 벡터 디코딩 실패
    #[error("프로브 {bits} 디코딩 실패: {source}")]
    ProbeDecode {
        bits: BitVector,
        #[source]
        source: Box<QuboError>,
    },

    #[error("차원 불일치: 행렬 {rows}x{cols}, 벡터 길이 {len}")]
    Dimension { rows: usize, cols: usize, len: usize },

    #[error("스레드 풀 생성 실패: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

impl QuboError {
    pub(crate) fn domain(scheme: &'static str, reason: impl Into<String>) -> Self {
        QuboError::Domain {
            scheme,
            reason: reason.into(),
        }
    }
}
