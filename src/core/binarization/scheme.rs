//! 바이너리화 스킴 트레이트

use std::fmt;
use std::sync::Arc;

use super::Value;
use crate::core::error::Result;

/// 인코딩 스킴 능력
///
/// 새 스킴은 이 트레이트를 구현하는 것만으로 `SearchSpace`와 `SamplingCompiler`에서
/// 그대로 사용된다. 폭은 변수 등록 시 함께 주어지며 `check_width`로 검증된다.
pub trait Binarization: fmt::Debug + Send + Sync {
    /// 스킴 이름
    fn name(&self) -> &'static str;

    /// 주어진 폭을 이 스킴이 표현할 수 있는지 확인
    fn check_width(&self, width: usize) -> Result<()>;

    /// 값 -> 정확히 `width`개의 비트
    fn encode(&self, value: &Value, width: usize) -> Result<Vec<u8>>;

    /// 비트 -> 값. `check_width`를 통과한 길이의 모든 비트 조합에 대해 전함수.
    fn decode(&self, bits: &[u8]) -> Value;
}

/// 검색 공간이 공유하는 스킴 핸들
pub type Scheme = Arc<dyn Binarization>;
