//! # 샘플링 컴파일러 모듈
//!
//! 목적 함수를 구조화된 프로브 집합에서 샘플링해 QUBO 행렬과 오프셋을 복원하고,
//! 목적 함수가 실제로 2차인지 검증한다.

pub mod objective;
pub mod cache;
pub mod probe;
pub mod qubo;
pub mod sampling_compiler;
pub mod validator;

// 테스트 모듈
#[cfg(test)]
mod __tests__;

pub use objective::{objective, Objective, PseudoBoolean};
pub use cache::{CacheStats, SampleCache};
pub use probe::ProbeSet;
pub use qubo::{Qubo, QuboTerm};
pub use sampling_compiler::{Compilation, SamplingCompiler};
pub use validator::{Mismatch, ValidationReport};

use crate::core::error::Result;
use crate::core::search_space::{BitVector, SearchSpace};

/// 기본 설정으로 QUBO 생성
pub fn generate_qubo_matrix<O>(objective: &O, space: &SearchSpace) -> Result<Qubo>
where
    O: Objective + ?Sized,
{
    SamplingCompiler::default().generate_qubo_matrix(objective, space)
}

/// 기본 설정으로 2차 가설 검증
pub fn test_qubo_matrix<O>(
    objective: &O,
    qubo: &Qubo,
    space: &SearchSpace,
    samples: Option<&[BitVector]>,
) -> Result<bool>
where
    O: Objective + ?Sized,
{
    SamplingCompiler::default().test_qubo_matrix(objective, qubo, space, samples)
}
