//! # autoqubo 핵심 모듈
//!
//! 바이너리화 -> 검색 공간 -> 샘플링 컴파일러 -> 에너지 평가

pub mod error;
pub mod config;
pub mod binarization;
pub mod search_space;
pub mod compiler;
pub mod utils;
pub mod sampler;

// 테스트 모듈
#[cfg(test)]
mod __tests__;

// 주요 타입들 재수출
pub use error::{QuboError, Result};
pub use config::{CompilerConfig, Tolerance, ValidationConfig};
pub use binarization::{Binarization, Scheme, Value};
pub use search_space::{Assignment, BitVector, SearchSpace, VariableSpec};
pub use compiler::{
    generate_qubo_matrix, objective, test_qubo_matrix, CacheStats, Compilation, Objective, Qubo,
    QuboTerm, SamplingCompiler, ValidationReport,
};
pub use utils::energy;
pub use sampler::{Sample, SampleSet, Sampler, SamplerParams};
