//! autoqubo 라이브러리
//!
//! 정수/범주형 변수 위에 정의된 블랙박스 목적 함수를 어닐러 입력 형식인
//! QUBO 행렬과 오프셋으로 컴파일한다.
//!
//! ```
//! use autoqubo::{binarization, objective, Assignment, SamplingCompiler, SearchSpace};
//!
//! let mut s = SearchSpace::new();
//! s.add("a", binarization::uint(), 3)?;
//! s.add("b", binarization::uint(), 3)?;
//!
//! let ff = objective(|args| Ok((2 * args.int("a")? + 3 * args.int("b")?) as f64));
//! let compiler = SamplingCompiler::default();
//! let qubo = compiler.generate_qubo_matrix(&ff, &s)?;
//! assert!(compiler.test_qubo_matrix(&ff, &qubo, &s, None)?);
//!
//! let x = s.encode(&Assignment::new().with("a", 3i64).with("b", 6i64))?;
//! assert_eq!(qubo.energy(&x)?, 24.0);
//! # Ok::<(), autoqubo::QuboError>(())
//! ```

pub mod core;

// 핵심 모듈들 재수출
pub use self::core::{binarization, compiler, sampler, search_space, utils};
pub use self::core::{
    energy, generate_qubo_matrix, objective, test_qubo_matrix, Assignment, Binarization, BitVector,
    CacheStats, Compilation, CompilerConfig, Objective, Qubo, QuboError, QuboTerm, Result, Sample,
    SampleSet, Sampler, SamplerParams, SamplingCompiler, Scheme, SearchSpace, Tolerance,
    ValidationConfig, ValidationReport, Value, VariableSpec,
};
