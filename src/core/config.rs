//! # 컴파일러 구성 설정
//!
//! 샘플링 컴파일러와 2차 검증기의 설정값들

use approx::relative_eq;
use serde::{Deserialize, Serialize};

/// 샘플링 컴파일러 설정
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompilerConfig {
    /// 프로브 평가 병렬화 여부
    pub parallel: bool,
    /// 병렬 평가 워커 수
    pub num_threads: usize,
    /// 검증 설정
    pub validation: ValidationConfig,
}

/// 2차 가설 검증 설정
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// 프로브 집합 외에 추가로 확인할 무작위 벡터 수
    pub random_samples: usize,
    /// 무작위 벡터 시드
    pub seed: u64,
    /// 이 비트 수 이하에서는 2^n개 벡터 전체를 확인
    pub exhaustive_limit: usize,
    /// 비교 허용 오차
    pub tolerance: Tolerance,
}

/// 목적 함수 값과 에너지 비교 방식
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Tolerance {
    /// 정확히 같아야 함
    Exact,
    /// `approx::relative_eq!` 기준
    Approx { epsilon: f64, max_relative: f64 },
    /// 두 값이 모두 정수면 정확 비교, 아니면 상대 오차 비교
    Auto,
}

/// 이 범위 밖에서는 ulp가 1 이상이라 정수 비교가 반올림 오차를 흡수하지 못한다 (2^52)
const EXACT_INTEGER_LIMIT: f64 = 4_503_599_627_370_496.0;
const DEFAULT_EPSILON: f64 = 1e-9;

impl Tolerance {
    pub fn matches(&self, expected: f64, actual: f64) -> bool {
        match *self {
            Tolerance::Exact => expected == actual,
            Tolerance::Approx {
                epsilon,
                max_relative,
            } => relative_eq!(expected, actual, epsilon = epsilon, max_relative = max_relative),
            Tolerance::Auto => {
                if is_exact_integer(expected) && is_exact_integer(actual) {
                    expected == actual
                } else {
                    relative_eq!(
                        expected,
                        actual,
                        epsilon = DEFAULT_EPSILON,
                        max_relative = DEFAULT_EPSILON
                    )
                }
            }
        }
    }
}

fn is_exact_integer(v: f64) -> bool {
    v.is_finite() && v.fract() == 0.0 && v.abs() < EXACT_INTEGER_LIMIT
}

// Default 구현들

impl Default for CompilerConfig {
    fn default() -> Self {
        Self {
            parallel: true,
            num_threads: num_cpus::get(),
            validation: ValidationConfig::default(),
        }
    }
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            random_samples: 1000,
            seed: 0x5eed,
            exhaustive_limit: 12,
            tolerance: Tolerance::Auto,
        }
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Tolerance::Auto
    }
}

impl CompilerConfig {
    /// 단일 스레드 순차 평가
    pub fn serial() -> Self {
        Self {
            parallel: false,
            ..Self::default()
        }
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_num_threads(mut self, num_threads: usize) -> Self {
        self.num_threads = num_threads.max(1);
        self
    }

    pub fn with_validation(mut self, validation: ValidationConfig) -> Self {
        self.validation = validation;
        self
    }
}

impl ValidationConfig {
    pub fn with_random_samples(mut self, random_samples: usize) -> Self {
        self.random_samples = random_samples;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_exhaustive_limit(mut self, exhaustive_limit: usize) -> Self {
        self.exhaustive_limit = exhaustive_limit;
        self
    }

    pub fn with_tolerance(mut self, tolerance: Tolerance) -> Self {
        self.tolerance = tolerance;
        self
    }
}
