//! 2차 가설 검증
//!
//! 목적 함수가 2차가 아니라는 판정은 에러가 아니라 정상적인 결과다.

use log::{debug, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{Objective, ProbeSet, PseudoBoolean, Qubo, SampleCache, SamplingCompiler};
use crate::core::error::{QuboError, Result};
use crate::core::search_space::{BitVector, SearchSpace};

/// 첫 번째 불일치
#[derive(Debug, Clone, PartialEq)]
pub struct Mismatch {
    pub bits: BitVector,
    /// 목적 함수 값
    pub expected: f64,
    /// QUBO 에너지
    pub actual: f64,
}

/// 검증 결과
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationReport {
    /// 확인한 서로 다른 벡터 수
    pub checked: usize,
    pub mismatch: Option<Mismatch>,
}

impl ValidationReport {
    pub fn is_quadratic(&self) -> bool {
        self.mismatch.is_none()
    }
}

impl SamplingCompiler {
    /// 프로브 집합과 추가 벡터에서 `xᵀQx + offset == g(x)` 확인
    ///
    /// `samples`가 없으면 설정에 따라 전체 열거(작은 공간) 또는 무작위 벡터를 쓴다.
    pub fn validate<O>(
        &self,
        objective: &O,
        qubo: &Qubo,
        space: &SearchSpace,
        samples: Option<&[BitVector]>,
    ) -> Result<ValidationReport>
    where
        O: Objective + ?Sized,
    {
        let n = space.size();
        if qubo.size() != n {
            let (rows, cols) = qubo.matrix.dim();
            return Err(QuboError::Dimension { rows, cols, len: n });
        }

        let g = PseudoBoolean::new(objective, space);
        let cache = SampleCache::new();
        let tolerance = self.config.validation.tolerance;
        let mut checked = 0;

        for bits in self.validation_vectors(n, samples) {
            if cache.get(&bits).is_some() {
                continue;
            }
            let expected = cache.get_or_evaluate(&bits, |b| g.evaluate(b))?;
            let actual = qubo.energy(&bits)?;
            checked += 1;

            if !tolerance.matches(expected, actual) {
                warn!(
                    "2차 검증 실패: {} 에서 목적 함수 {} != 에너지 {}",
                    bits, expected, actual
                );
                return Ok(ValidationReport {
                    checked,
                    mismatch: Some(Mismatch {
                        bits,
                        expected,
                        actual,
                    }),
                });
            }
        }

        debug!("2차 검증 통과: 벡터 {}개", checked);
        Ok(ValidationReport {
            checked,
            mismatch: None,
        })
    }

    /// `validate`의 불리언 판정
    pub fn test_qubo_matrix<O>(
        &self,
        objective: &O,
        qubo: &Qubo,
        space: &SearchSpace,
        samples: Option<&[BitVector]>,
    ) -> Result<bool>
    where
        O: Objective + ?Sized,
    {
        Ok(self.validate(objective, qubo, space, samples)?.is_quadratic())
    }

    fn validation_vectors(&self, n: usize, samples: Option<&[BitVector]>) -> Vec<BitVector> {
        let config = &self.config.validation;
        let mut vectors = ProbeSet::new(n).vectors();

        match samples {
            Some(extra) => vectors.extend(extra.iter().cloned()),
            None if n <= config.exhaustive_limit && n < 64 => {
                vectors.extend((0..1u64 << n).map(|index| BitVector::from_index(n, index)));
            }
            None => {
                let mut rng = StdRng::seed_from_u64(config.seed);
                vectors.extend((0..config.random_samples).map(|_| {
                    BitVector::new((0..n).map(|_| rng.gen::<bool>() as u8).collect())
                }));
            }
        }
        vectors
    }
}
