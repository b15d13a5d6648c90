//! 목적 함수 경계
//!
//! 호출자의 목적 함수는 디코딩된 변수 값 묶음(`Assignment`)을 받아 숫자를 돌려준다.

use anyhow::anyhow;

use crate::core::error::{QuboError, Result};
use crate::core::search_space::{Assignment, BitVector, SearchSpace};

/// 호출자 목적 함수
pub trait Objective: Sync {
    fn evaluate(&self, args: &Assignment) -> anyhow::Result<f64>;
}

impl<F> Objective for F
where
    F: Fn(&Assignment) -> anyhow::Result<f64> + Sync,
{
    fn evaluate(&self, args: &Assignment) -> anyhow::Result<f64> {
        self(args)
    }
}

/// 클로저 시그니처 추론용 헬퍼
///
/// ```
/// use autoqubo::objective;
///
/// let f = objective(|args| Ok(2.0 * args.int("a")? as f64));
/// # let _ = f;
/// ```
pub fn objective<F>(f: F) -> F
where
    F: Fn(&Assignment) -> anyhow::Result<f64> + Sync,
{
    f
}

/// 유도된 의사 불리언 함수 `g(bits) = f(S.decode(bits))`
pub struct PseudoBoolean<'a, O: ?Sized> {
    objective: &'a O,
    space: &'a SearchSpace,
}

impl<'a, O> PseudoBoolean<'a, O>
where
    O: Objective + ?Sized,
{
    pub fn new(objective: &'a O, space: &'a SearchSpace) -> Self {
        Self { objective, space }
    }

    /// 입력 비트 수
    pub fn arity(&self) -> usize {
        self.space.size()
    }

    pub fn evaluate(&self, bits: &BitVector) -> Result<f64> {
        let args = self.space.decode(bits).map_err(|e| QuboError::ProbeDecode {
            bits: bits.clone(),
            source: Box::new(e),
        })?;

        let value = self
            .objective
            .evaluate(&args)
            .map_err(|source| QuboError::ObjectiveEvaluation {
                bits: bits.clone(),
                source,
            })?;

        if !value.is_finite() {
            return Err(QuboError::ObjectiveEvaluation {
                bits: bits.clone(),
                source: anyhow!("유한하지 않은 목적 함수 값 {}", value),
            });
        }
        Ok(value)
    }
}
