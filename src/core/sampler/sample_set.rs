//! 샘플러 결과 집합

use serde::{Deserialize, Serialize};

use crate::core::compiler::Qubo;
use crate::core::error::Result;
use crate::core::search_space::{Assignment, BitVector, SearchSpace};

/// 후보 해 하나
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub bits: BitVector,
    pub energy: f64,
}

/// 에너지 오름차순 후보 목록
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SampleSet {
    samples: Vec<Sample>,
}

impl SampleSet {
    /// 정렬해서 보관
    pub fn new(mut samples: Vec<Sample>) -> Self {
        samples.sort_by(|a, b| a.energy.total_cmp(&b.energy));
        Self { samples }
    }

    /// 비트 벡터들을 QUBO로 채점해 정렬
    pub fn score<I>(qubo: &Qubo, candidates: I) -> Result<Self>
    where
        I: IntoIterator<Item = BitVector>,
    {
        let samples = candidates
            .into_iter()
            .map(|bits| -> Result<Sample> {
                let energy = qubo.energy(&bits)?;
                Ok(Sample { bits, energy })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(samples))
    }

    /// 최적 후보
    pub fn first(&self) -> Option<&Sample> {
        self.samples.first()
    }

    /// 최적 후보를 변수 값으로 디코딩
    pub fn decode_first(&self, space: &SearchSpace) -> Option<Result<Assignment>> {
        self.first().map(|s| space.decode(&s.bits))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Sample> {
        self.samples.iter()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}
