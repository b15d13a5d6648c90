//! # 어닐러 경계
//!
//! 외부 샘플러(어닐러)가 QUBO를 받아 후보 비트 벡터를 돌려주는 인터페이스.
//! 이 크레이트는 QUBO를 풀지 않는다. 구현은 호출자가 제공한다.

pub mod sample_set;

// 테스트 모듈
#[cfg(test)]
mod __tests__;

pub use sample_set::{Sample, SampleSet};

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::core::compiler::Qubo;

/// 샘플러에 그대로 전달되는 파라미터 (read 수, 어닐링 시간 등)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SamplerParams {
    entries: BTreeMap<String, serde_json::Value>,
}

impl SamplerParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.entries.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &serde_json::Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// QUBO 샘플러
pub trait Sampler {
    /// 에너지 오름차순(최적 우선)으로 정렬된 후보를 돌려준다
    fn sample_qubo(&self, qubo: &Qubo, params: &SamplerParams) -> anyhow::Result<SampleSet>;
}
