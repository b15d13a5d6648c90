//! 컴파일 호출 단위 샘플 캐시
//!
//! 같은 비트 벡터는 최대 한 번만 평가된다. 동시에 같은 키를 요청한 워커들은
//! 하나의 평가 결과를 기다렸다가 공유한다. 실패한 평가도 기록되며 다시 호출하지 않는다.

use anyhow::anyhow;
use once_cell::sync::OnceCell;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::core::error::{QuboError, Result};
use crate::core::search_space::BitVector;

/// 캐시 통계
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    /// 실제 목적 함수 평가 횟수
    pub misses: u64,
}

impl CacheStats {
    pub fn lookups(&self) -> u64 {
        self.hits + self.misses
    }

    pub fn hit_rate(&self) -> f32 {
        let total = self.lookups();
        if total == 0 {
            0.0
        } else {
            self.hits as f32 / total as f32
        }
    }
}

/// 평가 결과. 실패는 메시지만 남긴다.
type Outcome = std::result::Result<f64, String>;

/// 비트 벡터 -> 목적 함수 값
#[derive(Debug, Default)]
pub struct SampleCache {
    cells: Mutex<HashMap<BitVector, Arc<OnceCell<Outcome>>>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl SampleCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// 캐시된 값을 돌려주거나 `evaluate`로 한 번만 계산
    pub fn get_or_evaluate<F>(&self, bits: &BitVector, evaluate: F) -> Result<f64>
    where
        F: FnOnce(&BitVector) -> Result<f64>,
    {
        let cell = {
            let mut cells = self.cells.lock();
            cells
                .entry(bits.clone())
                .or_insert_with(|| Arc::new(OnceCell::new()))
                .clone()
        };

        if let Some(outcome) = cell.get() {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return replay(bits, outcome);
        }

        // 맵 잠금은 풀린 상태. 같은 셀을 기다리는 워커만 블록된다.
        let mut evaluated = false;
        let mut failure = None;
        let outcome = cell.get_or_init(|| {
            evaluated = true;
            evaluate(bits).map_err(|e| {
                let message = e.to_string();
                failure = Some(e);
                message
            })
        });

        let counter = if evaluated { &self.misses } else { &self.hits };
        counter.fetch_add(1, Ordering::Relaxed);

        // 직접 평가한 워커는 원래 에러를 그대로 돌려준다
        match failure {
            Some(e) => Err(e),
            None => replay(bits, outcome),
        }
    }

    /// 이미 평가된 값
    pub fn get(&self, bits: &BitVector) -> Option<f64> {
        self.cells
            .lock()
            .get(bits)
            .and_then(|cell| cell.get().and_then(|outcome| outcome.as_ref().ok().copied()))
    }

    /// 값이 확정된 서로 다른 벡터 수
    pub fn len(&self) -> usize {
        self.cells
            .lock()
            .values()
            .filter(|cell| matches!(cell.get(), Some(Ok(_))))
            .count()
    }

    /// 평가에 실패한 서로 다른 벡터 수
    pub fn failures(&self) -> usize {
        self.cells
            .lock()
            .values()
            .filter(|cell| matches!(cell.get(), Some(Err(_))))
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }
}

/// 기록된 결과를 다시 돌려준다. 실패는 같은 비트 벡터의 평가 에러로 재구성한다.
fn replay(bits: &BitVector, outcome: &Outcome) -> Result<f64> {
    match outcome {
        Ok(value) => Ok(*value),
        Err(message) => Err(QuboError::ObjectiveEvaluation {
            bits: bits.clone(),
            source: anyhow!("이미 실패한 평가: {}", message),
        }),
    }
}
