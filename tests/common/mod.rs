//! 통합 테스트 공용 도구

#![allow(dead_code)]

use autoqubo::{binarization, objective, Assignment, Objective, SearchSpace, Value};
use parking_lot::Mutex;
use std::collections::{BTreeMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};

/// 호출 횟수와 서로 다른 인자 조합을 기록하는 목적 함수 래퍼
pub struct CountingObjective<O> {
    inner: O,
    calls: AtomicUsize,
    seen: Mutex<HashSet<BTreeMap<String, Value>>>,
}

impl<O: Objective> CountingObjective<O> {
    pub fn new(inner: O) -> Self {
        Self {
            inner,
            calls: AtomicUsize::new(0),
            seen: Mutex::new(HashSet::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn distinct(&self) -> usize {
        self.seen.lock().len()
    }

    pub fn reset(&self) {
        self.calls.store(0, Ordering::SeqCst);
        self.seen.lock().clear();
    }
}

impl<O: Objective> Objective for CountingObjective<O> {
    fn evaluate(&self, args: &Assignment) -> anyhow::Result<f64> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.seen.lock().insert(args.to_map());
        self.inner.evaluate(args)
    }
}

/// 프로브 집합 크기 `1 + n + n(n-1)/2`
pub fn probe_count(n: usize) -> usize {
    1 + n + n * n.saturating_sub(1) / 2
}

/// `f(a, b) = 2a + 3b`, a, b는 3비트 uint
pub fn linear_problem() -> (SearchSpace, impl Objective) {
    let mut s = SearchSpace::new();
    s.add("a", binarization::uint(), 3).unwrap();
    s.add("b", binarization::uint(), 3).unwrap();
    let ff = objective(|args| Ok((2 * args.int("a")? + 3 * args.int("b")?) as f64));
    (s, ff)
}

/// 평균-분산 포트폴리오 데이터
pub struct Portfolio {
    pub budget: i64,
    pub means: Vec<i64>,
    pub covariance: Vec<Vec<i64>>,
}

/// 분산, 기대수익, 예산 제약 가중치
pub const A: i64 = 1;
pub const B: i64 = -1;
pub const C: i64 = 100;

impl Portfolio {
    pub fn sample() -> Self {
        Self {
            budget: 10,
            means: vec![5, 7, 3],
            covariance: vec![vec![4, 1, 0], vec![1, 6, 2], vec![0, 2, 3]],
        }
    }

    pub fn assets(&self) -> usize {
        self.means.len()
    }

    pub fn variance(&self, x: &[i64]) -> i64 {
        let n = self.assets();
        (0..n)
            .flat_map(|i| (0..n).map(move |j| (i, j)))
            .map(|(i, j)| x[i] * self.covariance[i][j] * x[j])
            .sum()
    }

    pub fn mean(&self, x: &[i64]) -> i64 {
        x.iter().zip(&self.means).map(|(a, b)| a * b).sum()
    }

    pub fn constraint(&self, x: &[i64]) -> i64 {
        let total: i64 = x.iter().sum();
        (total - self.budget) * (total - self.budget)
    }

    pub fn objective(&self, x: &[i64]) -> i64 {
        A * self.variance(x) + B * self.mean(x) + C * self.constraint(x)
    }

    /// 자산당 3비트 가중치 벡터 공간
    pub fn search_space(&self) -> SearchSpace {
        let mut s = SearchSpace::new();
        let n = self.assets();
        s.add("x", binarization::uint_vector(n, 3), n * 3).unwrap();
        s
    }
}
