use rayon::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;
use std::time::Duration;

use crate::core::compiler::SampleCache;
use crate::core::error::QuboError;
use crate::core::search_space::BitVector;

#[test]
fn 같은_키는_한_번만_평가된다() {
    let cache = SampleCache::new();
    let calls = AtomicUsize::new(0);
    let key = BitVector::zeros(4);

    for _ in 0..5 {
        let v = cache
            .get_or_evaluate(&key, |_| {
                calls.fetch_add(1, Ordering::SeqCst);
                Ok(1.5)
            })
            .unwrap();
        assert_eq!(v, 1.5);
    }

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    let stats = cache.stats();
    assert_eq!(stats.misses, 1);
    assert_eq!(stats.hits, 4);
    assert_eq!(stats.lookups(), 5);
    assert!((stats.hit_rate() - 0.8).abs() < 1e-6);
    assert_eq!(cache.get(&key), Some(1.5));
    assert_eq!(cache.len(), 1);
}

#[test]
fn 동시_요청은_합쳐진다() {
    let cache = SampleCache::new();
    let calls = AtomicUsize::new(0);
    let key = BitVector::unit(3, 1);

    let values: Vec<f64> = (0..32)
        .into_par_iter()
        .map(|_| {
            cache
                .get_or_evaluate(&key, |_| {
                    calls.fetch_add(1, Ordering::SeqCst);
                    // 느린 목적 함수 흉내
                    thread::sleep(Duration::from_millis(20));
                    Ok(42.0)
                })
                .unwrap()
        })
        .collect();

    assert!(values.iter().all(|&v| v == 42.0));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(cache.stats().misses, 1);
    assert_eq!(cache.stats().lookups(), 32);
}

fn 평가_실패(b: &BitVector) -> Result<f64, QuboError> {
    Err(QuboError::ObjectiveEvaluation {
        bits: b.clone(),
        source: anyhow::anyhow!("실패"),
    })
}

#[test]
fn 실패한_평가도_기록되어_다시_호출하지_않는다() {
    let cache = SampleCache::new();
    let calls = AtomicUsize::new(0);
    let key = BitVector::zeros(2);

    let err = cache
        .get_or_evaluate(&key, |b| {
            calls.fetch_add(1, Ordering::SeqCst);
            평가_실패(b)
        })
        .unwrap_err();
    assert!(matches!(err, QuboError::ObjectiveEvaluation { .. }));
    assert!(cache.get(&key).is_none());
    assert!(cache.is_empty());
    assert_eq!(cache.failures(), 1);

    // 두 번째 요청은 목적 함수를 부르지 않고 같은 실패를 받는다
    let err = cache
        .get_or_evaluate(&key, |_| {
            calls.fetch_add(1, Ordering::SeqCst);
            Ok(1.0)
        })
        .unwrap_err();
    match err {
        QuboError::ObjectiveEvaluation { bits, source } => {
            assert_eq!(bits, key);
            assert!(source.to_string().contains("실패"));
        }
        other => panic!("예상치 못한 에러: {:?}", other),
    }
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(cache.stats().misses, 1);
    assert_eq!(cache.stats().hits, 1);
}

#[test]
fn 동시_요청이_실패를_공유한다() {
    let cache = SampleCache::new();
    let calls = AtomicUsize::new(0);
    let key = BitVector::unit(4, 0);

    let results: Vec<Result<f64, QuboError>> = (0..16)
        .into_par_iter()
        .map(|_| {
            cache.get_or_evaluate(&key, |b| {
                calls.fetch_add(1, Ordering::SeqCst);
                thread::sleep(Duration::from_millis(30));
                평가_실패(b)
            })
        })
        .collect();

    assert!(results
        .iter()
        .all(|r| matches!(r, Err(QuboError::ObjectiveEvaluation { .. }))));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(cache.stats().misses, 1);
    assert_eq!(cache.stats().lookups(), 16);
}
