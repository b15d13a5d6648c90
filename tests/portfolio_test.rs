//! 포트폴리오 최적화 모델 컴파일 테스트

mod common;

use approx::assert_relative_eq;
use autoqubo::{
    Assignment, BitVector, CompilerConfig, SampleSet, SamplingCompiler, ValidationConfig,
};
use common::{Portfolio, C};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn 포트폴리오_목적_함수(
    portfolio: &Portfolio,
) -> impl Fn(&Assignment) -> anyhow::Result<f64> + Sync + '_ {
    move |args: &Assignment| Ok(portfolio.objective(args.vector("x")?) as f64)
}

#[test]
fn 포트폴리오_모델은_2차로_컴파일된다() {
    let portfolio = Portfolio::sample();
    let s = portfolio.search_space();
    let f = 포트폴리오_목적_함수(&portfolio);

    let compiler = SamplingCompiler::default();
    let compilation = compiler.compile(&f, &s).unwrap();
    assert_eq!(compilation.evaluations(), 1 + 9 + 36);
    let qubo = compilation.qubo;

    assert!(compiler.test_qubo_matrix(&f, &qubo, &s, None).unwrap());
    // x = 0 이면 예산 제약만 남는다
    assert_eq!(qubo.offset, (C * 100) as f64);

    let mut rng = StdRng::seed_from_u64(2024);
    for _ in 0..100 {
        let w: Vec<i64> = (0..3).map(|_| rng.gen_range(0..8)).collect();
        let x = s.encode(&Assignment::new().with("x", w.clone())).unwrap();
        assert_relative_eq!(qubo.energy(&x).unwrap(), portfolio.objective(&w) as f64);
    }
}

#[test]
fn 무작위_검증도_통과한다() {
    let portfolio = Portfolio::sample();
    let s = portfolio.search_space();
    let f = 포트폴리오_목적_함수(&portfolio);

    let compiler = SamplingCompiler::new(CompilerConfig::serial().with_validation(
        ValidationConfig::default()
            .with_exhaustive_limit(0)
            .with_random_samples(300),
    ));
    let qubo = compiler.generate_qubo_matrix(&f, &s).unwrap();
    let report = compiler.validate(&f, &qubo, &s, None).unwrap();
    assert!(report.is_quadratic());
    assert!(report.checked > 46);
}

#[test]
fn 채점된_최적_후보는_목적_함수_최소값이다() {
    let portfolio = Portfolio::sample();
    let s = portfolio.search_space();
    let f = 포트폴리오_목적_함수(&portfolio);
    let qubo = SamplingCompiler::default().generate_qubo_matrix(&f, &s).unwrap();

    // 외부 어닐러 대신 전체 후보를 채점
    let candidates = (0..1u64 << s.size()).map(|index| BitVector::from_index(s.size(), index));
    let set = SampleSet::score(&qubo, candidates).unwrap();
    assert_eq!(set.len(), 512);

    let best = set.decode_first(&s).unwrap().unwrap();
    let w = best.vector("x").unwrap();
    let brute_force = (0..512u64)
        .map(|index| {
            let w: Vec<i64> = (0..3).map(|k| ((index >> (3 * k)) & 7) as i64).collect();
            portfolio.objective(&w)
        })
        .min()
        .unwrap();
    assert_eq!(portfolio.objective(w), brute_force);
    assert_eq!(set.first().unwrap().energy, brute_force as f64);
    assert_eq!(w, &[4, 1, 5]);
    assert_eq!(w.iter().sum::<i64>(), portfolio.budget);
}
