use autoqubo::{
    binarization, objective, Assignment, CompilerConfig, Qubo, SamplingCompiler, SearchSpace,
};
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::process;

/// 예제 포트폴리오 데이터 (자산 3개)
const BUDGET: i64 = 10;
const MEANS: [i64; 3] = [5, 7, 3];
const COVARIANCE: [[i64; 3]; 3] = [[4, 1, 0], [1, 6, 2], [0, 2, 3]];
/// 분산, 기대수익, 예산 제약 가중치
const A: i64 = 1;
const B: i64 = -1;
const C: i64 = 100;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let matches = Command::new("autoqubo")
        .version("0.1.0")
        .about("블랙박스 목적 함수를 QUBO로 컴파일하는 예제 도구")
        .arg(
            Arg::new("serial")
                .long("serial")
                .action(ArgAction::SetTrue)
                .global(true)
                .help("프로브를 순차적으로 평가"),
        )
        .arg(
            Arg::new("threads")
                .long("threads")
                .short('t')
                .value_name("COUNT")
                .value_parser(clap::value_parser!(usize))
                .global(true)
                .help("병렬 평가 워커 수"),
        )
        .subcommand(Command::new("linear").about("f(a, b) = 2a + 3b 예제"))
        .subcommand(Command::new("portfolio").about("평균-분산 포트폴리오 예제"))
        .get_matches();

    let compiler = SamplingCompiler::new(build_config(&matches));

    let result = match matches.subcommand() {
        Some(("linear", _)) => run_linear(&compiler),
        Some(("portfolio", _)) => run_portfolio(&compiler),
        _ => {
            println!("❌ 명령을 지정해주세요. --help를 참조하세요.");
            process::exit(1);
        }
    };

    if let Err(e) = result {
        eprintln!("❌ 오류: {:#}", e);
        process::exit(1);
    }
}

fn build_config(matches: &ArgMatches) -> CompilerConfig {
    let mut config = CompilerConfig::default().with_parallel(!matches.get_flag("serial"));
    if let Some(&threads) = matches.get_one::<usize>("threads") {
        config = config.with_num_threads(threads);
    }
    config
}

fn run_linear(compiler: &SamplingCompiler) -> anyhow::Result<()> {
    let mut s = SearchSpace::new();
    s.add("a", binarization::uint(), 3)?;
    s.add("b", binarization::uint(), 3)?;

    let ff = objective(|args| Ok((2 * args.int("a")? + 3 * args.int("b")?) as f64));
    let qubo = compiler.generate_qubo_matrix(&ff, &s)?;
    print_qubo(&qubo);

    let x = s.encode(&Assignment::new().with("a", 3i64).with("b", 6i64))?;
    println!("x = {}", x);
    println!("decode(x) = {:?}", s.decode(&x)?.to_map());
    println!("energy(x) = {}", qubo.energy(&x)?);
    println!("f(3, 6)   = {}", ff(&s.decode(&x)?)?);
    Ok(())
}

fn run_portfolio(compiler: &SamplingCompiler) -> anyhow::Result<()> {
    let mut s = SearchSpace::new();
    s.add("x", binarization::uint_vector(3, 3), 3 * 3)?;

    let f = objective(|args| {
        let x = args.vector("x")?;
        Ok((A * variance(x) + B * mean(x) + C * constraint(x)) as f64)
    });

    let qubo = compiler.generate_qubo_matrix(&f, &s)?;
    if compiler.test_qubo_matrix(&f, &qubo, &s, None)? {
        println!("✅ QUBO 생성 성공");
    } else {
        println!("❌ QUBO 생성 실패 - 목적 함수가 2차가 아닙니다");
    }
    print_qubo(&qubo);

    let x = s.encode(&Assignment::new().with("x", vec![3i64, 4, 3]))?;
    let weights = s.decode(&x)?;
    let w = weights.vector("x")?;
    println!(
        "x={:?}, energy={}, obj={}, constraint={}",
        w,
        qubo.energy(&x)?,
        variance(w) - mean(w),
        constraint(w)
    );
    Ok(())
}

fn variance(x: &[i64]) -> i64 {
    (0..3)
        .flat_map(|i| (0..3).map(move |j| (i, j)))
        .map(|(i, j)| x[i] * COVARIANCE[i][j] * x[j])
        .sum()
}

fn mean(x: &[i64]) -> i64 {
    x.iter().zip(MEANS.iter()).map(|(a, b)| a * b).sum()
}

fn constraint(x: &[i64]) -> i64 {
    let total: i64 = x.iter().sum();
    (total - BUDGET) * (total - BUDGET)
}

fn print_qubo(qubo: &Qubo) {
    println!("QUBO 행렬 ({}x{}):", qubo.size(), qubo.size());
    println!("{:.1}", qubo.matrix);
    println!("QUBO 오프셋: {}", qubo.offset);
}
