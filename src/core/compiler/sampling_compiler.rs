//! # 샘플링 컴파일러
//!
//! 이산 뫼비우스 항등식으로 2차 이하 다중선형 전개를 정확히 복원한다.
//!
//! - `offset  = g(0)`
//! - `Q[i][i] = g(e_i) - g(0)`
//! - `Q[i][j] = g(e_i + e_j) - g(e_i) - g(e_j) + g(0)`  (i < j)
//!
//! 모든 조회는 호출 단위 `SampleCache`를 거치므로 목적 함수는 서로 다른 프로브마다
//! 정확히 한 번, 총 `1 + n + n(n-1)/2`번 호출된다.

use log::debug;
use ndarray::Array2;
use rayon::prelude::*;

use super::{Objective, ProbeSet, PseudoBoolean, Qubo, SampleCache, CacheStats};
use crate::core::config::CompilerConfig;
use crate::core::error::Result;
use crate::core::search_space::{BitVector, SearchSpace};

/// 컴파일 결과
#[derive(Debug, Clone)]
pub struct Compilation {
    pub qubo: Qubo,
    pub stats: CacheStats,
}

impl Compilation {
    /// 목적 함수가 실제로 호출된 횟수
    pub fn evaluations(&self) -> u64 {
        self.stats.misses
    }
}

/// 목적 함수 + 검색 공간 -> QUBO
#[derive(Debug, Clone, Default)]
pub struct SamplingCompiler {
    pub config: CompilerConfig,
}

impl SamplingCompiler {
    pub fn new(config: CompilerConfig) -> Self {
        Self { config }
    }

    /// QUBO 행렬과 오프셋 생성
    pub fn generate_qubo_matrix<O>(&self, objective: &O, space: &SearchSpace) -> Result<Qubo>
    where
        O: Objective + ?Sized,
    {
        Ok(self.compile(objective, space)?.qubo)
    }

    /// 캐시 통계를 포함한 컴파일
    pub fn compile<O>(&self, objective: &O, space: &SearchSpace) -> Result<Compilation>
    where
        O: Objective + ?Sized,
    {
        let n = space.size();
        let g = PseudoBoolean::new(objective, space);
        let probes = ProbeSet::new(n);
        let cache = SampleCache::new();
        debug!("QUBO 컴파일 시작: {}비트, 프로브 {}개", n, probes.len());

        let eval = |bits: &BitVector| cache.get_or_evaluate(bits, |b| g.evaluate(b));
        let coefficient = |&(i, j): &(usize, usize)| -> Result<(usize, usize, f64)> {
            let zero = eval(probes.zero())?;
            let gi = eval(probes.unit(i))?;
            if i == j {
                return Ok((i, i, gi - zero));
            }
            let gj = eval(probes.unit(j))?;
            let gij = eval(&probes.pair(i, j))?;
            Ok((i, j, gij - gi - gj + zero))
        };

        let offset = eval(probes.zero())?;
        let cells = probes.cells();

        let values: Vec<(usize, usize, f64)> = if self.config.parallel && n > 1 {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(self.config.num_threads.max(1))
                .build()?;
            pool.install(|| cells.par_iter().map(coefficient).collect::<Result<Vec<_>>>())?
        } else {
            cells.iter().map(coefficient).collect::<Result<Vec<_>>>()?
        };

        // 각 셀은 정확히 하나의 프로브 공식이 채운다
        let mut matrix = Array2::zeros((n, n));
        for (i, j, v) in values {
            matrix[[i, j]] = v;
        }

        let stats = cache.stats();
        debug!(
            "QUBO 컴파일 완료: 평가 {}회, 캐시 적중 {}회 (적중률 {:.1}%)",
            stats.misses,
            stats.hits,
            stats.hit_rate() * 100.0
        );

        Ok(Compilation {
            qubo: Qubo { matrix, offset },
            stats,
        })
    }
}
