//! 계수 복원용 프로브 집합

use crate::core::search_space::BitVector;

/// 영벡터, 단위 벡터 n개, 쌍 벡터 n(n-1)/2개
#[derive(Debug, Clone)]
pub struct ProbeSet {
    size: usize,
    zero: BitVector,
    units: Vec<BitVector>,
}

impl ProbeSet {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            zero: BitVector::zeros(size),
            units: (0..size).map(|i| BitVector::unit(size, i)).collect(),
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn zero(&self) -> &BitVector {
        &self.zero
    }

    pub fn unit(&self, i: usize) -> &BitVector {
        &self.units[i]
    }

    pub fn pair(&self, i: usize, j: usize) -> BitVector {
        BitVector::pair(self.size, i, j)
    }

    /// 대각 셀 먼저, 이어서 i < j 상삼각 셀
    pub fn cells(&self) -> Vec<(usize, usize)> {
        let n = self.size;
        (0..n)
            .map(|i| (i, i))
            .chain((0..n).flat_map(|i| (i + 1..n).map(move |j| (i, j))))
            .collect()
    }

    /// 서로 다른 프로브 벡터 개수 `1 + n + n(n-1)/2`
    pub fn len(&self) -> usize {
        1 + self.size + self.size * self.size.saturating_sub(1) / 2
    }

    /// 모든 프로브 벡터
    pub fn vectors(&self) -> Vec<BitVector> {
        let mut out = Vec::with_capacity(self.len());
        out.push(self.zero.clone());
        out.extend(self.units.iter().cloned());
        for i in 0..self.size {
            for j in i + 1..self.size {
                out.push(self.pair(i, j));
            }
        }
        out
    }
}
