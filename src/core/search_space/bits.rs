//! 비트 벡터 - 검색 공간, 컴파일러, 외부 어닐러 사이의 교환 형식

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Deref;

/// {0,1} 값의 고정 길이 시퀀스
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct BitVector(Vec<u8>);

impl BitVector {
    /// 0이 아닌 값은 1로 정규화
    pub fn new(bits: Vec<u8>) -> Self {
        BitVector(bits.into_iter().map(|b| (b != 0) as u8).collect())
    }

    /// 모두 0인 벡터
    pub fn zeros(len: usize) -> Self {
        BitVector(vec![0; len])
    }

    /// i번째 비트만 1인 단위 벡터
    pub fn unit(len: usize, i: usize) -> Self {
        let mut bits = vec![0; len];
        bits[i] = 1;
        BitVector(bits)
    }

    /// i, j번째 비트가 1인 벡터
    pub fn pair(len: usize, i: usize, j: usize) -> Self {
        let mut bits = vec![0; len];
        bits[i] = 1;
        bits[j] = 1;
        BitVector(bits)
    }

    /// 정수의 하위 `len`비트 (LSB 우선)
    pub fn from_index(len: usize, index: u64) -> Self {
        BitVector((0..len).map(|k| ((index >> k) & 1) as u8).collect())
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.0
    }

    /// 1인 비트 개수
    pub fn count_ones(&self) -> usize {
        self.0.iter().filter(|&&b| b == 1).count()
    }
}

impl Deref for BitVector {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for BitVector {
    fn from(bits: Vec<u8>) -> Self {
        BitVector::new(bits)
    }
}

impl From<&[u8]> for BitVector {
    fn from(bits: &[u8]) -> Self {
        BitVector::new(bits.to_vec())
    }
}

impl fmt::Display for BitVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for b in &self.0 {
            write!(f, "{}", b)?;
        }
        write!(f, "]")
    }
}
