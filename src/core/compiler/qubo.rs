//! QUBO 행렬과 오프셋

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::core::error::{QuboError, Result};
use crate::core::utils;

/// 상삼각 QUBO 행렬 + 스칼라 오프셋
///
/// 대각 `Q[i][i]`는 bit_i의 계수, `Q[i][j]` (i < j)는 bit_i·bit_j의 계수.
/// 대각 아래는 0이다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Qubo {
    pub matrix: Array2<f64>,
    pub offset: f64,
}

/// 0이 아닌 계수 하나
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuboTerm {
    pub i: usize,
    pub j: usize,
    pub coefficient: f64,
}

impl QuboTerm {
    pub fn is_linear(&self) -> bool {
        self.i == self.j
    }
}

impl Qubo {
    /// 정사각 행렬만 허용. 대각 아래 항목은 대응되는 상삼각 위치로 합쳐진다.
    pub fn new(matrix: Array2<f64>, offset: f64) -> Result<Self> {
        let (rows, cols) = matrix.dim();
        if rows != cols {
            return Err(QuboError::Dimension {
                rows,
                cols,
                len: rows,
            });
        }

        let mut upper = Array2::zeros((rows, cols));
        for ((i, j), &v) in matrix.indexed_iter() {
            let (r, c) = if i <= j { (i, j) } else { (j, i) };
            upper[[r, c]] += v;
        }
        Ok(Self {
            matrix: upper,
            offset,
        })
    }

    /// 모든 계수가 0인 n비트 QUBO
    pub fn zeros(size: usize) -> Self {
        Self {
            matrix: Array2::zeros((size, size)),
            offset: 0.0,
        }
    }

    pub fn size(&self) -> usize {
        self.matrix.nrows()
    }

    /// bit_i 계수
    pub fn linear(&self, i: usize) -> f64 {
        self.matrix[[i, i]]
    }

    /// bit_i·bit_j 계수 (순서 무관)
    pub fn quadratic(&self, i: usize, j: usize) -> f64 {
        if i <= j {
            self.matrix[[i, j]]
        } else {
            self.matrix[[j, i]]
        }
    }

    /// `xᵀQx + offset`
    pub fn energy(&self, x: &[u8]) -> Result<f64> {
        utils::energy(&self.matrix, x, self.offset)
    }

    /// 0이 아닌 계수 목록 (행 우선)
    pub fn terms(&self) -> Vec<QuboTerm> {
        self.matrix
            .indexed_iter()
            .filter(|&((i, j), &v)| i <= j && v != 0.0)
            .map(|((i, j), &coefficient)| QuboTerm { i, j, coefficient })
            .collect()
    }

    /// 대칭 행렬 형태 (비대각 계수를 절반씩 나눔)
    pub fn to_symmetric(&self) -> Array2<f64> {
        let n = self.size();
        let mut sym = Array2::zeros((n, n));
        for ((i, j), &v) in self.matrix.indexed_iter() {
            if i == j {
                sym[[i, i]] = v;
            } else if i < j {
                sym[[i, j]] = v / 2.0;
                sym[[j, i]] = v / 2.0;
            }
        }
        sym
    }
}
