//! `xᵀQx + offset` 계산

use ndarray::Array2;

use crate::core::error::{QuboError, Result};

/// `Σ Q[i][i]·x_i + Σ_{i<j} Q[i][j]·x_i·x_j + offset`
///
/// 상삼각(대각 포함)만 읽는다. 부작용 없음.
pub fn energy(q: &Array2<f64>, x: &[u8], offset: f64) -> Result<f64> {
    let (rows, cols) = q.dim();
    if rows != cols || x.len() != rows {
        return Err(QuboError::Dimension {
            rows,
            cols,
            len: x.len(),
        });
    }

    let active: Vec<usize> = x
        .iter()
        .enumerate()
        .filter(|&(_, &b)| b != 0)
        .map(|(i, _)| i)
        .collect();

    let mut total = offset;
    for (k, &i) in active.iter().enumerate() {
        total += q[[i, i]];
        for &j in &active[k + 1..] {
            total += q[[i, j]];
        }
    }
    Ok(total)
}
