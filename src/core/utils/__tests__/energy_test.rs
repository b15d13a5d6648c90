use approx::assert_relative_eq;
use ndarray::{array, Array2};

use crate::core::error::QuboError;
use crate::core::utils::energy;

#[test]
fn 상삼각과_오프셋만_더한다() {
    let q = array![[1.0, 2.0, 0.5], [100.0, -3.0, 4.0], [100.0, 100.0, 5.0]];
    // 대각 아래 항목은 읽지 않음
    assert_eq!(energy(&q, &[0, 0, 0], 7.0).unwrap(), 7.0);
    assert_eq!(energy(&q, &[1, 0, 0], 0.0).unwrap(), 1.0);
    assert_eq!(energy(&q, &[1, 1, 0], 0.0).unwrap(), 1.0 + 2.0 - 3.0);
    assert_eq!(energy(&q, &[1, 1, 1], 1.0).unwrap(), 1.0 - 3.0 + 5.0 + 2.0 + 0.5 + 4.0 + 1.0);
}

#[test]
fn 에너지는_이차형식과_같다() {
    let q = array![[0.25, -1.5], [0.0, 2.0]];
    for (x, expected) in [([0u8, 0u8], 0.0), ([1, 0], 0.25), ([0, 1], 2.0), ([1, 1], 0.75)] {
        assert_relative_eq!(energy(&q, &x, 0.0).unwrap(), expected);
    }
}

#[test]
fn 차원이_맞지_않으면_에러() {
    let q: Array2<f64> = Array2::zeros((3, 3));
    assert!(matches!(
        energy(&q, &[0, 1], 0.0),
        Err(QuboError::Dimension { rows: 3, cols: 3, len: 2 })
    ));

    let rect: Array2<f64> = Array2::zeros((2, 3));
    assert!(matches!(
        energy(&rect, &[0, 1], 0.0),
        Err(QuboError::Dimension { .. })
    ));
}

#[test]
fn 빈_행렬의_에너지는_오프셋() {
    let q: Array2<f64> = Array2::zeros((0, 0));
    assert_eq!(energy(&q, &[], -2.5).unwrap(), -2.5);
}
