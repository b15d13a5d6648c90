use crate::core::binarization::{uint_vector, Binarization, UintVector, Value};
use crate::core::error::QuboError;

#[test]
fn 벡터는_서브필드를_순서대로_연결한다() {
    let scheme = UintVector::new(3, 3);
    let bits = scheme.encode(&Value::Vector(vec![1, 4, 7]), 9).unwrap();
    assert_eq!(bits, vec![1, 0, 0, 0, 0, 1, 1, 1, 1]);
    assert_eq!(scheme.decode(&bits), Value::Vector(vec![1, 4, 7]));
}

#[test]
fn 벡터_왕복() {
    let scheme = uint_vector(2, 3);
    for a in 0..8 {
        for b in 0..8 {
            let v = Value::Vector(vec![a, b]);
            let bits = scheme.encode(&v, 6).unwrap();
            assert_eq!(scheme.decode(&bits), v);
        }
    }
    for pattern in 0u32..64 {
        let bits: Vec<u8> = (0..6).map(|k| ((pattern >> k) & 1) as u8).collect();
        let value = scheme.decode(&bits);
        assert_eq!(scheme.encode(&value, 6).unwrap(), bits);
    }
}

#[test]
fn 벡터_폭은_count_곱하기_width여야_한다() {
    let scheme = UintVector::new(3, 3);
    assert!(scheme.check_width(9).is_ok());
    assert!(matches!(
        scheme.check_width(8),
        Err(QuboError::InvalidWidth { width: 8, .. })
    ));
}

#[test]
fn 벡터_도메인_위반() {
    let scheme = UintVector::new(3, 2);
    // 원소 개수 불일치
    assert!(matches!(
        scheme.encode(&Value::Vector(vec![1, 2]), 6),
        Err(QuboError::Domain { .. })
    ));
    // 원소 범위 초과
    let err = scheme.encode(&Value::Vector(vec![1, 4, 0]), 6).unwrap_err();
    match err {
        QuboError::Domain { scheme, reason } => {
            assert_eq!(scheme, "uint_vector");
            assert!(reason.contains("원소 1"), "{}", reason);
        }
        other => panic!("예상치 못한 에러: {other}"),
    }
    // 스칼라는 거부
    assert!(scheme.encode(&Value::Int(3), 6).is_err());
}
