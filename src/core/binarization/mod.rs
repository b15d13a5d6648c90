//! # 바이너리화 모듈
//!
//! 타입이 있는 변수 값을 고정 폭 비트 필드로 변환하고 되돌리는 인코딩 스킴들.
//! 모든 uint 필드는 LSB 우선(필드의 k번째 비트가 2^k 가중치)으로 배치된다.

pub mod value;
pub mod scheme;
pub mod uint;
pub mod uint_vector;
pub mod signed;

// 테스트 모듈
#[cfg(test)]
mod __tests__;

pub use value::Value;
pub use scheme::{Binarization, Scheme};
pub use uint::Uint;
pub use uint_vector::UintVector;
pub use signed::SignedInt;

use std::sync::Arc;

/// 부호 없는 정수 스킴
pub fn uint() -> Scheme {
    Arc::new(Uint)
}

/// 같은 폭의 uint 서브필드 `count`개로 구성된 벡터 스킴
pub fn uint_vector(count: usize, width: usize) -> Scheme {
    Arc::new(UintVector::new(count, width))
}

/// 오프셋 이진 부호 정수 스킴
pub fn int() -> Scheme {
    Arc::new(SignedInt)
}
