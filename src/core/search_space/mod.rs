//! # 검색 공간 모듈
//!
//! 이름 붙은 변수들의 순서 있는 레지스트리. 등록 순서가 곧 비트 배치다.

pub mod bits;
pub mod assignment;
pub mod space;

// 테스트 모듈
#[cfg(test)]
mod __tests__;

pub use bits::BitVector;
pub use assignment::Assignment;
pub use space::{SearchSpace, VariableSpec};
