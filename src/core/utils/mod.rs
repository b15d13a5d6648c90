//! # 유틸리티 - 에너지 평가기

pub mod energy;

// 테스트 모듈
#[cfg(test)]
mod __tests__;

pub use energy::energy;
