//! # 에너지 평가기 테스트

mod energy_test;
