//! # 샘플링 컴파일러 테스트

mod cache_test;
