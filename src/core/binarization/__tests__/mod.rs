//! # 바이너리화 모듈 테스트

mod uint_vector_test;
