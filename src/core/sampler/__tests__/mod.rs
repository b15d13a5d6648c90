//! # 어닐러 경계 테스트
