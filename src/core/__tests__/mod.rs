//! # 구성 설정 단위테스트
