//! # 검색 공간 모듈 테스트
