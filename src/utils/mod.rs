//! 공통 유틸리티 함수 모듈
//!
//! # Modules
//!
//! - [`string_utils`] - 문자열 검증, 정리, `null` 역직렬화 헬퍼
//! - [`display_terminal`] - 시작 배너 출력 함수들

pub mod display_terminal;
pub mod string_utils;
