//! # Core Module
//!
//! 서비스 전역에서 공유하는 핵심 타입을 모아 둔 모듈입니다.
//!
//! ## 모듈 구성
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 서버 측 전역 에러 타입
//! - **HTTP 통합**: Actix-Web `ResponseError` 구현으로 응답 봉투 자동 생성
//! - **정보 은닉**: 5xx 에러의 상세 내용은 로그에만 기록
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use crate::core::errors::{AppError, AppResult};
//!
//! fn check(name: &str) -> AppResult<()> {
//!     if name.trim().is_empty() {
//!         return Err(AppError::ValidationError("Name cannot be empty".to_string()));
//!     }
//!     Ok(())
//! }
//! ```

pub mod errors;

pub use errors::*;
