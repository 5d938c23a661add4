//! 사용자 제출 서비스 모듈
//!
//! 제출된 폼을 다시 검증하고 한 행으로 저장합니다.
//! 클라이언트 측 검증 결과는 신뢰하지 않습니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::users::UserService;
//! use crate::domain::dto::users::request::CreateUserRequest;
//!
//! let request = CreateUserRequest { /* ... */ };
//! let response = user_service.create_user(request).await?;
//! ```

pub mod user_service;

pub use user_service::*;
