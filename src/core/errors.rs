//! # Application Error Handling System
//!
//! 제출 서비스의 통합 에러 처리 시스템입니다.
//! `thiserror`로 에러 타입을 정의하고 `actix_web::ResponseError`를 구현하여
//! 모든 실패 경로가 동일한 응답 봉투(`{ success, message, data }`)로 변환되도록 합니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 클라이언트에 노출되는 메시지 |
//! |----------|-------------|------------------------------|
//! | `ValidationError` | 400 Bad Request | 검증 메시지 그대로 |
//! | `NotFound` | 404 Not Found | `"Not found"` |
//! | `DatabaseError` | 500 Internal Server Error | `"Database error"` |
//!
//! 5xx 에러의 상세 내용은 서버 로그에만 기록되고 응답 본문에는 포함되지 않습니다.
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use crate::core::errors::{AppError, AppResult};
//!
//! async fn insert(&self, user: NewUser) -> AppResult<User> {
//!     sqlx::query("INSERT INTO users ...")
//!         .execute(pool)
//!         .await
//!         .map_err(|e| AppError::DatabaseError(e.to_string()))?;
//!     // ...
//! }
//! ```

use actix_web::http::StatusCode;
use thiserror::Error;

use crate::domain::dto::api_response::ApiResponse;

/// 서비스 전역 에러 타입
#[derive(Error, Debug)]
pub enum AppError {
    /// 입력값 검증 에러
    ///
    /// 메시지는 사용자에게 그대로 보여지는 문장이어야 합니다.
    /// (예: `"Name cannot be empty"`)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 존재하지 않는 경로 또는 리소스
    #[error("Not found: {0}")]
    NotFound(String),

    /// 데이터베이스 관련 에러
    ///
    /// 연결 끊김, 제약 조건 위반 등 저장 계층에서 발생한 모든 오류입니다.
    /// 원본 메시지는 로그에만 남기고 클라이언트에는 일반 메시지만 전달합니다.
    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl AppError {
    /// 응답 본문의 `message` 필드에 들어갈 문장을 반환합니다.
    pub fn client_message(&self) -> String {
        match self {
            AppError::ValidationError(msg) => msg.clone(),
            AppError::NotFound(_) => "Not found".to_string(),
            AppError::DatabaseError(_) => "Database error".to_string(),
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 서버 측 오류(5xx)는 여기서 한 번 더 로그로 남겨 운영자가 원인을 추적할 수 있게 합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        let status = self.status_code();

        if status.is_server_error() {
            log::error!("❌ 요청 처리 실패 ({}): {}", status.as_u16(), self);
        }

        actix_web::HttpResponse::build(status)
            .json(ApiResponse::<()>::failure(self.client_message()))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;
