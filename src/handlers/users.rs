//! # User Submission HTTP Handlers
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/users` | 폼 제출 (재검증 후 한 행 저장) | 200 / 400 / 500 |
//!
//! ## 응답 예시
//!
//! ```json
//! // 200 OK
//! {
//!   "success": true,
//!   "message": "Form submitted successfully",
//!   "data": { "id": 1, "name": "Ann", "department": "Eng", "mobile": "1234567890", "checked": 1 }
//! }
//!
//! // 400 Bad Request
//! { "success": false, "message": "Name cannot be empty", "data": null }
//!
//! // 500 Internal Server Error
//! { "success": false, "message": "Database error", "data": null }
//! ```

use actix_web::{HttpResponse, post, web};

use crate::core::errors::AppError;
use crate::domain::dto::api_response::ApiResponse;
use crate::domain::dto::users::request::CreateUserRequest;
use crate::services::users::{SUBMITTED_MESSAGE, UserService};

/// 폼 제출 핸들러
///
/// # 사용 예제
///
/// ```bash
/// curl -X POST http://localhost:8000/users \
///   -H "Content-Type: application/json" \
///   -d '{"name":"Ann","department":"Eng","mobile":"1234567890","checked":true}'
/// ```
#[post("/users")]
pub async fn create_user(
    service: web::Data<UserService>,
    payload: web::Json<CreateUserRequest>,
) -> Result<HttpResponse, AppError> {
    let response = service.create_user(payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(SUBMITTED_MESSAGE, response)))
}
