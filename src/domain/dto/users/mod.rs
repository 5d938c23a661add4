//! 사용자 제출 관련 DTO
//!
//! - [`request::CreateUserRequest`] - `POST /users` 요청 본문과 서버 측 검증 규칙
//! - [`response::UserResponse`] - 저장된 행을 돌려주는 응답 데이터

pub mod request;
pub mod response;
