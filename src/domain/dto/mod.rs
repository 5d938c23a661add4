//! # Data Transfer Objects (DTO) Module
//!
//! API 경계에서 오가는 데이터 구조를 정의합니다.
//! 폼 클라이언트도 같은 타입으로 응답을 해석하므로, 이 모듈이 곧 양쪽의 계약입니다.
//!
//! ## 모듈 구조
//!
//! ```text
//! dto/
//! ├── api_response.rs     # 공통 응답 봉투 { success, message, data }
//! └── users/
//!     ├── request/        # POST /users 요청 본문
//!     └── response/       # 저장된 행의 응답 표현
//! ```

pub mod api_response;
pub mod users;
