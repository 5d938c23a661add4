//! # Domain Layer Module
//!
//! 제출 서비스의 도메인 계층입니다.
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Entities  - 저장된 사용자 행과 삽입 전 정규화된 레코드
//! └── DTOs      - HTTP 요청/응답 계약
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories, DB)
//! ```
//!
//! ## 모듈 구성
//!
//! ### [`entities`]
//! `users` 테이블의 한 행(`User`)과 삽입 직전의 값(`NewUser`)을 정의합니다.
//! 저장된 행은 변경되지 않으며, 생성 경로는 삽입 하나뿐입니다.
//!
//! ### [`dto`]
//! 클라이언트와 서버 사이의 JSON 계약입니다. 모든 응답은
//! [`dto::api_response::ApiResponse`] 봉투를 사용합니다.

pub mod entities;
pub mod dto;
