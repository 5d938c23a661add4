//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Form Client (터미널 / 브라우저)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈)                           ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 재검증 및 정규화                   ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - 단일 INSERT                    ← Repository Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 모듈 구성
//!
//! - **`users`**: 폼 제출 엔드포인트 (`POST /users`)
//!
//! 헬스체크와 JSON 파싱 오류 처리는 [`crate::routes`]에서 등록합니다.

pub mod users;
