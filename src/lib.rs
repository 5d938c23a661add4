//! 사용자 폼 제출 서비스
//!
//! 이름, 부서, 휴대폰 번호, 동의 체크박스로 이루어진 폼을 받아
//! 검증한 뒤 MySQL `users` 테이블에 한 행으로 저장합니다.
//!
//! 두 부분으로 구성됩니다.
//!
//! - **제출 엔드포인트**: `POST /users`에서 본문을 다시 검증하고 저장하는 Actix-web 서버
//! - **폼 컨트롤러**: 초안을 로컬 저장소에 유지하고 필드별 오류와 제출 상태를 관리하는 클라이언트 ([`client`])
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐        ┌─────────────────┐
//! │ FormController  │ ─────▶ │   HTTP Routes   │ ← POST /users, GET /test-server
//! │  (client)       │  JSON  └─────────────────┘
//! └─────────────────┘                 │
//!          │                          ▼
//!          ▼                 ┌─────────────────┐
//! ┌─────────────────┐        │    Handlers     │ ← 요청/응답 처리
//! │  DraftStorage   │        └─────────────────┘
//! │  ("formData")   │                 │
//! └─────────────────┘                 ▼
//!                            ┌─────────────────┐
//!                            │    Services     │ ← 검증 및 정규화
//!                            └─────────────────┘
//!                                     │
//!                                     ▼
//!                            ┌─────────────────┐
//!                            │  Repositories   │ ← INSERT INTO users
//!                            └─────────────────┘
//!                                     │
//!                                     ▼
//!                            ┌─────────────────┐
//!                            │      MySQL      │
//!                            └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use user_form_backend::repositories::users::MySqlUserRepository;
//! use user_form_backend::services::users::UserService;
//!
//! let service = UserService::new(Arc::new(MySqlUserRepository::new(database)));
//! let created = service.create_user(request).await?;
//! ```

pub mod client;
pub mod config;
pub mod core;
pub mod db;
pub mod domain;
pub mod handlers;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod utils;
