//! # Configuration Module
//!
//! 환경 변수 기반 설정값을 중앙에서 관리하는 모듈입니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 프로필, 서버, 데이터베이스, CORS, 폼 클라이언트 설정
//!
//! ## 환경 파일
//!
//! `PROFILE` 값에 따라 `.env.dev` / `.env.prod` / `.env` 중 하나가 먼저 로드되고,
//! 이후 각 설정 구조체가 `std::env`에서 값을 읽습니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::{DatabaseConfig, ServerConfig};
//!
//! let bind_address = ServerConfig::bind_address();
//! let db = DatabaseConfig::from_env();
//! ```

pub mod data_config;

pub use data_config::*;
