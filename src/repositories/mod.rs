//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 서비스 계층은 [`users::UserRepository`] 트레이트에만 의존하고,
//! 실제 저장소 구현(MySQL)은 애플리케이션 시작 시 주입됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::repositories::users::{MySqlUserRepository, UserRepository};
//!
//! let user_repo: Arc<dyn UserRepository> = Arc::new(MySqlUserRepository::new(database));
//! let stored = user_repo.insert(new_user).await?;
//! ```

pub mod users;
