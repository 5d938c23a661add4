//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::users::UserService;
//!
//! let user_service = UserService::new(user_repo);
//! let response = user_service.create_user(request).await?;
//! ```

pub mod users;
