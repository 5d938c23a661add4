//! Users Entity Module
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::entities::users::NewUser;
//!
//! let new_user = NewUser::from_request(&request);
//! let stored = user_repo.insert(new_user).await?;
//! assert!(stored.id > 0);
//! ```

pub mod user;

pub use user::*;
