//! 사용자 요청 DTO

pub mod create_user_request;

pub use create_user_request::*;
