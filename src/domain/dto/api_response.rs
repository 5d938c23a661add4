//! 공통 응답 봉투
//!
//! 서비스의 모든 JSON 응답은 다음 형태를 따릅니다.
//!
//! ```json
//! { "success": true, "message": "Form submitted successfully", "data": { ... } }
//! { "success": false, "message": "Name cannot be empty", "data": null }
//! ```

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,

    #[serde(default)]
    pub message: String,

    /// 실패 응답에서는 항상 `null`로 직렬화됩니다.
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
        }
    }
}

/// 데이터가 없는 단순 상태 응답 (헬스체크 등)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub success: bool,
    pub message: String,
}
