//! 초안 레코드
//!
//! 로컬 저장소에는 평평한 JSON 객체 하나로 저장됩니다.
//!
//! ```json
//! { "name": "Ann", "department": "Eng", "mobile": "1234567890", "checked": true, "submitted": false }
//! ```

use serde::{Deserialize, Serialize};

use crate::utils::string_utils::deserialize_null_default;

/// 초안이 저장되는 로컬 저장소 키
pub const DRAFT_STORAGE_KEY: &str = "formData";

/// 작성 중인 폼 상태
///
/// `submitted`는 화면 표시용 플래그로, 제출 직후에만 `true`입니다.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftRecord {
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub name: String,

    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub department: String,

    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub mobile: String,

    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub checked: bool,

    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub submitted: bool,
}

impl DraftRecord {
    /// 텍스트 필드 값을 바꿉니다. 알 수 없는 이름이면 아무것도 바꾸지 않고 `false`.
    pub fn set_text(&mut self, field: &str, value: String) -> bool {
        let slot = match field {
            "name" => &mut self.name,
            "department" => &mut self.department,
            "mobile" => &mut self.mobile,
            _ => return false,
        };
        *slot = value;
        true
    }

    /// 제출 직후 상태: 모든 필드가 비워지고 `submitted`만 `true`
    pub fn just_submitted() -> Self {
        Self {
            submitted: true,
            ..Self::default()
        }
    }
}
