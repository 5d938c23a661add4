//! 사용자 엔티티

use serde::{Deserialize, Serialize};

use crate::domain::dto::users::request::CreateUserRequest;
use crate::utils::string_utils::trim_string;

/// `users` 테이블에 저장된 한 행
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// 데이터베이스가 부여한 자동 증가 ID
    pub id: u64,
    pub name: String,
    pub department: String,
    pub mobile: String,
    /// 체크 여부 (0 또는 1)
    pub checked: u8,
}

/// 삽입 직전의 정규화된 레코드
///
/// 검증을 통과한 요청에서만 만들어야 합니다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub department: String,
    pub mobile: String,
    pub checked: u8,
}

impl NewUser {
    /// 요청을 저장 형태로 변환합니다.
    ///
    /// name / department는 앞뒤 공백을 제거하고, mobile은 그대로 두며,
    /// checked는 1/0으로 바꿉니다.
    pub fn from_request(request: &CreateUserRequest) -> Self {
        Self {
            name: trim_string(&request.name),
            department: trim_string(&request.department),
            mobile: request.mobile.clone(),
            checked: u8::from(request.checked),
        }
    }

    /// 부여된 ID와 함께 저장된 행으로 만듭니다.
    pub fn into_user(self, id: u64) -> User {
        User {
            id,
            name: self.name,
            department: self.department,
            mobile: self.mobile,
            checked: self.checked,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_request_normalizes_fields() {
        let request = CreateUserRequest {
            name: "  Ann ".to_string(),
            department: "\tEng\n".to_string(),
            mobile: "1234567890".to_string(),
            checked: true,
        };

        let new_user = NewUser::from_request(&request);

        assert_eq!(new_user.name, "Ann");
        assert_eq!(new_user.department, "Eng");
        assert_eq!(new_user.mobile, "1234567890");
        assert_eq!(new_user.checked, 1);
    }

    #[test]
    fn test_into_user_keeps_values() {
        let user = NewUser {
            name: "Ann".to_string(),
            department: "Eng".to_string(),
            mobile: "1234567890".to_string(),
            checked: 0,
        }
        .into_user(7);

        assert_eq!(user.id, 7);
        assert_eq!(user.checked, 0);
    }
}
