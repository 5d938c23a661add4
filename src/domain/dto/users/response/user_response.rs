use serde::{Deserialize, Serialize};

use crate::domain::entities::users::User;

/// 저장된 사용자 행의 응답 표현
///
/// ```json
/// { "id": 1, "name": "Ann", "department": "Eng", "mobile": "1234567890", "checked": 1 }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: u64,
    pub name: String,
    pub department: String,
    pub mobile: String,
    pub checked: u8,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let User {
            id,
            name,
            department,
            mobile,
            checked,
        } = user;

        Self {
            id,
            name,
            department,
            mobile,
            checked,
        }
    }
}
