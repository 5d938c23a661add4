//! # 사용자 제출 서비스 구현
//!
//! ```text
//! CreateUserRequest ──► 검증 (name → department → mobile → checked)
//!                          │ 실패: ValidationError (400)
//!                          ▼
//!                       NewUser (공백 제거, checked → 1/0)
//!                          │
//!                          ▼
//!                       UserRepository::insert ──► 실패: DatabaseError (500)
//!                          │
//!                          ▼
//!                       UserResponse
//! ```

use std::sync::Arc;

use crate::{
    core::errors::{AppError, AppResult},
    domain::{
        dto::users::{request::CreateUserRequest, response::UserResponse},
        entities::users::NewUser,
    },
    repositories::users::UserRepository,
};

pub const SUBMITTED_MESSAGE: &str = "Form submitted successfully";

pub struct UserService {
    user_repo: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }

    /// 요청을 검증하고 새 사용자 행을 저장합니다.
    ///
    /// 검증에 실패하면 첫 번째 실패 메시지로 `ValidationError`를 반환하며 삽입하지 않습니다.
    /// 저장 계층 오류는 원인을 로그로 남긴 뒤 그대로 전파합니다.
    pub async fn create_user(&self, request: CreateUserRequest) -> AppResult<UserResponse> {
        if let Some(message) = request.first_violation() {
            log::info!("제출 거부: {}", message);
            return Err(AppError::ValidationError(message));
        }

        let start_time = std::time::Instant::now();
        let new_user = NewUser::from_request(&request);

        let created_user = self.user_repo.insert(new_user).await.map_err(|e| {
            log::error!("❌ 사용자 저장 실패: {}", e);
            e
        })?;

        log::info!(
            "사용자 저장 완료: id={} ({:?})",
            created_user.id,
            start_time.elapsed()
        );

        Ok(UserResponse::from(created_user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dto::users::request::{CHECKBOX_REQUIRED, MOBILE_INVALID, NAME_EMPTY};
    use crate::repositories::users::fakes::{FailingUserRepository, InMemoryUserRepository};

    fn request(name: &str, department: &str, mobile: &str, checked: bool) -> CreateUserRequest {
        CreateUserRequest {
            name: name.to_string(),
            department: department.to_string(),
            mobile: mobile.to_string(),
            checked,
        }
    }

    #[actix_web::test]
    async fn test_create_user_persists_trimmed_row() {
        let repo = Arc::new(InMemoryUserRepository::default());
        let service = UserService::new(repo.clone());

        let response = service
            .create_user(request("  Ann ", " Eng ", "1234567890", true))
            .await
            .unwrap();

        assert_eq!(response.id, 1);
        assert_eq!(response.name, "Ann");
        assert_eq!(response.department, "Eng");
        assert_eq!(response.mobile, "1234567890");
        assert_eq!(response.checked, 1);
        assert_eq!(repo.rows().len(), 1);
    }

    #[actix_web::test]
    async fn test_invalid_request_is_not_inserted() {
        let repo = Arc::new(InMemoryUserRepository::default());
        let service = UserService::new(repo.clone());

        for (req, expected) in [
            (request("", "Eng", "1234567890", true), NAME_EMPTY),
            (request("Ann", "Eng", "12345", true), MOBILE_INVALID),
            (request("Ann", "Eng", "1234567890", false), CHECKBOX_REQUIRED),
        ] {
            match service.create_user(req).await {
                Err(AppError::ValidationError(msg)) => assert_eq!(msg, expected),
                other => panic!("Expected ValidationError, got {:?}", other),
            }
        }

        assert!(repo.rows().is_empty());
    }

    #[actix_web::test]
    async fn test_database_fault_is_propagated() {
        let service = UserService::new(Arc::new(FailingUserRepository));

        let result = service
            .create_user(request("Ann", "Eng", "1234567890", true))
            .await;

        assert!(matches!(result, Err(AppError::DatabaseError(_))));
    }
}
