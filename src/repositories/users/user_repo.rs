//! # 사용자 리포지토리 구현
//!
//! `users` 테이블에 대한 데이터 액세스를 담당합니다.
//! 이 시스템의 유일한 쓰기 경로는 단일 `INSERT` 문이므로 트랜잭션이 필요하지 않고,
//! 부분 기록이 남을 수 없습니다.

use std::sync::Arc;

use async_trait::async_trait;

use crate::core::errors::{AppError, AppResult};
use crate::db::Database;
use crate::domain::entities::users::{NewUser, User};

const INSERT_USER_SQL: &str =
    "INSERT INTO users (name, department, mobile, checked) VALUES (?, ?, ?, ?)";

/// 사용자 저장소 추상화
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// 새 행을 삽입하고 부여된 ID가 포함된 행을 반환합니다.
    ///
    /// 중복 제거를 하지 않으므로 같은 값을 두 번 삽입하면 서로 다른 ID의 두 행이 생깁니다.
    async fn insert(&self, new_user: NewUser) -> AppResult<User>;
}

/// MySQL 기반 사용자 리포지토리
pub struct MySqlUserRepository {
    db: Arc<Database>,
}

impl MySqlUserRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn insert(&self, new_user: NewUser) -> AppResult<User> {
        let result = sqlx::query(INSERT_USER_SQL)
            .bind(&new_user.name)
            .bind(&new_user.department)
            .bind(&new_user.mobile)
            .bind(new_user.checked)
            .execute(self.db.pool())
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        let id = result.last_insert_id();
        log::debug!("users 행 삽입 완료: id={}", id);

        Ok(new_user.into_user(id))
    }
}


#[cfg(test)]
mod tests {
    use super::fakes::InMemoryUserRepository;
    use super::*;

    fn new_user() -> NewUser {
        NewUser {
            name: "Ann".to_string(),
            department: "Eng".to_string(),
            mobile: "1234567890".to_string(),
            checked: 1,
        }
    }

    #[actix_web::test]
    async fn test_same_payload_twice_creates_two_rows() {
        let repo = InMemoryUserRepository::default();

        let first = repo.insert(new_user()).await.unwrap();
        let second = repo.insert(new_user()).await.unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(repo.rows().len(), 2);
    }
}
