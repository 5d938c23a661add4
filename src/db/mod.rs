//! Database Connection Management Module
//!
//! MySQL 연결 풀 관리를 담당하는 모듈입니다.
//!
//! # 환경 변수 설정
//!
//! ```bash
//! export DB_HOST="localhost"
//! export DB_PORT="3306"
//! export DB_USER="form_app"
//! export DB_PASSWORD="secret"
//! export DB_NAME="user_form"
//! ```
//!
//! 테이블 정의는 저장소 루트의 `sql/schema.sql`에 있으며, 운영자가 직접 적용합니다.
//!
//! # 기본 사용법
//!
//! ```rust,ignore
//! use crate::db::Database;
//! use crate::config::DatabaseConfig;
//!
//! let database = Database::connect_lazy(&DatabaseConfig::from_env());
//! if let Err(e) = database.ping().await {
//!     log::error!("MySQL 연결 실패: {}", e);
//! }
//! ```

use log::info;
use sqlx::mysql::{MySqlPool, MySqlPoolOptions};

use crate::config::DatabaseConfig;

/// MySQL 연결 풀 래퍼
///
/// 풀은 동시 사용에 안전하며, 요청마다 커넥션을 빌려 쓰고 쿼리가 끝나면 반납합니다.
#[derive(Clone)]
pub struct Database {
    pool: MySqlPool,
    database_name: String,
}

impl Database {
    /// 첫 쿼리 시점에 연결하는 풀을 만듭니다.
    ///
    /// 데이터베이스가 아직 준비되지 않았더라도 서버는 기동되고,
    /// 이후 요청에서 연결 오류가 `Database error` 응답으로 드러납니다.
    pub fn connect_lazy(config: &DatabaseConfig) -> Self {
        let pool = MySqlPoolOptions::new()
            .max_connections(config.max_connections)
            .connect_lazy_with(config.connect_options());

        Self {
            pool,
            database_name: config.database.clone(),
        }
    }

    /// 연결 상태를 확인합니다.
    pub async fn ping(&self) -> Result<(), sqlx::Error> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;

        info!("✅ MySQL 연결 성공: {}", self.database_name);
        Ok(())
    }

    pub fn pool(&self) -> &MySqlPool {
        &self.pool
    }
}
