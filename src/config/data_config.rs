//! 데이터 및 서버 설정 관리 모듈
//!
//! 실행 프로필, HTTP 서버, MySQL 연결, CORS, 폼 클라이언트 관련 설정을 관리합니다.
//! 모든 값은 프로세스 시작 시점의 환경 변수에서 읽습니다.

use std::env;
use std::str::FromStr;

use sqlx::mysql::MySqlConnectOptions;

/// 환경 변수를 읽어 파싱하고, 없거나 잘못된 값이면 기본값을 사용합니다.
fn env_or<T: FromStr>(key: &str, default: T) -> T {
    parse_or(env::var(key).ok(), default)
}

fn parse_or<T: FromStr>(raw: Option<String>, default: T) -> T {
    match raw {
        Some(value) => value.trim().parse().unwrap_or_else(|_| {
            log::warn!("설정값 파싱 실패: {:?}. 기본값 사용", value);
            default
        }),
        None => default,
    }
}

/// HTTP 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    pub fn port() -> u16 {
        env_or("PORT", 8000)
    }

    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string())
    }

    /// actix 워커 스레드 수
    pub fn workers() -> usize {
        env_or("WORKERS", 4)
    }

    /// 로드할 환경 파일을 고르는 실행 프로필 (`PROFILE`, 기본값: `dev`)
    pub fn profile() -> String {
        env::var("PROFILE").unwrap_or_else(|_| "dev".to_string())
    }

    pub fn bind_address() -> String {
        format!("{}:{}", Self::host(), Self::port())
    }
}

/// MySQL 연결 설정
///
/// ## 환경 변수
/// - `DB_HOST` (기본값: `localhost`)
/// - `DB_PORT` (기본값: `3306`)
/// - `DB_USER` (기본값: `root`)
/// - `DB_PASSWORD` (기본값: 빈 문자열)
/// - `DB_NAME` (기본값: `user_form`)
/// - `DB_MAX_CONNECTIONS` (기본값: `10`)
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub database: String,
    pub max_connections: u32,
}

impl DatabaseConfig {
    pub fn from_env() -> Self {
        Self {
            host: env::var("DB_HOST").unwrap_or_else(|_| "localhost".to_string()),
            port: env_or("DB_PORT", 3306),
            user: env::var("DB_USER").unwrap_or_else(|_| "root".to_string()),
            password: env::var("DB_PASSWORD").unwrap_or_default(),
            database: env::var("DB_NAME").unwrap_or_else(|_| "user_form".to_string()),
            max_connections: env_or("DB_MAX_CONNECTIONS", 10),
        }
    }

    /// sqlx 연결 옵션으로 변환합니다.
    pub fn connect_options(&self) -> MySqlConnectOptions {
        let options = MySqlConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .database(&self.database);

        if self.password.is_empty() {
            options
        } else {
            options.password(&self.password)
        }
    }
}

/// 교차 출처 요청을 허용할 출처
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllowedOrigin {
    /// `CLIENT_URL`로 지정된 출처 하나
    Only(String),
    /// `CLIENT_URL` 미설정: 모든 출처
    Any,
}

/// 교차 출처 호출 허용 설정
pub struct CorsConfig;

impl CorsConfig {
    /// 폼을 제공하는 프론트엔드의 출처 (`CLIENT_URL`)
    ///
    /// 설정되지 않았거나 비어 있으면 모든 출처를 허용합니다.
    pub fn allowed_origin() -> AllowedOrigin {
        Self::origin_from(env::var("CLIENT_URL").ok())
    }

    fn origin_from(raw: Option<String>) -> AllowedOrigin {
        raw.map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .map_or(AllowedOrigin::Any, AllowedOrigin::Only)
    }
}

/// 폼 클라이언트 설정
pub struct ClientConfig;

impl ClientConfig {
    /// 제출 엔드포인트의 기준 URL (`SERVER_API_URL`)
    pub fn server_api_url() -> String {
        env::var("SERVER_API_URL").unwrap_or_else(|_| "http://localhost:8000".to_string())
    }

    /// 작성 중인 초안을 저장할 디렉터리 (`DRAFT_STORAGE_DIR`)
    pub fn draft_storage_dir() -> String {
        env::var("DRAFT_STORAGE_DIR").unwrap_or_else(|_| ".form_client".to_string())
    }
}
