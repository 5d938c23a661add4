//! API 라우트 설정 모듈
//!
//! 폼 제출 엔드포인트와 헬스체크 엔드포인트를 등록하고,
//! JSON 파싱 오류와 알 수 없는 경로도 공통 응답 봉투로 응답하도록 설정합니다.
//!
//! | 메서드 | 경로 | 설명 |
//! |--------|------|------|
//! | `GET` | `/test-server` | 프로세스 상태 확인 |
//! | `POST` | `/users` | 폼 제출 |
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::App;
//!
//! let app = App::new()
//!     .app_data(web::Data::new(user_service))
//!     .configure(configure_all_routes);
//! ```

use actix_web::{HttpRequest, HttpResponse, error, get, web};

use crate::core::errors::AppError;
use crate::domain::dto::api_response::StatusResponse;
use crate::handlers;

/// 모든 라우트를 설정합니다
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config());

    // Health check endpoint
    cfg.service(health_check);

    configure_user_routes(cfg);

    cfg.default_service(web::to(not_found));
}

fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::users::create_user);
}

/// JSON 본문 파싱 실패를 `400 Invalid request body`로 변환합니다.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, req: &HttpRequest| {
        log::warn!("잘못된 요청 본문 ({}): {}", req.path(), err);
        error::Error::from(AppError::ValidationError("Invalid request body".to_string()))
    })
}

async fn not_found(req: HttpRequest) -> Result<HttpResponse, AppError> {
    Err(AppError::NotFound(format!("{} {}", req.method(), req.path())))
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// ```bash
/// curl http://localhost:8000/test-server
/// ```
///
/// Response:
/// ```json
/// { "success": true, "message": "Server is working" }
/// ```
#[get("/test-server")]
async fn health_check() -> HttpResponse {
    log::debug!("health check at {}", chrono::Utc::now().to_rfc3339());

    HttpResponse::Ok().json(StatusResponse {
        success: true,
        message: "Server is working".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::http::StatusCode;
    use actix_web::{App, test as actix_test, web};
    use serde_json::{Value, json};

    use super::*;
    use crate::repositories::users::fakes::InMemoryUserRepository;
    use crate::services::users::UserService;

    #[actix_web::test]
    async fn test_health_check() {
        let app = actix_test::init_service(App::new().configure(configure_all_routes)).await;

        let request = actix_test::TestRequest::get().uri("/test-server").to_request();
        let response = actix_test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body, json!({ "success": true, "message": "Server is working" }));
    }

    #[actix_web::test]
    async fn test_unknown_route_uses_envelope() {
        let service = UserService::new(Arc::new(InMemoryUserRepository::default()));
        let app = actix_test::init_service(
            App::new()
                .app_data(web::Data::new(service))
                .configure(configure_all_routes),
        )
        .await;

        let request = actix_test::TestRequest::get().uri("/users/1").to_request();
        let response = actix_test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "Not found");
    }
}
