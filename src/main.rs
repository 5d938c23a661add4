//! 사용자 폼 제출 서비스 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동합니다.
//! MySQL 연결 풀을 준비하고 폼 제출 API와 헬스체크를 제공합니다.

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{App, HttpServer, middleware, web};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info, warn};
use user_form_backend::config::{AllowedOrigin, CorsConfig, DatabaseConfig, ServerConfig};
use user_form_backend::db::Database;
use user_form_backend::repositories::users::{MySqlUserRepository, UserRepository};
use user_form_backend::routes::configure_all_routes;
use user_form_backend::services::users::UserService;
use user_form_backend::utils::display_terminal::{print_boxed_title, print_sub_task};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 환경 설정 및 로깅 초기화 (환경 파일의 RUST_LOG가 적용되도록 먼저 로드)
    load_env_file();
    init_logging();

    info!("🚀 사용자 폼 제출 서비스 시작중...");

    let database = initialize_database().await;
    let user_repo: Arc<dyn UserRepository> = Arc::new(MySqlUserRepository::new(database));
    let user_service = web::Data::new(UserService::new(user_repo));

    start_http_server(user_service).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// CORS, 접근 로그, 경로 정규화 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(user_service: web::Data<UserService>) -> std::io::Result<()> {
    let bind_address = ServerConfig::bind_address();
    let workers = ServerConfig::workers();
    let allowed_origin = CorsConfig::allowed_origin();

    print_boxed_title("📝 USER FORM SUBMISSION SERVICE");
    print_sub_task("Bind", &bind_address);
    print_sub_task("Workers", &workers.to_string());
    print_sub_task("Profile", &ServerConfig::profile());

    match &allowed_origin {
        AllowedOrigin::Only(origin) => print_sub_task("Allowed origin", origin),
        AllowedOrigin::Any => {
            print_sub_task("Allowed origin", "* (CLIENT_URL not set)");
            warn!("CLIENT_URL 미설정: 모든 출처의 교차 출처 요청을 허용합니다");
        }
    }

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/test-server", bind_address);

    HttpServer::new(move || {
        let cors = configure_cors(&allowed_origin);

        App::new()
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .app_data(user_service.clone())
            .configure(configure_all_routes)
    })
    .bind(&bind_address)?
    .workers(workers)
    .run()
    .await
}

/// 환경별 설정 파일을 로드합니다
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = ServerConfig::profile();

    info!("Current profile: {}", profile);

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => info!(".env.prod 파일 로드 됨"),
            Err(e) => error!(".env.prod 파일 로드 실패: {}", e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => info!(".env.dev 파일 로드 됨"),
            Err(e) => warn!(".env.dev 파일 로드 실패: {}", e),
        },
        _ => {
            dotenv().ok();
            info!("기본 .env 파일 로드");
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=debug")
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

/// MySQL 연결 풀을 준비합니다
///
/// 연결 확인에 실패해도 서버는 계속 기동되며, 실패 원인은 로그로 남깁니다.
/// 이후 제출 요청은 연결이 복구될 때까지 `Database error`로 응답합니다.
async fn initialize_database() -> Arc<Database> {
    let config = DatabaseConfig::from_env();

    info!(
        "📡 MySQL 연결 중... {}@{}:{}/{}",
        config.user, config.host, config.port, config.database
    );

    let database = Arc::new(Database::connect_lazy(&config));

    if let Err(e) = database.ping().await {
        error!("❌ MySQL 연결 오류: {}", e);
    }

    database
}

/// CORS 설정을 구성합니다
///
/// `CLIENT_URL`이 있으면 해당 프론트엔드 출처만, 없으면 모든 출처를 허용합니다.
fn configure_cors(allowed_origin: &AllowedOrigin) -> Cors {
    let cors = match allowed_origin {
        AllowedOrigin::Only(origin) => Cors::default().allowed_origin(origin),
        AllowedOrigin::Any => Cors::default().allow_any_origin(),
    };

    cors.allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
        .max_age(3600)
}
