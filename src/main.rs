//! 인사말 서비스 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동하고 인사말 서비스를 초기화합니다.
//! 외부 저장소 없이 환경 변수 설정만으로 실행됩니다.

use std::io;

use actix_cors::Cors;
use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use env_logger::Env;
use log::{error, info};
use greeting_service_backend::config::{CorsConfig, Environment, ProfileConfig, RateLimitConfig, ServerConfig};
use greeting_service_backend::middlewares::FaultBoundary;
use greeting_service_backend::routes::configure_all_routes;
use greeting_service_backend::services::greetings::GreetingService;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // 환경 설정 및 로깅 초기화
    let env_file_status = load_env_file();
    init_logging();
    info!("{}", env_file_status);

    info!("🚀 인사말 서비스 시작중...");

    let environment = Environment::current();
    info!("🏷️ 실행 환경: {:?}", environment);

    // 인사말 서비스 초기화
    let greeting_service = web::Data::new(GreetingService::from_env());
    info!("✅ 인사말 서비스 초기화 완료 (보내는 쪽: {})", greeting_service.sender());

    // HTTP 서버 시작
    start_http_server(greeting_service).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// Rate Limiting, CORS, 로깅, 장애 경계 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - Rate Limiting 설정 오류, 포트 바인딩 실패 또는 서버 실행 오류
///
/// # Examples
///
/// ```rust,ignore
/// // 서버는 기본적으로 127.0.0.1:8080에서 실행됩니다
/// // Health check: http://127.0.0.1:8080/health
/// // 인사말: POST http://127.0.0.1:8080/
/// ```
async fn start_http_server(greeting_service: web::Data<GreetingService>) -> io::Result<()> {
    let bind_address = ServerConfig::bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);
    info!("📍 Greeting: POST http://{}/", bind_address);

    // Rate Limiting 설정
    let rate_limit_config = RateLimitConfig::from_env();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| {
            error!("❌ Rate Limiting 설정 오류: {:?}", rate_limit_config);
            io::Error::new(io::ErrorKind::InvalidInput, "invalid rate limit configuration")
        })?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second,
        rate_limit_config.burst_size
    );

    let allowed_origins = CorsConfig::allowed_origins();
    info!("🔓 CORS 허용 Origin: {:?}", allowed_origins);

    HttpServer::new(move || {
        // CORS 설정
        let cors = configure_cors(&allowed_origins);

        App::new()
            // 처리 중 패닉 → 500 (가장 안쪽, Logger가 500을 기록하도록)
            .wrap(FaultBoundary::new())

            // Rate Limiting 미들웨어
            .wrap(Governor::new(&governor_conf))

            .wrap(cors)
            .wrap(middleware::Logger::default())

            // 서비스 및 라우트 설정
            .app_data(greeting_service.clone())
            .configure(configure_all_routes)
    })
        .bind(bind_address)?
        .workers(ServerConfig::workers())
        .run()
        .await
}

/// 환경별 설정 파일을 로드합니다
///
/// PROFILE 환경변수에 따라 적절한 .env 파일을 로드하고 결과 메시지를 반환합니다.
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (미설정 시 기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
///
/// # Examples
///
/// ```bash
/// # 개발 환경
/// PROFILE=dev cargo run
///
/// # 운영 환경
/// PROFILE=prod cargo run
/// ```
fn load_env_file() -> String {
    let profile = ProfileConfig::profile();
    let env_file = ProfileConfig::env_file(&profile);

    // 로거 초기화 전이므로 결과는 문자열로 돌려주고 호출부에서 기록
    let status = match dotenv::from_filename(env_file) {
        Ok(_) => format!("{} 파일 로드 됨", env_file),
        Err(e) => format!("{} 파일 로드 실패: {}", env_file, e),
    };

    format!("Current profile: {} ({})", profile, status)
}

/// 로깅 시스템을 초기화합니다
///
/// 환경변수 RUST_LOG를 기반으로 로깅 레벨을 설정합니다.
///
/// # Environment Variables
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=info")
///
/// # Examples
///
/// ```bash
/// # 서비스 계층만 debug
/// RUST_LOG=info,greeting_service_backend::services=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=info"));
}

/// CORS 설정을 구성합니다
///
/// # Arguments
///
/// * `allowed_origins` - `CORS_ALLOWED_ORIGINS`에서 읽은 Origin 목록
///
/// # Examples
///
/// ```rust,ignore
/// let cors = configure_cors(&CorsConfig::allowed_origins());
/// App::new().wrap(cors)
/// ```
fn configure_cors(allowed_origins: &[String]) -> Cors {
    allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        // 허용할 HTTP 메서드
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        // 허용할 헤더
        .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
        // Preflight 요청 캐시 시간 (초)
        .max_age(3600)
}
