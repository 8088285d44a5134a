use crate::config::ServerConfig;
use crate::handlers;
use actix_web::web;
use serde_json::json;

/// 모든 라우트를 설정합니다
///
/// 기능별로 분할된 라우트들을 통합하여 애플리케이션에 등록합니다.
/// `GreetingService`는 호출하는 쪽에서 `app_data`로 등록해야 합니다.
///
/// # Arguments
///
/// * `cfg` - Actix-web 서비스 설정 객체
///
/// # Examples
///
/// ```rust,ignore
/// use actix_web::{web, App};
///
/// let app = App::new()
///     .app_data(web::Data::new(GreetingService::from_env()))
///     .configure(configure_all_routes);
/// ```
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // JSON 추출기 설정 (크기 제한 + 400 변환)
    cfg.app_data(handlers::greetings::json_config(ServerConfig::json_limit()));

    // Health check endpoint
    cfg.service(
        web::resource("/health")
            .route(web::get().to(health_check))
            .default_service(web::to(handlers::fallback::not_found)),
    );

    // Feature-specific routes
    configure_greeting_routes(cfg);

    // 나머지는 모두 404
    cfg.default_service(web::to(handlers::fallback::not_found));
}

/// 인사말 라우트를 설정합니다
///
/// # Available Routes
///
/// - `POST /` - 인사말 생성
///
/// 같은 경로의 다른 메서드는 405 대신 404로 응답합니다.
///
/// # Examples
///
/// ```bash
/// curl -X POST http://localhost:8080/ \
///   -H "Content-Type: application/json" \
///   -d '{"addressee":"Barry","tone":"Casual"}'
/// ```
fn configure_greeting_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/")
            .route(web::post().to(handlers::greetings::greet))
            .default_service(web::to(handlers::fallback::not_found)),
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// 로드밸런서나 모니터링 시스템에서 서비스 상태를 확인하는 데 사용됩니다.
///
/// # Examples
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
///
/// Response:
/// ```json
/// {
///   "status": "healthy",
///   "service": "greeting_service",
///   "version": "0.1.0",
///   "timestamp": "2023-01-01T00:00:00Z"
/// }
/// ```
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "greeting_service",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
