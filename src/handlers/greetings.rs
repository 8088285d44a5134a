//! # Greeting HTTP Handlers
//!
//! 인사말 엔드포인트를 처리하는 핸들러와 JSON 추출기 설정입니다.
//!
//! ## 엔드포인트
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/` | 인사말 생성 | 200 OK / 400 Bad Request |
//!
//! ## 응답 투영
//!
//! 핸들러는 도메인 결과와 HTTP 신호 규칙을 모두 아는 유일한 곳입니다.
//!
//! - 검증 성공 → `200`, 평문 인사말
//! - 검증 실패 → `400`, 필드 에러 메시지를 `"; "`로 결합한 평문
//! - JSON 해석 실패 → `400`, 디코더 에러 메시지 평문

use actix_web::{web, HttpRequest, HttpResponse};
use actix_web::error::JsonPayloadError;
use actix_web::http::header::ContentType;
use crate::core::errors::AppError;
use crate::domain::dto::greetings::request::GreetingRequest;
use crate::services::greetings::GreetingService;

/// 인사말 생성 핸들러
///
/// # 엔드포인트
///
/// `POST /`
///
/// # 요청 본문
///
/// ```json
/// { "addressee": "Barry", "tone": "Casual" }
/// ```
///
/// # 응답
///
/// ## 성공 (200 OK)
/// ```text
/// Hello Barry, from Giraffe!
/// ```
///
/// ## 검증 실패 (400 Bad Request)
/// ```text
/// Unknown tone ; Missing addressee
/// ```
///
/// # 사용 예제
///
/// ```bash
/// curl -X POST http://localhost:8080/ \
///   -H "Content-Type: application/json" \
///   -d '{"addressee":"Barry","tone":"Casual"}'
/// ```
pub async fn greet(
    service: web::Data<GreetingService>,
    payload: web::Json<GreetingRequest>,
) -> Result<HttpResponse, AppError> {
    let message = service
        .greet(&payload)
        .map_err(|errors| AppError::ValidationError(errors.joined()))?;

    Ok(HttpResponse::Ok()
        .insert_header(ContentType::plaintext())
        .body(message))
}

/// JSON 추출기 설정
///
/// 본문 크기 제한을 적용하고, 해석에 실패한 요청을 `AppError::BadRequest`로
/// 바꿉니다. 잘못된 본문은 연결을 끊지 않고 항상 400 응답을 받습니다.
pub fn json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(limit)
        .error_handler(json_error_handler)
}

fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    log::warn!("JSON 본문 해석 실패: {} {} - {}", req.method(), req.path(), err);
    AppError::BadRequest(err.to_string()).into()
}
