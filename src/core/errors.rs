//! # Application Error Handling System
//!
//! 인사말 서비스를 위한 통합 에러 처리 시스템입니다.
//! `thiserror`로 에러 타입을 정의하고 `actix_web::ResponseError`를 구현하여
//! 핸들러가 반환한 에러를 일관된 HTTP 응답으로 변환합니다.
//!
//! ## 전역 에러 경계
//!
//! 모든 핸들러는 `Result<HttpResponse, AppError>`를 반환합니다.
//! 처리되지 않은 에러는 이 모듈의 `error_response()`에서 한 번만 HTTP 응답으로
//! 바뀌며, 5xx 에러는 반드시 서버 로그에 기록됩니다. 검증 코어는 이 경계를
//! 알지 못합니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 사용 시나리오 |
//! |----------|-------------|---------------|
//! | `ValidationError` | 400 Bad Request | 필드 검증 실패 (메시지는 `"; "`로 결합됨) |
//! | `BadRequest` | 400 Bad Request | JSON 본문 해석 실패 |
//! | `NotFound` | 404 Not Found | 등록되지 않은 경로 |
//! | `InternalError` | 500 Internal Server Error | 예상치 못한 오류 |
//!
//! 응답 본문은 JSON이 아닌 `text/plain`이며, 에러 변형의 내부 메시지만 담습니다.
//! `Display` 구현은 로그용으로 분류 접두어를 포함합니다.
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use crate::core::errors::AppError;
//!
//! async fn greet(payload: web::Json<GreetingRequest>) -> Result<HttpResponse, AppError> {
//!     let message = service
//!         .greet(&payload)
//!         .map_err(|errors| AppError::ValidationError(errors.joined()))?;
//!
//!     Ok(HttpResponse::Ok().body(message))
//! }
//! ```

use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;
use actix_web::HttpResponse;
use log::{debug, error};
use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 서비스에서 발생할 수 있는 모든 종류의 에러를 포괄하는 열거형입니다.
/// 자동으로 HTTP 응답으로 변환되어 클라이언트에게 전달됩니다.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AppError {
    /// 입력값 검증 에러 (400 Bad Request)
    ///
    /// 하나 이상의 필드 에러 메시지를 `"; "`로 결합한 문자열을 담습니다.
    ///
    /// # 예제
    /// ```rust,ignore
    /// AppError::ValidationError("Unknown tone ; Missing addressee".to_string())
    /// ```
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 요청 본문을 해석할 수 없음 (400 Bad Request)
    ///
    /// 잘못된 JSON, 타입 불일치, Content-Type 누락, 크기 초과 등
    /// DTO로 역직렬화하기 전 단계의 실패입니다.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// 리소스 찾을 수 없음 에러 (404 Not Found)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    ///
    /// 예상하지 못한 시스템 오류입니다. 응답 본문은 에러 메시지 그대로입니다.
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 클라이언트에게 전달할 메시지 (분류 접두어 제외)
    pub fn message(&self) -> &str {
        match self {
            AppError::ValidationError(msg)
            | AppError::BadRequest(msg)
            | AppError::NotFound(msg)
            | AppError::InternalError(msg) => msg,
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 상태 코드는 `status_code()`를 따르고, 본문은 `message()`를 평문으로 담습니다.
    /// 서버 에러는 `error` 레벨로, 클라이언트 에러는 `debug` 레벨로 기록됩니다.
    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();

        if status.is_server_error() {
            error!("❌ 처리되지 않은 서버 에러: {}", self);
        } else {
            debug!("요청 거부됨 ({}): {}", status.as_u16(), self);
        }

        HttpResponse::build(status)
            .insert_header(ContentType::plaintext())
            .body(self.message().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::MessageBody;
    use actix_web::ResponseError;

    fn body_text(response: HttpResponse) -> String {
        let Ok(bytes) = response.into_body().try_into_bytes() else {
            panic!("Expected a buffered body");
        };
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[test]
    fn test_validation_error_response() {
        let error = AppError::ValidationError("Unknown tone ; Missing addressee".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_text(response), "Unknown tone ; Missing addressee");
    }

    #[test]
    fn test_bad_request_error_response() {
        let error = AppError::BadRequest("expected value at line 1 column 1".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.headers().get("content-type").unwrap(),
            "text/plain; charset=utf-8"
        );
    }

    #[test]
    fn test_not_found_error_response() {
        let error = AppError::NotFound("Not Found".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_text(response), "Not Found");
    }

    #[test]
    fn test_internal_error_response() {
        let error = AppError::InternalError("Something went wrong".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_text(response), "Something went wrong");
    }

    #[test]
    fn test_display_keeps_category_prefix() {
        let error = AppError::ValidationError("Missing addressee".to_string());

        assert_eq!(error.to_string(), "Validation error: Missing addressee");
        assert_eq!(error.message(), "Missing addressee");
    }
}
