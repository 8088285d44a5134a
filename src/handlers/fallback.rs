use actix_web::{HttpRequest, HttpResponse};
use crate::core::errors::AppError;

/// 등록되지 않은 경로/메서드에 대한 기본 핸들러
///
/// 모든 미매칭 요청에 `404`, 평문 `"Not Found"`로 응답합니다.
pub async fn not_found(req: HttpRequest) -> Result<HttpResponse, AppError> {
    log::debug!("매칭되는 라우트 없음: {} {}", req.method(), req.path());
    Err(AppError::NotFound("Not Found".to_string()))
}
