//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//! 전송 계층 어댑터 역할을 하며, 요청 본문을 DTO로 해석하고 서비스 결과를
//! HTTP 응답으로 투영합니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! HTTP Layer Architecture
//! ┌─────────────────────────────────────────────┐
//!   Client (Browser, curl, API Client)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈) - 응답 투영                  ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 매핑 실행 / 메시지 생성              ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   DTO / Models - 검증 / 도메인 값                ← Domain Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 모듈 구성
//!
//! - [`greetings`] - `POST /` 인사말 핸들러와 JSON 추출기 설정
//! - [`fallback`] - 미매칭 경로에 대한 `404 Not Found` 핸들러
//!
//! ## 에러 처리 패턴
//!
//! 모든 핸들러는 `Result<HttpResponse, AppError>`를 반환합니다. 상태 코드와
//! 본문 변환은 `AppError`의 `ResponseError` 구현이 담당합니다.
//!
//! ```rust,ignore
//! pub async fn greet(
//!     service: web::Data<GreetingService>,
//!     payload: web::Json<GreetingRequest>,
//! ) -> Result<HttpResponse, AppError> {
//!     let message = service
//!         .greet(&payload)
//!         .map_err(|errors| AppError::ValidationError(errors.joined()))?;
//!     Ok(HttpResponse::Ok().body(message))
//! }
//! ```

pub mod fallback;
pub mod greetings;
