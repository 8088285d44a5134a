//! 인사말 서비스 백엔드
//!
//! 느슨한 타입의 요청 DTO와 강한 타입의 도메인 값을 분리하고,
//! 검증 에러를 전부 누적하여 한 번에 보고하는 Actix-web 기반 서비스입니다.
//!
//! # Features
//!
//! - **DTO 분리**: 와이어 형태(`GreetingRequest`)와 도메인 값(`Greeting`) 분리
//! - **누적 검증**: 첫 에러에서 멈추지 않고 모든 필드 에러를 수집
//! - **명시적 매핑**: 역직렬화 단계에서는 어떤 검증도 하지 않음
//! - **장애 경계**: 처리 중 패닉은 `500 Internal Server Error`로 변환
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← POST /, GET /health
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 투영
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← DTO → 도메인 매핑, 메시지 생성
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Domain Models  │ ← Tone, Addressee, Greeting
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use greeting_service_backend::domain::GreetingRequest;
//! use greeting_service_backend::services::greetings::GreetingService;
//!
//! let service = GreetingService::new("Giraffe");
//! let request = GreetingRequest::new(Some("Barry"), Some("Casual"));
//!
//! assert_eq!(service.greet(&request).unwrap(), "Hello Barry, from Giraffe!");
//! ```

pub mod core;
pub mod config;
pub mod domain;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod middlewares;
