//! # Domain Layer Module
//!
//! 도메인 계층을 구성하는 핵심 모듈로, 외부 입력의 형태(DTO)와 검증된 내부 표현
//! (Models)을 분리하여 정의합니다.
//!
//! ## 아키텍처 개요
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── DTOs         - 와이어 형태 그대로의 요청 객체 (느슨한 타입)
//! └── Models       - 검증이 끝난 도메인 값 (강한 타입)
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Web Layer (Handlers)
//! ```
//!
//! ## 데이터 흐름
//!
//! 데이터는 한 방향으로만 흐릅니다.
//!
//! ```text
//! Handler ──▶ GreetingRequest ──▶ 필드 검증기 / 누적 매퍼 ──▶ (Greeting | FieldErrors) ──▶ Handler
//! ```
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::dto::GreetingRequest;
//! use crate::core::validation::Validation;
//!
//! let request: GreetingRequest = serde_json::from_str(r#"{"addressee":"Barry","tone":"Casual"}"#)?;
//!
//! match request.to_greeting() {
//!     Validation::Valid(greeting) => println!("{}", greeting.message("Giraffe")),
//!     Validation::Invalid(errors) => println!("{}", errors.joined()),
//! }
//! ```

pub mod dto;
pub mod models;

pub use dto::*;
pub use models::*;
