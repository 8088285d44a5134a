//! # Greeting Data Transfer Objects Module
//!
//! 인사말 API의 요청 데이터 구조와 DTO → 도메인 매핑을 정의하는 모듈입니다.
//!
//! ## 모듈 구조
//!
//! ```text
//! greetings/
//! └── request/
//!     └── greeting_request.rs   # 요청 DTO, 필드 검증기, 누적 매퍼
//! ```
//!
//! 응답은 평문 문자열이므로 별도의 응답 DTO가 없습니다.
//!
//! ## 매핑 흐름
//!
//! ```text
//! JSON ──serde──▶ GreetingRequest ──to_greeting()──▶ Validation<Greeting>
//!                 (Option<String>)                    ├── Valid(Greeting)
//!                                                     └── Invalid(FieldErrors)
//! ```

pub mod request;

pub use request::*;
