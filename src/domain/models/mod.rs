//! # Domain Models Module
//!
//! 도메인의 비즈니스 모델과 값 객체(Value Objects)를 정의하는 모듈입니다.
//!
//! ## DTO vs Models 구분
//!
//! ### DTO (`../dto/`)
//! - **느슨한 타입**: 모든 필드가 `Option<String>`
//! - **불변식 없음**: 필드 누락, 잘못된 값 모두 허용
//! - **생명주기**: 요청마다 생성되고 매핑 후 버려짐
//!
//! ### Models (`./`)
//! - **강한 타입**: 자유 문자열 대신 열거형, `Option` 대신 값 객체
//! - **항상 유효**: 검증기를 통해서만 생성됨
//! - **불변성**: 생성 후 변경 불가
//!
//! ## 설계 원칙
//!
//! ```rust,ignore
//! // ❌ 나쁜 예: 외부 입력을 도메인 열거형으로 직접 역직렬화
//! #[derive(Deserialize)]
//! struct Request { tone: Tone }
//!
//! // ✅ 좋은 예: DTO로 받고 명시적으로 검증
//! #[derive(Deserialize)]
//! struct GreetingRequest { tone: Option<String> }
//! let greeting = request.to_greeting();
//! ```
//!
//! 역직렬화 계층은 도메인 불변식이나 안정적인 와이어 계약을 보장하지 못합니다.
//! 그래서 도메인 타입은 `Deserialize`를 구현하지 않습니다.

pub mod greeting;

pub use greeting::*;
