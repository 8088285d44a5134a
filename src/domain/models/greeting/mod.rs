//! # Greeting Domain Model
//!
//! 인사말 엔드포인트의 도메인 모델입니다.
//!
//! - [`Tone`] - 닫힌 집합의 어조 열거형
//! - [`Addressee`] - 공백이 아닌 수신자 이름
//! - [`Greeting`] - 검증이 끝난 도메인 값과 메시지 템플릿

pub mod addressee;
pub mod greeting;
pub mod tone;

pub use addressee::Addressee;
pub use greeting::Greeting;
pub use tone::Tone;
