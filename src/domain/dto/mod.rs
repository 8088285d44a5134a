//! # Data Transfer Objects (DTO) Module
//!
//! API 경계에서 데이터를 받기 위한 객체들을 정의하는 모듈입니다.
//! 클라이언트와 서버 간의 데이터 계약(Contract)을 도메인 모델과 분리합니다.
//!
//! ## 왜 DTO를 분리하는가
//!
//! 외부 입력을 도메인 타입으로 곧바로 역직렬화하면 두 가지 문제가 생깁니다.
//!
//! 1. **누락 필드의 침묵**: `Option`이나 `#[serde(default)]`를 쓰는 순간 누락된
//!    필드는 실패하지 않고 `None`/빈 값으로 채워집니다. 검증을 역직렬화에 맡기면
//!    이런 값이 도메인 안으로 흘러 들어갑니다.
//! 2. **와이어 계약 결합**: 열거형 이름이 바뀌면 API 계약도 함께 바뀝니다.
//!
//! 그래서 요청은 항상 느슨한 DTO로 받고, 명시적인 검증을 거친 뒤에만 도메인 값을
//! 만듭니다.
//!
//! ## 모듈 구성
//!
//! - [`greetings`] - 인사말 요청 DTO와 필드 검증기

pub mod greetings;

pub use greetings::*;
