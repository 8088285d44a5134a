//! # Core Module
//!
//! 서비스 전역에서 사용하는 핵심 기능을 제공하는 모듈입니다.
//!
//! ## 모듈 구성
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 애플리케이션 전역 에러 타입 정의
//! - **HTTP 통합**: Actix-Web `ResponseError` 구현 (평문 응답)
//! - **전역 에러 경계**: 5xx 에러 로깅 후 500 응답으로 변환
//!
//! ### [`validation`] - 누적 검증
//! - **FieldErrors**: 비어 있지 않은 필드 에러 목록
//! - **Validation**: 성공 값 또는 필드 에러 목록
//! - **map2**: 독립적인 검증을 모두 실행하고 에러를 모으는 결합자
//!
//! ## 에러 흐름
//!
//! ```text
//! 필드 검증기 ──▶ Validation<T> ──▶ 핸들러 (응답 투영) ──▶ AppError ──▶ HTTP 응답
//!               (데이터로 전달)                              (ResponseError)
//! ```
//!
//! 필드 에러는 예외처럼 던져지지 않고 `FieldErrors` 데이터로 핸들러까지 전달됩니다.
//! 핸들러만이 이를 `AppError::ValidationError`로 바꾸어 외부에 보이는
//! 상태 코드를 결정합니다.

pub mod errors;
pub mod validation;

pub use errors::*;
pub use validation::*;
