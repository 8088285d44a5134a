//! 미들웨어 모듈
//!
//! ActixWeb 애플리케이션의 요청 처리 파이프라인에서 사용되는 미들웨어들을 제공합니다.
//! 횡단 관심사(Cross-cutting concerns)를 처리합니다.
//!
//! # 제공 미들웨어
//!
//! ### 1. 장애 경계 미들웨어 (FaultBoundary)
//! - 핸들러 panic을 잡아 500 평문 응답으로 변환
//! - 장애 내용을 `error` 레벨로 로깅
//!
//! # 사용 방법
//!
//! ```rust,ignore
//! use actix_web::{App, HttpServer};
//! use crate::middlewares::FaultBoundary;
//!
//! HttpServer::new(|| {
//!     App::new()
//!         .wrap(FaultBoundary::new()) // 가장 안쪽에서 핸들러를 감쌈
//!         .configure(configure_all_routes)
//! })
//! ```

pub mod fault_boundary;
mod fault_inner;

// 미들웨어 재export
pub use fault_boundary::FaultBoundary;
