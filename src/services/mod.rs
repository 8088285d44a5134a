//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 `main`에서 한 번 생성되어 `web::Data`로 모든 워커에 공유됩니다.
//! 요청 사이에 공유되는 가변 상태는 없습니다.
//!
//! # Features
//!
//! - DTO → 도메인 매핑 실행 및 인사말 메시지 생성
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::greetings::GreetingService;
//!
//! let service = web::Data::new(GreetingService::from_env());
//! App::new().app_data(service.clone());
//! ```

pub mod greetings;
