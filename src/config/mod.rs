//! # Configuration Module
//!
//! 서비스의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`server_config`] - `.env` 프로필, 실행 환경, 서버 바인딩, Rate Limiting, CORS 설정
//! - [`greeting_config`] - 인사말 템플릿 관련 설정
//!
//! ## 설계 원칙
//!
//! - 모든 설정값은 기본값을 가지며, 설정 없이도 개발 서버가 실행됩니다.
//! - 잘못된 값은 경고 로그를 남기고 기본값으로 대체됩니다.
//! - 환경 변수 해석은 순수 함수(`*_from`, `from_values`)로 분리되어 테스트됩니다.
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 프로필 (dev → .env.dev, prod → .env.prod, 기타 → .env / 미설정 시 dev)
//! export PROFILE="dev"
//! export ENVIRONMENT="development"   # development, test, staging, production
//!
//! # 서버 설정
//! export HOST="127.0.0.1"
//! export PORT="8080"
//! export WORKERS="4"
//! export JSON_LIMIT_BYTES="4096"
//!
//! # Rate Limiting
//! export RATE_LIMIT_PER_SECOND="100"
//! export RATE_LIMIT_BURST_SIZE="200"
//!
//! # CORS
//! export CORS_ALLOWED_ORIGINS="http://localhost:3000,http://localhost:8080"
//!
//! # 인사말
//! export GREETING_SENDER="Giraffe"
//! ```

pub mod greeting_config;
pub mod server_config;

pub use greeting_config::*;
pub use server_config::*;
