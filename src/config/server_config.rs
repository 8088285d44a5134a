use std::env;
use std::str::FromStr;

use log::warn;

use crate::utils::string_utils::split_comma_list;

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 개발 환경 - 빠른 개발을 위한 설정
    Development,
    /// 테스트 환경 - 자동화된 테스트용 설정
    Test,
    /// 스테이징 환경 - 프로덕션 유사 환경
    Staging,
    /// 프로덕션 환경
    Production,
}

impl Environment {
    /// 현재 실행 환경을 감지합니다.
    ///
    /// `ENVIRONMENT` 환경 변수를 확인하며, 설정되지 않은 경우 `Production`을
    /// 기본값으로 사용합니다.
    pub fn current() -> Self {
        Self::from_str(&env::var("ENVIRONMENT").unwrap_or_else(|_| "production".to_string()))
    }

    /// 문자열에서 Environment를 생성합니다.
    ///
    /// # Arguments
    ///
    /// * `s` - 환경 이름 문자열 (대소문자 무관)
    ///
    /// # Returns
    ///
    /// 해당하는 Environment 값. 알 수 없는 값인 경우 `Production`을 반환합니다.
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }
}

/// `.env` 프로필 설정
pub struct ProfileConfig;

impl ProfileConfig {
    pub const DEFAULT_PROFILE: &'static str = "dev";

    /// 현재 프로필 (`PROFILE`, 없거나 공백이면 "dev")
    pub fn profile() -> String {
        Self::profile_from(env::var("PROFILE").ok())
    }

    pub fn profile_from(value: Option<String>) -> String {
        value
            .map(|profile| profile.trim().to_string())
            .filter(|profile| !profile.is_empty())
            .unwrap_or_else(|| Self::DEFAULT_PROFILE.to_string())
    }

    /// 프로필에 해당하는 .env 파일 이름
    ///
    /// * `dev` → `.env.dev`
    /// * `prod` → `.env.prod`
    /// * 기타 → `.env`
    pub fn env_file(profile: &str) -> &'static str {
        match profile {
            "prod" => ".env.prod",
            "dev" => ".env.dev",
            _ => ".env",
        }
    }
}

/// 환경 변수 값을 파싱하고, 없거나 잘못된 경우 기본값을 사용합니다.
///
/// 파싱에 실패하면 경고 로그를 남깁니다.
pub(crate) fn parse_or<T>(name: &str, value: Option<String>, default: T) -> T
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match value {
        Some(raw) => raw.trim().parse::<T>().unwrap_or_else(|e| {
            warn!("{} 파싱 실패: {}. 기본값 사용", name, e);
            default
        }),
        None => default,
    }
}

/// 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    pub const DEFAULT_HOST: &'static str = "127.0.0.1";
    pub const DEFAULT_PORT: u16 = 8080;
    pub const DEFAULT_WORKERS: usize = 4;
    pub const DEFAULT_JSON_LIMIT: usize = 4096;

    /// 서버가 바인딩할 포트를 반환합니다.
    ///
    /// # Environment Variables
    ///
    /// - `PORT`: 커스텀 포트 설정 (기본값: 8080)
    pub fn port() -> u16 {
        parse_or("PORT", env::var("PORT").ok(), Self::DEFAULT_PORT)
    }

    /// 서버가 바인딩할 호스트 주소를 반환합니다.
    ///
    /// # Environment Variables
    ///
    /// - `HOST`: 커스텀 호스트 설정 (기본값: "127.0.0.1")
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| Self::DEFAULT_HOST.to_string())
    }

    /// 워커 스레드 수 (`WORKERS`, 기본값: 4)
    pub fn workers() -> usize {
        parse_or("WORKERS", env::var("WORKERS").ok(), Self::DEFAULT_WORKERS)
    }

    /// JSON 요청 본문 최대 크기 (`JSON_LIMIT_BYTES`, 기본값: 4096)
    pub fn json_limit() -> usize {
        parse_or("JSON_LIMIT_BYTES", env::var("JSON_LIMIT_BYTES").ok(), Self::DEFAULT_JSON_LIMIT)
    }

    /// `host:port` 형태의 바인딩 주소
    pub fn bind_address() -> String {
        format!("{}:{}", Self::host(), Self::port())
    }
}

/// Rate Limiting 설정 구조체
#[derive(Debug, Clone, PartialEq)]
pub struct RateLimitConfig {
    pub per_second: u64,
    pub burst_size: u32,
}

impl RateLimitConfig {
    /// 환경변수에서 Rate Limiting 설정을 로드합니다
    ///
    /// * `RATE_LIMIT_PER_SECOND` - 초당 허용 요청 수 (기본값: 100)
    /// * `RATE_LIMIT_BURST_SIZE` - 버스트 허용량 (기본값: 200)
    ///
    /// # Examples
    ///
    /// ```bash
    /// # .env.dev (개발 환경)
    /// RATE_LIMIT_PER_SECOND=20
    /// RATE_LIMIT_BURST_SIZE=40
    /// ```
    pub fn from_env() -> Self {
        Self::from_values(
            env::var("RATE_LIMIT_PER_SECOND").ok(),
            env::var("RATE_LIMIT_BURST_SIZE").ok(),
        )
    }

    pub fn from_values(per_second: Option<String>, burst_size: Option<String>) -> Self {
        Self {
            per_second: parse_or("RATE_LIMIT_PER_SECOND", per_second, 100),
            burst_size: parse_or("RATE_LIMIT_BURST_SIZE", burst_size, 200),
        }
    }
}

/// CORS 설정
pub struct CorsConfig;

impl CorsConfig {
    pub const DEFAULT_ORIGINS: &'static str = "http://localhost:3000,http://localhost:8080";

    /// 허용할 Origin 목록 (`CORS_ALLOWED_ORIGINS`, 쉼표 구분)
    pub fn allowed_origins() -> Vec<String> {
        Self::origins_from(env::var("CORS_ALLOWED_ORIGINS").ok())
    }

    pub fn origins_from(value: Option<String>) -> Vec<String> {
        split_comma_list(value.as_deref().unwrap_or(Self::DEFAULT_ORIGINS))
    }
}
