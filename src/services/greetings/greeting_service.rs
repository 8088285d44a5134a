//! # 인사말 서비스 구현
//!
//! 요청 DTO를 도메인 값으로 매핑하고, 성공 시 어조에 맞는 인사말 메시지를
//! 만듭니다. 검증 실패는 `FieldErrors` 데이터로 그대로 돌려주며, HTTP 상태 코드
//! 결정은 핸들러의 몫입니다.
//!
//! ```text
//! GreetingRequest ──▶ to_greeting() ──▶ Greeting ──▶ message(sender) ──▶ String
//!                                  └──▶ FieldErrors ──────────────────▶ Err
//! ```

use log::debug;

use crate::config::GreetingConfig;
use crate::core::validation::FieldErrors;
use crate::domain::dto::greetings::request::GreetingRequest;
use crate::domain::models::greeting::Greeting;

/// 인사말 서비스
///
/// 상태는 설정에서 읽은 보내는 쪽 이름뿐이며 생성 후 변경되지 않습니다.
#[derive(Debug, Clone)]
pub struct GreetingService {
    sender: String,
}

impl GreetingService {
    pub fn new(sender: impl Into<String>) -> Self {
        Self { sender: sender.into() }
    }

    /// 환경 변수(`GREETING_SENDER`)에서 설정을 읽어 서비스를 생성합니다.
    pub fn from_env() -> Self {
        Self::new(GreetingConfig::sender())
    }

    pub fn sender(&self) -> &str {
        &self.sender
    }

    /// 검증된 도메인 값으로 인사말 문장을 만듭니다.
    pub fn render(&self, greeting: &Greeting) -> String {
        greeting.message(&self.sender)
    }

    /// 요청을 검증하고 인사말 메시지를 반환합니다.
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - 인사말 메시지
    /// * `Err(FieldErrors)` - 검증에 실패한 모든 필드의 에러 (필드 순서대로)
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let service = GreetingService::new("Giraffe");
    /// let request = GreetingRequest::new(Some("Barry"), Some("Casual"));
    ///
    /// assert_eq!(service.greet(&request).unwrap(), "Hello Barry, from Giraffe!");
    /// ```
    pub fn greet(&self, request: &GreetingRequest) -> Result<String, FieldErrors> {
        let greeting = request.to_greeting().into_result().map_err(|errors| {
            debug!("인사말 요청 검증 실패 ({}건): {:?}", errors.len(), errors.codes());
            errors
        })?;

        debug!("인사말 생성: tone={}", greeting.tone());
        Ok(self.render(&greeting))
    }
}

impl Default for GreetingService {
    fn default() -> Self {
        Self::new(GreetingConfig::DEFAULT_SENDER)
    }
}
