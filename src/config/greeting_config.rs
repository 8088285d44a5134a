use std::env;

use crate::utils::string_utils::is_valid_string;

/// 인사말 설정
pub struct GreetingConfig;

impl GreetingConfig {
    pub const DEFAULT_SENDER: &'static str = "Giraffe";

    /// 인사말을 보내는 쪽의 이름을 반환합니다.
    ///
    /// # Environment Variables
    ///
    /// - `GREETING_SENDER`: 보내는 쪽 이름 (기본값: "Giraffe")
    pub fn sender() -> String {
        Self::sender_from(env::var("GREETING_SENDER").ok())
    }

    /// 값이 없거나 공백뿐이면 기본값을 사용합니다.
    pub fn sender_from(value: Option<String>) -> String {
        value
            .filter(|sender| is_valid_string(sender))
            .unwrap_or_else(|| Self::DEFAULT_SENDER.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sender_from() {
        assert_eq!(GreetingConfig::sender_from(None), "Giraffe");
        assert_eq!(GreetingConfig::sender_from(Some("  ".to_string())), "Giraffe");
        assert_eq!(GreetingConfig::sender_from(Some("Actix".to_string())), "Actix");
    }
}
