use std::fmt;

use crate::utils::string_utils::is_valid_string;

/// 인사말을 받는 사람
///
/// 비어 있지 않고 공백만으로 이루어지지 않은 문자열을 보장하는 값 객체입니다.
/// 값은 요청에 담긴 그대로 보존됩니다 (앞뒤 공백을 제거하지 않음).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Addressee(String);

impl Addressee {
    /// 유효한 경우에만 Addressee를 생성합니다.
    ///
    /// # Returns
    ///
    /// * `Some(Addressee)` - 공백이 아닌 문자가 하나 이상 있는 경우
    /// * `None` - 빈 문자열이거나 공백만 있는 경우
    pub fn new(value: impl Into<String>) -> Option<Self> {
        let value = value.into();
        is_valid_string(&value).then_some(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Addressee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
