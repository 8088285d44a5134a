use std::fmt;

/// 인사말의 어조
///
/// 닫힌 집합의 열거형입니다. 외부 입력은 절대 이 타입으로 직접 역직렬화하지
/// 않으며, 반드시 `validate_tone`을 거쳐 생성됩니다. 그래서 `Deserialize`를
/// 구현하지 않습니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    /// 친근한 어조 (`"Casual"`)
    Casual,
    /// 격식 있는 어조 (`"Formal"`)
    Formal,
}

impl Tone {
    /// 지원하는 모든 어조 (레이블 매칭 순서)
    pub const ALL: [Tone; 2] = [Tone::Casual, Tone::Formal];

    /// 레이블 문자열에서 Tone을 찾습니다.
    ///
    /// 대소문자를 구분합니다. `"casual"`은 `None`입니다.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// assert_eq!(Tone::parse("Casual"), Some(Tone::Casual));
    /// assert_eq!(Tone::parse("casual"), None);
    /// ```
    pub fn parse(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tone| tone.as_str() == label)
    }

    /// Tone을 레이블 문자열로 변환합니다.
    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Casual => "Casual",
            Tone::Formal => "Formal",
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
