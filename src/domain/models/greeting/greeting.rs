use super::{Addressee, Tone};

/// 완전히 검증된 인사말 요청 (도메인 값)
///
/// 한 번 생성되면 항상 유효합니다. 이후 코드는 null 여부나 어조 레이블을
/// 다시 확인할 필요가 없습니다. 필드는 비공개이며 생성 후 변경할 수 없습니다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Greeting {
    tone: Tone,
    addressee: Addressee,
}

impl Greeting {
    pub fn new(tone: Tone, addressee: Addressee) -> Self {
        Self { tone, addressee }
    }

    pub fn tone(&self) -> Tone {
        self.tone
    }

    pub fn addressee(&self) -> &Addressee {
        &self.addressee
    }

    /// 어조에 맞는 인사말 문장을 만듭니다.
    ///
    /// # Arguments
    ///
    /// * `sender` - 인사말을 보내는 쪽의 이름 (기본값: `"Giraffe"`)
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let greeting = Greeting::new(Tone::Casual, Addressee::new("Barry").unwrap());
    /// assert_eq!(greeting.message("Giraffe"), "Hello Barry, from Giraffe!");
    /// ```
    pub fn message(&self, sender: &str) -> String {
        match self.tone {
            Tone::Casual => format!("Hello {}, from {}!", self.addressee, sender),
            Tone::Formal => format!("Good day {}, kind regards from {}.", self.addressee, sender),
        }
    }
}
