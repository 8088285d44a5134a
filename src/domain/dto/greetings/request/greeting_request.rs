use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use validator::ValidationError;

use crate::core::validation::Validation;
use crate::domain::models::greeting::{Addressee, Greeting, Tone};

/// 인사말 요청 DTO
///
/// JSON 본문을 그대로 반영하는 느슨한 타입의 구조체입니다.
/// 필드가 없거나 `null`이면 `None`으로 역직렬화되며, 역직렬화 단계에서는
/// 아무것도 검증하지 않습니다. 검증은 [`GreetingRequest::to_greeting`]에서
/// 명시적으로 수행합니다.
///
/// ```json
/// { "addressee": "Barry", "tone": "Casual" }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GreetingRequest {
    /// 수신자 이름
    #[serde(default)]
    pub addressee: Option<String>,

    /// 어조 레이블 (`"Casual"` | `"Formal"`)
    #[serde(default)]
    pub tone: Option<String>,
}

impl GreetingRequest {
    pub fn new(addressee: Option<&str>, tone: Option<&str>) -> Self {
        Self {
            addressee: addressee.map(str::to_string),
            tone: tone.map(str::to_string),
        }
    }

    /// DTO를 도메인 값으로 매핑합니다.
    ///
    /// 모든 필드 검증기를 서로의 결과와 무관하게 실행하고, 실패한 검증기의
    /// 에러를 전부 모읍니다. 에러 순서는 tone → addressee 입니다.
    /// 순수 함수이므로 같은 DTO는 항상 같은 결과를 냅니다.
    ///
    /// # Returns
    ///
    /// * `Validation::Valid(Greeting)` - 모든 필드가 유효한 경우
    /// * `Validation::Invalid(FieldErrors)` - 실패한 필드 수만큼의 에러
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let request = GreetingRequest::default();
    /// let errors = request.to_greeting().into_result().unwrap_err();
    /// assert_eq!(errors.joined(), "Unknown tone ; Missing addressee");
    /// ```
    pub fn to_greeting(&self) -> Validation<Greeting> {
        let tone = Validation::from(validate_tone(self.tone.as_deref()));
        let addressee = Validation::from(validate_addressee(self.addressee.as_deref()));

        tone.map2(addressee, Greeting::new)
    }
}

/// 어조 레이블 검증
///
/// 대소문자를 구분하여 알려진 레이블과 비교합니다. 일치하지 않으면 입력값을
/// 그대로 담은 `"Unknown tone {value}"` 에러를 반환합니다. 값이 없으면
/// 빈 문자열로 취급합니다.
pub fn validate_tone(tone: Option<&str>) -> Result<Tone, ValidationError> {
    let raw = tone.unwrap_or_default();

    Tone::parse(raw).ok_or_else(|| {
        let mut error = ValidationError::new("unknown_tone")
            .with_message(Cow::Owned(format!("Unknown tone {}", raw)));
        error.add_param(Cow::Borrowed("value"), &raw);
        error
    })
}

/// 수신자 필수값 검증
///
/// 필드 누락, `null`, 빈 문자열, 공백만 있는 문자열을 모두 같은 "누락"으로
/// 취급합니다. 역직렬화가 누락된 필드를 `None`으로 조용히 채우기 때문에
/// 여기서 반드시 직접 확인해야 합니다.
pub fn validate_addressee(addressee: Option<&str>) -> Result<Addressee, ValidationError> {
    addressee.and_then(Addressee::new).ok_or_else(|| {
        ValidationError::new("missing_addressee").with_message("Missing addressee".into())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn messages(request: &GreetingRequest) -> Vec<String> {
        match request.to_greeting() {
            Validation::Valid(greeting) => panic!("Expected errors, got {:?}", greeting),
            Validation::Invalid(errors) => errors.messages().into_iter().map(str::to_string).collect(),
        }
    }

    #[test]
    fn test_validate_tone() {
        assert_eq!(validate_tone(Some("Casual")).unwrap(), Tone::Casual);
        assert_eq!(validate_tone(Some("Formal")).unwrap(), Tone::Formal);

        let error = validate_tone(Some("Mean")).unwrap_err();
        assert_eq!(error.code, "unknown_tone");
        assert_eq!(error.message.as_deref(), Some("Unknown tone Mean"));
        assert_eq!(error.params["value"], "Mean");

        // 대소문자 구분
        let error = validate_tone(Some("casual")).unwrap_err();
        assert_eq!(error.message.as_deref(), Some("Unknown tone casual"));

        // 값 없음은 빈 레이블
        let error = validate_tone(None).unwrap_err();
        assert_eq!(error.message.as_deref(), Some("Unknown tone "));
    }

    #[test]
    fn test_validate_addressee() {
        assert_eq!(validate_addressee(Some("Barry")).unwrap().as_str(), "Barry");

        for blank in [None, Some(""), Some("   "), Some("\t\n")] {
            let error = validate_addressee(blank).unwrap_err();
            assert_eq!(error.code, "missing_addressee");
            assert_eq!(error.message.as_deref(), Some("Missing addressee"));
        }
    }

    #[test]
    fn test_valid_request_maps_field_wise() {
        let request = GreetingRequest::new(Some("Barry"), Some("Casual"));

        let greeting = request.to_greeting().into_result().unwrap();

        assert_eq!(greeting.tone(), Tone::Casual);
        assert_eq!(greeting.addressee().as_str(), "Barry");
    }

    #[test]
    fn test_single_invalid_field() {
        let unknown_tone = GreetingRequest::new(Some("Barry"), Some("Mean"));
        assert_eq!(messages(&unknown_tone), vec!["Unknown tone Mean"]);

        let missing_addressee = GreetingRequest::new(None, Some("Casual"));
        assert_eq!(messages(&missing_addressee), vec!["Missing addressee"]);
    }

    #[test]
    fn test_all_errors_accumulate_in_field_order() {
        let request = GreetingRequest::default();

        let errors = request.to_greeting().into_result().unwrap_err();

        assert_eq!(errors.len(), 2);
        assert_eq!(errors.codes(), vec!["unknown_tone", "missing_addressee"]);
        assert_eq!(errors.joined(), "Unknown tone ; Missing addressee");

        let request = GreetingRequest::new(Some("  "), Some("Mean"));
        assert_eq!(messages(&request), vec!["Unknown tone Mean", "Missing addressee"]);
    }

    #[test]
    fn test_null_absent_and_blank_are_equivalent() {
        let absent: GreetingRequest = serde_json::from_str(r#"{"tone":"Casual"}"#).unwrap();
        let null: GreetingRequest =
            serde_json::from_str(r#"{"addressee":null,"tone":"Casual"}"#).unwrap();
        let blank: GreetingRequest =
            serde_json::from_str(r#"{"addressee":"   ","tone":"Casual"}"#).unwrap();

        assert_eq!(absent.to_greeting(), null.to_greeting());
        assert_eq!(null.to_greeting(), blank.to_greeting());
        assert_eq!(messages(&absent), vec!["Missing addressee"]);
    }

    #[test]
    fn test_mapping_is_idempotent() {
        let request = GreetingRequest::new(None, Some("Mean"));

        assert_eq!(request.to_greeting(), request.to_greeting());
    }

    #[test]
    fn test_dto_ignores_unknown_fields() {
        let request: GreetingRequest =
            serde_json::from_str(r#"{"addressee":"Barry","tone":"Formal","extra":1}"#).unwrap();

        assert_eq!(request, GreetingRequest::new(Some("Barry"), Some("Formal")));
    }
}
