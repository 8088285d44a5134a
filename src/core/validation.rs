//! # Accumulating Validation
//!
//! 여러 개의 독립적인 필드 검증을 모두 실행하고, 실패한 모든 필드의 에러를
//! 한 번에 모으는 검증 결과 타입입니다.
//!
//! `Result`의 `?` 연산자는 첫 번째 에러에서 즉시 멈추기 때문에 뒤따르는 필드의
//! 문제를 숨깁니다. `Validation::map2`는 양쪽을 항상 평가하고 에러 목록을
//! 이어 붙입니다.
//!
//! ```text
//! Result::and_then   : tone ✗ → 중단            → ["Unknown tone Mean"]
//! Validation::map2   : tone ✗ , addressee ✗     → ["Unknown tone Mean", "Missing addressee"]
//! ```
//!
//! 필드 에러는 `validator::ValidationError`(코드 + 메시지)를 그대로 사용합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::core::validation::Validation;
//!
//! let greeting = Validation::from(validate_tone(tone))
//!     .map2(validate_addressee(addressee).into(), |tone, addressee| {
//!         Greeting::new(tone, addressee)
//!     });
//! ```

use validator::ValidationError;

/// 필드 에러 메시지 구분자
pub const FIELD_ERROR_SEPARATOR: &str = "; ";

/// 검증 순서대로 쌓인, 비어 있지 않은 필드 에러 목록
///
/// 항상 하나 이상의 에러를 담으며 중복을 제거하지 않습니다.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldErrors {
    errors: Vec<ValidationError>,
}

impl FieldErrors {
    /// 단일 에러로 목록을 생성합니다.
    pub fn new(error: ValidationError) -> Self {
        Self { errors: vec![error] }
    }

    /// 다른 목록의 에러를 순서를 유지한 채 뒤에 붙입니다.
    pub fn extend(&mut self, other: FieldErrors) {
        self.errors.extend(other.errors);
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// 항상 `false`. 목록은 생성 시점부터 비어 있지 않습니다.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// 에러 코드 목록 (`"unknown_tone"`, `"missing_addressee"` 등)
    pub fn codes(&self) -> Vec<&str> {
        self.errors.iter().map(|e| &*e.code).collect()
    }

    /// 사람이 읽을 수 있는 메시지 목록
    ///
    /// 메시지가 없는 에러는 코드로 대체됩니다.
    pub fn messages(&self) -> Vec<&str> {
        self.errors.iter().map(message_of).collect()
    }

    /// 메시지를 `"; "`로 결합한 문자열
    pub fn joined(&self) -> String {
        self.messages().join(FIELD_ERROR_SEPARATOR)
    }
}

impl From<ValidationError> for FieldErrors {
    fn from(error: ValidationError) -> Self {
        Self::new(error)
    }
}

fn message_of(error: &ValidationError) -> &str {
    error.message.as_deref().unwrap_or(&error.code)
}

/// 검증 결과: 완전히 검증된 값 또는 하나 이상의 필드 에러
#[derive(Debug, Clone, PartialEq)]
pub enum Validation<T> {
    Valid(T),
    Invalid(FieldErrors),
}

impl<T> Validation<T> {
    pub fn map<U, F>(self, function: F) -> Validation<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Validation::Valid(value) => Validation::Valid(function(value)),
            Validation::Invalid(errors) => Validation::Invalid(errors),
        }
    }

    /// 두 검증 결과를 결합합니다.
    ///
    /// 둘 다 성공하면 `function`을 적용하고, 하나라도 실패하면 실패한 쪽의
    /// 에러를 모두 모읍니다. `self`의 에러가 `other`의 에러보다 앞에 옵니다.
    pub fn map2<U, R, F>(self, other: Validation<U>, function: F) -> Validation<R>
    where
        F: FnOnce(T, U) -> R,
    {
        match (self, other) {
            (Validation::Valid(a), Validation::Valid(b)) => Validation::Valid(function(a, b)),
            (Validation::Invalid(errors), Validation::Valid(_))
            | (Validation::Valid(_), Validation::Invalid(errors)) => Validation::Invalid(errors),
            (Validation::Invalid(mut left), Validation::Invalid(right)) => {
                left.extend(right);
                Validation::Invalid(left)
            }
        }
    }

    /// 두 검증 결과를 튜플로 묶습니다. `map2(other, |a, b| (a, b))`와 같습니다.
    pub fn and<U>(self, other: Validation<U>) -> Validation<(T, U)> {
        self.map2(other, |a, b| (a, b))
    }

    pub fn into_result(self) -> Result<T, FieldErrors> {
        match self {
            Validation::Valid(value) => Ok(value),
            Validation::Invalid(errors) => Err(errors),
        }
    }
}

impl<T> From<Result<T, ValidationError>> for Validation<T> {
    fn from(result: Result<T, ValidationError>) -> Self {
        match result {
            Ok(value) => Validation::Valid(value),
            Err(error) => Validation::Invalid(FieldErrors::new(error)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field_error(code: &'static str, message: &'static str) -> ValidationError {
        ValidationError::new(code).with_message(message.into())
    }

    fn invalid<T>(code: &'static str, message: &'static str) -> Validation<T> {
        Validation::Invalid(FieldErrors::new(field_error(code, message)))
    }

    #[test]
    fn test_map2_both_valid() {
        let result = Validation::Valid(1).map2(Validation::Valid(2), |a, b| a + b);

        assert_eq!(result, Validation::Valid(3));
    }

    #[test]
    fn test_map2_keeps_single_failure() {
        let left: Validation<i32> = invalid("a", "first");
        let result = left.map2(Validation::Valid(2), |a, b| a + b);

        let errors = result.into_result().unwrap_err();
        assert_eq!(errors.messages(), vec!["first"]);

        let right: Validation<i32> = invalid("b", "second");
        let result = Validation::Valid(1).map2(right, |a, b| a + b);

        assert_eq!(result.into_result().unwrap_err().messages(), vec!["second"]);
    }

    #[test]
    fn test_map2_accumulates_in_order() {
        let left: Validation<i32> = invalid("a", "first");
        let right: Validation<i32> = invalid("b", "second");

        let errors = left.map2(right, |a, b| a + b).into_result().unwrap_err();

        assert_eq!(errors.len(), 2);
        assert_eq!(errors.codes(), vec!["a", "b"]);
        assert_eq!(errors.joined(), "first; second");
    }

    #[test]
    fn test_duplicates_are_kept() {
        let left: Validation<()> = invalid("same", "dup");
        let right: Validation<()> = invalid("same", "dup");

        let errors = left.and(right).into_result().unwrap_err();

        assert_eq!(errors.messages(), vec!["dup", "dup"]);
    }

    #[test]
    fn test_message_falls_back_to_code() {
        let errors = FieldErrors::new(ValidationError::new("no_message"));

        assert_eq!(errors.joined(), "no_message");
        assert!(!errors.is_empty());
    }

    #[test]
    fn test_from_result() {
        let ok = Validation::<u8>::from(Ok::<u8, ValidationError>(5));
        let err = Validation::<u8>::from(Err::<u8, _>(field_error("bad", "Bad value")));

        assert!(matches!(err, Validation::Invalid(_)));
        assert_eq!(ok.map(|v| v * 2), Validation::Valid(10));
    }
}
