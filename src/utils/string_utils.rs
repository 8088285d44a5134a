//! # 문자열 유틸리티
//!
//! 문자열 처리와 관련된 공통 유틸리티 함수들입니다.

/// 문자열이 유효한지 확인 (빈 문자열이 아니고 공백만으로 구성되지 않음)
///
/// # 인자
/// * `value` - 확인할 문자열
///
/// # 반환값
/// * `true` - 유효한 문자열
/// * `false` - 빈 문자열이거나 공백만 있는 경우
///
/// # 예제
/// ```rust,ignore
/// use crate::utils::string_utils::is_valid_string;
///
/// assert_eq!(is_valid_string("Hello"), true);
/// assert_eq!(is_valid_string("   "), false);
/// assert_eq!(is_valid_string(""), false);
/// ```
pub fn is_valid_string(value: &str) -> bool {
    !value.trim().is_empty()
}

/// 쉼표로 구분된 목록을 정리된 항목들로 나눕니다.
///
/// 각 항목의 앞뒤 공백을 제거하고, 빈 항목은 버립니다.
///
/// # 예제
/// ```rust,ignore
/// use crate::utils::string_utils::split_comma_list;
///
/// assert_eq!(
///     split_comma_list(" http://a.test , ,http://b.test"),
///     vec!["http://a.test", "http://b.test"]
/// );
/// ```
pub fn split_comma_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| is_valid_string(item))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_string() {
        assert!(is_valid_string("Hello"));
        assert!(is_valid_string("  World  "));
        assert!(is_valid_string("0"));
        assert!(!is_valid_string(""));
        assert!(!is_valid_string("   "));
        assert!(!is_valid_string("\t\n"));
    }

    #[test]
    fn test_is_valid_string_with_korean() {
        assert!(is_valid_string("  안녕하세요  "));
        // 전각 공백도 공백으로 취급
        assert!(!is_valid_string("\u{3000}"));
    }

    #[test]
    fn test_split_comma_list() {
        assert_eq!(
            split_comma_list("http://localhost:3000, http://localhost:8080"),
            vec!["http://localhost:3000", "http://localhost:8080"]
        );
        assert_eq!(split_comma_list(" a ,, ,b"), vec!["a", "b"]);
        assert!(split_comma_list("").is_empty());
        assert!(split_comma_list(" , ").is_empty());
    }
}
