//! # 문자열 유틸리티
//!
//! 문자열 처리와 관련된 공통 유틸리티 함수들입니다.
//! 휴대폰 번호 마스킹, 업로드 파일 확장자 추출, 선택적 문자열 정리를 제공합니다.

use serde::Deserialize;

/// 선택적 문자열 필드 정리
///
/// None 값이거나 빈 문자열/공백만 있는 경우 None을 반환하고,
/// 유효한 문자열인 경우 앞뒤 공백을 제거한 문자열을 Some으로 반환합니다.
pub fn clean_optional_string(value: Option<String>) -> Option<String> {
    value.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// 휴대폰 번호를 로그 출력용으로 마스킹합니다.
///
/// 앞 3자리와 뒤 2자리만 남기고 가운데를 `*`로 가립니다.
/// 7자리 미만의 짧은 입력은 전체를 마스킹합니다.
///
/// # 예제
/// ```rust,ignore
/// use crate::utils::string_utils::mask_phone;
///
/// assert_eq!(mask_phone("13800000000"), "138******00");
/// assert_eq!(mask_phone("1380"), "****");
/// ```
pub fn mask_phone(phone: &str) -> String {
    let len = phone.chars().count();
    if len < 7 {
        return "*".repeat(len);
    }
    let head: String = phone.chars().take(3).collect();
    let tail: String = phone.chars().skip(len - 2).collect();
    format!("{}{}{}", head, "*".repeat(len - 5), tail)
}

/// 파일명에서 소문자 확장자를 추출합니다.
///
/// 점이 없거나 점 뒤가 비어있는 경우 None을 반환합니다.
///
/// # 예제
/// ```rust,ignore
/// use crate::utils::string_utils::file_extension;
///
/// assert_eq!(file_extension("avatar.PNG"), Some("png".to_string()));
/// assert_eq!(file_extension("noext"), None);
/// ```
pub fn file_extension(filename: &str) -> Option<String> {
    let ext = filename.rsplit('.').next()?;
    if ext.is_empty() || ext == filename {
        return None;
    }
    Some(ext.to_lowercase())
}

/// 선택적 문자열 필드를 위한 serde deserializer
///
/// JSON 역직렬화 시 빈 문자열이나 공백만 있는 문자열을 자동으로 None으로 변환하고,
/// 유효한 문자열인 경우 앞뒤 공백을 제거한 후 Some으로 반환합니다.
/// `#[serde(deserialize_with = "deserialize_optional_string")]` 속성과 함께 사용됩니다.
///
/// # 예제
/// ```rust,ignore
/// #[derive(Deserialize)]
/// struct LoginRequest {
///     #[serde(default, deserialize_with = "deserialize_optional_string")]
///     code: Option<String>,
/// }
///
/// // JSON: {"code": "  482913  "} → Some("482913")
/// // JSON: {"code": ""} → None
/// // JSON: {"code": null} → None
/// ```
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(clean_optional_string(opt))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_optional_string() {
        assert_eq!(clean_optional_string(Some("Hello".to_string())), Some("Hello".to_string()));
        assert_eq!(clean_optional_string(Some("  World  ".to_string())), Some("World".to_string()));
        assert_eq!(clean_optional_string(Some("".to_string())), None);
        assert_eq!(clean_optional_string(Some("   ".to_string())), None);
        assert_eq!(clean_optional_string(None), None);
    }

    #[test]
    fn test_mask_phone() {
        assert_eq!(mask_phone("13800000000"), "138******00");
        assert_eq!(mask_phone("13912345678"), "139******78");

        // 짧은 입력은 전체 마스킹
        assert_eq!(mask_phone("1380"), "****");
        assert_eq!(mask_phone(""), "");
    }

    #[test]
    fn test_file_extension() {
        assert_eq!(file_extension("avatar.png"), Some("png".to_string()));
        assert_eq!(file_extension("avatar.JPEG"), Some("jpeg".to_string()));
        assert_eq!(file_extension("archive.tar.gz"), Some("gz".to_string()));

        assert_eq!(file_extension("noext"), None);
        assert_eq!(file_extension("trailing."), None);
    }

    #[test]
    fn test_deserialize_optional_string() {
        use serde::Deserialize;

        #[derive(Deserialize)]
        struct TestStruct {
            #[serde(deserialize_with = "deserialize_optional_string")]
            optional_field: Option<String>,
        }

        let json = r#"{"optional_field": "  482913  "}"#;
        let result: TestStruct = serde_json::from_str(json).unwrap();
        assert_eq!(result.optional_field, Some("482913".to_string()));

        let json = r#"{"optional_field": ""}"#;
        let result: TestStruct = serde_json::from_str(json).unwrap();
        assert_eq!(result.optional_field, None);

        let json = r#"{"optional_field": "   "}"#;
        let result: TestStruct = serde_json::from_str(json).unwrap();
        assert_eq!(result.optional_field, None);

        let json = r#"{"optional_field": null}"#;
        let result: TestStruct = serde_json::from_str(json).unwrap();
        assert_eq!(result.optional_field, None);
    }
}
