//! 문자열 처리 유틸리티
//!
//! 요청 DTO의 검증과 정규화에 쓰이는 작은 헬퍼들입니다.

use serde::{Deserialize, Deserializer};

/// 앞뒤 공백을 제거한 새 문자열을 반환합니다.
pub fn trim_string(value: &str) -> String {
    value.trim().to_string()
}

/// 공백을 제거했을 때 내용이 남아 있는지 확인합니다.
pub fn is_valid_string(value: &str) -> bool {
    !value.trim().is_empty()
}

/// JSON `null`을 해당 타입의 기본값으로 역직렬화합니다.
///
/// 필드 누락은 `#[serde(default)]`가, 명시적인 `null`은 이 함수가 처리하므로
/// `{"name": null}`도 빈 문자열로 취급되어 일반 검증 메시지를 받게 됩니다.
///
/// ```rust,ignore
/// #[derive(Deserialize)]
/// struct Form {
///     #[serde(default, deserialize_with = "deserialize_null_default")]
///     name: String,
/// }
/// ```
pub fn deserialize_null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    let opt = Option::<T>::deserialize(deserializer)?;
    Ok(opt.unwrap_or_default())
}

/// 체크박스 값을 참/거짓으로 역직렬화합니다.
///
/// HTML 폼과 다른 클라이언트가 보내는 표현을 모두 받아들입니다.
///
/// | 입력 | 결과 |
/// |------|------|
/// | `true` / `false` | 그대로 |
/// | 숫자 | `0`이 아니면 `true` |
/// | 문자열 | `"true"`, `"1"`, `"on"` (대소문자/공백 무시)이면 `true` |
/// | `null`, 배열, 객체 | `false` |
pub fn deserialize_truthy<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.as_ref().is_some_and(is_truthy))
}

fn is_truthy(value: &serde_json::Value) -> bool {
    use serde_json::Value;

    match value {
        Value::Bool(flag) => *flag,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => matches!(s.trim().to_ascii_lowercase().as_str(), "true" | "1" | "on"),
        Value::Null | Value::Array(_) | Value::Object(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_string() {
        assert_eq!(trim_string("  Ann  "), "Ann");
        assert_eq!(trim_string("\tEng\n"), "Eng");
        assert_eq!(trim_string("   "), "");
    }

    #[test]
    fn test_is_valid_string() {
        assert!(is_valid_string("Hello"));
        assert!(is_valid_string("  World  "));
        assert!(!is_valid_string(""));
        assert!(!is_valid_string("   "));
        assert!(!is_valid_string("\t\n"));
    }

    #[test]
    fn test_deserialize_null_default() {
        #[derive(Deserialize)]
        struct TestStruct {
            #[serde(default, deserialize_with = "deserialize_null_default")]
            field: String,
            #[serde(default, deserialize_with = "deserialize_null_default")]
            flag: bool,
        }

        let parsed: TestStruct = serde_json::from_str(r#"{"field": null, "flag": null}"#).unwrap();
        assert_eq!(parsed.field, "");
        assert!(!parsed.flag);

        let parsed: TestStruct = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(parsed.field, "");

        let parsed: TestStruct = serde_json::from_str(r#"{"field": "x", "flag": true}"#).unwrap();
        assert_eq!(parsed.field, "x");
        assert!(parsed.flag);
    }

    #[test]
    fn test_deserialize_truthy() {
        #[derive(Deserialize)]
        struct Checkbox {
            #[serde(default, deserialize_with = "deserialize_truthy")]
            checked: bool,
        }

        let parse = |json: &str| serde_json::from_str::<Checkbox>(json).unwrap().checked;

        assert!(parse(r#"{"checked": true}"#));
        assert!(parse(r#"{"checked": 1}"#));
        assert!(parse(r#"{"checked": "true"}"#));
        assert!(parse(r#"{"checked": " ON "}"#));
        assert!(!parse(r#"{"checked": false}"#));
        assert!(!parse(r#"{"checked": 0}"#));
        assert!(!parse(r#"{"checked": "false"}"#));
        assert!(!parse(r#"{"checked": null}"#));
        assert!(!parse(r#"{}"#));
    }
}
