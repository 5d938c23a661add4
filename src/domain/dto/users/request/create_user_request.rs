//! 사용자 제출 요청 DTO
//!
//! `POST /users` 요청 본문과 서버 측 검증 규칙을 정의합니다.
//! 클라이언트에서 이미 검증했더라도 서버는 이 규칙으로 다시 검증합니다.
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::utils::string_utils::{deserialize_null_default, deserialize_truthy, is_valid_string};

/// 정확히 10자리 ASCII 숫자
pub static MOBILE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{10}$").expect("valid mobile pattern"));

pub const NAME_EMPTY: &str = "Name cannot be empty";
pub const DEPARTMENT_EMPTY: &str = "Department cannot be empty";
pub const MOBILE_INVALID: &str = "Enter a valid 10-digit mobile number";
pub const CHECKBOX_REQUIRED: &str = "Check me out to continue";

/// 검증 실패 시 메시지를 고르는 필드 순서 (첫 번째 실패가 응답 메시지가 됨)
const FIELD_ORDER: [&str; 4] = ["name", "department", "mobile", "checked"];

/// 사용자 제출 요청
///
/// 누락되었거나 `null`인 필드는 빈 문자열 / `false`로 채워져
/// 파싱 오류 대신 필드별 검증 메시지를 받습니다. 알 수 없는 필드(`submitted` 등)는 무시합니다.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[serde(default, deserialize_with = "deserialize_null_default")]
    #[validate(custom(function = "validate_name"))]
    pub name: String,

    #[serde(default, deserialize_with = "deserialize_null_default")]
    #[validate(custom(function = "validate_department"))]
    pub department: String,

    /// 공백 제거 없이 그대로 검사하고 그대로 저장합니다.
    #[serde(default, deserialize_with = "deserialize_null_default")]
    #[validate(regex(path = *MOBILE_REGEX, message = "Enter a valid 10-digit mobile number"))]
    pub mobile: String,

    /// `true`뿐 아니라 `1`, `"true"`, `"on"`도 체크된 것으로 받습니다.
    #[serde(default, deserialize_with = "deserialize_truthy")]
    #[validate(custom(function = "validate_checked"))]
    pub checked: bool,
}

impl CreateUserRequest {
    /// 모든 규칙을 검사하고 첫 번째로 실패한 필드의 메시지를 반환합니다.
    ///
    /// 검사 순서는 name → department → mobile → checked 입니다.
    pub fn first_violation(&self) -> Option<String> {
        let errors = self.validate().err()?;
        let field_errors = errors.field_errors();

        FIELD_ORDER.iter().find_map(|field| {
            field_errors
                .get(*field)
                .and_then(|errs| errs.first())
                .map(|err| {
                    err.message
                        .as_ref()
                        .map(|msg| msg.to_string())
                        .unwrap_or_else(|| err.code.to_string())
                })
        })
    }
}

fn validate_name(name: &str) -> Result<(), ValidationError> {
    if !is_valid_string(name) {
        return Err(ValidationError::new("name_empty").with_message(NAME_EMPTY.into()));
    }
    Ok(())
}

fn validate_department(department: &str) -> Result<(), ValidationError> {
    if !is_valid_string(department) {
        return Err(ValidationError::new("department_empty").with_message(DEPARTMENT_EMPTY.into()));
    }
    Ok(())
}

fn validate_checked(checked: &bool) -> Result<(), ValidationError> {
    if !*checked {
        return Err(ValidationError::new("checkbox_required").with_message(CHECKBOX_REQUIRED.into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn request(name: &str, department: &str, mobile: &str, checked: bool) -> CreateUserRequest {
        CreateUserRequest {
            name: name.to_string(),
            department: department.to_string(),
            mobile: mobile.to_string(),
            checked,
        }
    }

    #[test]
    fn test_valid_request_has_no_violation() {
        assert_eq!(request("Ann", "Eng", "1234567890", true).first_violation(), None);
        assert_eq!(request("  Ann ", " Eng", "0000000000", true).first_violation(), None);
    }

    #[rstest]
    #[case(request("", "Eng", "1234567890", true), NAME_EMPTY)]
    #[case(request("   ", "Eng", "1234567890", true), NAME_EMPTY)]
    #[case(request("Ann", "\t", "1234567890", true), DEPARTMENT_EMPTY)]
    #[case(request("Ann", "Eng", "12345", true), MOBILE_INVALID)]
    #[case(request("Ann", "Eng", "", true), MOBILE_INVALID)]
    #[case(request("Ann", "Eng", " 1234567890", true), MOBILE_INVALID)]
    #[case(request("Ann", "Eng", "1234567890\n", true), MOBILE_INVALID)]
    #[case(request("Ann", "Eng", "12345a7890", true), MOBILE_INVALID)]
    #[case(request("Ann", "Eng", "١٢٣٤٥٦٧٨٩٠", true), MOBILE_INVALID)]
    #[case(request("Ann", "Eng", "1234567890", false), CHECKBOX_REQUIRED)]
    fn test_single_violation(#[case] req: CreateUserRequest, #[case] expected: &str) {
        assert_eq!(req.first_violation().as_deref(), Some(expected));
    }

    #[test]
    fn test_first_failing_field_wins() {
        let all_bad = request("", "", "1", false);
        assert_eq!(all_bad.first_violation().as_deref(), Some(NAME_EMPTY));

        let from_department = request("Ann", "", "1", false);
        assert_eq!(from_department.first_violation().as_deref(), Some(DEPARTMENT_EMPTY));

        let from_mobile = request("Ann", "Eng", "1", false);
        assert_eq!(from_mobile.first_violation().as_deref(), Some(MOBILE_INVALID));
    }

    #[test]
    fn test_missing_and_null_fields_deserialize_to_defaults() {
        let parsed: CreateUserRequest =
            serde_json::from_str(r#"{ "name": null, "submitted": false }"#).unwrap();

        assert_eq!(parsed.name, "");
        assert_eq!(parsed.mobile, "");
        assert!(!parsed.checked);
        assert_eq!(parsed.first_violation().as_deref(), Some(NAME_EMPTY));
    }

    #[rstest]
    #[case(r#"1"#, None)]
    #[case(r#""true""#, None)]
    #[case(r#"0"#, Some(CHECKBOX_REQUIRED))]
    #[case(r#""false""#, Some(CHECKBOX_REQUIRED))]
    fn test_checked_accepts_truthy_values(#[case] checked: &str, #[case] expected: Option<&str>) {
        let body = format!(
            r#"{{ "name": "Ann", "department": "Eng", "mobile": "1234567890", "checked": {} }}"#,
            checked
        );
        let parsed: CreateUserRequest = serde_json::from_str(&body).unwrap();

        assert_eq!(parsed.first_violation().as_deref(), expected);
    }
}
