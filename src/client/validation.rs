//! 필드 단위 검증 규칙
//!
//! 서버는 [`CreateUserRequest`](crate::domain::dto::users::request::CreateUserRequest)로
//! 같은 입력을 다시 검증합니다. 두 규칙은 의도적으로 따로 유지하며 테스트로 일치 여부를 확인합니다.
//! 문구는 서버와 조금 다릅니다 (`"Enter a valid 10-digit number"`, `"Mobile cannot be empty"`).

pub const NAME_FIELD: &str = "name";
pub const DEPARTMENT_FIELD: &str = "department";
pub const MOBILE_FIELD: &str = "mobile";
pub const CHECKED_FIELD: &str = "checked";

pub const NAME_EMPTY: &str = "Name cannot be empty";
pub const DEPARTMENT_EMPTY: &str = "Department cannot be empty";
pub const MOBILE_EMPTY: &str = "Mobile cannot be empty";
pub const MOBILE_INVALID: &str = "Enter a valid 10-digit number";
pub const CHECKBOX_REQUIRED: &str = "Check me out to continue";

/// 필드 하나를 검사하고 실패하면 메시지를 반환합니다.
///
/// 텍스트 필드는 `value`를, `checked` 필드는 `checked`를 봅니다.
/// 알 수 없는 필드 이름은 항상 통과합니다.
pub fn validate_field(field: &str, value: &str, checked: bool) -> Option<&'static str> {
    match field {
        NAME_FIELD if value.trim().is_empty() => Some(NAME_EMPTY),
        DEPARTMENT_FIELD if value.trim().is_empty() => Some(DEPARTMENT_EMPTY),
        MOBILE_FIELD if value.trim().is_empty() => Some(MOBILE_EMPTY),
        MOBILE_FIELD if !is_ten_digits(value) => Some(MOBILE_INVALID),
        CHECKED_FIELD if !checked => Some(CHECKBOX_REQUIRED),
        _ => None,
    }
}

// 공백 제거 없이 정확히 10개의 ASCII 숫자
fn is_ten_digits(value: &str) -> bool {
    value.len() == 10 && value.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use validator::Validate;

    use super::*;
    use crate::domain::dto::users::request::CreateUserRequest;

    #[rstest]
    #[case(NAME_FIELD, "", Some(NAME_EMPTY))]
    #[case(NAME_FIELD, " \t ", Some(NAME_EMPTY))]
    #[case(NAME_FIELD, "Ann", None)]
    #[case(DEPARTMENT_FIELD, "", Some(DEPARTMENT_EMPTY))]
    #[case(DEPARTMENT_FIELD, " Eng ", None)]
    #[case(MOBILE_FIELD, "", Some(MOBILE_EMPTY))]
    #[case(MOBILE_FIELD, "   ", Some(MOBILE_EMPTY))]
    #[case(MOBILE_FIELD, "12345", Some(MOBILE_INVALID))]
    #[case(MOBILE_FIELD, "12345678901", Some(MOBILE_INVALID))]
    #[case(MOBILE_FIELD, " 1234567890", Some(MOBILE_INVALID))]
    #[case(MOBILE_FIELD, "123456789a", Some(MOBILE_INVALID))]
    #[case(MOBILE_FIELD, "١٢٣٤٥٦٧٨٩٠", Some(MOBILE_INVALID))]
    #[case(MOBILE_FIELD, "0123456789", None)]
    #[case("nickname", "", None)]
    fn test_text_fields(#[case] field: &str, #[case] value: &str, #[case] expected: Option<&str>) {
        assert_eq!(validate_field(field, value, false), expected);
    }

    #[test]
    fn test_checked_depends_only_on_flag() {
        for value in ["", "on", "anything"] {
            assert_eq!(validate_field(CHECKED_FIELD, value, false), Some(CHECKBOX_REQUIRED));
            assert_eq!(validate_field(CHECKED_FIELD, value, true), None);
        }
    }

    /// 같은 입력에 대해 클라이언트와 서버가 수락/거부를 동일하게 판단해야 합니다.
    #[test]
    fn test_client_and_server_rules_agree() {
        let names = ["Ann", "", "  ", " Bo "];
        let mobiles = ["1234567890", "", "12345", " 1234567890", "12345678901", "12345a7890"];

        for name in names {
            for mobile in mobiles {
                for checked in [true, false] {
                    let client_ok = [
                        validate_field(NAME_FIELD, name, checked),
                        validate_field(DEPARTMENT_FIELD, name, checked),
                        validate_field(MOBILE_FIELD, mobile, checked),
                        validate_field(CHECKED_FIELD, "", checked),
                    ]
                    .iter()
                    .all(Option::is_none);

                    let server_ok = CreateUserRequest {
                        name: name.to_string(),
                        department: name.to_string(),
                        mobile: mobile.to_string(),
                        checked,
                    }
                    .validate()
                    .is_ok();

                    assert_eq!(
                        client_ok, server_ok,
                        "disagreement for name={:?} mobile={:?} checked={}",
                        name, mobile, checked
                    );
                }
            }
        }
    }
}
