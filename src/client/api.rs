//! 제출 엔드포인트 호출
//!
//! 서버가 돌려준 응답 봉투를 그대로 반환합니다. `success == false`인 봉투는 HTTP 상태와 관계없이
//! 정상적인 응답으로 취급되며, 봉투가 아닌 응답이나 연결 실패만 [`ClientError::TransportError`]가 됩니다.

use async_trait::async_trait;

use crate::client::draft::DraftRecord;
use crate::client::errors::{ClientError, ClientResult};
use crate::domain::dto::api_response::ApiResponse;
use crate::domain::dto::users::response::UserResponse;

/// 제출 전송 계층 추상화
#[async_trait(?Send)]
pub trait SubmissionClient {
    async fn submit(&self, draft: &DraftRecord) -> ClientResult<ApiResponse<UserResponse>>;
}

/// `POST {base_url}/users`로 초안 전체를 JSON으로 전송합니다.
pub struct HttpSubmissionClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpSubmissionClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn submit_url(&self) -> String {
        format!("{}/users", self.base_url)
    }
}

#[async_trait(?Send)]
impl SubmissionClient for HttpSubmissionClient {
    async fn submit(&self, draft: &DraftRecord) -> ClientResult<ApiResponse<UserResponse>> {
        let response = self
            .http
            .post(self.submit_url())
            .json(draft)
            .send()
            .await
            .map_err(|e| ClientError::TransportError(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ClientError::TransportError(e.to_string()))?;

        log::debug!("제출 응답 {}: {}", status, body);

        parse_envelope(&body).ok_or_else(|| {
            ClientError::TransportError(format!("unexpected response ({})", status))
        })
    }
}

/// 응답 본문이 `{ success, message, data }` 봉투일 때만 해석합니다.
fn parse_envelope(body: &str) -> Option<ApiResponse<UserResponse>> {
    serde_json::from_str(body).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_url_strips_trailing_slash() {
        let client = HttpSubmissionClient::new("http://localhost:8000/");
        assert_eq!(client.submit_url(), "http://localhost:8000/users");
    }

    #[test]
    fn test_parse_envelope() {
        let ok = parse_envelope(
            r#"{"success":true,"message":"Form submitted successfully","data":{"id":7,"name":"Ann","department":"Eng","mobile":"1234567890","checked":1}}"#,
        )
        .unwrap();
        assert!(ok.success);
        assert_eq!(ok.data.unwrap().id, 7);

        let rejected = parse_envelope(r#"{"success":false,"message":"Name cannot be empty","data":null}"#).unwrap();
        assert!(!rejected.success);
        assert_eq!(rejected.message, "Name cannot be empty");

        assert!(parse_envelope("<html>Bad Gateway</html>").is_none());
        assert!(parse_envelope(r#"{"error":"nope"}"#).is_none());
    }
}
