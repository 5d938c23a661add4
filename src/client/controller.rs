//! # 폼 컨트롤러
//!
//! ```text
//! Idle ──on_submit──► Validating ──오류 있음──► Idle (오류 맵 표시)
//!                          │
//!                          ▼
//!                     Submitting ──성공──► Idle (초안 초기화, 저장소 삭제)
//!                          │
//!                          └──실패──► Idle (초안 유지)
//! ```
//!
//! 초안은 필드가 바뀔 때마다 저장소에 기록되고, 제출이 성공하면 저장소에서 지워집니다.
//! 취소와 재시도는 없습니다. 실패한 제출은 사용자가 다시 시작해야 합니다.

use std::collections::BTreeMap;

use log::{debug, error, info, warn};

use crate::client::api::SubmissionClient;
use crate::client::draft::{DRAFT_STORAGE_KEY, DraftRecord};
use crate::client::errors::ClientResult;
use crate::client::storage::DraftStorage;
use crate::client::validation::{
    CHECKED_FIELD, DEPARTMENT_FIELD, MOBILE_FIELD, NAME_FIELD, validate_field,
};
use crate::domain::dto::users::response::UserResponse;

pub const SUCCESS_NOTICE: &str = "Form submitted successfully!";
pub const UNKNOWN_ERROR: &str = "Unknown error";
pub const TRANSPORT_PREFIX: &str = "Server not responding";

/// 입력 이벤트
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldInput {
    Text { name: String, value: String },
    Checkbox { name: String, checked: bool },
}

impl FieldInput {
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        FieldInput::Text {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn checkbox(name: impl Into<String>, checked: bool) -> Self {
        FieldInput::Checkbox {
            name: name.into(),
            checked,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

/// 화면에 띄울 전역 알림
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

/// 제출 시도의 결과
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// 이미 제출이 진행 중이라 아무것도 하지 않음
    Busy,
    /// 로컬 검증 실패, 네트워크 호출 없음
    Invalid,
    /// 서버가 저장에 성공함
    Accepted(Option<UserResponse>),
    /// 서버가 요청을 거부함 (메시지는 서버가 준 문장 또는 기본 문구)
    Rejected(String),
    /// 서버에 도달하지 못함
    Failed(String),
}

pub struct FormController<S, C> {
    storage: S,
    client: C,
    draft: DraftRecord,
    errors: BTreeMap<String, String>,
    loading: bool,
    notifications: Vec<Notification>,
}

impl<S: DraftStorage, C: SubmissionClient> FormController<S, C> {
    /// 저장소에 남아 있는 초안을 불러오거나, 없으면 빈 초안으로 시작합니다.
    ///
    /// 저장된 값을 읽을 수 없거나 JSON으로 해석할 수 없으면 경고를 남기고 빈 초안을 사용합니다.
    pub fn initialize(storage: S, client: C) -> Self {
        let draft = match storage.get_item(DRAFT_STORAGE_KEY) {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                warn!("저장된 초안을 해석할 수 없어 새로 시작합니다: {}", e);
                DraftRecord::default()
            }),
            Ok(None) => DraftRecord::default(),
            Err(e) => {
                warn!("저장된 초안을 읽을 수 없어 새로 시작합니다: {}", e);
                DraftRecord::default()
            }
        };

        debug!("초안 로드: {:?}", draft);

        Self {
            storage,
            client,
            draft,
            errors: BTreeMap::new(),
            loading: false,
            notifications: Vec::new(),
        }
    }

    pub fn draft(&self) -> &DraftRecord {
        &self.draft
    }

    /// 현재 오류 맵 (필드 이름 → 메시지)
    pub fn errors(&self) -> &BTreeMap<String, String> {
        &self.errors
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// 쌓인 알림을 꺼내고 비웁니다.
    pub fn drain_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }

    /// 입력 하나를 반영합니다.
    ///
    /// 해당 필드만 다시 검증하고 초안을 저장소에 기록합니다.
    /// 알 수 없는 필드 이름은 초안을 바꾸지 않으며, `checked`가 아닌 체크박스 입력은
    /// 오류 맵도 건드리지 않습니다.
    pub fn on_field_change(&mut self, input: FieldInput) -> ClientResult<()> {
        let (field, message) = match input {
            FieldInput::Text { name, value } => {
                let message = validate_field(&name, &value, self.draft.checked);
                self.draft.set_text(&name, value);
                (name, message)
            }
            FieldInput::Checkbox { name, checked } if name == CHECKED_FIELD => {
                self.draft.checked = checked;
                (name, validate_field(CHECKED_FIELD, "", checked))
            }
            FieldInput::Checkbox { name, .. } => {
                // 체크박스가 아닌 필드 이름은 알 수 없는 입력으로 무시
                debug!("알 수 없는 체크박스 입력 무시: {}", name);
                return Ok(());
            }
        };

        match message {
            Some(msg) => {
                self.errors.insert(field, msg.to_string());
            }
            None => {
                self.errors.remove(&field);
            }
        }

        self.draft.submitted = false;
        self.persist_draft()
    }

    /// 전체 필드를 검증하고, 통과하면 서버로 제출합니다.
    pub async fn on_submit(&mut self) -> SubmitOutcome {
        if self.loading {
            debug!("제출이 이미 진행 중입니다");
            return SubmitOutcome::Busy;
        }

        let errors = self.validate_all();
        if !errors.is_empty() {
            debug!("로컬 검증 실패: {:?}", errors);
            self.errors = errors;
            return SubmitOutcome::Invalid;
        }

        self.loading = true;
        let result = self.client.submit(&self.draft).await;

        let outcome = match result {
            Ok(response) if response.success => {
                info!("✅ 폼 제출 성공");
                self.notify(NotificationKind::Success, SUCCESS_NOTICE.to_string());
                self.draft = DraftRecord::just_submitted();
                self.errors.clear();
                if let Err(e) = self.storage.remove_item(DRAFT_STORAGE_KEY) {
                    error!("❌ 제출된 초안 삭제 실패: {}", e);
                }
                SubmitOutcome::Accepted(response.data)
            }
            Ok(response) => {
                let message = if response.message.trim().is_empty() {
                    UNKNOWN_ERROR.to_string()
                } else {
                    response.message
                };
                warn!("서버가 제출을 거부했습니다: {}", message);
                self.notify(NotificationKind::Error, message.clone());
                SubmitOutcome::Rejected(message)
            }
            Err(e) => {
                let message = format!("{}: {}", TRANSPORT_PREFIX, e);
                error!("❌ {}", message);
                self.notify(NotificationKind::Error, message.clone());
                SubmitOutcome::Failed(message)
            }
        };

        self.loading = false;
        outcome
    }

    fn validate_all(&self) -> BTreeMap<String, String> {
        let draft = &self.draft;

        [
            (NAME_FIELD, draft.name.as_str()),
            (DEPARTMENT_FIELD, draft.department.as_str()),
            (MOBILE_FIELD, draft.mobile.as_str()),
            (CHECKED_FIELD, ""),
        ]
        .into_iter()
        .filter_map(|(field, value)| {
            validate_field(field, value, draft.checked).map(|msg| (field.to_string(), msg.to_string()))
        })
        .collect()
    }

    // 제출 직후 상태는 저장하지 않음
    fn persist_draft(&self) -> ClientResult<()> {
        if self.draft.submitted {
            return Ok(());
        }

        let serialized = serde_json::to_string(&self.draft)?;
        self.storage.set_item(DRAFT_STORAGE_KEY, &serialized)
    }

    fn notify(&mut self, kind: NotificationKind, message: String) {
        self.notifications.push(Notification { kind, message });
    }
}
