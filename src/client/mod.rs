//! 폼 컨트롤러 (클라이언트 측)
//!
//! 작성 중인 초안을 로컬 저장소에 유지하고, 필드별 오류 맵과 제출 상태를 관리합니다.
//! 화면 구성과는 분리되어 있어 어떤 프론트엔드에서도 같은 규칙으로 동작합니다.
//!
//! # Modules
//!
//! - [`validation`] - 필드 단위 검증 규칙
//! - [`draft`] - 초안 레코드
//! - [`storage`] - 초안을 보관하는 로컬 저장소
//! - [`api`] - 제출 엔드포인트 호출
//! - [`controller`] - 입력 이벤트와 제출 흐름을 조율하는 컨트롤러
//!
//! # Examples
//!
//! ```rust,ignore
//! use user_form_backend::client::{FieldInput, FileStorage, FormController, HttpSubmissionClient};
//!
//! let mut controller = FormController::initialize(
//!     FileStorage::new(".form_client"),
//!     HttpSubmissionClient::new("http://localhost:8000"),
//! );
//!
//! controller.on_field_change(FieldInput::text("name", "Ann"))?;
//! let outcome = controller.on_submit().await;
//! ```

pub mod api;
pub mod controller;
pub mod draft;
pub mod errors;
pub mod storage;
pub mod validation;

pub use api::{HttpSubmissionClient, SubmissionClient};
pub use controller::{FieldInput, FormController, Notification, NotificationKind, SubmitOutcome};
pub use draft::{DRAFT_STORAGE_KEY, DraftRecord};
pub use errors::{ClientError, ClientResult};
pub use storage::{DraftStorage, FileStorage, MemoryStorage};
pub use validation::validate_field;
