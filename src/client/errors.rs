//! 폼 클라이언트 에러 타입

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    /// 로컬 저장소 읽기/쓰기 실패
    #[error("Storage error: {0}")]
    StorageError(String),

    /// 초안 직렬화 실패
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// 제출 엔드포인트에 도달하지 못했거나 응답을 해석할 수 없음
    #[error("{0}")]
    TransportError(String),
}

impl From<std::io::Error> for ClientError {
    fn from(err: std::io::Error) -> Self {
        ClientError::StorageError(err.to_string())
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::SerializationError(err.to_string())
    }
}

pub type ClientResult<T> = Result<T, ClientError>;
