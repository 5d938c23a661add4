//! 초안 로컬 저장소
//!
//! 문자열 키와 문자열 값을 보관하는 단순한 키-값 저장소입니다.
//! [`FileStorage`]는 키마다 파일 하나를 쓰고, [`MemoryStorage`]는 프로세스 메모리에만 둡니다.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::client::errors::{ClientError, ClientResult};

/// 로컬 저장소 추상화
pub trait DraftStorage {
    fn get_item(&self, key: &str) -> ClientResult<Option<String>>;

    fn set_item(&self, key: &str, value: &str) -> ClientResult<()>;

    /// 없는 키를 지워도 오류가 아닙니다.
    fn remove_item(&self, key: &str) -> ClientResult<()>;
}

/// 디렉터리 아래에 `<key>.json` 파일로 값을 저장합니다.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl DraftStorage for FileStorage {
    fn get_item(&self, key: &str) -> ClientResult<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(ClientError::StorageError(format!("{}: {}", key, e))),
        }
    }

    fn set_item(&self, key: &str, value: &str) -> ClientResult<()> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.path_for(key), value)?;
        Ok(())
    }

    fn remove_item(&self, key: &str) -> ClientResult<()> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// 메모리 저장소 (테스트 및 저장이 필요 없는 실행용)
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    fn lock(&self) -> ClientResult<std::sync::MutexGuard<'_, HashMap<String, String>>> {
        self.items
            .lock()
            .map_err(|e| ClientError::StorageError(e.to_string()))
    }
}

impl DraftStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> ClientResult<Option<String>> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> ClientResult<()> {
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> ClientResult<()> {
        self.lock()?.remove(key);
        Ok(())
    }
}
