//! JSON 파일 저장소
//!
//! 설정 파일은 통째로 교체된다: 임시 파일에 쓴 뒤 rename 하므로
//! 읽는 쪽은 이전 파일 또는 새 파일만 본다.

use crate::strings::{CONFIG_DIR_NAME, ENV_CMAKE_TOOLS_HOME, PROJECT_DIR_NAME};
use crate::{Error, Result};
use serde::{de::DeserializeOwned, Serialize};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// JSON 설정 저장소 (디렉토리 단위)
#[derive(Debug, Clone)]
pub struct JsonStore {
    base_dir: PathBuf,
}

impl JsonStore {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// 글로벌 설정 ($CMAKE_TOOLS_HOME 또는 ~/.config/cmake-tools/)
    pub fn global() -> Result<Self> {
        global_dir(std::env::var_os(ENV_CMAKE_TOOLS_HOME)).map(Self::new)
    }

    /// 프로젝트 설정 (<root>/.cmake-tools/)
    pub fn project(root: impl AsRef<Path>) -> Self {
        Self::new(root.as_ref().join(PROJECT_DIR_NAME))
    }

    /// 현재 디렉토리 프로젝트 설정
    pub fn current_project() -> Result<Self> {
        Ok(Self::project(std::env::current_dir()?))
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn file_path(&self, filename: &str) -> PathBuf {
        self.base_dir.join(filename)
    }

    /// JSON 로드
    pub fn load<T: DeserializeOwned>(&self, filename: &str) -> Result<T> {
        let path = self.file_path(filename);
        tracing::debug!("Loading {}", path.display());
        let content = std::fs::read_to_string(&path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// JSON 로드 (파일이 없으면 None)
    pub fn load_optional<T: DeserializeOwned>(&self, filename: &str) -> Result<Option<T>> {
        match self.load(filename) {
            Ok(value) => Ok(Some(value)),
            Err(Error::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// JSON 저장 (임시 파일 + rename)
    pub fn save<T: Serialize>(&self, filename: &str, data: &T) -> Result<()> {
        std::fs::create_dir_all(&self.base_dir)?;
        let path = self.file_path(filename);
        let tmp = self.file_path(&format!(".{}.tmp", filename));

        std::fs::write(&tmp, serde_json::to_vec_pretty(data)?)?;
        if let Err(e) = std::fs::rename(&tmp, &path) {
            let _ = std::fs::remove_file(&tmp);
            return Err(e.into());
        }
        Ok(())
    }
}

/// 글로벌 디렉토리 결정 (override 가 비어 있으면 무시)
fn global_dir(override_dir: Option<OsString>) -> Result<PathBuf> {
    if let Some(dir) = override_dir.filter(|d| !d.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    dirs::config_dir()
        .map(|dir| dir.join(CONFIG_DIR_NAME))
        .ok_or_else(|| Error::Config("Cannot find config directory".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use tempfile::tempdir;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Sample {
        name: String,
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let store = JsonStore::new(dir.path().join("nested"));

        store
            .save("sample.json", &Sample { name: "a".into() })
            .unwrap();
        assert!(store.file_path("sample.json").exists());
        // 임시 파일은 남지 않음
        assert!(!store.file_path(".sample.json.tmp").exists());

        let loaded: Sample = store.load("sample.json").unwrap();
        assert_eq!(loaded.name, "a");

        store
            .save("sample.json", &Sample { name: "b".into() })
            .unwrap();
        let loaded: Sample = store.load("sample.json").unwrap();
        assert_eq!(loaded.name, "b");
    }

    #[test]
    fn test_missing_file() {
        let dir = tempdir().unwrap();
        let store = JsonStore::new(dir.path());

        let missing: Option<Sample> = store.load_optional("nope.json").unwrap();
        assert!(missing.is_none());

        assert!(matches!(store.load::<Sample>("nope.json"), Err(Error::Io(_))));
    }

    #[test]
    fn test_corrupt_file_is_json_error() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("bad.json"), "{ nope").unwrap();
        let store = JsonStore::new(dir.path());

        assert!(matches!(
            store.load_optional::<Sample>("bad.json"),
            Err(Error::Json(_))
        ));
    }

    #[test]
    fn test_project_dir() {
        let store = JsonStore::project("/work/repo");
        assert_eq!(store.base_dir(), Path::new("/work/repo/.cmake-tools"));
    }

    #[test]
    fn test_global_dir_override() {
        assert_eq!(
            global_dir(Some(OsString::from("/srv/cmake-tools"))).unwrap(),
            PathBuf::from("/srv/cmake-tools")
        );
        // 빈 override 는 무시
        if let Some(config) = dirs::config_dir() {
            assert_eq!(
                global_dir(Some(OsString::new())).unwrap(),
                config.join(CONFIG_DIR_NAME)
            );
            assert_eq!(global_dir(None).unwrap(), config.join(CONFIG_DIR_NAME));
        }
    }
}
