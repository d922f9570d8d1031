use super::registry::first_duplicate;
use super::{InstallationRegistry, ToolInstallation};
use crate::storage::JsonStore;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// 설정 파일명
pub const INSTALLATIONS_FILE: &str = "installations.json";

/// CMake 설치 목록 설정 (관리자 저장 상태)
///
/// JSON 형식:
/// ```json
/// {
///   "installations": [
///     { "name": "CMake 3.20", "home": "/opt/cmake-3.20/bin/cmake" },
///     { "name": "CMake 3.28" }
///   ]
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstallationsConfig {
    /// 등록 순서 유지
    #[serde(default)]
    pub installations: Vec<ToolInstallation>,
}

impl InstallationsConfig {
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Load / Save
    // ========================================================================

    /// 글로벌 + 프로젝트 병합 로드
    pub fn load() -> Result<Self> {
        let mut stores = Vec::with_capacity(2);
        // 1. 글로벌 설정
        if let Ok(global) = JsonStore::global() {
            stores.push(global);
        }
        // 2. 프로젝트 설정
        if let Ok(project) = JsonStore::current_project() {
            stores.push(project);
        }
        Self::load_layered(&stores)
    }

    /// 여러 저장소를 순서대로 병합 (뒤의 저장소가 우선)
    ///
    /// 각 파일은 병합 전에 `validate` 를 통과해야 한다.
    pub fn load_layered(stores: &[JsonStore]) -> Result<Self> {
        let mut config = Self::new();
        for store in stores {
            let layer = Self::load_from(store)?;
            layer.validate().map_err(|e| {
                Error::Config(format!(
                    "{}: {}",
                    store.file_path(INSTALLATIONS_FILE).display(),
                    e
                ))
            })?;
            config.merge(layer);
        }
        Ok(config)
    }

    /// 지정 저장소에서 로드 (파일이 없으면 빈 설정)
    pub fn load_from(store: &JsonStore) -> Result<Self> {
        Ok(store
            .load_optional::<Self>(INSTALLATIONS_FILE)?
            .unwrap_or_default())
    }

    /// 지정 저장소에 저장 (검증 후)
    pub fn save_to(&self, store: &JsonStore) -> Result<()> {
        self.validate()?;
        store.save(INSTALLATIONS_FILE, self)?;
        tracing::info!(
            "Saved {} CMake installation(s) to {}",
            self.installations.len(),
            store.file_path(INSTALLATIONS_FILE).display()
        );
        Ok(())
    }

    // ========================================================================
    // CRUD
    // ========================================================================

    /// 설치 추가 (이름 중복 불가)
    pub fn add(&mut self, installation: ToolInstallation) -> Result<()> {
        if self.get(&installation.name).is_some() {
            return Err(Error::DuplicateInstallation(installation.name));
        }
        self.installations.push(installation);
        Ok(())
    }

    /// 설치 조회
    pub fn get(&self, name: &str) -> Option<&ToolInstallation> {
        self.installations.iter().find(|i| i.name == name)
    }

    /// 설치 제거
    pub fn remove(&mut self, name: &str) -> Option<ToolInstallation> {
        let idx = self.installations.iter().position(|i| i.name == name)?;
        Some(self.installations.remove(idx))
    }

    /// 이름 목록 (등록 순서)
    pub fn names(&self) -> Vec<&str> {
        self.installations.iter().map(|i| i.name.as_str()).collect()
    }

    // ========================================================================
    // Validation
    // ========================================================================

    /// 유효성 검증 - 빈 이름 및 중복 이름 거부
    pub fn validate(&self) -> Result<()> {
        if let Some(pos) = self
            .installations
            .iter()
            .position(|i| i.name.trim().is_empty())
        {
            return Err(Error::Validation(format!(
                "installation #{} has an empty name",
                pos + 1
            )));
        }
        if let Some(dup) = first_duplicate(&self.installations) {
            return Err(Error::DuplicateInstallation(dup.to_string()));
        }
        Ok(())
    }

    // ========================================================================
    // Merge / Publish
    // ========================================================================

    /// 다른 설정과 병합 (같은 이름은 other 가 우선, 새 이름은 뒤에 추가)
    ///
    /// Only entries that existed before the merge are replaced; entries within
    /// `other` are never collapsed, so its own order is kept.
    pub fn merge(&mut self, other: InstallationsConfig) {
        let base = self.installations.len();
        for inst in other.installations {
            match self.installations[..base]
                .iter_mut()
                .find(|i| i.name == inst.name)
            {
                Some(existing) => *existing = inst,
                None => self.installations.push(inst),
            }
        }
    }

    /// 레지스트리에 게시 (전체 교체)
    pub fn publish(&self, registry: &InstallationRegistry) {
        registry.replace_all(self.installations.clone());
    }

    pub fn into_registry(self) -> InstallationRegistry {
        InstallationRegistry::with_installations(self.installations)
    }
}
