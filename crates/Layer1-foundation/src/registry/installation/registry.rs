use super::ToolInstallation;
use crate::core::InstallationSource;
use parking_lot::RwLock;
use std::collections::HashSet;
use std::sync::Arc;

// ============================================================================
// Resolver (순수 함수)
// ============================================================================

/// 이름으로 설치 정보 조회
///
/// - `name` 이 `None` 이거나 빈 문자열이면 `None` (기본 설치를 임의로 고르지 않음)
/// - 순서대로 검색하여 이름이 정확히 일치하는 첫 항목 반환 (대소문자 구분, trim 없음)
/// - 찾지 못해도 에러가 아니라 `None`
pub fn resolve<'a>(
    name: Option<&str>,
    installations: &'a [ToolInstallation],
) -> Option<&'a ToolInstallation> {
    let name = name.filter(|n| !n.is_empty())?;
    let found = installations.iter().find(|i| i.name == name);
    match found {
        Some(_) => tracing::debug!("Resolved CMake installation '{}'", name),
        None => tracing::debug!(
            "CMake installation '{}' not among {} registered",
            name,
            installations.len()
        ),
    }
    found
}

/// 등록 순서대로 이름 목록 (선택 UI 용)
pub fn list_names(installations: &[ToolInstallation]) -> Vec<String> {
    installations.iter().map(|i| i.name.clone()).collect()
}

/// 첫 번째 중복 이름
pub(crate) fn first_duplicate(installations: &[ToolInstallation]) -> Option<&str> {
    let mut seen = HashSet::new();
    installations
        .iter()
        .map(|i| i.name.as_str())
        .find(|name| !seen.insert(*name))
}

// ============================================================================
// Installation Registry
// ============================================================================

/// CMake 설치 레지스트리
///
/// 불변 스냅샷(`Arc<[ToolInstallation]>`)을 통째로 교체한다.
/// 읽기 측은 `Arc` 복제 동안만 잠금을 잡고, 검색은 잠금 밖에서 수행한다.
/// 따라서 동시 조회는 항상 교체 전 또는 교체 후의 완전한 목록만 본다.
#[derive(Debug)]
pub struct InstallationRegistry {
    snapshot: RwLock<Arc<[ToolInstallation]>>,
}

impl InstallationRegistry {
    pub fn new() -> Self {
        Self::with_installations(Vec::new())
    }

    pub fn with_installations(installations: Vec<ToolInstallation>) -> Self {
        Self {
            snapshot: RwLock::new(installations.into()),
        }
    }

    /// 현재 스냅샷
    pub fn snapshot(&self) -> Arc<[ToolInstallation]> {
        self.snapshot.read().clone()
    }

    /// 전체 교체 (유일한 변경 연산)
    ///
    /// New slice is built before the lock is taken; the write lock covers only the swap.
    pub fn replace_all(&self, installations: Vec<ToolInstallation>) {
        if let Some(dup) = first_duplicate(&installations) {
            tracing::warn!(
                "Duplicate CMake installation name '{}'; first entry wins on lookup",
                dup
            );
        }
        let next: Arc<[ToolInstallation]> = installations.into();
        let count = next.len();
        *self.snapshot.write() = next;
        tracing::info!("Installation registry replaced ({} entries)", count);
    }

    /// 이름으로 조회 (스냅샷 1회 읽기)
    pub fn resolve(&self, name: Option<&str>) -> Option<ToolInstallation> {
        let snapshot = self.snapshot();
        resolve(name, &snapshot).cloned()
    }

    /// 이름 목록 (스냅샷 1회 읽기)
    pub fn list_names(&self) -> Vec<String> {
        list_names(&self.snapshot())
    }

    pub fn len(&self) -> usize {
        self.snapshot.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for InstallationRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl InstallationSource for InstallationRegistry {
    fn installations(&self) -> Arc<[ToolInstallation]> {
        self.snapshot()
    }
}
