//! Build Step - CMake 빌드 스텝 설정
//!
//! 호스트의 작업(job) 정의에 저장되는 필드:
//!
//! ```json
//! {
//!   "installationName": "CMake 3.28",
//!   "workingDir": "build",
//!   "cmakeArgs": "-G Ninja -DCMAKE_BUILD_TYPE=Release"
//! }
//! ```
//!
//! 모든 필드는 저장/로드/설정 시 trim 되고, 빈 값은 `None` 이 된다.
//! `None` 필드는 직렬화에서 생략되므로 다시 로드해도 `None` 이다.

use crate::core::{build_remote_path, BuildWorkspace, InstallationSource};
use crate::registry::{resolve, ToolInstallation};
use crate::strings::{deserialize_trimmed, fix_empty_and_trim};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

// ============================================================================
// BuildStepConfig
// ============================================================================

/// CMake 빌드 스텝 설정
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildStepConfig {
    /// 사용할 CMake 설치 이름
    #[serde(
        default,
        deserialize_with = "deserialize_trimmed",
        skip_serializing_if = "Option::is_none"
    )]
    installation_name: Option<String>,

    /// 작업 디렉토리 (None 이면 workspace 루트)
    #[serde(
        default,
        deserialize_with = "deserialize_trimmed",
        skip_serializing_if = "Option::is_none"
    )]
    working_dir: Option<String>,

    /// cmake 에 그대로 전달할 인자
    #[serde(
        default,
        deserialize_with = "deserialize_trimmed",
        skip_serializing_if = "Option::is_none"
    )]
    cmake_args: Option<String>,
}

impl BuildStepConfig {
    pub fn new(installation_name: Option<&str>) -> Self {
        Self {
            installation_name: fix_empty_and_trim(installation_name),
            working_dir: None,
            cmake_args: None,
        }
    }

    // Builder methods
    pub fn with_working_dir(mut self, dir: Option<&str>) -> Self {
        self.set_working_dir(dir);
        self
    }

    pub fn with_cmake_args(mut self, args: Option<&str>) -> Self {
        self.set_cmake_args(args);
        self
    }

    // Setters
    pub fn set_working_dir(&mut self, dir: Option<&str>) {
        self.working_dir = fix_empty_and_trim(dir);
    }

    pub fn set_cmake_args(&mut self, args: Option<&str>) {
        self.cmake_args = fix_empty_and_trim(args);
    }

    // Getters
    pub fn installation_name(&self) -> Option<&str> {
        self.installation_name.as_deref()
    }

    pub fn working_dir(&self) -> Option<&str> {
        self.working_dir.as_deref()
    }

    pub fn cmake_args(&self) -> Option<&str> {
        self.cmake_args.as_deref()
    }

    // ========================================================================
    // Resolution
    // ========================================================================

    /// 이 스텝이 선택한 설치 (없으면 None)
    pub fn selected_installation<'a>(
        &self,
        installations: &'a [ToolInstallation],
    ) -> Option<&'a ToolInstallation> {
        resolve(self.installation_name(), installations)
    }

    /// cmake 실행 디렉토리
    pub fn working_directory(&self, workspace_root: &Path) -> PathBuf {
        build_remote_path(workspace_root, self.working_dir())
    }

    /// 인자 토큰화 (쉘 규칙, 해석은 하지 않음)
    pub fn arguments(&self) -> Result<Vec<String>> {
        match self.cmake_args() {
            None => Ok(Vec::new()),
            Some(args) => shlex::split(args).ok_or_else(|| {
                Error::InvalidInput(format!("Unbalanced quoting in cmake arguments: {}", args))
            }),
        }
    }

    /// 실행 직전 준비 - 설치, 디렉토리, 인자를 확정
    ///
    /// 설치를 찾지 못하면 요청한 이름을 담은 에러를 반환한다.
    pub fn prepare<S, W>(&self, source: &S, workspace: &W) -> Result<PreparedStep>
    where
        S: InstallationSource + ?Sized,
        W: BuildWorkspace + ?Sized,
    {
        let name = self
            .installation_name()
            .ok_or(Error::NoInstallationSelected)?;
        let snapshot = source.installations();
        let installation = self
            .selected_installation(&snapshot)
            .cloned()
            .ok_or_else(|| Error::installation_not_found(name))?;

        let working_dir = self.working_directory(&workspace.workspace_root());
        let args = self.arguments()?;

        tracing::debug!(
            "Prepared build step: {} in {} ({} args)",
            installation.name,
            working_dir.display(),
            args.len()
        );

        Ok(PreparedStep {
            executable: installation.executable().to_string(),
            installation,
            working_dir,
            args,
        })
    }
}

// ============================================================================
// PreparedStep
// ============================================================================

/// 실행 준비가 끝난 빌드 스텝 (실행은 외부 담당)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreparedStep {
    pub installation: ToolInstallation,
    pub executable: String,
    pub working_dir: PathBuf,
    pub args: Vec<String>,
}
