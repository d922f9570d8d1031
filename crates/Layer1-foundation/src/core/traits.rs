//! Core Traits - 호스트 인터페이스 정의
//!
//! 빌드 스텝이 호스트 환경으로부터 받아야 하는 것들을 trait 으로 정의합니다.
//! 전역 레지스트리 대신 명시적으로 주입합니다.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Host (CLI, CI server, tests)                               │
//! │  ├── InstallationSource 구현 (설치 스냅샷 제공)               │
//! │  └── BuildWorkspace 구현 (빌드 작업 루트 제공)                 │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Layer1-Foundation (이 레이어)                              │
//! │  ├── BuildStepConfig::prepare                               │
//! │  └── resolve / list_names / build_remote_path              │
//! └─────────────────────────────────────────────────────────────┘
//! ```

use crate::registry::ToolInstallation;
use std::path::{Path, PathBuf};
use std::sync::Arc;

// ============================================================================
// InstallationSource - 등록된 설치 목록
// ============================================================================

/// 현재 등록된 CMake 설치 스냅샷 제공자
pub trait InstallationSource {
    /// 등록 순서를 유지한 완전한 스냅샷
    fn installations(&self) -> Arc<[ToolInstallation]>;
}

impl InstallationSource for Arc<[ToolInstallation]> {
    fn installations(&self) -> Arc<[ToolInstallation]> {
        Arc::clone(self)
    }
}

impl InstallationSource for Vec<ToolInstallation> {
    fn installations(&self) -> Arc<[ToolInstallation]> {
        self.as_slice().into()
    }
}

// ============================================================================
// BuildWorkspace - 빌드 작업 디렉토리
// ============================================================================

/// 현재 빌드의 작업 루트 (원격 호스트 경로일 수 있음)
pub trait BuildWorkspace {
    fn workspace_root(&self) -> PathBuf;
}

impl BuildWorkspace for Path {
    fn workspace_root(&self) -> PathBuf {
        self.to_path_buf()
    }
}

impl BuildWorkspace for PathBuf {
    fn workspace_root(&self) -> PathBuf {
        self.clone()
    }
}
