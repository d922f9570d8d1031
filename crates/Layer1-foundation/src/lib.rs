//! # cmake-foundation
//!
//! Foundation layer for cmake-tools:
//! - Registry: CMake 설치 등록 + resolver (스냅샷 교체)
//! - Build Step: 빌드 스텝 설정 (installationName, workingDir, cmakeArgs)
//! - Core: 호스트 인터페이스 trait, 원격 경로 조합
//! - Storage: JsonStore (설정 파일)
//!
//! ## 아키텍처
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  Admin (CLI / 설정 저장)                                 │
//! │     InstallationsConfig ──replace_all──┐                │
//! │                                        ▼                │
//! │                          InstallationRegistry           │
//! │                          (Arc<[ToolInstallation]>)      │
//! │                                        │ snapshot       │
//! │                     ┌──────────────────┴───────┐        │
//! │                     ▼                          ▼        │
//! │            resolve / list_names     BuildStepConfig     │
//! │                                     ::prepare           │
//! └─────────────────────────────────────────────────────────┘
//! ```

pub mod build_step;
pub mod core;
pub mod error;
pub mod registry;
pub mod storage;
pub mod strings;

// ============================================================================
// Error
// ============================================================================
pub use error::{Error, Result};

// ============================================================================
// Core (호스트 인터페이스)
// ============================================================================
pub use self::core::{build_remote_path, BuildWorkspace, InstallationSource};

// ============================================================================
// Registry (레지스트리)
// ============================================================================
pub use registry::{
    list_names, resolve, InstallationRegistry, InstallationsConfig, ToolInstallation,
    INSTALLATIONS_FILE,
};

// ============================================================================
// Build Step (빌드 스텝 설정)
// ============================================================================
pub use build_step::{BuildStepConfig, PreparedStep};

// ============================================================================
// Storage (저장소)
// ============================================================================
pub use storage::JsonStore;

// ============================================================================
// Strings
// ============================================================================
pub use strings::fix_empty_and_trim;
