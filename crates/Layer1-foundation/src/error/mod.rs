//! Error types for cmake-tools
//!
//! 모든 에러를 중앙에서 관리
//!
//! Resolver 자체는 에러를 내지 않는다 (찾지 못하면 `None`).
//! 에러는 설정 검증, 저장소, 빌드 스텝 준비 단계에서만 발생한다.

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// cmake-tools 에러 타입
#[derive(Error, Debug)]
pub enum Error {
    // ========================================================================
    // 설정 관련
    // ========================================================================
    #[error("Configuration error: {0}")]
    Config(String),

    // ========================================================================
    // Installation 관련
    // ========================================================================
    #[error("CMake installation not found: {name}")]
    InstallationNotFound { name: String },

    #[error("No CMake installation selected for this build step")]
    NoInstallationSelected,

    #[error("Duplicate CMake installation name: {0}")]
    DuplicateInstallation(String),

    // ========================================================================
    // 입력 검증
    // ========================================================================
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Validation error: {0}")]
    Validation(String),

    // ========================================================================
    // 외부 에러 변환
    // ========================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// 사용자에게 보여줄 수 있는 에러인지 확인
    ///
    /// 사용자 입력/설정 문제는 메시지만, 나머지는 원인 체인까지 출력한다.
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            Error::InstallationNotFound { .. }
                | Error::NoInstallationSelected
                | Error::DuplicateInstallation(_)
                | Error::InvalidInput(_)
                | Error::Validation(_)
        )
    }

    /// Installation 미발견 에러 생성 헬퍼
    pub fn installation_not_found(name: impl Into<String>) -> Self {
        Error::InstallationNotFound { name: name.into() }
    }
}
