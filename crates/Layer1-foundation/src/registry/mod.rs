//! Registry - 도구 설치 등록/관리
//!
//! - `installation/` - CMake 설치 등록 (자체 load/save)

pub mod installation;

// Installation
pub use installation::{
    list_names, resolve, InstallationRegistry, InstallationsConfig, ToolInstallation,
    INSTALLATIONS_FILE,
};
