//! Installation Registry - CMake 설치 등록/조회
//!
//! - `tool.rs` - 개별 설치 정보 (`ToolInstallation`)
//! - `registry.rs` - 스냅샷 레지스트리 + resolver (`resolve`, `list_names`)
//! - `config.rs` - 관리자 설정 파일 (`installations.json`)

mod config;
mod registry;
mod tool;

pub use config::{InstallationsConfig, INSTALLATIONS_FILE};
pub use registry::{list_names, resolve, InstallationRegistry};
pub use tool::ToolInstallation;
