//! Core Module - 핵심 인터페이스
//!
//! - `traits.rs`: 호스트 인터페이스 (InstallationSource, BuildWorkspace)
//! - `path.rs`: 원격 경로 조합 (`build_remote_path`)

pub mod path;
pub mod traits;

pub use path::build_remote_path;
pub use traits::{BuildWorkspace, InstallationSource};
