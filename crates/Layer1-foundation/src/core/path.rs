//! Remote path composition
//!
//! 경로 이름만 조합한다. 존재 확인이나 I/O 는 하지 않는다
//! (원격 실행 호스트의 경로일 수 있음).

use std::path::{Path, PathBuf};

/// 작업 디렉토리 아래 경로 생성
///
/// - `relative` 가 `None` 이면 `base` 그대로
/// - 그 외에는 플랫폼 규칙으로 결합 (절대 경로면 `base` 를 대체)
pub fn build_remote_path(base: &Path, relative: Option<&str>) -> PathBuf {
    match relative {
        None => base.to_path_buf(),
        Some(rel) => base.join(rel),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_returns_base() {
        let ws = Path::new("/var/ci/workspace/job");
        assert_eq!(build_remote_path(ws, None), ws);
    }

    #[test]
    fn test_joins_relative() {
        let ws = Path::new("/var/ci/workspace/job");
        assert_eq!(build_remote_path(ws, Some("build")), ws.join("build"));
        assert_eq!(
            build_remote_path(ws, Some("out/release")),
            PathBuf::from("/var/ci/workspace/job/out/release")
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_absolute_replaces_base() {
        let ws = Path::new("/var/ci/workspace/job");
        assert_eq!(
            build_remote_path(ws, Some("/opt/build")),
            PathBuf::from("/opt/build")
        );
    }

    #[test]
    fn test_no_io() {
        // 존재하지 않는 경로도 그대로 조합
        let ws = Path::new("/definitely/not/here");
        assert_eq!(
            build_remote_path(ws, Some("build")),
            PathBuf::from("/definitely/not/here/build")
        );
    }
}
