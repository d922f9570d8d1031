use crate::strings::DEFAULT_CMAKE_EXECUTABLE;
use serde::{Deserialize, Serialize};

/// 개별 CMake 설치 정보
///
/// JSON 형식:
/// ```json
/// { "name": "CMake 3.28", "home": "/opt/cmake-3.28/bin/cmake" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolInstallation {
    /// 설치 이름 (레지스트리 내 고유 식별자)
    pub name: String,

    /// cmake 실행 파일 경로 (비어 있으면 PATH 의 `cmake`)
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub home: String,
}

impl ToolInstallation {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            home: String::new(),
        }
    }

    pub fn home(mut self, home: impl Into<String>) -> Self {
        self.home = home.into();
        self
    }

    /// 실제 사용할 실행 파일 (경로 조합만, 존재 여부는 확인하지 않음)
    pub fn executable(&self) -> &str {
        match self.home.trim() {
            "" => DEFAULT_CMAKE_EXECUTABLE,
            home => home,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_executable_defaults_to_path_lookup() {
        let inst = ToolInstallation::new("system");
        assert_eq!(inst.executable(), "cmake");

        let inst = ToolInstallation::new("blank").home("   ");
        assert_eq!(inst.executable(), "cmake");
    }

    #[test]
    fn test_executable_uses_home() {
        let inst = ToolInstallation::new("CMake 3.28").home(" /opt/cmake/bin/cmake ");
        assert_eq!(inst.executable(), "/opt/cmake/bin/cmake");
    }

    #[test]
    fn test_serde_omits_empty_home() {
        let json = serde_json::to_string(&ToolInstallation::new("a")).unwrap();
        assert_eq!(json, r#"{"name":"a"}"#);

        let inst: ToolInstallation = serde_json::from_str(json.as_str()).unwrap();
        assert_eq!(inst, ToolInstallation::new("a"));
    }
}
