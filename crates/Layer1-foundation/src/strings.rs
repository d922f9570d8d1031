//! String Utilities
//!
//! Normalization helpers and shared string constants for cmake-tools:
//! - `fix_empty_and_trim` for user-entered build step fields
//! - serde helper applying the same normalization on load
//! - Static constants for file names, env vars and defaults
//!
//! # Usage
//!
//! ```
//! use cmake_foundation::strings::fix_empty_and_trim;
//!
//! assert_eq!(fix_empty_and_trim(Some("  ")), None);
//! assert_eq!(fix_empty_and_trim(Some(" /opt/build ")), Some("/opt/build".to_string()));
//! ```

use serde::{Deserialize, Deserializer};

// ============================================================================
// Constants
// ============================================================================

/// 설치 경로가 비어 있을 때 사용하는 실행 파일 (PATH 에서 검색)
pub const DEFAULT_CMAKE_EXECUTABLE: &str = "cmake";

/// 설정 디렉토리 이름 (글로벌)
pub const CONFIG_DIR_NAME: &str = "cmake-tools";

/// 설정 디렉토리 이름 (프로젝트)
pub const PROJECT_DIR_NAME: &str = ".cmake-tools";

/// 글로벌 설정 디렉토리 override
pub const ENV_CMAKE_TOOLS_HOME: &str = "CMAKE_TOOLS_HOME";

// ============================================================================
// Normalization
// ============================================================================

/// 공백 제거 후 비어 있으면 `None`
///
/// Idempotent: normalizing an already normalized value yields the same value.
pub fn fix_empty_and_trim(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// `#[serde(deserialize_with = ...)]` 용 - 로드 시 동일한 정규화 적용
///
/// Combine with `#[serde(default)]` so a missing field also loads as `None`.
pub fn deserialize_trimmed<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(fix_empty_and_trim(raw.as_deref()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_is_absent() {
        assert_eq!(fix_empty_and_trim(None), None);
        assert_eq!(fix_empty_and_trim(Some("")), None);
        assert_eq!(fix_empty_and_trim(Some("  ")), None);
        assert_eq!(fix_empty_and_trim(Some("\t\n ")), None);
    }

    #[test]
    fn test_trims_surrounding_whitespace() {
        assert_eq!(
            fix_empty_and_trim(Some(" /opt/build ")),
            Some("/opt/build".to_string())
        );
        // 내부 공백은 유지
        assert_eq!(
            fix_empty_and_trim(Some("  CMake 3.28 ")),
            Some("CMake 3.28".to_string())
        );
    }

    #[test]
    fn test_idempotent() {
        for input in ["", "   ", " a ", "a b", "-DFOO=1 -G Ninja "] {
            let once = fix_empty_and_trim(Some(input));
            let twice = fix_empty_and_trim(once.as_deref());
            assert_eq!(once, twice, "input: {:?}", input);
        }
    }

    #[test]
    fn test_deserialize_trimmed() {
        #[derive(Deserialize)]
        struct Field {
            #[serde(default, deserialize_with = "deserialize_trimmed")]
            value: Option<String>,
        }

        let p: Field = serde_json::from_str(r#"{"value": "  x  "}"#).unwrap();
        assert_eq!(p.value.as_deref(), Some("x"));

        let p: Field = serde_json::from_str(r#"{"value": "   "}"#).unwrap();
        assert_eq!(p.value, None);

        let p: Field = serde_json::from_str(r#"{"value": null}"#).unwrap();
        assert_eq!(p.value, None);

        let p: Field = serde_json::from_str("{}").unwrap();
        assert_eq!(p.value, None);
    }
}
