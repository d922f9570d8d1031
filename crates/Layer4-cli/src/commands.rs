//! cmake-tools subcommands
//!
//! 각 명령은 저장소에서 설치 목록을 읽고 결과를 `out` 에 쓴다.
//! 설치 이름은 `add` 와 동일하게 모든 명령에서 trim 한다.

use anyhow::Context;
use cmake_foundation::{
    BuildStepConfig, Error, InstallationRegistry, InstallationsConfig, JsonStore,
    ToolInstallation, INSTALLATIONS_FILE,
};
use std::io::Write;
use std::path::Path;

/// 설치 목록 저장소
///
/// 쓰기는 항상 `json` 에, 읽기는 `json` 위에 `overlay` (프로젝트 설정) 를 병합.
pub struct Store {
    json: JsonStore,
    overlay: Option<JsonStore>,
}

impl Store {
    /// `--config-dir` 로 지정된 단일 디렉토리
    pub fn at(json: JsonStore) -> Self {
        Self {
            json,
            overlay: None,
        }
    }

    /// 글로벌 저장소 + 현재 프로젝트 설정
    pub fn global() -> anyhow::Result<Self> {
        Ok(Self::layered(
            JsonStore::global()?,
            JsonStore::current_project()?,
        ))
    }

    pub fn layered(json: JsonStore, overlay: JsonStore) -> Self {
        Self {
            json,
            overlay: Some(overlay),
        }
    }

    pub fn base_dir(&self) -> &Path {
        self.json.base_dir()
    }

    fn read(&self) -> anyhow::Result<InstallationsConfig> {
        let stores: Vec<JsonStore> = std::iter::once(&self.json)
            .chain(self.overlay.as_ref())
            .cloned()
            .collect();
        InstallationsConfig::load_layered(&stores)
            .with_context(|| format!("loading installations from {}", self.base_dir().display()))
    }

    fn read_own(&self) -> anyhow::Result<InstallationsConfig> {
        Ok(InstallationsConfig::load_from(&self.json)?)
    }

    /// 이름이 프로젝트 설정에 있으면 그 파일 경로
    fn overlay_file_with(&self, name: &str) -> anyhow::Result<Option<std::path::PathBuf>> {
        let Some(overlay) = &self.overlay else {
            return Ok(None);
        };
        let config = InstallationsConfig::load_from(overlay)?;
        Ok(config
            .get(name)
            .map(|_| overlay.file_path(INSTALLATIONS_FILE)))
    }

    fn write(&self, config: &InstallationsConfig) -> anyhow::Result<()> {
        Ok(config.save_to(&self.json)?)
    }
}

fn load_registry(store: &Store) -> anyhow::Result<InstallationRegistry> {
    Ok(store.read()?.into_registry())
}

/// 이름 목록 출력
pub fn list(store: &Store, out: &mut impl Write) -> anyhow::Result<()> {
    let registry = load_registry(store)?;
    if registry.is_empty() {
        tracing::info!("No CMake installations registered");
        return Ok(());
    }
    for name in registry.list_names() {
        writeln!(out, "{}", name)?;
    }
    Ok(())
}

/// 설치 하나를 JSON 으로 출력
pub fn show(store: &Store, name: &str, out: &mut impl Write) -> anyhow::Result<()> {
    let name = name.trim();
    let registry = load_registry(store)?;
    let installation = registry
        .resolve(Some(name))
        .ok_or_else(|| Error::installation_not_found(name))?;
    writeln!(out, "{}", serde_json::to_string_pretty(&installation)?)?;
    Ok(())
}

/// 설치 등록
pub fn add(store: &Store, name: &str, home: &str, out: &mut impl Write) -> anyhow::Result<()> {
    let name = name.trim();
    let mut config = store.read_own()?;
    config.add(ToolInstallation::new(name).home(home.trim()))?;
    store.write(&config)?;
    writeln!(out, "✓ Added CMake installation '{}'", name)?;
    Ok(())
}

/// 설치 제거 (쓰기 대상 저장소에서만)
pub fn remove(store: &Store, name: &str, out: &mut impl Write) -> anyhow::Result<()> {
    let name = name.trim();
    let mut config = store.read_own()?;
    if config.remove(name).is_none() {
        if let Some(path) = store.overlay_file_with(name)? {
            return Err(Error::InvalidInput(format!(
                "CMake installation '{}' is defined in the project store {}; edit that file to remove it",
                name,
                path.display()
            ))
            .into());
        }
        return Err(Error::installation_not_found(name).into());
    }
    store.write(&config)?;
    writeln!(out, "✓ Removed CMake installation '{}'", name)?;
    Ok(())
}

/// `step` 인자
pub struct StepArgs<'a> {
    pub installation: Option<&'a str>,
    pub working_dir: Option<&'a str>,
    pub cmake_args: Option<&'a str>,
    pub workspace: &'a Path,
}

/// 빌드 스텝 dry-run - 실행할 내용을 JSON 으로 출력
pub fn step(store: &Store, args: StepArgs<'_>, out: &mut impl Write) -> anyhow::Result<()> {
    let registry = load_registry(store)?;
    let step = BuildStepConfig::new(args.installation)
        .with_working_dir(args.working_dir)
        .with_cmake_args(args.cmake_args);

    let prepared = step.prepare(&registry, args.workspace)?;
    writeln!(out, "{}", serde_json::to_string_pretty(&prepared)?)?;
    Ok(())
}

// ============================================================================
// Error reporting
// ============================================================================

/// 사용자 에러 종료 코드
pub const EXIT_USER_ERROR: u8 = 2;
/// 그 외 실패 종료 코드
pub const EXIT_FAILURE: u8 = 1;

/// 에러 출력 메시지와 종료 코드
///
/// 사용자 입력/설정 문제는 메시지만, 나머지는 원인 체인까지.
pub fn describe_error(err: &anyhow::Error) -> (String, u8) {
    match err.downcast_ref::<Error>() {
        Some(e) if e.is_user_facing() => (e.to_string(), EXIT_USER_ERROR),
        _ => (format!("{:#}", err), EXIT_FAILURE),
    }
}
