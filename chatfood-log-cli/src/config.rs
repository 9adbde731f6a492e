//! 설정 관리 -- chatfood-log.toml 파싱 및 환경변수 오버라이드
//!
//! # 설정 로딩 우선순위
//! 1. CLI 인자 (최고 우선)
//! 2. 환경변수 (`CHATFOOD_ANALYZER_SLOW_THRESHOLD_MS=500` 형식)
//! 3. 설정 파일 (`chatfood-log.toml`)
//! 4. 기본값 (`Default` 구현)
//!
//! 설정 파일을 명시하지 않았고 기본 경로에도 파일이 없으면 기본값을 사용합니다.
//!
//! ```toml
//! [general]
//! log_level = "info"
//! log_format = "json"
//!
//! [analyzer]
//! slow_threshold_ms = 1000
//! top_error_patterns = 5
//! hourly_bar_unit = 10
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use chatfood_log_analyzer::AnalyzerConfig;

use crate::error::CliError;

/// 명시적 경로가 없을 때 찾는 기본 설정 파일
pub const DEFAULT_CONFIG_PATH: &str = "chatfood-log.toml";

/// CLI 통합 설정
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// 일반 설정
    #[serde(default)]
    pub general: GeneralConfig,
    /// 분석기 설정
    #[serde(default)]
    pub analyzer: AnalyzerConfig,
}

/// 일반 설정
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// 로그 레벨 (trace, debug, info, warn, error)
    pub log_level: String,
    /// 로그 형식 (json, pretty)
    pub log_format: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_owned(),
            log_format: "pretty".to_owned(),
        }
    }
}

impl AppConfig {
    /// 설정을 로드하고 환경변수 오버라이드와 검증을 적용합니다.
    ///
    /// `path`가 `None`이면 [`DEFAULT_CONFIG_PATH`]가 있을 때만 읽습니다.
    pub async fn load(path: Option<&Path>) -> Result<Self, CliError> {
        let mut config = match path {
            Some(path) => Self::from_file(path).await?,
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_PATH);
                if tokio::fs::try_exists(default_path).await.unwrap_or(false) {
                    Self::from_file(default_path).await?
                } else {
                    Self::default()
                }
            }
        };
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// TOML 파일에서 설정을 로드합니다 (환경변수 오버라이드 없음).
    pub async fn from_file(path: impl AsRef<Path>) -> Result<Self, CliError> {
        let path = path.as_ref();
        let content = tokio::fs::read_to_string(path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                CliError::Config(format!("config file not found: {}", path.display()))
            } else {
                CliError::Config(format!("failed to read {}: {}", path.display(), e))
            }
        })?;
        Self::parse(&content)
    }

    /// TOML 문자열에서 설정을 파싱합니다.
    pub fn parse(toml_str: &str) -> Result<Self, CliError> {
        toml::from_str(toml_str)
            .map_err(|e| CliError::Config(format!("failed to parse config: {e}")))
    }

    /// 환경변수로 설정값을 오버라이드합니다.
    ///
    /// 환경변수 네이밍 규칙: `CHATFOOD_{SECTION}_{FIELD}`
    pub fn apply_env_overrides(&mut self) {
        override_string(&mut self.general.log_level, "CHATFOOD_GENERAL_LOG_LEVEL");
        override_string(&mut self.general.log_format, "CHATFOOD_GENERAL_LOG_FORMAT");

        override_parsed(
            &mut self.analyzer.slow_threshold_ms,
            "CHATFOOD_ANALYZER_SLOW_THRESHOLD_MS",
        );
        override_parsed(
            &mut self.analyzer.top_error_patterns,
            "CHATFOOD_ANALYZER_TOP_ERROR_PATTERNS",
        );
        override_parsed(
            &mut self.analyzer.hourly_bar_unit,
            "CHATFOOD_ANALYZER_HOURLY_BAR_UNIT",
        );
        override_parsed(
            &mut self.analyzer.progress_interval,
            "CHATFOOD_ANALYZER_PROGRESS_INTERVAL",
        );
    }

    /// 설정값의 유효성을 검증합니다.
    pub fn validate(&self) -> Result<(), CliError> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.general.log_level.as_str()) {
            return Err(CliError::Config(format!(
                "general.log_level: must be one of: {}",
                valid_levels.join(", ")
            )));
        }

        let valid_formats = ["json", "pretty"];
        if !valid_formats.contains(&self.general.log_format.as_str()) {
            return Err(CliError::Config(format!(
                "general.log_format: must be one of: {}",
                valid_formats.join(", ")
            )));
        }

        self.analyzer.validate()?;
        Ok(())
    }
}

fn override_string(target: &mut String, env_key: &str) {
    if let Ok(val) = std::env::var(env_key) {
        *target = val;
    }
}

fn override_parsed<T: std::str::FromStr>(target: &mut T, env_key: &str) {
    if let Ok(val) = std::env::var(env_key) {
        match val.parse::<T>() {
            Ok(parsed) => *target = parsed,
            Err(_) => warn!(
                env_key,
                value = val.as_str(),
                "failed to parse number from env var, ignoring"
            ),
        }
    }
}
