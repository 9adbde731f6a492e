//! 분석기 설정
//!
//! [`AnalyzerConfig`]는 리포트 렌더링과 진행 상황 로깅에 쓰이는 조정값을 담습니다.
//! 분류/추출 패턴 자체는 설정 대상이 아니며 코드에 고정되어 있습니다.
//!
//! # 사용 예시
//! ```
//! use chatfood_log_analyzer::config::AnalyzerConfigBuilder;
//!
//! let config = AnalyzerConfigBuilder::new()
//!     .slow_threshold_ms(500)
//!     .top_error_patterns(3)
//!     .build()
//!     .unwrap();
//! assert_eq!(config.slow_threshold_ms, 500);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::LogAnalyzerError;

/// 분석기 설정
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// 느린 요청 판정 기준 (밀리초, 이 값을 초과하면 느린 요청)
    pub slow_threshold_ms: u64,
    /// 리포트에 표시할 상위 에러 패턴 수
    pub top_error_patterns: usize,
    /// 시간대별 막대 그래프 한 칸이 나타내는 건수
    pub hourly_bar_unit: u64,
    /// 막대 그래프 문자
    pub bar_char: char,
    /// 진행 상황 로그 간격 (라인 수, 0이면 비활성화)
    pub progress_interval: u64,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            slow_threshold_ms: 1000,
            top_error_patterns: 5,
            hourly_bar_unit: 10,
            bar_char: '█',
            progress_interval: 10_000,
        }
    }
}

impl AnalyzerConfig {
    /// 설정값의 유효성을 검증합니다.
    pub fn validate(&self) -> Result<(), LogAnalyzerError> {
        const MAX_TOP_ERROR_PATTERNS: usize = 1000;

        if self.top_error_patterns == 0 || self.top_error_patterns > MAX_TOP_ERROR_PATTERNS {
            return Err(LogAnalyzerError::Config {
                field: "top_error_patterns".to_owned(),
                reason: format!("must be 1-{}", MAX_TOP_ERROR_PATTERNS),
            });
        }

        if self.hourly_bar_unit == 0 {
            return Err(LogAnalyzerError::Config {
                field: "hourly_bar_unit".to_owned(),
                reason: "must be greater than 0".to_owned(),
            });
        }

        if self.bar_char.is_control() || self.bar_char.is_whitespace() {
            return Err(LogAnalyzerError::Config {
                field: "bar_char".to_owned(),
                reason: "must be a visible character".to_owned(),
            });
        }

        Ok(())
    }
}

/// 분석기 설정 빌더
#[derive(Default)]
pub struct AnalyzerConfigBuilder {
    config: AnalyzerConfig,
}

impl AnalyzerConfigBuilder {
    /// 새 빌더를 생성합니다.
    pub fn new() -> Self {
        Self::default()
    }

    /// 느린 요청 기준(밀리초)을 설정합니다.
    pub fn slow_threshold_ms(mut self, ms: u64) -> Self {
        self.config.slow_threshold_ms = ms;
        self
    }

    /// 상위 에러 패턴 수를 설정합니다.
    pub fn top_error_patterns(mut self, n: usize) -> Self {
        self.config.top_error_patterns = n;
        self
    }

    /// 막대 그래프 단위를 설정합니다.
    pub fn hourly_bar_unit(mut self, unit: u64) -> Self {
        self.config.hourly_bar_unit = unit;
        self
    }

    /// 막대 그래프 문자를 설정합니다.
    pub fn bar_char(mut self, c: char) -> Self {
        self.config.bar_char = c;
        self
    }

    /// 진행 상황 로그 간격을 설정합니다.
    pub fn progress_interval(mut self, lines: u64) -> Self {
        self.config.progress_interval = lines;
        self
    }

    /// 설정을 검증하고 `AnalyzerConfig`를 생성합니다.
    pub fn build(self) -> Result<AnalyzerConfig, LogAnalyzerError> {
        self.config.validate()?;
        Ok(self.config)
    }
}
