//! 라인 분류기 -- 로그 라인에 심각도 레벨을 부여합니다.
//!
//! 레벨 토큰은 공백으로 둘러싸인 리터럴(`" ERROR "` 등)이며 대소문자를 구분합니다.
//! 토큰은 고정된 우선순위(ERROR → WARN → INFO → DEBUG)로 검사하고
//! 처음 발견된 토큰에서 분류를 멈춥니다.

use std::fmt;

use serde::{Deserialize, Serialize};

/// 로그 심각도 레벨
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    /// ERROR
    Error,
    /// WARN
    Warn,
    /// INFO
    Info,
    /// DEBUG
    Debug,
}

impl LogLevel {
    /// 레벨 라벨 문자열을 반환합니다.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "ERROR",
            Self::Warn => "WARN",
            Self::Info => "INFO",
            Self::Debug => "DEBUG",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 우선순위 순서의 (토큰, 레벨) 목록
const LEVEL_TOKENS: &[(&str, LogLevel)] = &[
    (" ERROR ", LogLevel::Error),
    (" WARN ", LogLevel::Warn),
    (" INFO ", LogLevel::Info),
    (" DEBUG ", LogLevel::Debug),
];

/// 라인 분류기
///
/// 상태가 없으므로 복사해서 자유롭게 사용할 수 있습니다.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineClassifier;

impl LineClassifier {
    /// 새 분류기를 생성합니다.
    pub fn new() -> Self {
        Self
    }

    /// 라인을 분류합니다. 어떤 토큰도 없으면 `None`을 반환합니다.
    pub fn classify(&self, line: &str) -> Option<LogLevel> {
        LEVEL_TOKENS
            .iter()
            .find(|(token, _)| line.contains(token))
            .map(|(_, level)| *level)
    }
}
