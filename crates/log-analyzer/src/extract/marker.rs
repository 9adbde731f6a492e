//! 마커 기반 추출기
//!
//! 라인에 마커 문자열이 있을 때만 정규식을 실행하고, 첫 번째 캡처 그룹을 이름으로 사용합니다.

use regex::Regex;

use super::{Extraction, FieldExtractor};
use crate::error::LogAnalyzerError;

/// API 호출 마커
pub const API_CALL_MARKER: &str = "API 호출";

/// 사용자 액션 마커
pub const USER_ACTION_MARKER: &str = "사용자 액션";

/// 마커가 있는 라인에서 이름 토큰을 추출합니다.
pub struct MarkerExtractor {
    name: &'static str,
    marker: &'static str,
    pattern: Regex,
    wrap: fn(String) -> Extraction,
}

impl MarkerExtractor {
    /// 새 마커 추출기를 생성합니다.
    ///
    /// `pattern`은 정확히 하나의 캡처 그룹을 가져야 합니다.
    pub fn new(
        name: &'static str,
        marker: &'static str,
        pattern: &str,
        wrap: fn(String) -> Extraction,
    ) -> Result<Self, LogAnalyzerError> {
        let pattern = Regex::new(pattern)?;
        if pattern.captures_len() != 2 {
            return Err(LogAnalyzerError::Config {
                field: name.to_owned(),
                reason: "pattern must have exactly one capture group".to_owned(),
            });
        }
        Ok(Self {
            name,
            marker,
            pattern,
            wrap,
        })
    }

    /// `API 호출` 라인의 `API: <name>` 추출기
    pub fn api_call() -> Result<Self, LogAnalyzerError> {
        Self::new("api_call", API_CALL_MARKER, r"API: (\w+)", Extraction::ApiCall)
    }

    /// `사용자 액션` 라인의 `액션: <name>` 추출기
    pub fn user_action() -> Result<Self, LogAnalyzerError> {
        Self::new(
            "user_action",
            USER_ACTION_MARKER,
            r"액션: (\w+)",
            Extraction::UserAction,
        )
    }
}

impl FieldExtractor for MarkerExtractor {
    fn name(&self) -> &str {
        self.name
    }

    fn extract(&self, line: &str) -> Option<Extraction> {
        if !line.contains(self.marker) {
            return None;
        }
        let token = self.pattern.captures(line)?.get(1)?.as_str();
        Some((self.wrap)(token.to_owned()))
    }
}
