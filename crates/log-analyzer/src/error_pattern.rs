//! 에러 패턴 매처 -- ERROR 라인을 우선순위 순서의 패턴으로 분류합니다.
//!
//! 에러 메시지는 여러 패턴에 동시에 걸릴 수 있으므로 패턴은 고정된 순서로 시도하고
//! 첫 번째로 매칭된 패턴의 캡처 토큰만 사용합니다.
//! 이 매처는 분류기가 ERROR를 부여한 라인에만 적용해야 합니다
//! ([`StatisticsAggregator`](crate::aggregator::StatisticsAggregator)가 이를 보장합니다).

use regex::Regex;

use crate::error::LogAnalyzerError;

/// 우선순위 순서의 에러 패턴 (각각 캡처 그룹 1개)
pub const DEFAULT_ERROR_PATTERNS: &[&str] = &[
    r"Exception: (\w+)",
    r"Error: (\w+)",
    r"Failed to (\w+)",
    r"Cannot (\w+)",
    r"Unable to (\w+)",
];

/// 에러 패턴 매처
pub struct ErrorPatternMatcher {
    /// 순서가 보존된 컴파일된 패턴 목록
    patterns: Vec<Regex>,
}

impl ErrorPatternMatcher {
    /// 기본 패턴 5종으로 매처를 생성합니다.
    pub fn new() -> Result<Self, LogAnalyzerError> {
        Self::with_patterns(DEFAULT_ERROR_PATTERNS)
    }

    /// 주어진 패턴 목록으로 매처를 생성합니다. 목록 순서가 곧 우선순위입니다.
    pub fn with_patterns(patterns: &[&str]) -> Result<Self, LogAnalyzerError> {
        let patterns = patterns
            .iter()
            .enumerate()
            .map(|(idx, p)| {
                let regex = Regex::new(p)?;
                if regex.captures_len() < 2 {
                    return Err(LogAnalyzerError::Config {
                        field: format!("error_patterns[{idx}]"),
                        reason: format!("pattern '{p}' has no capture group"),
                    });
                }
                Ok(regex)
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { patterns })
    }

    /// 첫 번째로 매칭된 패턴의 캡처 토큰을 반환합니다.
    pub fn match_line<'a>(&self, line: &'a str) -> Option<&'a str> {
        self.patterns
            .iter()
            .find_map(|p| p.captures(line).and_then(|c| c.get(1)))
            .map(|m| m.as_str())
    }

    /// 등록된 패턴 수를 반환합니다.
    pub fn pattern_count(&self) -> usize {
        self.patterns.len()
    }
}
