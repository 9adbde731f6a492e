//! 통계 집계기 -- 라인 단위 분류/추출 결과를 [`LogStatistics`]에 누적합니다.
//!
//! 집계기는 가변 통계 상태의 유일한 소유자이며, 라인 사이의 상호작용은
//! 집계 카운터를 통해서만 일어납니다.
//!
//! # 사용 예시
//! ```
//! use chatfood_log_analyzer::StatisticsAggregator;
//!
//! let mut aggregator = StatisticsAggregator::new().unwrap();
//! aggregator.ingest("2024-01-01 09:15:32 ERROR Failed to connect");
//! let stats = aggregator.snapshot();
//! assert_eq!(stats.total_lines, 1);
//! assert_eq!(stats.error_pattern_counts.get("connect"), 1);
//! ```

use crate::error::LogAnalyzerError;
use crate::error_pattern::ErrorPatternMatcher;
use crate::extract::{Extraction, ExtractorSet};
use crate::level::{LineClassifier, LogLevel};
use crate::stats::LogStatistics;

/// 통계 집계기
pub struct StatisticsAggregator {
    classifier: LineClassifier,
    extractors: ExtractorSet,
    error_matcher: ErrorPatternMatcher,
    stats: LogStatistics,
}

impl StatisticsAggregator {
    /// 기본 분류기/추출기/에러 매처로 집계기를 생성합니다.
    pub fn new() -> Result<Self, LogAnalyzerError> {
        Ok(Self::with_components(
            ExtractorSet::with_defaults()?,
            ErrorPatternMatcher::new()?,
        ))
    }

    /// 추출기 세트와 에러 매처를 직접 지정하여 집계기를 생성합니다.
    pub fn with_components(extractors: ExtractorSet, error_matcher: ErrorPatternMatcher) -> Self {
        Self {
            classifier: LineClassifier::new(),
            extractors,
            error_matcher,
            stats: LogStatistics::new(),
        }
    }

    /// 한 라인을 집계에 반영합니다.
    ///
    /// 하나의 라인이 레벨, API 호출, 응답 시간, 시간대를 동시에 증가시킬 수 있습니다.
    pub fn ingest(&mut self, line: &str) {
        self.stats.total_lines += 1;

        if let Some(level) = self.classifier.classify(line) {
            self.stats.level_counts.increment(level);
            if level == LogLevel::Error {
                if let Some(label) = self.error_matcher.match_line(line) {
                    self.stats.error_pattern_counts.increment(label);
                }
            }
        }

        for extraction in self.extractors.extract_all(line) {
            match extraction {
                Extraction::ApiCall(name) => self.stats.api_call_counts.increment(&name),
                Extraction::UserAction(name) => self.stats.user_action_counts.increment(&name),
                Extraction::ResponseTime(ms) => self.stats.response_times.push(ms),
                Extraction::Hour(hour) => {
                    *self.stats.hourly_counts.entry(hour).or_insert(0) += 1;
                }
            }
        }
    }

    /// 지금까지 처리한 라인 수를 반환합니다.
    pub fn lines_ingested(&self) -> u64 {
        self.stats.total_lines
    }

    /// 현재 집계의 불변 복사본을 반환합니다.
    pub fn snapshot(&self) -> LogStatistics {
        self.stats.clone()
    }

    /// 집계기를 소비하고 최종 집계를 반환합니다.
    pub fn into_statistics(self) -> LogStatistics {
        self.stats
    }
}
