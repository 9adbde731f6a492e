#![doc = include_str!("../README.md")]
//!
//! # 모듈 구성
//!
//! - [`level`]: 라인 분류기 (ERROR/WARN/INFO/DEBUG, 우선순위 순서)
//! - [`extract`]: 필드 추출기 (API 호출, 사용자 액션, 응답 시간, 시간대)
//! - [`error_pattern`]: ERROR 라인의 첫 매칭 에러 패턴 분류
//! - [`stats`]: 집계 데이터 모델 (병합 가능한 가산 카운터)
//! - [`aggregator`]: 라인 단위 결과를 집계에 누적
//! - [`report`]: 텍스트 리포트 및 구조화 요약
//! - [`source`]: 입력 소스 (파일, 표준 입력)
//! - [`analyzer`]: 스트리밍 분석 드라이버 (취소 지원)
//! - [`config`]: 분석기 설정
//! - [`error`]: 도메인 에러 타입
//!
//! # 아키텍처
//!
//! ```text
//! LogSource -> LineClassifier -> ErrorPatternMatcher -> ExtractorSet -> StatisticsAggregator -> ReportRenderer
//!                  |                  |                     |                  |
//!             level tokens      ERROR only, 1st match   API/action/ms/hour  LogStatistics
//! ```

pub mod aggregator;
pub mod analyzer;
pub mod config;
pub mod error;
pub mod error_pattern;
pub mod extract;
pub mod level;
pub mod report;
pub mod source;
pub mod stats;

// --- 주요 타입 re-export ---

// 드라이버
pub use analyzer::{AnalysisOutcome, LogAnalyzer};
pub use source::LogSource;

// 설정
pub use config::{AnalyzerConfig, AnalyzerConfigBuilder};

// 에러
pub use error::LogAnalyzerError;

// 분류/추출
pub use error_pattern::ErrorPatternMatcher;
pub use extract::{Extraction, ExtractorSet, FieldExtractor};
pub use level::{LineClassifier, LogLevel};

// 집계
pub use aggregator::StatisticsAggregator;
pub use stats::{LevelCounts, LogStatistics, OrderedCounter, ResponseTimeStats};

// 리포트
pub use report::{ReportRenderer, StatisticsSummary};
