//! 분석 드라이버 -- 소스에서 라인을 순차적으로 읽어 집계기에 밀어 넣습니다.
//!
//! # 흐름
//! ```text
//! LogSource -> next_line -> StatisticsAggregator::ingest -> ... -> LogStatistics
//!                  ^
//!          CancellationToken (라인 사이에서 확인)
//! ```
//!
//! 라인 읽기만 대기 지점이며, 취소 신호가 오면 그때까지 누적된
//! 일관된 부분 집계를 반환합니다.

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::aggregator::StatisticsAggregator;
use crate::config::AnalyzerConfig;
use crate::error::LogAnalyzerError;
use crate::source::LogSource;
use crate::stats::LogStatistics;

/// 분석 결과
#[derive(Debug, Clone)]
pub struct AnalysisOutcome {
    /// 최종(또는 부분) 집계
    pub statistics: LogStatistics,
    /// 취소 신호로 소스 끝에 도달하기 전에 멈췄는지 여부
    pub stopped_early: bool,
}

/// 로그 분석기
///
/// # 사용 예시
/// ```no_run
/// # async fn example() -> Result<(), chatfood_log_analyzer::LogAnalyzerError> {
/// use chatfood_log_analyzer::{AnalyzerConfig, LogAnalyzer, LogSource};
/// use tokio_util::sync::CancellationToken;
///
/// let analyzer = LogAnalyzer::new(AnalyzerConfig::default());
/// let outcome = analyzer
///     .analyze_source(&LogSource::from_arg("logs/chatfood.log"), CancellationToken::new())
///     .await?;
/// println!("{} lines", outcome.statistics.total_lines);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct LogAnalyzer {
    config: AnalyzerConfig,
}

impl LogAnalyzer {
    /// 새 분석기를 생성합니다.
    pub fn new(config: AnalyzerConfig) -> Self {
        Self { config }
    }

    /// 분석기 설정을 반환합니다.
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// 소스를 열고 끝까지(또는 취소될 때까지) 분석합니다.
    pub async fn analyze_source(
        &self,
        source: &LogSource,
        cancel: CancellationToken,
    ) -> Result<AnalysisOutcome, LogAnalyzerError> {
        let reader = source.open().await?;
        info!(source = %source, "log analysis started");
        self.analyze_reader(reader, cancel).await
    }

    /// 임의의 비동기 리더에서 라인을 읽어 분석합니다.
    ///
    /// 줄 끝의 `\n` / `\r\n`은 제거된 뒤 집계기에 전달됩니다.
    /// 읽기 실패(잘못된 UTF-8 포함)는 [`LogAnalyzerError::Ingestion`]으로 반환됩니다.
    pub async fn analyze_reader<R>(
        &self,
        reader: R,
        cancel: CancellationToken,
    ) -> Result<AnalysisOutcome, LogAnalyzerError>
    where
        R: AsyncBufRead + Unpin,
    {
        let mut aggregator = StatisticsAggregator::new()?;
        let mut lines = reader.lines();
        let mut stopped_early = false;

        loop {
            tokio::select! {
                biased;
                _ = cancel.cancelled() => {
                    warn!(
                        lines = aggregator.lines_ingested(),
                        "log analysis stopped before end of source"
                    );
                    stopped_early = true;
                    break;
                }
                result = lines.next_line() => {
                    match result {
                        Ok(Some(line)) => {
                            aggregator.ingest(&line);
                            self.report_progress(aggregator.lines_ingested());
                        }
                        Ok(None) => break,
                        Err(e) => {
                            return Err(LogAnalyzerError::Ingestion {
                                line: aggregator.lines_ingested() + 1,
                                source: e,
                            });
                        }
                    }
                }
            }
        }

        let statistics = aggregator.into_statistics();
        info!(
            total_lines = statistics.total_lines,
            errors = statistics.level_counts.error,
            stopped_early,
            "log analysis finished"
        );

        Ok(AnalysisOutcome {
            statistics,
            stopped_early,
        })
    }

    fn report_progress(&self, lines: u64) {
        let interval = self.config.progress_interval;
        if interval > 0 && lines % interval == 0 {
            debug!(lines, "log analysis progress");
        }
    }
}
