//! Analyze command handler -- runs the analyzer over one source and renders the result

use std::io::Write;

use serde::Serialize;
use tokio_util::sync::CancellationToken;

use chatfood_log_analyzer::{
    AnalyzerConfig, LogAnalyzer, LogSource, LogStatistics, ReportRenderer, StatisticsSummary,
};

use crate::error::CliError;
use crate::output::{OutputWriter, Render};

/// Execute the analysis and render it through `writer`.
///
/// Returns the report so callers can inspect it (e.g. whether the run was interrupted).
pub async fn execute(
    source: &LogSource,
    config: &AnalyzerConfig,
    writer: &OutputWriter,
    cancel: CancellationToken,
) -> Result<AnalysisReport, CliError> {
    let analyzer = LogAnalyzer::new(config.clone());
    let outcome = analyzer.analyze_source(source, cancel).await?;

    let report = AnalysisReport::new(
        source.to_string(),
        outcome.statistics,
        config.clone(),
        outcome.stopped_early,
    );
    writer.render(&report)?;
    Ok(report)
}

/// Rendered analysis result.
///
/// Serialises as the structured summary; renders as the sectioned text report.
#[derive(Serialize)]
#[serde(transparent)]
pub struct AnalysisReport {
    summary: StatisticsSummary,
    #[serde(skip)]
    source: String,
    #[serde(skip)]
    statistics: LogStatistics,
    #[serde(skip)]
    renderer: ReportRenderer,
    #[serde(skip)]
    stopped_early: bool,
}

impl AnalysisReport {
    /// Build a report payload from finished statistics.
    pub fn new(
        source: String,
        statistics: LogStatistics,
        config: AnalyzerConfig,
        stopped_early: bool,
    ) -> Self {
        Self {
            summary: StatisticsSummary::from_stats(&statistics, &config),
            source,
            statistics,
            renderer: ReportRenderer::new(config),
            stopped_early,
        }
    }

    /// The aggregated statistics behind this report.
    pub fn statistics(&self) -> &LogStatistics {
        &self.statistics
    }

    /// Whether the run was interrupted before the end of the source.
    pub fn stopped_early(&self) -> bool {
        self.stopped_early
    }
}

impl Render for AnalysisReport {
    fn render_text(&self, w: &mut dyn Write) -> std::io::Result<()> {
        writeln!(w, "📊 로그 분석 시작: {}", self.source)?;
        if self.stopped_early {
            writeln!(
                w,
                "⚠️ 분석이 중단되었습니다: 처음 {}개 라인만 집계되었습니다",
                self.statistics.total_lines
            )?;
        }
        self.renderer.render_text(&self.statistics, w)
    }
}
