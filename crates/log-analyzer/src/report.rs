//! 리포트 렌더러 -- 고정된 [`LogStatistics`]를 텍스트 리포트 또는 구조화 요약으로 변환합니다.
//!
//! 텍스트 리포트 섹션 순서는 고정이며, 데이터가 비어 있는 섹션은 통째로 생략합니다.
//!
//! ```text
//! 기본 통계 -> API 호출 -> 사용자 액션 -> 응답 시간 -> 시간대별 활동 -> 주요 에러 패턴
//! ```

use std::collections::BTreeMap;
use std::io::Write;

use serde::Serialize;

use crate::config::AnalyzerConfig;
use crate::stats::{LevelCounts, LogStatistics, OrderedCounter};

const RULE_WIDTH: usize = 60;

/// 텍스트 리포트 렌더러
#[derive(Debug, Clone, Default)]
pub struct ReportRenderer {
    config: AnalyzerConfig,
}

impl ReportRenderer {
    /// 설정으로 렌더러를 생성합니다.
    pub fn new(config: AnalyzerConfig) -> Self {
        Self { config }
    }

    /// 텍스트 리포트를 `w`에 씁니다.
    pub fn render_text(&self, stats: &LogStatistics, w: &mut dyn Write) -> std::io::Result<()> {
        let rule = "=".repeat(RULE_WIDTH);

        writeln!(w)?;
        writeln!(w, "{rule}")?;
        writeln!(w, "📈 ChatFood 로그 분석 리포트")?;
        writeln!(w, "{rule}")?;

        self.render_basic(stats, w)?;
        Self::render_ranked(w, "🔌 API 호출 통계:", &stats.api_call_counts)?;
        Self::render_ranked(w, "👤 사용자 액션 통계:", &stats.user_action_counts)?;
        self.render_response_times(stats, w)?;
        self.render_hourly(stats, w)?;
        self.render_error_patterns(stats, w)?;

        writeln!(w)?;
        writeln!(w, "✅ 분석 완료!")?;
        writeln!(w, "{rule}")?;
        Ok(())
    }

    /// 텍스트 리포트를 문자열로 렌더링합니다.
    pub fn render_to_string(&self, stats: &LogStatistics) -> String {
        let mut buf = Vec::new();
        // Vec<u8>에 대한 쓰기는 실패하지 않는다
        let _ = self.render_text(stats, &mut buf);
        String::from_utf8_lossy(&buf).into_owned()
    }

    fn render_basic(&self, stats: &LogStatistics, w: &mut dyn Write) -> std::io::Result<()> {
        let levels = &stats.level_counts;
        writeln!(w)?;
        writeln!(w, "📊 기본 통계:")?;
        writeln!(w, "  총 로그 수: {}", format_thousands(stats.total_lines))?;
        writeln!(w, "  INFO: {}", format_thousands(levels.info))?;
        writeln!(w, "  WARN: {}", format_thousands(levels.warn))?;
        writeln!(w, "  ERROR: {}", format_thousands(levels.error))?;
        writeln!(w, "  DEBUG: {}", format_thousands(levels.debug))?;
        if let Some(rate) = stats.error_rate() {
            writeln!(w, "  에러율: {rate:.2}%")?;
        }
        Ok(())
    }

    fn render_ranked(
        w: &mut dyn Write,
        title: &str,
        counter: &OrderedCounter,
    ) -> std::io::Result<()> {
        if counter.is_empty() {
            return Ok(());
        }
        writeln!(w)?;
        writeln!(w, "{title}")?;
        for (label, count) in counter.sorted_by_count() {
            writeln!(w, "  {label}: {}회", format_thousands(count))?;
        }
        Ok(())
    }

    fn render_response_times(
        &self,
        stats: &LogStatistics,
        w: &mut dyn Write,
    ) -> std::io::Result<()> {
        let Some(summary) = stats.response_time_stats(self.config.slow_threshold_ms) else {
            return Ok(());
        };
        writeln!(w)?;
        writeln!(w, "⏱️ 응답 시간 통계:")?;
        writeln!(w, "  평균: {:.2}ms", summary.mean)?;
        writeln!(w, "  최대: {}ms", summary.max)?;
        writeln!(w, "  최소: {}ms", summary.min)?;
        if summary.slow_count > 0 {
            writeln!(
                w,
                "  느린 요청 ({}): {}개",
                slow_label(self.config.slow_threshold_ms),
                summary.slow_count
            )?;
        }
        Ok(())
    }

    fn render_hourly(&self, stats: &LogStatistics, w: &mut dyn Write) -> std::io::Result<()> {
        if stats.hourly_counts.is_empty() {
            return Ok(());
        }
        writeln!(w)?;
        writeln!(w, "🕐 시간대별 활동:")?;
        for (hour, &count) in &stats.hourly_counts {
            let units = count.checked_div(self.config.hourly_bar_unit).unwrap_or(0);
            let bar_len = usize::try_from(units).unwrap_or(usize::MAX);
            let bar: String = std::iter::repeat_n(self.config.bar_char, bar_len).collect();
            writeln!(w, "  {hour:02}시: {count:4}회 {bar}")?;
        }
        Ok(())
    }

    fn render_error_patterns(
        &self,
        stats: &LogStatistics,
        w: &mut dyn Write,
    ) -> std::io::Result<()> {
        if stats.error_pattern_counts.is_empty() {
            return Ok(());
        }
        writeln!(w)?;
        writeln!(w, "🚨 주요 에러 패턴:")?;
        for (label, count) in stats
            .error_pattern_counts
            .most_common(self.config.top_error_patterns)
        {
            writeln!(w, "  {label}: {count}회")?;
        }
        Ok(())
    }
}

/// 느린 요청 기준 라벨 (1000ms 단위면 초로 표기)
fn slow_label(threshold_ms: u64) -> String {
    if threshold_ms > 0 && threshold_ms % 1000 == 0 {
        format!("{}초 이상", threshold_ms / 1000)
    } else {
        format!("{threshold_ms}ms 초과")
    }
}

/// 천 단위 구분 기호(,)를 넣어 숫자를 포맷합니다.
pub fn format_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// 응답 시간 요약 (구조화 출력용, 데이터가 없으면 필드가 null)
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseTimeSummary {
    pub mean: Option<f64>,
    pub max: Option<u64>,
    pub min: Option<u64>,
    pub slow_count: usize,
}

/// 구조화(JSON) 요약 -- 막대 그래프 없이 집계 필드를 그대로 노출합니다.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatisticsSummary {
    pub total_lines: u64,
    pub level_counts: LevelCounts,
    pub api_call_counts: OrderedCounter,
    pub user_action_counts: OrderedCounter,
    pub error_pattern_counts: OrderedCounter,
    pub response_time_stats: ResponseTimeSummary,
    /// 0-23 모든 시간대 (데이터가 없는 시간대는 0)
    pub hourly_counts: BTreeMap<u8, u64>,
}

impl StatisticsSummary {
    /// 집계에서 구조화 요약을 생성합니다.
    pub fn from_stats(stats: &LogStatistics, config: &AnalyzerConfig) -> Self {
        let response_time_stats = match stats.response_time_stats(config.slow_threshold_ms) {
            Some(s) => ResponseTimeSummary {
                mean: Some(s.mean),
                max: Some(s.max),
                min: Some(s.min),
                slow_count: s.slow_count,
            },
            None => ResponseTimeSummary {
                mean: None,
                max: None,
                min: None,
                slow_count: 0,
            },
        };

        let hourly_counts = (0..24u8)
            .map(|hour| (hour, stats.hourly_counts.get(&hour).copied().unwrap_or(0)))
            .collect();

        Self {
            total_lines: stats.total_lines,
            level_counts: stats.level_counts,
            api_call_counts: stats.api_call_counts.clone(),
            user_action_counts: stats.user_action_counts.clone(),
            error_pattern_counts: stats.error_pattern_counts.clone(),
            response_time_stats,
            hourly_counts,
        }
    }
}
