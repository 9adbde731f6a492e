//! 통계 데이터 모델
//!
//! [`LogStatistics`]는 한 번의 분석 실행에서 누적되는 집계입니다.
//! 모든 카운터는 단순 가산형이고 응답 시간은 추가 전용 시퀀스이므로
//! 부분 집계 두 개를 [`LogStatistics::merge`]로 합칠 수 있습니다.

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;
use serde::ser::SerializeMap;

use crate::level::LogLevel;

/// 레벨별 카운트 (키 고정)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct LevelCounts {
    pub error: u64,
    pub warn: u64,
    pub info: u64,
    pub debug: u64,
}

impl LevelCounts {
    /// 해당 레벨 카운트를 1 증가시킵니다.
    pub fn increment(&mut self, level: LogLevel) {
        *self.slot_mut(level) += 1;
    }

    /// 해당 레벨의 카운트를 반환합니다.
    pub fn get(&self, level: LogLevel) -> u64 {
        match level {
            LogLevel::Error => self.error,
            LogLevel::Warn => self.warn,
            LogLevel::Info => self.info,
            LogLevel::Debug => self.debug,
        }
    }

    /// 레벨이 부여된 라인 수의 합을 반환합니다.
    pub fn total(&self) -> u64 {
        self.error + self.warn + self.info + self.debug
    }

    fn slot_mut(&mut self, level: LogLevel) -> &mut u64 {
        match level {
            LogLevel::Error => &mut self.error,
            LogLevel::Warn => &mut self.warn,
            LogLevel::Info => &mut self.info,
            LogLevel::Debug => &mut self.debug,
        }
    }

    fn merge(&mut self, other: &LevelCounts) {
        self.error += other.error;
        self.warn += other.warn;
        self.info += other.info;
        self.debug += other.debug;
    }
}

/// 처음 등장한 순서를 보존하는 문자열 카운터
///
/// 동률 정렬 결과가 첫 등장 순서를 따라야 하므로 해시맵 단독이 아니라
/// (라벨, 카운트) 벡터와 인덱스 맵을 함께 유지합니다.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderedCounter {
    entries: Vec<(String, u64)>,
    index: HashMap<String, usize>,
}

impl OrderedCounter {
    /// 빈 카운터를 생성합니다.
    pub fn new() -> Self {
        Self::default()
    }

    /// 라벨 카운트를 1 증가시킵니다.
    pub fn increment(&mut self, label: &str) {
        self.add(label, 1);
    }

    /// 라벨 카운트를 `n`만큼 증가시킵니다. 처음 보는 라벨은 끝에 추가됩니다.
    pub fn add(&mut self, label: &str, n: u64) {
        match self.index.get(label) {
            Some(&idx) => self.entries[idx].1 += n,
            None => {
                self.index.insert(label.to_owned(), self.entries.len());
                self.entries.push((label.to_owned(), n));
            }
        }
    }

    /// 라벨의 카운트를 반환합니다 (없으면 0).
    pub fn get(&self, label: &str) -> u64 {
        self.index
            .get(label)
            .map(|&idx| self.entries[idx].1)
            .unwrap_or(0)
    }

    /// 서로 다른 라벨 수를 반환합니다.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// 라벨이 하나도 없는지 확인합니다.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 첫 등장 순서로 (라벨, 카운트)를 순회합니다.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.entries.iter().map(|(label, count)| (label.as_str(), *count))
    }

    /// 카운트 내림차순으로 정렬합니다. 동률이면 첫 등장 순서를 유지합니다 (안정 정렬).
    pub fn sorted_by_count(&self) -> Vec<(&str, u64)> {
        let mut sorted: Vec<_> = self.iter().collect();
        sorted.sort_by(|a, b| b.1.cmp(&a.1));
        sorted
    }

    /// 카운트 상위 `n`개를 반환합니다.
    pub fn most_common(&self, n: usize) -> Vec<(&str, u64)> {
        let mut sorted = self.sorted_by_count();
        sorted.truncate(n);
        sorted
    }

    /// 다른 카운터를 합칩니다. 새 라벨은 `other`의 등장 순서대로 뒤에 붙습니다.
    pub fn merge(&mut self, other: &OrderedCounter) {
        for (label, count) in other.iter() {
            self.add(label, count);
        }
    }
}

impl Serialize for OrderedCounter {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (label, count) in &self.entries {
            map.serialize_entry(label, count)?;
        }
        map.end()
    }
}

/// 응답 시간 요약 통계
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseTimeStats {
    /// 산술 평균 (밀리초)
    pub mean: f64,
    /// 최댓값
    pub max: u64,
    /// 최솟값
    pub min: u64,
    /// 기준값을 초과한 요청 수
    pub slow_count: usize,
}

impl ResponseTimeStats {
    /// 응답 시간 목록에서 요약을 계산합니다. 목록이 비어 있으면 `None`.
    pub fn compute(times: &[u64], slow_threshold_ms: u64) -> Option<Self> {
        let max = *times.iter().max()?;
        let min = *times.iter().min()?;
        let sum: u128 = times.iter().map(|&t| u128::from(t)).sum();
        let mean = sum as f64 / times.len() as f64;
        let slow_count = times.iter().filter(|&&t| t > slow_threshold_ms).count();
        Some(Self {
            mean,
            max,
            min,
            slow_count,
        })
    }
}

/// 로그 분석 집계
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogStatistics {
    /// 처리한 전체 라인 수
    pub total_lines: u64,
    /// 레벨별 카운트
    pub level_counts: LevelCounts,
    /// API 호출 카운트
    pub api_call_counts: OrderedCounter,
    /// 사용자 액션 카운트
    pub user_action_counts: OrderedCounter,
    /// 에러 패턴 카운트
    pub error_pattern_counts: OrderedCounter,
    /// 응답 시간 (등장 순서)
    pub response_times: Vec<u64>,
    /// 시간대별 카운트
    pub hourly_counts: BTreeMap<u8, u64>,
}

impl LogStatistics {
    /// 빈 집계를 생성합니다.
    pub fn new() -> Self {
        Self::default()
    }

    /// ERROR 비율(%)을 반환합니다. 라인이 없으면 `None`.
    pub fn error_rate(&self) -> Option<f64> {
        if self.total_lines == 0 {
            return None;
        }
        Some(self.level_counts.error as f64 / self.total_lines as f64 * 100.0)
    }

    /// 응답 시간 요약을 계산합니다.
    pub fn response_time_stats(&self, slow_threshold_ms: u64) -> Option<ResponseTimeStats> {
        ResponseTimeStats::compute(&self.response_times, slow_threshold_ms)
    }

    /// 다른 부분 집계를 합칩니다.
    ///
    /// 카운트는 합산하고 응답 시간은 `self` 뒤에 `other`를 이어 붙입니다.
    pub fn merge(&mut self, other: &LogStatistics) {
        self.total_lines += other.total_lines;
        self.level_counts.merge(&other.level_counts);
        self.api_call_counts.merge(&other.api_call_counts);
        self.user_action_counts.merge(&other.user_action_counts);
        self.error_pattern_counts.merge(&other.error_pattern_counts);
        self.response_times.extend_from_slice(&other.response_times);
        for (&hour, &count) in &other.hourly_counts {
            *self.hourly_counts.entry(hour).or_insert(0) += count;
        }
    }
}
