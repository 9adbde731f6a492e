//! 시간 관련 추출기 -- 응답 시간과 시간대

use regex::Regex;

use super::{Extraction, FieldExtractor};
use crate::error::LogAnalyzerError;

/// `소요시간: <digits>ms` 에서 응답 시간을 추출합니다.
///
/// `u64` 범위를 넘는 숫자열은 매칭 실패로 취급합니다.
pub struct ResponseTimeExtractor {
    pattern: Regex,
}

impl ResponseTimeExtractor {
    /// 새 응답 시간 추출기를 생성합니다.
    pub fn new() -> Result<Self, LogAnalyzerError> {
        Ok(Self {
            pattern: Regex::new(r"소요시간: ([0-9]+)ms")?,
        })
    }
}

impl FieldExtractor for ResponseTimeExtractor {
    fn name(&self) -> &str {
        "response_time"
    }

    fn extract(&self, line: &str) -> Option<Extraction> {
        let digits = self.pattern.captures(line)?.get(1)?.as_str();
        digits.parse::<u64>().ok().map(Extraction::ResponseTime)
    }
}

/// 첫 번째 `HH:MM:SS` 타임스탬프에서 시(hour)를 추출합니다.
///
/// 라인의 가장 왼쪽 매치만 사용하며, 0-23 범위를 벗어나면 매칭 실패로 취급합니다.
pub struct HourExtractor {
    pattern: Regex,
}

impl HourExtractor {
    /// 새 시간대 추출기를 생성합니다.
    pub fn new() -> Result<Self, LogAnalyzerError> {
        Ok(Self {
            pattern: Regex::new(r"([0-9]{2}):[0-9]{2}:[0-9]{2}")?,
        })
    }
}

impl FieldExtractor for HourExtractor {
    fn name(&self) -> &str {
        "hour"
    }

    fn extract(&self, line: &str) -> Option<Extraction> {
        let hour = self.pattern.captures(line)?.get(1)?.as_str().parse::<u8>().ok()?;
        (hour < 24).then_some(Extraction::Hour(hour))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_time_parses_digits() {
        let extractor = ResponseTimeExtractor::new().unwrap();
        assert_eq!(
            extractor.extract("API 완료 소요시간: 1200ms"),
            Some(Extraction::ResponseTime(1200))
        );
    }

    #[test]
    fn response_time_requires_ms_suffix() {
        let extractor = ResponseTimeExtractor::new().unwrap();
        assert_eq!(extractor.extract("소요시간: 12s"), None);
        assert_eq!(extractor.extract("소요시간: ms"), None);
        assert_eq!(extractor.extract("소요시간:120ms"), None);
    }

    #[test]
    fn response_time_overflow_is_a_miss() {
        let extractor = ResponseTimeExtractor::new().unwrap();
        assert_eq!(
            extractor.extract("소요시간: 99999999999999999999999ms"),
            None
        );
    }

    #[test]
    fn response_time_uses_first_occurrence() {
        let extractor = ResponseTimeExtractor::new().unwrap();
        assert_eq!(
            extractor.extract("소요시간: 10ms 소요시간: 20ms"),
            Some(Extraction::ResponseTime(10))
        );
    }

    #[test]
    fn hour_uses_first_timestamp() {
        let extractor = HourExtractor::new().unwrap();
        assert_eq!(
            extractor.extract("2024-01-01 09:15:32 retry at 18:00:00"),
            Some(Extraction::Hour(9))
        );
    }

    #[test]
    fn hour_accepts_midnight_and_last_hour() {
        let extractor = HourExtractor::new().unwrap();
        assert_eq!(extractor.extract("00:00:00"), Some(Extraction::Hour(0)));
        assert_eq!(extractor.extract("23:59:59"), Some(Extraction::Hour(23)));
    }

    #[test]
    fn hour_out_of_range_is_a_miss() {
        let extractor = HourExtractor::new().unwrap();
        assert_eq!(extractor.extract("elapsed 45:00:00"), None);
    }

    #[test]
    fn hour_without_timestamp_is_a_miss() {
        let extractor = HourExtractor::new().unwrap();
        assert_eq!(extractor.extract("no time here 9:15:32"), None);
        assert_eq!(extractor.extract("12:34"), None);
    }

    #[test]
    fn hour_matches_leftmost_window() {
        // 세 자리 숫자 뒤쪽 두 자리가 시(hour)로 잡힌다
        let extractor = HourExtractor::new().unwrap();
        assert_eq!(extractor.extract("id=123:45:01"), Some(Extraction::Hour(23)));
    }
}
