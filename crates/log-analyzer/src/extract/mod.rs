//! 필드 추출 모듈 -- 로그 라인에서 타입이 있는 값을 뽑아냅니다.
//!
//! 각 추출기는 [`FieldExtractor`] trait을 구현하며 서로 독립적으로 같은 라인에 대해 실행됩니다.
//! 패턴이 매칭되지 않으면 조용히 `None`을 반환합니다 (에러가 아님).
//!
//! # 기본 추출기
//! - [`MarkerExtractor::api_call`]: `API 호출` 마커가 있는 라인의 `API: <name>`
//! - [`MarkerExtractor::user_action`]: `사용자 액션` 마커가 있는 라인의 `액션: <name>`
//! - [`ResponseTimeExtractor`]: `소요시간: <digits>ms`
//! - [`HourExtractor`]: 첫 번째 `HH:MM:SS` 타임스탬프의 시(hour)

pub mod marker;
pub mod timing;

pub use marker::MarkerExtractor;
pub use timing::{HourExtractor, ResponseTimeExtractor};

use crate::error::LogAnalyzerError;

/// 추출 결과
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extraction {
    /// API 호출 이름
    ApiCall(String),
    /// 사용자 액션 이름
    UserAction(String),
    /// 응답 시간 (밀리초)
    ResponseTime(u64),
    /// 시간대 (0-23)
    Hour(u8),
}

/// 필드 추출기 trait
///
/// 구현체는 정규식을 생성 시점에 한 번만 컴파일해야 합니다.
pub trait FieldExtractor: Send + Sync {
    /// 추출기 이름 (로그/디버깅용)
    fn name(&self) -> &str;

    /// 라인에서 필드를 추출합니다. 매칭되지 않으면 `None`.
    fn extract(&self, line: &str) -> Option<Extraction>;
}

/// 추출기 세트 -- 등록된 모든 추출기를 순서대로 실행합니다.
pub struct ExtractorSet {
    extractors: Vec<Box<dyn FieldExtractor>>,
}

impl ExtractorSet {
    /// 빈 추출기 세트를 생성합니다.
    pub fn new() -> Self {
        Self {
            extractors: Vec::new(),
        }
    }

    /// 기본 추출기 4종으로 세트를 생성합니다.
    pub fn with_defaults() -> Result<Self, LogAnalyzerError> {
        Ok(Self::new()
            .register(Box::new(MarkerExtractor::api_call()?))
            .register(Box::new(MarkerExtractor::user_action()?))
            .register(Box::new(ResponseTimeExtractor::new()?))
            .register(Box::new(HourExtractor::new()?)))
    }

    /// 추출기를 등록합니다.
    pub fn register(mut self, extractor: Box<dyn FieldExtractor>) -> Self {
        self.extractors.push(extractor);
        self
    }

    /// 모든 추출기를 실행하여 매칭된 결과만 반환합니다.
    pub fn extract_all<'a>(&'a self, line: &'a str) -> impl Iterator<Item = Extraction> + 'a {
        self.extractors.iter().filter_map(move |e| e.extract(line))
    }

    /// 등록된 추출기 이름 목록을 반환합니다.
    pub fn names(&self) -> Vec<&str> {
        self.extractors.iter().map(|e| e.name()).collect()
    }

    /// 등록된 추출기 수를 반환합니다.
    pub fn len(&self) -> usize {
        self.extractors.len()
    }

    /// 추출기가 하나도 없는지 확인합니다.
    pub fn is_empty(&self) -> bool {
        self.extractors.is_empty()
    }
}

impl Default for ExtractorSet {
    fn default() -> Self {
        Self::new()
    }
}
