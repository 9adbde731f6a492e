//! 로그 분석기 에러 타입
//!
//! [`LogAnalyzerError`]는 소스 수준에서 발생하는 에러만 표현합니다.
//! 라인 단위의 패턴 미스매치는 에러가 아니며 해당 카운터에 반영되지 않을 뿐입니다.

/// 로그 분석기 도메인 에러
#[derive(Debug, thiserror::Error)]
pub enum LogAnalyzerError {
    /// 입력 소스를 열 수 없음 (파일 없음, 권한 없음 등)
    #[error("log source unavailable: {path}: {source}")]
    SourceUnavailable {
        /// 입력 소스 경로
        path: String,
        /// 원인 I/O 에러
        #[source]
        source: std::io::Error,
    },

    /// 스트림 도중 읽기 실패 (I/O 에러, 잘못된 UTF-8 등)
    #[error("ingestion failed at line {line}: {source}")]
    Ingestion {
        /// 실패 시점의 라인 번호 (1부터 시작)
        line: u64,
        /// 원인 I/O 에러
        #[source]
        source: std::io::Error,
    },

    /// 설정 에러
    #[error("config error: {field}: {reason}")]
    Config {
        /// 설정 필드명
        field: String,
        /// 에러 사유
        reason: String,
    },

    /// 정규식 컴파일 에러
    #[error("regex error: {0}")]
    Regex(#[from] regex::Error),

    /// 기타 I/O 에러 (리포트 출력 등)
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl LogAnalyzerError {
    /// 입력 소스를 열지 못한 에러인지 확인합니다.
    pub fn is_source_unavailable(&self) -> bool {
        matches!(self, Self::SourceUnavailable { .. })
    }
}
