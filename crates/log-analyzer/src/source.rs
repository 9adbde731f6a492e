//! 입력 소스 -- 분석할 원시 로그 라인을 읽어올 위치
//!
//! 파일 경로 또는 표준 입력(`-`)을 지원합니다. 소켓 등 다른 소스는
//! [`LogAnalyzer::analyze_reader`](crate::analyzer::LogAnalyzer::analyze_reader)에
//! `AsyncBufRead` 구현체를 직접 넘기면 됩니다.

use std::fmt;
use std::path::{Path, PathBuf};

use tokio::io::{AsyncBufRead, BufReader};

use crate::error::LogAnalyzerError;

/// 표준 입력을 나타내는 경로 인자
pub const STDIN_ARG: &str = "-";

/// 로그 입력 소스
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogSource {
    /// 로그 파일
    File(PathBuf),
    /// 표준 입력 (파이프)
    Stdin,
}

impl LogSource {
    /// 명령줄 인자에서 소스를 만듭니다. `-`는 표준 입력입니다.
    pub fn from_arg(arg: impl AsRef<Path>) -> Self {
        let path = arg.as_ref();
        if path.as_os_str() == STDIN_ARG {
            Self::Stdin
        } else {
            Self::File(path.to_path_buf())
        }
    }

    /// 소스를 열어 버퍼링된 비동기 리더를 반환합니다.
    ///
    /// 파일을 열 수 없으면 [`LogAnalyzerError::SourceUnavailable`]을 반환합니다.
    pub async fn open(&self) -> Result<Box<dyn AsyncBufRead + Unpin + Send>, LogAnalyzerError> {
        match self {
            Self::File(path) => {
                let file = tokio::fs::File::open(path).await.map_err(|e| {
                    LogAnalyzerError::SourceUnavailable {
                        path: path.display().to_string(),
                        source: e,
                    }
                })?;
                Ok(Box::new(BufReader::new(file)))
            }
            Self::Stdin => Ok(Box::new(BufReader::new(tokio::io::stdin()))),
        }
    }
}

impl fmt::Display for LogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Stdin => f.write_str("<stdin>"),
        }
    }
}
