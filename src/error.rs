//! 패턴 생성/옵션 로드 에러

/// 패턴 생성 및 옵션 로드 에러
#[derive(Debug)]
pub enum PatternError {
    /// ignore_space와 fuzzy를 동시에 사용할 수 없음
    ConfigConflict,
    /// 옵션 JSON 파싱 실패
    InvalidOptions(String),
    /// 옵션 파일 읽기 실패
    Io(std::io::Error),
}

impl std::fmt::Display for PatternError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PatternError::ConfigConflict => {
                write!(f, "ignore_space와 fuzzy는 동시에 사용할 수 없습니다")
            }
            PatternError::InvalidOptions(s) => write!(f, "옵션 파싱 오류: {}", s),
            PatternError::Io(e) => write!(f, "옵션 파일 읽기 오류: {}", e),
        }
    }
}

impl std::error::Error for PatternError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PatternError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for PatternError {
    fn from(e: std::io::Error) -> Self {
        PatternError::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_display() {
        let err = PatternError::ConfigConflict;
        assert!(err.to_string().contains("fuzzy"));

        let err = PatternError::InvalidOptions("expected value".into());
        assert_eq!(err.to_string(), "옵션 파싱 오류: expected value");
    }

    #[test]
    fn test_io_source() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err = PatternError::from(io);
        assert!(matches!(err, PatternError::Io(_)));
        assert!(err.source().is_some());
        assert!(PatternError::ConfigConflict.source().is_none());
    }
}
