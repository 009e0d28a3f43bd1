//! 패턴 생성 옵션 (JSON 로드 지원)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::PatternError;

/// 공백 무시 연결자: 글자 사이 공백 0개 이상 (non-greedy)
pub const IGNORE_SPACE_CONNECTOR: &str = " *?";
/// 퍼지 연결자: 글자 사이 임의 문자 0개 이상 (non-greedy)
pub const FUZZY_CONNECTOR: &str = ".*?";

/// 패턴 생성 옵션
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct PatternOptions {
    /// 글자 사이 공백 허용
    #[serde(default)]
    pub ignore_space: bool,
    /// 글자 사이 임의 문자 허용 (ignore_space와 동시 사용 불가)
    #[serde(default)]
    pub fuzzy: bool,
    /// 중간 위치의 낱자음도 초성 검색으로 확장
    #[serde(default)]
    pub match_choseong: bool,
    /// 글자 단위마다 캡처 그룹 생성
    #[serde(default)]
    pub capturing: bool,
}

impl PatternOptions {
    /// 새 옵션 생성 (모두 꺼짐)
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ignore_space(mut self, ignore_space: bool) -> Self {
        self.ignore_space = ignore_space;
        self
    }

    pub fn with_fuzzy(mut self, fuzzy: bool) -> Self {
        self.fuzzy = fuzzy;
        self
    }

    pub fn with_match_choseong(mut self, match_choseong: bool) -> Self {
        self.match_choseong = match_choseong;
        self
    }

    pub fn with_capturing(mut self, capturing: bool) -> Self {
        self.capturing = capturing;
        self
    }

    /// 옵션 조합 검증
    pub fn validate(&self) -> Result<(), PatternError> {
        if self.ignore_space && self.fuzzy {
            return Err(PatternError::ConfigConflict);
        }
        Ok(())
    }

    /// 글자 단위 사이에 넣을 연결자
    pub fn connector(&self) -> &'static str {
        if self.ignore_space {
            IGNORE_SPACE_CONNECTOR
        } else if self.fuzzy {
            FUZZY_CONNECTOR
        } else {
            ""
        }
    }

    /// JSON 문자열에서 옵션 파싱 (빠진 필드는 false)
    pub fn from_json(json: &str) -> Result<Self, PatternError> {
        serde_json::from_str(json).map_err(|e| PatternError::InvalidOptions(e.to_string()))
    }

    /// 옵션 파일 읽기
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, PatternError> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }
}

/// 옵션 파일 로드 (파일 없거나 파싱 실패 시 기본값)
pub fn load_options(path: impl AsRef<Path>) -> PatternOptions {
    let path = path.as_ref();
    match PatternOptions::from_file(path) {
        Ok(options) => options,
        Err(e) => {
            log::warn!("옵션 파일 로드 실패 ({}), 기본값 사용: {}", path.display(), e);
            PatternOptions::default()
        }
    }
}
