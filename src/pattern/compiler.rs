//! 검색어 -> 정규식 패턴 변환
//!
//! 입력을 한 글자씩 읽어 조각으로 분류하고, 글자 사이에 연결자를 넣는다.
//! 마지막 글자는 입력기에서 아직 조합 중일 수 있으므로 따로 다룬다.
//!
//! - 마지막 완성형 음절: 받침이 더 붙거나, 받침이 다음 글자 초성으로
//!   넘어가는 경우까지 매칭
//! - 낱자음 초성: 그 초성으로 시작하는 모든 음절과 매칭
//!   (중간 위치는 `match_choseong`일 때만)
//! - 초성 불가 겹자음: `match_choseong`일 때 두 초성으로 나눠 매칭
//! - 그 외: 메타문자만 이스케이프해서 그대로

use super::builder::{estimate_capacity, PatternBuilder};
use super::fragment::{ChoseongRange, Fragment};
use crate::config::PatternOptions;
use crate::core::unicode::{can_be_choseong, can_be_choseong_or_jongseong, is_hangul_syllable};
use crate::error::PatternError;

/// 검색어를 정규식 패턴으로 변환
///
/// # Errors
/// `ignore_space`와 `fuzzy`가 모두 켜져 있으면 `PatternError::ConfigConflict`
///
/// # Examples
/// ```
/// use hangul_regexp::{compile, PatternOptions};
///
/// let pattern = compile("가 안", &PatternOptions::default()).unwrap();
/// assert_eq!(pattern, "가 (?:안|아(?:ㄴ|[나-닣]))");
/// ```
pub fn compile(search: &str, options: &PatternOptions) -> Result<String, PatternError> {
    options.validate()?;

    let mut builder = PatternBuilder::new(
        options.connector(),
        options.capturing,
        estimate_capacity(search, options),
    );

    let mut chars = search.chars().peekable();
    while let Some(c) = chars.next() {
        let is_last = chars.peek().is_none();
        builder.push_fragment(&classify(c, is_last, options.match_choseong));
        if !is_last {
            builder.push_connector();
        }
    }

    let pattern = builder.finish();
    log::debug!("패턴 생성: '{}' {:?} -> {} bytes", search, options, pattern.len());
    Ok(pattern)
}

/// 플래그를 직접 받는 `compile`
///
/// ```
/// use hangul_regexp::get_pattern;
///
/// assert_eq!(get_pattern("ㄱ", false, false, false, false).unwrap(), "(?:ㄱ|[가-깋])");
/// assert!(get_pattern("ㄱ", true, true, false, false).is_err());
/// ```
pub fn get_pattern(
    search: &str,
    ignore_space: bool,
    fuzzy: bool,
    match_choseong: bool,
    capturing: bool,
) -> Result<String, PatternError> {
    let options = PatternOptions {
        ignore_space,
        fuzzy,
        match_choseong,
        capturing,
    };
    compile(search, &options)
}

/// 글자 하나를 패턴 조각으로 분류
fn classify(c: char, is_last: bool, match_choseong: bool) -> Fragment {
    let expanded = if is_hangul_syllable(c) && is_last {
        Fragment::last_syllable(c)
    } else if can_be_choseong(c) && (is_last || match_choseong) {
        ChoseongRange::from_jamo(c).map(Fragment::Choseong)
    } else if can_be_choseong_or_jongseong(c) && !can_be_choseong(c) && match_choseong {
        Fragment::combined_choseong(c)
    } else {
        return Fragment::Literal(c);
    };

    // 위 분기에 들어온 글자는 자모 테이블로 항상 분해된다
    debug_assert!(expanded.is_some(), "분해할 수 없는 한글 문자: {:?}", c);
    expanded.unwrap_or(Fragment::Literal(c))
}
