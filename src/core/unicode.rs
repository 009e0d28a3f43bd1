//! 유니코드 한글 조합/분해 유틸리티

use super::jamo_tables::{
    compat_consonant_offset, CHOSEONG_REV, COMPOUND_JONGSEONGS, JONGSEONG_REV,
};

/// 한글 음절 시작 코드포인트 (가)
pub const HANGUL_SYLLABLE_BASE: u32 = 0xAC00;
/// 한글 음절 마지막 코드포인트 (힣)
pub const HANGUL_SYLLABLE_LAST: u32 = 0xD7A3;

/// 초성 개수
pub const CHOSEONG_COUNT: u32 = 19;
/// 중성 개수
pub const JUNGSEONG_COUNT: u32 = 21;
/// 종성 개수 (종성 없음 포함)
pub const JONGSEONG_COUNT: u32 = 28;

/// 완성형 한글 음절(가-힣)인지 확인
pub fn is_hangul_syllable(c: char) -> bool {
    (HANGUL_SYLLABLE_BASE..=HANGUL_SYLLABLE_LAST).contains(&(c as u32))
}

/// 호환용 자음(ㄱ-ㅎ)인지 확인
/// 초성이 될 수 있는 자음과 종성 전용 겹자음을 모두 포함
pub fn can_be_choseong_or_jongseong(c: char) -> bool {
    compat_consonant_offset(c).is_some()
}

/// 단독 초성이 될 수 있는 자음인지 확인
pub fn can_be_choseong(c: char) -> bool {
    choseong_index(c).is_some()
}

/// 받침(종성)이 있는 음절인지 확인
/// 완성형 한글이 아니면 false
pub fn has_jongseong(syllable: char) -> bool {
    is_hangul_syllable(syllable) && (syllable as u32 - HANGUL_SYLLABLE_BASE) % JONGSEONG_COUNT > 0
}

/// 초성/중성/종성 인덱스로 완성된 한글 유니코드 생성
/// - choseong: 초성 인덱스 (0~18)
/// - jungseong: 중성 인덱스 (0~20)
/// - jongseong: 종성 인덱스 (0~27, 0 = 종성 없음)
pub fn compose_syllable(choseong: u32, jungseong: u32, jongseong: u32) -> Option<char> {
    if choseong >= CHOSEONG_COUNT || jungseong >= JUNGSEONG_COUNT || jongseong >= JONGSEONG_COUNT {
        return None;
    }
    let code = HANGUL_SYLLABLE_BASE
        + (choseong * JUNGSEONG_COUNT + jungseong) * JONGSEONG_COUNT
        + jongseong;
    char::from_u32(code)
}

/// 완성형 한글을 초성/중성/종성 인덱스로 분해
/// 반환: (초성 인덱스, 중성 인덱스, 종성 인덱스)
pub fn decompose_syllable(c: char) -> Option<(u32, u32, u32)> {
    if !is_hangul_syllable(c) {
        return None;
    }
    let offset = c as u32 - HANGUL_SYLLABLE_BASE;
    let jongseong = offset % JONGSEONG_COUNT;
    let jungseong = (offset / JONGSEONG_COUNT) % JUNGSEONG_COUNT;
    let choseong = offset / (JUNGSEONG_COUNT * JONGSEONG_COUNT);
    Some((choseong, jungseong, jongseong))
}

/// 호환용 자음의 초성 인덱스 (초성이 될 수 없으면 None)
pub fn choseong_index(jamo: char) -> Option<u32> {
    compat_consonant_offset(jamo).and_then(|offset| CHOSEONG_REV[offset])
}

/// 호환용 자음의 종성 인덱스 (종성이 될 수 없으면 None)
pub fn jongseong_index(jamo: char) -> Option<u32> {
    compat_consonant_offset(jamo).and_then(|offset| JONGSEONG_REV[offset])
}

/// 겹받침 자모를 두 자음으로 분리
/// 반환: (앞 자음, 뒤 자음)
///
/// # Panics
///
/// 겹받침(ㄳ ㄵ ㄶ ㄺ ㄻ ㄼ ㄽ ㄾ ㄿ ㅀ ㅄ)이 아닌 문자를 넘기면 패닉.
/// 호출 전에 `can_be_choseong_or_jongseong(c) && !can_be_choseong(c)`로 확인해야 한다.
pub fn split_compound_jongseong(jamo: char) -> (char, char) {
    match COMPOUND_JONGSEONGS.iter().find(|(compound, _, _)| *compound == jamo) {
        Some(&(_, first, second)) => (first, second),
        None => panic!("겹받침이 아닌 자모를 분리할 수 없음: {:?}", jamo),
    }
}
