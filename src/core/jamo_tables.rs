//! 초성/중성/종성 자모 테이블 (호환용 자모 기준)
//!
//! 호환용 자음 영역(ㄱ U+3131 ~ ㅎ U+314E)에는 초성이 될 수 있는 자음과
//! 종성 전용 겹자음이 섞여 있으므로, 코드포인트 범위가 아닌 역인덱스
//! 테이블로 역할을 구분한다.

use lazy_static::lazy_static;

/// 호환용 자음 영역 시작 (ㄱ)
pub const COMPAT_CONSONANT_FIRST: char = 'ㄱ';
/// 호환용 자음 영역 끝 (ㅎ)
pub const COMPAT_CONSONANT_LAST: char = 'ㅎ';

/// 호환용 자음 영역 크기 (초성 19개 + 겹자음 11개)
const COMPAT_CONSONANT_COUNT: usize = 30;

/// 초성 (19개, 인덱스 순서)
pub const CHOSEONGS: [char; 19] = [
    'ㄱ', 'ㄲ', 'ㄴ', 'ㄷ', 'ㄸ', 'ㄹ', 'ㅁ', 'ㅂ', 'ㅃ', 'ㅅ', 'ㅆ', 'ㅇ', 'ㅈ', 'ㅉ', 'ㅊ', 'ㅋ',
    'ㅌ', 'ㅍ', 'ㅎ',
];

/// 중성 (21개, 인덱스 순서)
pub const JUNGSEONGS: [char; 21] = [
    'ㅏ', 'ㅐ', 'ㅑ', 'ㅒ', 'ㅓ', 'ㅔ', 'ㅕ', 'ㅖ', 'ㅗ', 'ㅘ', 'ㅙ', 'ㅚ', 'ㅛ', 'ㅜ', 'ㅝ', 'ㅞ',
    'ㅟ', 'ㅠ', 'ㅡ', 'ㅢ', 'ㅣ',
];

/// 종성 (28개, 0 = 종성 없음)
#[rustfmt::skip]
pub const JONGSEONGS: [Option<char>; 28] = [
    None,
    Some('ㄱ'), Some('ㄲ'), Some('ㄳ'), Some('ㄴ'), Some('ㄵ'), Some('ㄶ'), Some('ㄷ'),
    Some('ㄹ'), Some('ㄺ'), Some('ㄻ'), Some('ㄼ'), Some('ㄽ'), Some('ㄾ'), Some('ㄿ'),
    Some('ㅀ'), Some('ㅁ'), Some('ㅂ'), Some('ㅄ'), Some('ㅅ'), Some('ㅆ'), Some('ㅇ'),
    Some('ㅈ'), Some('ㅊ'), Some('ㅋ'), Some('ㅌ'), Some('ㅍ'), Some('ㅎ'),
];

/// 겹받침 분리 테이블: (겹받침, 앞 자음, 뒤 자음)
///
/// 앞/뒤 자음 모두 단독 초성으로 쓸 수 있는 자음이다.
pub const COMPOUND_JONGSEONGS: [(char, char, char); 11] = [
    ('ㄳ', 'ㄱ', 'ㅅ'),
    ('ㄵ', 'ㄴ', 'ㅈ'),
    ('ㄶ', 'ㄴ', 'ㅎ'),
    ('ㄺ', 'ㄹ', 'ㄱ'),
    ('ㄻ', 'ㄹ', 'ㅁ'),
    ('ㄼ', 'ㄹ', 'ㅂ'),
    ('ㄽ', 'ㄹ', 'ㅅ'),
    ('ㄾ', 'ㄹ', 'ㅌ'),
    ('ㄿ', 'ㄹ', 'ㅍ'),
    ('ㅀ', 'ㄹ', 'ㅎ'),
    ('ㅄ', 'ㅂ', 'ㅅ'),
];

lazy_static! {
    /// 호환용 자음 -> 초성 인덱스 (초성이 될 수 없으면 None)
    pub static ref CHOSEONG_REV: [Option<u32>; COMPAT_CONSONANT_COUNT] = {
        let mut rev = [None; COMPAT_CONSONANT_COUNT];
        for (index, jamo) in CHOSEONGS.iter().enumerate() {
            rev[compat_offset(*jamo)] = Some(index as u32);
        }
        rev
    };

    /// 호환용 자음 -> 종성 인덱스 (종성이 될 수 없으면 None)
    pub static ref JONGSEONG_REV: [Option<u32>; COMPAT_CONSONANT_COUNT] = {
        let mut rev = [None; COMPAT_CONSONANT_COUNT];
        for (index, jamo) in JONGSEONGS.iter().enumerate() {
            if let Some(jamo) = jamo {
                rev[compat_offset(*jamo)] = Some(index as u32);
            }
        }
        rev
    };
}

/// 호환용 자음 영역 내 오프셋 (영역 밖 문자는 호출 전에 걸러야 함)
fn compat_offset(jamo: char) -> usize {
    jamo as usize - COMPAT_CONSONANT_FIRST as usize
}

/// 호환용 자음 영역 내 오프셋 (영역 밖이면 None)
pub fn compat_consonant_offset(jamo: char) -> Option<usize> {
    if (COMPAT_CONSONANT_FIRST..=COMPAT_CONSONANT_LAST).contains(&jamo) {
        Some(compat_offset(jamo))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compat_block_size() {
        let size = COMPAT_CONSONANT_LAST as usize - COMPAT_CONSONANT_FIRST as usize + 1;
        assert_eq!(size, COMPAT_CONSONANT_COUNT);
    }

    #[test]
    fn test_block_is_partitioned() {
        // 영역 내 모든 자음은 초성이거나 겹받침 둘 중 하나
        for offset in 0..COMPAT_CONSONANT_COUNT {
            let is_choseong = CHOSEONG_REV[offset].is_some();
            let jamo = char::from_u32(COMPAT_CONSONANT_FIRST as u32 + offset as u32).unwrap();
            let is_compound = COMPOUND_JONGSEONGS.iter().any(|(c, _, _)| *c == jamo);
            assert!(is_choseong ^ is_compound, "{}", jamo);
        }
    }

    #[test]
    fn test_choseong_rev() {
        assert_eq!(CHOSEONG_REV[compat_offset('ㄱ')], Some(0));
        assert_eq!(CHOSEONG_REV[compat_offset('ㅎ')], Some(18));
        assert_eq!(CHOSEONG_REV[compat_offset('ㄳ')], None);
    }

    #[test]
    fn test_jongseong_rev() {
        assert_eq!(JONGSEONG_REV[compat_offset('ㄱ')], Some(1));
        assert_eq!(JONGSEONG_REV[compat_offset('ㄼ')], Some(11));
        assert_eq!(JONGSEONG_REV[compat_offset('ㅎ')], Some(27));
        // 쌍자음 중 종성 불가
        assert_eq!(JONGSEONG_REV[compat_offset('ㄸ')], None);
        assert_eq!(JONGSEONG_REV[compat_offset('ㅃ')], None);
        assert_eq!(JONGSEONG_REV[compat_offset('ㅉ')], None);
    }

    #[test]
    fn test_compound_parts_are_choseong() {
        for (_, first, second) in COMPOUND_JONGSEONGS {
            assert!(CHOSEONGS.contains(&first));
            assert!(CHOSEONGS.contains(&second));
        }
    }

    #[test]
    fn test_compat_consonant_offset() {
        assert_eq!(compat_consonant_offset('ㄱ'), Some(0));
        assert_eq!(compat_consonant_offset('ㅎ'), Some(29));
        assert_eq!(compat_consonant_offset('ㅏ'), None);
        assert_eq!(compat_consonant_offset('가'), None);
    }
}
