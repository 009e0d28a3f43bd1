//! 입력 한 글자에 대응하는 패턴 조각
//!
//! 조각은 필요한 음절/자모를 모두 미리 계산해 두고,
//! 실제 문자열 출력은 `PatternBuilder`가 담당한다.

use crate::core::jamo_tables::{CHOSEONGS, JONGSEONGS};
use crate::core::unicode::{
    choseong_index, compose_syllable, decompose_syllable, jongseong_index,
    split_compound_jongseong, JONGSEONG_COUNT, JUNGSEONG_COUNT,
};

/// 초성 하나로 시작하는 모든 음절 범위
///
/// 예: ㄱ -> `ㄱ` 또는 `[가-깋]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChoseongRange {
    /// 낱자모 초성
    pub jamo: char,
    /// 중성 ㅏ, 종성 없음
    pub first: char,
    /// 중성 ㅣ, 종성 ㅎ
    pub last: char,
}

impl ChoseongRange {
    /// 초성 인덱스로 생성 (0~18)
    pub fn from_index(choseong: u32) -> Option<Self> {
        Some(Self {
            jamo: *CHOSEONGS.get(choseong as usize)?,
            first: compose_syllable(choseong, 0, 0)?,
            last: compose_syllable(choseong, JUNGSEONG_COUNT - 1, JONGSEONG_COUNT - 1)?,
        })
    }

    /// 호환용 자모로 생성 (초성이 될 수 없으면 None)
    pub fn from_jamo(jamo: char) -> Option<Self> {
        Self::from_index(choseong_index(jamo)?)
    }
}

/// 패턴 조각
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fragment {
    /// 그대로 매칭 (메타문자는 이스케이프)
    Literal(char),
    /// 낱자음 초성 확장
    Choseong(ChoseongRange),
    /// 겹자음을 두 초성으로 나눠 연속 확장 (ㄼ -> ㄹ 다음 ㅂ)
    CombinedChoseong(ChoseongRange, ChoseongRange),
    /// 받침 없는 마지막 음절: 그대로이거나 받침이 붙은 형태
    OpenSyllable {
        syllable: char,
        /// 같은 초성+중성, 종성 ㄱ
        first: char,
        /// 같은 초성+중성, 종성 ㅎ
        last: char,
    },
    /// 받침 있는 마지막 음절: 그대로이거나, 받침(또는 겹받침의 뒤 자음)이
    /// 다음 글자의 초성으로 넘어간 형태
    SplitBatchim {
        syllable: char,
        /// 넘어간 자음을 뺀 음절
        stem: char,
        /// 다음 글자 초성
        next: ChoseongRange,
    },
}

impl Fragment {
    /// 입력의 마지막 완성형 음절 (아직 조합 중일 수 있음)
    pub fn last_syllable(syllable: char) -> Option<Self> {
        let (cho, jung, jong) = decompose_syllable(syllable)?;

        if jong == 0 {
            return Some(Fragment::OpenSyllable {
                syllable,
                first: compose_syllable(cho, jung, 1)?,
                last: compose_syllable(cho, jung, JONGSEONG_COUNT - 1)?,
            });
        }

        // 단일 받침은 통째로, 겹받침은 뒤 자음만 다음 초성으로 넘어감
        let batchim = (*JONGSEONGS.get(jong as usize)?)?;
        let (rest, next) = match choseong_index(batchim) {
            Some(next) => (0, next),
            None => {
                let (first, second) = split_compound_jongseong(batchim);
                (jongseong_index(first)?, choseong_index(second)?)
            }
        };

        Some(Fragment::SplitBatchim {
            syllable,
            stem: compose_syllable(cho, jung, rest)?,
            next: ChoseongRange::from_index(next)?,
        })
    }

    /// 초성 불가 겹자음 (ㄳ, ㄼ 등)
    ///
    /// 겹자음이 아닌 자모는 호출 전에 걸러야 한다.
    pub fn combined_choseong(compound: char) -> Option<Self> {
        let (first, second) = split_compound_jongseong(compound);
        Some(Fragment::CombinedChoseong(
            ChoseongRange::from_jamo(first)?,
            ChoseongRange::from_jamo(second)?,
        ))
    }
}
