//! 패턴 문자열 출력기

use super::escape::push_escaped;
use super::fragment::{ChoseongRange, Fragment};
use crate::config::PatternOptions;

/// 한 글자 최대 UTF-8 바이트
const MAX_CHAR_BYTES: usize = 4;
/// 리터럴 단위 최대 길이: `(\` + 문자 + `)`
const LITERAL_UNIT_MAX: usize = MAX_CHAR_BYTES + 3;
/// 초성 확장 최대 길이: `(?:ㄱ|[가-깋])`
/// `(?:` 3 + 문자 3개 + `|[` `-` `])` 5
const CHOSEONG_UNIT_MAX: usize = 3 + 3 * MAX_CHAR_BYTES + 5;
/// 마지막 음절 최대 길이 (연결자 제외): `(?:(안)|(아)` + 초성 확장 + `)`
/// `(?:` 3 + `(` `)` `|` `(` `)` 5 + 닫는 `)` 1 + 여유 1, 음절 2개
const LAST_UNIT_MAX: usize = 10 + 2 * MAX_CHAR_BYTES + CHOSEONG_UNIT_MAX;

/// 출력 버퍼 크기 추정 (상한값)
///
/// 버퍼 재할당을 줄이기 위한 값일 뿐이며 결과 패턴에는 영향이 없다.
pub fn estimate_capacity(search: &str, options: &PatternOptions) -> usize {
    let count = search.chars().count();
    if count == 0 {
        return 0;
    }

    let mut connector = options.connector().len();
    if options.capturing && connector > 0 {
        connector += 2;
    }
    let unit = if options.match_choseong {
        2 * CHOSEONG_UNIT_MAX + connector
    } else {
        LITERAL_UNIT_MAX
    };

    (count - 1) * (unit + connector) + LAST_UNIT_MAX.max(2 * CHOSEONG_UNIT_MAX) + connector
}

/// 패턴 조각을 정규식 문자열로 출력
///
/// 캡처 모드에서는 매칭된 모든 문자가 정확히 하나의 캡처 그룹에 속한다.
/// 그룹 내용을 순서대로 이으면 전체 매칭 문자열과 같다.
pub struct PatternBuilder<'a> {
    out: String,
    connector: &'a str,
    capturing: bool,
}

impl<'a> PatternBuilder<'a> {
    pub fn new(connector: &'a str, capturing: bool, capacity: usize) -> Self {
        Self {
            out: String::with_capacity(capacity),
            connector,
            capturing,
        }
    }

    /// 글자 단위 사이 연결자
    pub fn push_connector(&mut self) {
        if self.connector.is_empty() {
            return;
        }
        if self.capturing {
            self.out.push('(');
            self.out.push_str(self.connector);
            self.out.push(')');
        } else {
            self.out.push_str(self.connector);
        }
    }

    pub fn push_fragment(&mut self, fragment: &Fragment) {
        match *fragment {
            Fragment::Literal(c) => self.push_atom(c),
            Fragment::Choseong(range) => self.push_choseong(range),
            Fragment::CombinedChoseong(first, second) => {
                self.push_choseong(first);
                self.push_connector();
                self.push_choseong(second);
            }
            Fragment::OpenSyllable {
                syllable,
                first,
                last,
            } => self.push_alternation(syllable, first, last),
            Fragment::SplitBatchim {
                syllable,
                stem,
                next,
            } => {
                self.out.push_str("(?:");
                self.push_atom(syllable);
                self.out.push('|');
                self.push_atom(stem);
                self.push_connector();
                self.push_choseong(next);
                self.out.push(')');
            }
        }
    }

    pub fn finish(self) -> String {
        self.out
    }

    /// 단일 문자 (캡처 모드면 그룹으로 감쌈)
    fn push_atom(&mut self, c: char) {
        if self.capturing {
            self.out.push('(');
            push_escaped(&mut self.out, c);
            self.out.push(')');
        } else {
            push_escaped(&mut self.out, c);
        }
    }

    fn push_choseong(&mut self, range: ChoseongRange) {
        self.push_alternation(range.jamo, range.first, range.last);
    }

    /// `(?:head|[first-last])`, 캡처 모드면 `(head|[first-last])`
    fn push_alternation(&mut self, head: char, first: char, last: char) {
        self.out.push_str(if self.capturing { "(" } else { "(?:" });
        self.out.push(head);
        self.out.push_str("|[");
        self.out.push(first);
        self.out.push('-');
        self.out.push(last);
        self.out.push_str("])");
    }
}
