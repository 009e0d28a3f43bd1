//! 정규식 메타문자 이스케이프

/// 앞에 백슬래시를 붙여야 하는 정규식 메타문자
const REGEX_METACHARACTERS: [char; 12] =
    ['.', '^', '$', '*', '+', '?', '(', ')', '[', '{', '\\', '|'];

/// 정규식 메타문자인지 확인
pub fn should_escape(c: char) -> bool {
    REGEX_METACHARACTERS.contains(&c)
}

/// 필요하면 백슬래시를 붙여 문자 추가
pub fn push_escaped(out: &mut String, c: char) {
    if should_escape(c) {
        out.push('\\');
    }
    out.push(c);
}
