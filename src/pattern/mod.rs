//! 한글 초성/조합 중 입력 검색용 정규식 패턴 생성

mod builder;
mod compiler;
mod escape;
mod fragment;

pub use builder::estimate_capacity;
pub use compiler::{compile, get_pattern};
pub use escape::should_escape;
pub use fragment::{ChoseongRange, Fragment};
