//! 한글 자모/음절 코덱

pub mod jamo_tables;
pub mod unicode;
