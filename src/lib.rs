pub mod config;
pub mod core;
pub mod error;
pub mod pattern;

pub use config::{load_options, PatternOptions};
pub use error::PatternError;
pub use pattern::{compile, estimate_capacity, get_pattern};
