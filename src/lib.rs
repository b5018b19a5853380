// src/lib.rs
pub mod error;
pub mod filter;

pub use error::*;

pub use filter::{filter_file, filter_stream, FilterConfig, FilterStats, SuffixSet};
