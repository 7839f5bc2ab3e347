//! 核心基础设施：位置追踪与字符源

pub mod position;
pub mod source;

pub use position::SourcePosition;
pub use source::{CharSource, RawChar};
