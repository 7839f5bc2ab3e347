//! 工具包

pub mod tokenizer;
