//! Platform - 平台适配层
//!
//! 所有终端输出都在这里实现

pub mod cli;

pub use cli::{print_read_error, print_report, print_value, Report};
