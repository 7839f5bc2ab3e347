//! CLI 格式化输出
//!
//! 提供命令行友好的结果输出与错误显示。

use conin::ReadError;
use serde::Serialize;

use crate::ops::{ReadOp, Value};

/// 单个操作的输出记录
#[derive(Debug, Serialize)]
pub struct Entry {
    pub op: String,
    pub value: Value,
}

/// 错误的输出记录
#[derive(Debug, Serialize)]
pub struct ErrorEntry {
    pub op: String,
    pub kind: &'static str,
    pub message: String,
}

/// JSON 格式的完整输出
#[derive(Debug, Default, Serialize)]
pub struct Report {
    pub values: Vec<Entry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorEntry>,
}

impl Report {
    pub fn push(&mut self, op: ReadOp, value: Value) {
        self.values.push(Entry {
            op: op.name(),
            value,
        });
    }

    pub fn fail(&mut self, op: ReadOp, e: &ReadError) {
        self.error = Some(ErrorEntry {
            op: op.name(),
            kind: e.kind(),
            message: e.to_string(),
        });
    }
}

/// 文本格式：每个值一行，无值的操作不输出
pub fn print_value(value: &Value) {
    if value.is_some() {
        println!("{value}");
    }
}

/// 打印 JSON 报告
pub fn print_report(report: &Report) {
    match serde_json::to_string_pretty(report) {
        Ok(json) => println!("{json}"),
        Err(e) => eprintln!("❌ Cannot serialize report: {e}"),
    }
}

/// 打印读取错误及提示
pub fn print_read_error(op: ReadOp, e: &ReadError) {
    eprintln!("❌ {}: {}", op.name(), e);
    if let Some(hint) = hint_for(e) {
        eprintln!("   hint: {hint}");
    }
}

fn hint_for(e: &ReadError) -> Option<&'static str> {
    match e {
        ReadError::MalformedLineEnding { .. } => {
            Some("input uses bare CR line endings; try --line-endings lenient")
        }
        ReadError::NumberFormat { .. } => Some("the word read did not match the requested type"),
        ReadError::EndOfInput => Some("input ended before every operation could run"),
        ReadError::Io(_) => None,
    }
}
