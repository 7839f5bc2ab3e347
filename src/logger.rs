//! 日志系统初始化
//!
//! 基于 `tracing` 和 `tracing-subscriber` 实现分阶段日志控制。
//!
//! # 使用示例
//! ```ignore
//! use conin::config::{Config, init};
//! use conin::logger::init_logger;
//!
//! init(Config::default());
//! init_logger()?;
//! ```

use std::io;
use tracing_subscriber::{
    filter::Targets, fmt, layer::SubscriberExt, util::SubscriberInitExt, Layer,
};

use crate::config::{self, ConfigError, LogConfig};
use conin_config::Phase;

/// 日志输出格式
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// 彩色格式化（开发使用）
    #[default]
    Pretty,
    /// 紧凑格式
    Compact,
    /// JSON 格式（工具集成）
    Json,
}

/// 初始化日志系统
///
/// 使用全局配置中的日志级别；全局配置未初始化时使用默认级别。
pub fn init_logger() -> Result<(), ConfigError> {
    init_with_format(LogFormat::default())
}

/// 使用指定格式初始化日志系统
pub fn init_with_format(format: LogFormat) -> Result<(), ConfigError> {
    init_with_file(format, None::<&str>)
}

/// 使用文件输出初始化日志系统
///
/// # Arguments
/// * `format` - 控制台日志格式
/// * `file` - 日志文件路径，None 表示只输出到控制台
pub fn init_with_file<P: AsRef<std::path::Path>>(
    format: LogFormat,
    file: Option<P>,
) -> Result<(), ConfigError> {
    let default_log = LogConfig::default();
    let cfg = config::get().map_or(&default_log, |c| &c.log);
    let targets = targets_for(cfg);

    // 日志写到 stderr，stdout 留给读取结果
    let console_layer = create_format_layer(format, io::stderr).with_filter(targets.clone());

    let file_layer = match file {
        Some(path) => {
            let path = path.as_ref();
            let file_handle = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|source| ConfigError::LogFile {
                    path: path.display().to_string(),
                    source,
                })?;
            Some(
                fmt::layer()
                    .with_ansi(false)
                    .with_writer(std::sync::Mutex::new(file_handle))
                    .with_filter(targets),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .map_err(|_| ConfigError::LoggerAlreadySet)
}

/// 构建各阶段的目标过滤器
pub fn targets_for(cfg: &LogConfig) -> Targets {
    Phase::ALL
        .iter()
        .fold(Targets::new().with_default(cfg.global), |targets, phase| {
            targets.with_target(phase.target(), cfg.level_for(*phase))
        })
}

/// 根据格式创建 formatter layer
fn create_format_layer<W, F>(
    format: LogFormat,
    make_writer: F,
) -> Box<dyn Layer<tracing_subscriber::Registry> + Send + Sync>
where
    W: io::Write + Send + Sync + 'static,
    F: Fn() -> W + Send + Sync + 'static,
{
    match format {
        LogFormat::Pretty => fmt::layer()
            .pretty()
            .with_target(true)
            .with_timer(fmt::time::time())
            .with_writer(make_writer)
            .boxed(),
        LogFormat::Compact => fmt::layer()
            .compact()
            .with_target(false)
            .without_time()
            .with_writer(make_writer)
            .boxed(),
        LogFormat::Json => fmt::layer()
            .json()
            .with_target(true)
            .with_timer(fmt::time::time())
            .with_writer(make_writer)
            .boxed(),
    }
}

/// 为测试初始化简单日志（DEBUG 级别，输出由测试框架捕获）
///
/// 可重复调用；已经设置过全局日志时什么也不做。
pub fn init_test_logger() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

/// 检查指定阶段的日志是否启用（DEBUG 级别）
#[inline]
pub fn is_enabled(phase: Phase) -> bool {
    match phase {
        Phase::Source => tracing::enabled!(target: "conin::source", tracing::Level::DEBUG),
        Phase::Tokenizer => tracing::enabled!(target: "conin::tokenizer", tracing::Level::DEBUG),
        Phase::Parser => tracing::enabled!(target: "conin::parser", tracing::Level::DEBUG),
        Phase::Cli => tracing::enabled!(target: "conin::cli", tracing::Level::DEBUG),
    }
}
