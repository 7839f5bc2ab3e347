//! 全局配置系统
//!
//! 提供线程安全的全局配置单例，包含日志级别与分词器配置。
//!
//! # 使用示例
//! ```
//! use conin::config::{Config, LogConfig, try_init, config};
//! use tracing::Level;
//!
//! let cfg = Config {
//!     log: LogConfig {
//!         global: Level::DEBUG,
//!         ..Default::default()
//!     },
//!     ..Default::default()
//! };
//!
//! try_init(cfg).unwrap();
//! assert_eq!(config().log.global, Level::DEBUG);
//! ```

use conin_config::{Phase, TokenizerConfig};
use once_cell::sync::OnceCell;
use tracing::Level;

static GLOBAL_CONFIG: OnceCell<Config> = OnceCell::new();

/// 配置错误
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config already initialized")]
    AlreadyInitialized,

    #[error("Unknown log level '{0}' (expected silent, error, warn, info, debug or trace)")]
    UnknownLogLevel(String),

    #[error("Cannot open log file '{path}': {source}")]
    LogFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Logger already installed")]
    LoggerAlreadySet,
}

/// 初始化全局配置（必须在任何操作前调用一次）
///
/// # Panics
/// 如果配置已经初始化，会 panic
pub fn init(config: Config) {
    GLOBAL_CONFIG
        .set(config)
        .expect("Config already initialized");
}

/// 初始化全局配置，已初始化时返回错误
pub fn try_init(config: Config) -> Result<(), ConfigError> {
    GLOBAL_CONFIG
        .set(config)
        .map_err(|_| ConfigError::AlreadyInitialized)
}

/// 获取全局配置引用
///
/// # Panics
/// 如果配置未初始化，会 panic
pub fn config() -> &'static Config {
    GLOBAL_CONFIG.get().expect("Config not initialized")
}

/// 获取全局配置引用（未初始化时为 None）
pub fn get() -> Option<&'static Config> {
    GLOBAL_CONFIG.get()
}

/// 检查配置是否已初始化
pub fn is_initialized() -> bool {
    GLOBAL_CONFIG.get().is_some()
}

/// 全局配置结构
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// 日志配置
    pub log: LogConfig,
    /// 分词器配置
    pub tokenizer: TokenizerConfig,
}

/// 日志配置
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// 全局默认日志级别
    pub global: Level,
    /// 字符源日志级别（None 表示使用 global）
    pub source: Option<Level>,
    /// 分词器日志级别
    pub tokenizer: Option<Level>,
    /// 数值解析日志级别
    pub parser: Option<Level>,
    /// CLI 日志级别
    pub cli: Option<Level>,
}

impl LogConfig {
    /// 获取指定阶段的实际日志级别
    ///
    /// 如果该阶段有特定配置则返回特定级别，否则返回全局级别
    pub fn level_for(&self, phase: Phase) -> Level {
        let specific = match phase {
            Phase::Source => self.source,
            Phase::Tokenizer => self.tokenizer,
            Phase::Parser => self.parser,
            Phase::Cli => self.cli,
        };
        specific.unwrap_or(self.global)
    }

    /// 所有阶段使用同一级别
    pub fn with_global(level: Level) -> Self {
        Self {
            global: level,
            ..Default::default()
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            global: Level::WARN,
            source: None,
            tokenizer: None,
            parser: None,
            cli: None,
        }
    }
}

/// 解析日志级别字符串
///
/// "silent" 等同于 "error"
pub fn parse_level(s: &str) -> Result<Level, ConfigError> {
    match s.to_lowercase().as_str() {
        "silent" | "error" => Ok(Level::ERROR),
        "warn" => Ok(Level::WARN),
        "info" => Ok(Level::INFO),
        "debug" => Ok(Level::DEBUG),
        "trace" => Ok(Level::TRACE),
        _ => Err(ConfigError::UnknownLogLevel(s.to_string())),
    }
}
