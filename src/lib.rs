//! Conin - typed console input
//!
//! Reads bytes, shorts, ints, longs, floats, doubles, characters, words and
//! whole lines from standard input (or any `std::io::Read`), treating LF and
//! CR LF as one logical end of line.
//!
//! # Architecture
//!
//! ```text
//! conin-config/  - Pure configuration data
//! conin-core/    - Character source, tokenizer, typed parsers
//! src/           - Global config, logging setup, stdin binding
//! conin-cli/     - `conin` command line front end
//! ```
//!
//! # Quick Start
//!
//! ```no_run
//! let mut input = conin::stdin();
//! let age = input.read_int_ln()?;
//! let name = input.read_line()?;
//! println!("{name} is {age}");
//! # Ok::<(), conin::ReadError>(())
//! ```

pub mod config;
pub mod logger;

// 重导出常用类型
pub use config::{Config, ConfigError, LogConfig};
pub use conin_config::{CharDecoding, LineEndingPolicy, Phase, TokenizerConfig};
pub use conin_core::{
    is_separator, parse_word, LineEnding, LineTokenizer, RawChar, ReadError, ReadResult,
    SourcePosition, Terminator, Word,
};
pub use logger::{init_logger, LogFormat};

/// 初始化（使用前先调用）
///
/// 只初始化配置，不初始化日志系统。
///
/// # Example
/// ```ignore
/// use conin::{init, Config};
///
/// init(Config::default());
/// ```
pub fn init(config: Config) {
    config::init(config);
}

/// 初始化配置和日志系统
///
/// # Example
/// ```ignore
/// use conin::{init_with_logger, Config, LogFormat};
///
/// init_with_logger(Config::default(), LogFormat::Compact)?;
/// ```
pub fn init_with_logger(config: Config, format: LogFormat) -> Result<(), ConfigError> {
    config::try_init(config)?;
    logger::init_with_format(format)
}

/// 当前生效的分词器配置（全局配置未初始化时为默认值）
pub fn tokenizer_config() -> TokenizerConfig {
    config::get().map(|c| c.tokenizer).unwrap_or_default()
}

/// 绑定到标准输入的分词器
///
/// 使用全局配置中的分词器设置。同一进程中应只创建一个，
/// 否则各实例的缓冲区会互相抢读输入。
pub fn stdin() -> LineTokenizer<std::io::Stdin> {
    LineTokenizer::stdin_with_config(tokenizer_config())
}
