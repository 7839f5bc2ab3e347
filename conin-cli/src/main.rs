//! Conin CLI - Command line interface
//!
//! Reads typed values from standard input, one read operation per argument:
//!
//! ```text
//! $ printf '42 ignored\nhello world\n' | conin int-ln word line
//! 42
//! hello
//! world
//! ```

use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::process;

mod config;
mod ops;
mod platform;

use crate::config::{build_config, read_profile, Overrides, Profile};
use crate::ops::ReadOp;
use crate::platform::{print_read_error, print_report, print_value, Report};
use conin::{CharDecoding, LineEndingPolicy, LogFormat, Phase, ReadError};

/// 输出格式
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// 每个值一行
    Text,
    /// 结束时输出一个 JSON 报告
    Json,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum LineEndingArg {
    Strict,
    Lenient,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum DecodingArg {
    Utf8,
    Latin1,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[derive(Parser)]
#[command(
    name = "conin",
    about = "Read typed values from standard input",
    version = "0.1.0"
)]
struct Cli {
    /// Read operations, applied in order
    #[arg(value_name = "OP", required = true, value_enum)]
    ops: Vec<ReadOp>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Legacy byte-at-a-time preset: Latin-1 decoding, strict line endings
    #[arg(long)]
    legacy: bool,

    /// Line ending policy (default: strict)
    #[arg(long, value_enum)]
    line_endings: Option<LineEndingArg>,

    /// Input decoding (default: utf8)
    #[arg(long, value_enum)]
    decoding: Option<DecodingArg>,

    /// Log level: silent, error, warn, info, debug, trace
    #[arg(long)]
    log_level: Option<String>,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormatArg::Compact)]
    log_format: LogFormatArg,

    /// Also append logs to this file
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,

    /// JSON configuration file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

/// CR 后没有 LF：与旧版异常退出的状态码一致
const EXIT_MALFORMED_LINE_ENDING: i32 = 1;
const EXIT_END_OF_INPUT: i32 = 2;
const EXIT_NUMBER_FORMAT: i32 = 3;
const EXIT_IO_OR_CONFIG: i32 = 4;

fn main() {
    let cli = Cli::parse();

    let profile = match &cli.config {
        Some(path) => match read_profile(path) {
            Ok(p) => p,
            Err(e) => {
                eprintln!("Error: {}", e);
                process::exit(EXIT_IO_OR_CONFIG);
            }
        },
        None => Profile::default(),
    };

    let overrides = Overrides {
        legacy: cli.legacy,
        line_endings: cli.line_endings.map(|arg| match arg {
            LineEndingArg::Strict => LineEndingPolicy::Strict,
            LineEndingArg::Lenient => LineEndingPolicy::Lenient,
        }),
        decoding: cli.decoding.map(|arg| match arg {
            DecodingArg::Utf8 => CharDecoding::Utf8,
            DecodingArg::Latin1 => CharDecoding::Latin1,
        }),
        log_level: cli.log_level.clone(),
    };

    let config = match build_config(&profile, &overrides) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(EXIT_IO_OR_CONFIG);
        }
    };

    let log_file = cli
        .log_file
        .clone()
        .or_else(|| profile.log_file.as_ref().map(PathBuf::from));

    if let Err(e) = init(config, log_format(cli.log_format), log_file) {
        eprintln!("Error: {}", e);
        process::exit(EXIT_IO_OR_CONFIG);
    }

    if conin::logger::is_enabled(Phase::Cli) {
        let op_names: Vec<String> = cli.ops.iter().map(|op| op.name()).collect();
        tracing::debug!(
            target: "conin::cli",
            ops = ?op_names,
            tokenizer = ?conin::tokenizer_config(),
            "Starting"
        );
    }
    let code = run(&cli.ops, cli.format);
    process::exit(code);
}

fn init(
    config: conin::Config,
    format: LogFormat,
    log_file: Option<PathBuf>,
) -> Result<(), conin::ConfigError> {
    conin::config::try_init(config)?;
    conin::logger::init_with_file(format, log_file)
}

fn log_format(arg: LogFormatArg) -> LogFormat {
    match arg {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    }
}

/// 依次执行所有操作，返回退出码
fn run(ops: &[ReadOp], format: OutputFormat) -> i32 {
    let mut input = conin::stdin();
    let mut report = Report::default();

    for &op in ops {
        match op.apply(&mut input) {
            Ok(value) => match format {
                OutputFormat::Text => print_value(&value),
                OutputFormat::Json => report.push(op, value),
            },
            Err(e) => {
                tracing::debug!(target: "conin::cli", op = %op.name(), error = %e, "Operation failed");
                match format {
                    OutputFormat::Text => print_read_error(op, &e),
                    OutputFormat::Json => {
                        report.fail(op, &e);
                        print_report(&report);
                    }
                }
                return exit_code(&e);
            }
        }
    }

    if format == OutputFormat::Json {
        print_report(&report);
    }
    0
}

fn exit_code(e: &ReadError) -> i32 {
    match e {
        ReadError::MalformedLineEnding { .. } => EXIT_MALFORMED_LINE_ENDING,
        ReadError::EndOfInput => EXIT_END_OF_INPUT,
        ReadError::NumberFormat { .. } => EXIT_NUMBER_FORMAT,
        ReadError::Io(_) => EXIT_IO_OR_CONFIG,
    }
}
