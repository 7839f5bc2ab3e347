//! CLI 配置
//!
//! 可选的 JSON 配置文件，与命令行参数合并为最终的全局配置。
//! 命令行参数优先于配置文件。

use std::path::Path;

use conin::config::parse_level;
use conin::{CharDecoding, Config, LineEndingPolicy, LogConfig, TokenizerConfig};
use serde::Deserialize;

/// 配置文件结构
///
/// ```json
/// {
///   "tokenizer": { "line_endings": "lenient", "decoding": "latin1" },
///   "log_level": "debug",
///   "log_file": "conin.log"
/// }
/// ```
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Profile {
    /// 分词器配置
    pub tokenizer: TokenizerConfig,
    /// 日志级别: "silent", "error", "warn", "info", "debug", "trace"
    pub log_level: Option<String>,
    /// 日志文件路径
    pub log_file: Option<String>,
}

/// 命令行上的覆盖项
#[derive(Debug, Default)]
pub struct Overrides {
    /// 以旧版逐字节行为（Latin-1，严格行尾）为起点，忽略配置文件中的分词器设置
    pub legacy: bool,
    pub line_endings: Option<LineEndingPolicy>,
    pub decoding: Option<CharDecoding>,
    pub log_level: Option<String>,
}

/// 读取并解析配置文件
pub fn read_profile(path: &Path) -> Result<Profile, String> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("Cannot read '{}': {}", path.display(), e))?;
    parse_profile(&content).map_err(|e| format!("Invalid config '{}': {}", path.display(), e))
}

/// 解析配置文件内容
pub fn parse_profile(content: &str) -> Result<Profile, serde_json::Error> {
    serde_json::from_str(content)
}

/// 合并配置文件与命令行参数
pub fn build_config(profile: &Profile, overrides: &Overrides) -> Result<Config, String> {
    let mut tokenizer = if overrides.legacy {
        TokenizerConfig::legacy()
    } else {
        profile.tokenizer
    };
    if let Some(policy) = overrides.line_endings {
        tokenizer.line_endings = policy;
    }
    if let Some(decoding) = overrides.decoding {
        tokenizer.decoding = decoding;
    }

    let log = match overrides.log_level.as_ref().or(profile.log_level.as_ref()) {
        Some(level) => LogConfig::with_global(parse_level(level).map_err(|e| e.to_string())?),
        None => LogConfig::default(),
    };

    Ok(Config { log, tokenizer })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::Level;

    #[test]
    fn test_parse_empty_profile() {
        let profile = parse_profile("{}").unwrap();
        assert_eq!(profile.tokenizer, TokenizerConfig::default());
        assert!(profile.log_level.is_none());
    }

    #[test]
    fn test_parse_full_profile() {
        let profile = parse_profile(
            r#"{
                "tokenizer": { "line_endings": "lenient", "decoding": "latin1" },
                "log_level": "debug",
                "log_file": "conin.log"
            }"#,
        )
        .unwrap();
        assert_eq!(profile.tokenizer.line_endings, LineEndingPolicy::Lenient);
        assert_eq!(profile.tokenizer.decoding, CharDecoding::Latin1);
        assert_eq!(profile.log_file.as_deref(), Some("conin.log"));
    }

    #[test]
    fn test_parse_profile_rejects_unknown_policy() {
        assert!(parse_profile(r#"{ "tokenizer": { "line_endings": "mac" } }"#).is_err());
    }

    #[test]
    fn test_overrides_win() {
        let profile = Profile {
            tokenizer: TokenizerConfig::default().with_line_endings(LineEndingPolicy::Lenient),
            log_level: Some("debug".to_string()),
            log_file: None,
        };
        let overrides = Overrides {
            line_endings: Some(LineEndingPolicy::Strict),
            log_level: Some("trace".to_string()),
            ..Default::default()
        };
        let config = build_config(&profile, &overrides).unwrap();
        assert_eq!(config.tokenizer.line_endings, LineEndingPolicy::Strict);
        assert_eq!(config.log.global, Level::TRACE);
    }

    #[test]
    fn test_legacy_preset() {
        let profile = Profile {
            tokenizer: TokenizerConfig::default().with_line_endings(LineEndingPolicy::Lenient),
            ..Default::default()
        };
        let legacy = Overrides {
            legacy: true,
            ..Default::default()
        };
        let config = build_config(&profile, &legacy).unwrap();
        assert_eq!(config.tokenizer, TokenizerConfig::legacy());

        let legacy_lenient = Overrides {
            legacy: true,
            line_endings: Some(LineEndingPolicy::Lenient),
            ..Default::default()
        };
        let config = build_config(&profile, &legacy_lenient).unwrap();
        assert_eq!(config.tokenizer.decoding, CharDecoding::Latin1);
        assert_eq!(config.tokenizer.line_endings, LineEndingPolicy::Lenient);
    }

    #[test]
    fn test_profile_level_used_without_override() {
        let profile = Profile {
            log_level: Some("info".to_string()),
            ..Default::default()
        };
        let config = build_config(&profile, &Overrides::default()).unwrap();
        assert_eq!(config.log.global, Level::INFO);
    }

    #[test]
    fn test_bad_log_level() {
        let overrides = Overrides {
            log_level: Some("verbose".to_string()),
            ..Default::default()
        };
        let err = build_config(&Profile::default(), &overrides).unwrap_err();
        assert!(err.contains("verbose"));
    }

    #[test]
    fn test_read_missing_profile() {
        let err = read_profile(Path::new("definitely/missing/conin.json")).unwrap_err();
        assert!(err.contains("Cannot read"));
    }
}
