//! 应用设置
//!
//! 设置来源按优先级从低到高：内置默认值、设置文件、`PRESENTATION_*` 环境变量
//! （嵌套键用 `__` 分隔，如 `PRESENTATION_LOGGING__LEVEL`）。

use infrastructure_common::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// 环境变量前缀
pub const ENV_PREFIX: &str = "PRESENTATION";

/// 默认设置文件名（不含扩展名）
pub const DEFAULT_SETTINGS_NAME: &str = "presentation";

/// 应用设置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// 文本类型清单路径
    pub config_path: PathBuf,
    /// bean 描述文件路径
    pub descriptor_path: PathBuf,
    /// 注解扫描的包
    pub packages: Vec<String>,
    /// 日志设置
    pub logging: LoggingSettings,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            config_path: PathBuf::from("config.txt"),
            descriptor_path: PathBuf::from("config.toml"),
            packages: vec!["ext".to_string(), "dao".to_string(), "metier".to_string()],
            logging: LoggingSettings::default(),
        }
    }
}

/// 日志设置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// 日志级别
    pub level: String,
    /// 是否输出 JSON 格式
    pub json: bool,
    /// 是否显示目标
    pub show_target: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
            show_target: false,
        }
    }
}

impl AppSettings {
    /// 加载设置
    ///
    /// 指定 `file` 时该文件必须存在；否则在当前目录查找可选的 `presentation.{toml,json,yaml}`。
    pub fn load(file: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = config::Config::builder();

        builder = match file {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfigError::FileNotFound {
                        path: path.display().to_string(),
                    });
                }
                debug!("加载设置文件: {}", path.display());
                builder.add_source(config::File::from(path).required(true))
            }
            None => builder.add_source(config::File::with_name(DEFAULT_SETTINGS_NAME).required(false)),
        };

        let settings = builder
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .map_err(ConfigError::parse_error)?;

        let settings: Self = settings
            .try_deserialize()
            .map_err(ConfigError::parse_error)?;
        debug!("应用设置: {:?}", settings);
        Ok(settings)
    }

    /// 注解扫描包名的借用视图
    pub fn package_refs(&self) -> Vec<&str> {
        self.packages.iter().map(String::as_str).collect()
    }
}
