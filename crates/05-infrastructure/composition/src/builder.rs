//! 组合构建器

use crate::catalog::standard_registrations;
use crate::driver::WiringDriver;
use config_impl::LoggingSettings;
use di_abstractions::ComponentRegistration;
use di_impl::TypeResolver;
use infrastructure_common::{ConfigError, InfrastructureError};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// 组合构建器
///
/// 使用建造者模式组装注册表和日志系统，产出 [`WiringDriver`]
pub struct CompositionBuilder {
    /// 额外的组件注册信息
    registrations: Vec<ComponentRegistration>,
    /// 是否包含标准组件
    include_standard: bool,
    /// 是否启用日志初始化
    logging_enabled: bool,
    /// 日志配置
    logging_config: LoggingConfig,
}

impl CompositionBuilder {
    /// 创建新的组合构建器
    pub fn new() -> Self {
        Self {
            registrations: Vec::new(),
            include_standard: true,
            logging_enabled: false, // 默认不启用日志初始化
            logging_config: LoggingConfig::default(),
        }
    }

    /// 添加组件注册信息
    pub fn register(mut self, registration: ComponentRegistration) -> Self {
        debug!("添加组件注册: {}", registration.identifier());
        self.registrations.push(registration);
        self
    }

    /// 是否包含标准组件
    pub fn with_standard_components(mut self, include: bool) -> Self {
        self.include_standard = include;
        self
    }

    /// 启用日志初始化
    pub fn with_logging(mut self, config: LoggingConfig) -> Self {
        self.logging_enabled = true;
        self.logging_config = config;
        self
    }

    /// 构建装配驱动
    pub fn build(self) -> Result<WiringDriver, InfrastructureError> {
        if self.logging_enabled {
            self.logging_config.initialize()?;
        }

        let registrations = if self.include_standard {
            let mut all = standard_registrations();
            all.extend(self.registrations);
            all
        } else {
            self.registrations
        };

        let resolver = TypeResolver::from_registrations(registrations)?;
        info!("装配驱动构建完成");
        Ok(WiringDriver::new(resolver))
    }
}

impl Default for CompositionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// 日志配置
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// 日志级别
    pub level: tracing::Level,
    /// 是否显示目标
    pub show_target: bool,
    /// 是否使用JSON格式
    pub json_format: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: tracing::Level::INFO,
            show_target: false,
            json_format: false,
        }
    }
}

impl LoggingConfig {
    /// 从应用设置创建日志配置，无法识别的级别返回解析错误
    pub fn from_settings(settings: &LoggingSettings) -> Result<Self, ConfigError> {
        Ok(Self {
            level: settings.level.parse().map_err(ConfigError::parse_error)?,
            show_target: settings.show_target,
            json_format: settings.json,
        })
    }

    /// 覆盖日志级别
    pub fn with_level(mut self, level: tracing::Level) -> Self {
        self.level = level;
        self
    }

    /// 初始化日志系统
    ///
    /// 日志写到标准错误，标准输出只留给结果报告。`RUST_LOG` 优先于配置的级别。
    pub fn initialize(&self) -> Result<(), InfrastructureError> {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(self.level.to_string().to_ascii_lowercase()));

        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(self.show_target)
            .with_writer(std::io::stderr);

        if self.json_format {
            subscriber.json().try_init()
        } else {
            subscriber.try_init()
        }
        .map_err(|e| InfrastructureError::BootstrapFailed {
            message: format!("日志初始化失败: {}", e),
        })?;

        debug!("日志系统初始化完成");
        Ok(())
    }
}
