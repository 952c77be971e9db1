//! 错误类型定义

use thiserror::Error;

/// 配置错误类型
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置文件不存在: {path}")]
    FileNotFound { path: String },

    #[error("配置文件读取失败: {source}")]
    FileReadError {
        #[from]
        source: std::io::Error,
    },

    #[error("配置文件 {path} 缺少第 {line} 行")]
    MissingLine { path: String, line: usize },

    #[error("配置解析失败: {source}")]
    ParseError {
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("不支持的配置格式: {path}")]
    UnsupportedFormat { path: String },
}

impl ConfigError {
    /// 创建解析错误
    pub fn parse_error(source: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::ParseError {
            source: Box::new(source),
        }
    }
}

/// 依赖注入错误类型
#[derive(Error, Debug)]
pub enum DependencyError {
    #[error("组件未注册: {type_name}")]
    ComponentNotRegistered { type_name: String },

    #[error("契约不匹配: {type_name} 未实现 {capability}")]
    ContractMismatch {
        type_name: String,
        capability: String,
    },

    #[error("组件创建失败: {type_name}, 原因: {source}")]
    ComponentCreationFailed {
        type_name: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("依赖未注入: {component} 缺少 {dependency}")]
    UnwiredDependency {
        component: String,
        dependency: String,
    },

    #[error("组件不唯一: {capability} 有多个候选 [{candidates}]")]
    AmbiguousComponent {
        capability: String,
        candidates: String,
    },

    #[error("循环依赖检测到: {dependency_chain}")]
    CircularDependency { dependency_chain: String },

    #[error("组件注册失败: {type_name}, 原因: {message}")]
    RegistrationError { type_name: String, message: String },
}

impl DependencyError {
    /// 创建组件未注册错误
    pub fn not_registered(type_name: impl Into<String>) -> Self {
        Self::ComponentNotRegistered {
            type_name: type_name.into(),
        }
    }

    /// 创建契约不匹配错误
    pub fn contract_mismatch(type_name: impl Into<String>, capability: impl Into<String>) -> Self {
        Self::ContractMismatch {
            type_name: type_name.into(),
            capability: capability.into(),
        }
    }

    /// 创建组件创建失败错误
    pub fn creation_failed(type_name: impl Into<String>, message: impl Into<String>) -> Self {
        let message: String = message.into();
        Self::ComponentCreationFailed {
            type_name: type_name.into(),
            source: message.into(),
        }
    }

    /// 创建依赖未注入错误
    pub fn unwired(component: impl Into<String>, dependency: impl Into<String>) -> Self {
        Self::UnwiredDependency {
            component: component.into(),
            dependency: dependency.into(),
        }
    }
}

/// 基础设施错误类型
#[derive(Error, Debug)]
pub enum InfrastructureError {
    #[error("配置错误: {source}")]
    ConfigError {
        #[from]
        source: ConfigError,
    },

    #[error("依赖注入错误: {source}")]
    DependencyError {
        #[from]
        source: DependencyError,
    },

    #[error("基础设施启动失败: {message}")]
    BootstrapFailed { message: String },
}

/// 结果类型别名
pub type ConfigResult<T> = Result<T, ConfigError>;
pub type DependencyResult<T> = Result<T, DependencyError>;
pub type InfrastructureResult<T> = Result<T, InfrastructureError>;
