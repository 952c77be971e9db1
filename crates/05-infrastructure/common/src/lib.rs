//! # Infrastructure Common
//!
//! 基础设施层的公共类型：错误分类与类型元数据。
//!
//! - [`ConfigError`] - 配置读取错误
//! - [`DependencyError`] - 类型解析、契约匹配、实例化与注入错误
//! - [`TypeInfo`] / [`ComponentMetadata`] - 组件与能力的类型信息

pub mod errors;
pub mod metadata;

pub use errors::*;
pub use metadata::*;
