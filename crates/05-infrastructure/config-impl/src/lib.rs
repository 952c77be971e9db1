//! # Configuration Implementation
//!
//! 配置读取的具体实现。
//!
//! ## 主要组件
//!
//! - [`TextConfigProvider`] - 文本类型清单提供者
//! - [`DescriptorConfigProvider`] - TOML / JSON / YAML bean 描述提供者
//! - [`AppSettings`] - 命令行程序的应用设置

pub mod providers;
pub mod settings;

pub use providers::*;
pub use settings::*;
