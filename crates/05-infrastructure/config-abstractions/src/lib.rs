//! # Configuration Abstractions
//!
//! 配置抽象层，定义装配配置的数据结构和读取接口。
//!
//! ## 核心接口
//!
//! - [`ConfigProvider`] - 配置提供者接口
//! - [`TypeListProvider`] - 文本类型清单（每行一个实现标识符）
//! - [`ContainerDescriptorProvider`] - 结构化 bean 描述文件

pub mod descriptor;
pub mod provider;

pub use descriptor::*;
pub use provider::*;
