//! # Dependency Injection Abstractions
//!
//! 依赖注入抽象层，定义组件注册和依赖解析的核心接口。
//!
//! ## 核心接口
//!
//! - [`Capability`] - 能力契约标记
//! - [`ComponentRegistration`] - 组件注册信息（标识符到工厂函数的映射）
//! - [`ComponentResolver`] - 依赖解析器接口
//! - [`BeanLookup`] - 容器查找契约（按名称、按能力）
//! - [`ComponentScanner`] - 注解组件扫描器接口

pub mod capability;
pub mod container;
pub mod factory;
pub mod registry;
pub mod resolver;
pub mod scanner;

pub use capability::*;
pub use container::*;
pub use factory::*;
pub use registry::*;
pub use resolver::*;
pub use scanner::*;
