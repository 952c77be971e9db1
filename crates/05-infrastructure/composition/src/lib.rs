//! # 基础设施组合层
//!
//! 把领域组件、配置读取和依赖注入实现组合成可运行的装配流程。
//!
//! ## 主要功能
//!
//! - **标准注册表**: 所有可按文本标识符实例化的实现
//! - **容器上下文**: 描述文件驱动和注解驱动两种容器加载方式
//! - **装配驱动**: 静态、两阶段、单阶段、容器等装配方式，输出 `RES=<值>`
//! - **组合构建器**: 组装注册表并初始化日志
//!
//! ## 基本使用
//!
//! ```rust,no_run
//! use infrastructure_composition::{render_report, CompositionBuilder, ReflectMode};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let driver = CompositionBuilder::new().build()?;
//!     let result = driver.run_from_file("config.txt", ReflectMode::TwoPhase);
//!     println!("{}", render_report(&result));
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod catalog;
pub mod context;
pub mod driver;

// 重新导出主要类型
pub use builder::{CompositionBuilder, LoggingConfig};
pub use catalog::{standard_registrations, standard_resolver, DAO_PROPERTY};
pub use context::{AnnotationContext, DescriptorContext};
pub use driver::{render_report, ReflectMode, WiringDriver, WiringOutcome};

// 重新导出错误类型
pub use infrastructure_common::InfrastructureError;
