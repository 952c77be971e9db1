//! # 依赖注入具体实现
//!
//! 提供基于注册表的类型解析器和具名单例容器。
//!
//! - [`TypeResolver`] - 启动时构建的封闭注册表，按文本标识符实例化组件
//! - [`BeanContainer`] - 持有具名单例，按名称或能力类型交付实例

pub mod container;
pub mod resolver;

pub use container::*;
pub use resolver::*;
