//! # Core Domain
//!
//! 两个能力契约及其参考实现：
//!
//! - [`DataCapability`] - 数据访问能力，参考实现 [`DatabaseDao`]
//! - [`ComputationCapability`] - 业务计算能力，参考实现 [`MetierImpl`]
//! - [`SensorDao`] - 扩展包中的另一种数据访问实现
//!
//! 所有实现都用 `#[component]` 标注，注解容器按包名扫描即可发现它们。

pub mod dao;
pub mod ext;
pub mod metier;

pub use dao::*;
pub use ext::*;
pub use metier::*;
