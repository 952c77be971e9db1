//! 组件工厂
//!
//! 工厂函数在注册时类型化，存储时擦除为以下函数类型。

use crate::capability::Capability;
use infrastructure_common::DependencyError;
use std::any::Any;
use std::sync::Arc;

/// 类型擦除后的组件实例，内部保存 `Box<C>` 或共享后的 `Arc<C>`
pub type Instance = Box<dyn Any + Send + Sync>;

/// 零参数构造器
pub type DefaultConstructor = Arc<dyn Fn() -> Result<Instance, DependencyError> + Send + Sync>;

/// 单依赖构造器，参数为 `Arc<D>`
pub type DependentConstructor =
    Arc<dyn Fn(&dyn Any) -> Result<Instance, DependencyError> + Send + Sync>;

/// 属性 setter，第一个参数为 `Box<C>`，第二个参数为 `Arc<D>`
pub type PropertySetter = Arc<
    dyn Fn(&mut (dyn Any + Send + Sync), &dyn Any) -> Result<(), DependencyError> + Send + Sync,
>;

/// 把 `Box<C>` 转换为 `Arc<C>`，失败时原样返回
pub type ShareFn = fn(Instance) -> Result<Instance, Instance>;

/// 可注入组件 trait
///
/// 通过构造器接收单个依赖的组件实现此 trait，
/// 注解组件的 `qualifier` 参数据此生成构造器注入。
pub trait Injectable: Sized {
    /// 构造器所需的依赖能力
    type Dependency: Capability + ?Sized;

    /// 使用依赖构建组件实例
    fn inject(dependency: Arc<Self::Dependency>) -> Self;
}
