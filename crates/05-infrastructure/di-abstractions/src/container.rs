//! 依赖注入容器抽象接口
//!
//! 容器持有具名单例（bean），并按名称或按能力类型交付实例。

use crate::capability::Capability;
use crate::registry::ComponentRegistration;
use infrastructure_common::DependencyError;
use std::sync::Arc;

/// 容器查找契约
///
/// 描述式容器和注解式容器都必须满足此契约。
pub trait BeanLookup {
    /// 按能力类型解析唯一的 bean
    fn resolve<C>(&self) -> Result<Arc<C>, DependencyError>
    where
        C: Capability + ?Sized;

    /// 按名称解析 bean，并要求其提供指定能力
    fn resolve_by_name<C>(&self, name: &str) -> Result<Arc<C>, DependencyError>
    where
        C: Capability + ?Sized;

    /// 检查是否存在指定名称的 bean
    fn contains_bean(&self, name: &str) -> bool;

    /// 获取所有 bean 名称
    fn bean_names(&self) -> Vec<String>;
}

/// 属性引用：把名为 `bean` 的实例注入到属性 `name`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyRef {
    /// 属性名
    pub name: String,
    /// 被引用的 bean 名称
    pub bean: String,
}

/// bean 定义
#[derive(Debug, Clone)]
pub struct BeanDefinition {
    /// bean 名称
    pub name: String,
    /// 实现类型的注册信息
    pub registration: ComponentRegistration,
    /// 构造器注入引用的 bean 名称
    pub constructor_ref: Option<String>,
    /// 属性注入引用
    pub properties: Vec<PropertyRef>,
}

impl BeanDefinition {
    /// 创建新的 bean 定义
    pub fn new(name: impl Into<String>, registration: ComponentRegistration) -> Self {
        Self {
            name: name.into(),
            registration,
            constructor_ref: None,
            properties: Vec::new(),
        }
    }

    /// 设置构造器注入引用
    pub fn with_constructor_ref(mut self, bean: impl Into<String>) -> Self {
        self.constructor_ref = Some(bean.into());
        self
    }

    /// 添加属性注入引用
    pub fn with_property(mut self, name: impl Into<String>, bean: impl Into<String>) -> Self {
        self.properties.push(PropertyRef {
            name: name.into(),
            bean: bean.into(),
        });
        self
    }

    /// 此 bean 引用的所有其他 bean
    pub fn references(&self) -> impl Iterator<Item = &str> {
        self.constructor_ref
            .as_deref()
            .into_iter()
            .chain(self.properties.iter().map(|p| p.bean.as_str()))
    }
}
