//! 组件解析器抽象接口
//!
//! 提供按文本标识符解析组件和装配依赖的能力

use crate::capability::Capability;
use crate::registry::ComponentRegistration;
use infrastructure_common::DependencyError;
use std::any::Any;
use std::sync::Arc;
use tracing::debug;

/// 组件解析器 trait
///
/// 实现者只需提供 [`registration`](ComponentResolver::registration)，
/// 解析与装配由默认方法完成。
pub trait ComponentResolver {
    /// 查找标识符对应的注册信息
    fn registration(&self, identifier: &str) -> Result<&ComponentRegistration, DependencyError>;

    /// 检查是否可以解析指定标识符
    fn can_resolve(&self, identifier: &str) -> bool {
        self.registration(identifier).is_ok()
    }

    /// 使用零参数构造器解析组件
    fn resolve<C>(&self, identifier: &str) -> Result<Box<C>, DependencyError>
    where
        C: Capability + ?Sized,
    {
        let registration = self.checked_registration::<C>(identifier)?;
        debug!("解析组件: {} -> {}", identifier, C::capability_name());
        let instance = registration.instantiate()?;
        registration.downcast::<C>(instance)
    }

    /// 使用单依赖构造器解析组件
    fn resolve_with<C, D>(&self, identifier: &str, dependency: Arc<D>) -> Result<Box<C>, DependencyError>
    where
        C: Capability + ?Sized,
        D: Capability + ?Sized,
    {
        let registration = self.checked_registration::<C>(identifier)?;
        debug!(
            "解析组件: {} -> {}，构造器注入 {}",
            identifier,
            C::capability_name(),
            D::capability_name()
        );
        let instance = registration.instantiate_with(&dependency as &dyn Any, &D::info())?;
        registration.downcast::<C>(instance)
    }

    /// 通过属性 setter 把依赖注入到已解析的组件
    ///
    /// `target` 必须由同一标识符解析得到。
    fn inject<C, D>(
        &self,
        identifier: &str,
        target: &mut Box<C>,
        property: &str,
        dependency: Arc<D>,
    ) -> Result<(), DependencyError>
    where
        C: Capability + ?Sized,
        D: Capability + ?Sized,
    {
        let registration = self.checked_registration::<C>(identifier)?;
        debug!("属性注入: {}.{} <- {}", identifier, property, D::capability_name());
        registration.inject_property(
            target as &mut (dyn Any + Send + Sync),
            property,
            &dependency as &dyn Any,
            &D::info(),
        )
    }

    /// 查找注册信息并检查能力契约
    fn checked_registration<C>(&self, identifier: &str) -> Result<&ComponentRegistration, DependencyError>
    where
        C: Capability + ?Sized,
    {
        let registration = self.registration(identifier)?;
        if !registration.provides::<C>() {
            return Err(DependencyError::contract_mismatch(
                identifier,
                C::info().module_path,
            ));
        }
        Ok(registration)
    }
}

/// 解析上下文
///
/// 记录当前解析链，用于检测组件之间的循环引用。
#[derive(Debug, Clone, Default)]
pub struct ResolveContext {
    /// 当前解析链
    pub resolution_chain: Vec<String>,
}

impl ResolveContext {
    /// 创建新的解析上下文
    pub fn new() -> Self {
        Self::default()
    }

    /// 添加组件到解析链
    pub fn push(&mut self, name: &str) -> Result<(), DependencyError> {
        if self.resolution_chain.iter().any(|entry| entry == name) {
            let mut chain = self.resolution_chain.clone();
            chain.push(name.to_string());
            return Err(DependencyError::CircularDependency {
                dependency_chain: chain.join(" -> "),
            });
        }
        self.resolution_chain.push(name.to_string());
        Ok(())
    }

    /// 从解析链中移除最后一个组件
    pub fn pop(&mut self) {
        self.resolution_chain.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_context_detects_cycle() {
        let mut context = ResolveContext::new();
        context.push("metier").unwrap();
        context.push("dao").unwrap();

        let err = context.push("metier").unwrap_err();
        match err {
            DependencyError::CircularDependency { dependency_chain } => {
                assert_eq!(dependency_chain, "metier -> dao -> metier");
            }
            other => panic!("意外的错误类型: {other:?}"),
        }
    }

    #[test]
    fn test_resolve_context_pop_allows_revisit() {
        let mut context = ResolveContext::new();
        context.push("dao").unwrap();
        context.pop();
        assert!(context.push("dao").is_ok());
    }
}
