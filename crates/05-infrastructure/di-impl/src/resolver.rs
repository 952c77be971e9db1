//! 基于注册表的类型解析器

use di_abstractions::{ComponentRegistration, ComponentResolver};
use infrastructure_common::DependencyError;
use std::collections::BTreeMap;
use tracing::{debug, info};

/// 类型解析器
///
/// 持有标识符到注册信息的封闭映射表，注册表在启动时一次性构建。
#[derive(Debug, Default, Clone)]
pub struct TypeResolver {
    /// 组件注册信息，按标识符索引
    registrations: BTreeMap<String, ComponentRegistration>,
}

impl TypeResolver {
    /// 创建空的解析器
    pub fn new() -> Self {
        Self::default()
    }

    /// 从注册信息列表创建解析器
    pub fn from_registrations(
        registrations: impl IntoIterator<Item = ComponentRegistration>,
    ) -> Result<Self, DependencyError> {
        let mut resolver = Self::new();
        for registration in registrations {
            resolver.register(registration)?;
        }
        info!("类型解析器构建完成，注册了 {} 个组件", resolver.len());
        Ok(resolver)
    }

    /// 注册组件
    ///
    /// 标识符重复时返回注册错误。
    pub fn register(&mut self, registration: ComponentRegistration) -> Result<(), DependencyError> {
        let identifier = registration.identifier().to_string();
        if self.registrations.contains_key(&identifier) {
            return Err(DependencyError::RegistrationError {
                type_name: identifier,
                message: "标识符已注册".to_string(),
            });
        }

        debug!(
            "注册组件: {} ({})",
            identifier,
            registration.capability().short_name()
        );
        self.registrations.insert(identifier, registration);
        Ok(())
    }

    /// 已注册组件数量
    pub fn len(&self) -> usize {
        self.registrations.len()
    }

    /// 注册表是否为空
    pub fn is_empty(&self) -> bool {
        self.registrations.is_empty()
    }

    /// 所有已注册的标识符
    pub fn identifiers(&self) -> impl Iterator<Item = &str> {
        self.registrations.keys().map(String::as_str)
    }
}

impl ComponentResolver for TypeResolver {
    fn registration(&self, identifier: &str) -> Result<&ComponentRegistration, DependencyError> {
        self.registrations
            .get(identifier)
            .ok_or_else(|| DependencyError::not_registered(identifier))
    }
}
