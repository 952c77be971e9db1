//! 组件注册信息
//!
//! 注册信息把一个文本标识符映射到一组工厂函数：零参数构造器、单依赖构造器，
//! 以及按属性名注入依赖的 setter。工厂函数在注册时类型化，存储时擦除为 `Any`，
//! 解析时再按能力类型还原。

use crate::capability::Capability;
use crate::factory::{
    DefaultConstructor, DependentConstructor, Instance, PropertySetter, ShareFn,
};
use infrastructure_common::{ComponentMetadata, DependencyError, TypeInfo};
use std::any::Any;
use std::collections::BTreeMap;
use std::marker::PhantomData;
use std::sync::Arc;

/// 组件注册信息
#[derive(Clone)]
pub struct ComponentRegistration {
    /// 组件元数据
    metadata: ComponentMetadata,
    /// 零参数构造器
    default_constructor: Option<DefaultConstructor>,
    /// 单依赖构造器及其依赖类型
    dependent_constructor: Option<(TypeInfo, DependentConstructor)>,
    /// 属性注入器，按属性名索引
    properties: BTreeMap<String, (TypeInfo, PropertySetter)>,
    /// 把 `Box<C>` 实例转换为共享的 `Arc<C>`
    share: ShareFn,
}

impl std::fmt::Debug for ComponentRegistration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComponentRegistration")
            .field("metadata", &self.metadata)
            .field("default_constructor", &self.default_constructor.is_some())
            .field(
                "dependency",
                &self.dependent_constructor.as_ref().map(|(info, _)| info),
            )
            .field("properties", &self.properties.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl ComponentRegistration {
    /// 以具体类型的完整路径作为标识符，开始构建注册信息
    pub fn of<T, C>() -> RegistrationBuilder<C>
    where
        T: 'static,
        C: Capability + ?Sized,
    {
        Self::builder::<T, C>(std::any::type_name::<T>())
    }

    /// 以自定义标识符开始构建注册信息
    pub fn builder<T, C>(identifier: impl Into<String>) -> RegistrationBuilder<C>
    where
        T: 'static,
        C: Capability + ?Sized,
    {
        RegistrationBuilder {
            metadata: ComponentMetadata::new(identifier, TypeInfo::of::<T>(), C::info()),
            default_constructor: None,
            dependent_constructor: None,
            properties: BTreeMap::new(),
            _capability: PhantomData,
        }
    }

    /// 组件元数据
    pub fn metadata(&self) -> &ComponentMetadata {
        &self.metadata
    }

    /// 组件标识符
    pub fn identifier(&self) -> &str {
        &self.metadata.identifier
    }

    /// 组件提供的能力
    pub fn capability(&self) -> &TypeInfo {
        &self.metadata.capability
    }

    /// 是否提供指定能力
    pub fn provides<C: Capability + ?Sized>(&self) -> bool {
        self.metadata.capability.is::<C>()
    }

    /// 是否有零参数构造器
    pub fn has_default_constructor(&self) -> bool {
        self.default_constructor.is_some()
    }

    /// 单依赖构造器所需的依赖类型
    pub fn constructor_dependency(&self) -> Option<&TypeInfo> {
        self.dependent_constructor.as_ref().map(|(info, _)| info)
    }

    /// 指定属性所需的依赖类型
    pub fn property_dependency(&self, property: &str) -> Option<&TypeInfo> {
        self.properties.get(property).map(|(info, _)| info)
    }

    /// 所有可注入的属性名
    pub fn property_names(&self) -> impl Iterator<Item = &str> {
        self.properties.keys().map(String::as_str)
    }

    /// 使用零参数构造器创建实例
    pub fn instantiate(&self) -> Result<Instance, DependencyError> {
        let constructor = self.default_constructor.as_ref().ok_or_else(|| {
            DependencyError::creation_failed(self.identifier(), "没有零参数构造器")
        })?;
        constructor()
    }

    /// 使用单依赖构造器创建实例
    ///
    /// `dependency` 必须是 `Arc<D>`，且 `D` 与注册时声明的依赖类型一致。
    pub fn instantiate_with(
        &self,
        dependency: &dyn Any,
        dependency_type: &TypeInfo,
    ) -> Result<Instance, DependencyError> {
        let (expected, constructor) = self.dependent_constructor.as_ref().ok_or_else(|| {
            DependencyError::creation_failed(
                self.identifier(),
                format!("没有接受 {} 的构造器", dependency_type.short_name()),
            )
        })?;

        if expected != dependency_type {
            return Err(DependencyError::creation_failed(
                self.identifier(),
                format!(
                    "构造器需要 {}, 实际提供 {}",
                    expected.short_name(),
                    dependency_type.short_name()
                ),
            ));
        }

        constructor(dependency)
    }

    /// 通过属性 setter 注入依赖
    ///
    /// `target` 必须是本注册信息创建的实例，`dependency` 必须是 `Arc<D>`。
    pub fn inject_property(
        &self,
        target: &mut (dyn Any + Send + Sync),
        property: &str,
        dependency: &dyn Any,
        dependency_type: &TypeInfo,
    ) -> Result<(), DependencyError> {
        let (expected, setter) = self.properties.get(property).ok_or_else(|| {
            DependencyError::creation_failed(
                self.identifier(),
                format!("没有可注入的属性: {property}"),
            )
        })?;

        if expected != dependency_type {
            return Err(DependencyError::creation_failed(
                self.identifier(),
                format!(
                    "属性 {property} 需要 {}, 实际提供 {}",
                    expected.short_name(),
                    dependency_type.short_name()
                ),
            ));
        }

        setter(target, dependency)
    }

    /// 把实例转换为可共享的 `Arc<C>`（仍以 `Any` 存储）
    pub fn share(&self, instance: Instance) -> Result<Instance, DependencyError> {
        (self.share)(instance).map_err(|_| {
            DependencyError::contract_mismatch(
                self.identifier(),
                self.metadata.capability.module_path.clone(),
            )
        })
    }

    /// 把实例还原为能力类型
    pub fn downcast<C: Capability + ?Sized>(
        &self,
        instance: Instance,
    ) -> Result<Box<C>, DependencyError> {
        instance
            .downcast::<Box<C>>()
            .map(|boxed| *boxed)
            .map_err(|_| DependencyError::contract_mismatch(self.identifier(), C::info().module_path))
    }
}

/// 注册信息构建器
///
/// 构建器在能力类型 `C` 上类型化，保证所有工厂函数产出同一能力。
pub struct RegistrationBuilder<C: Capability + ?Sized> {
    metadata: ComponentMetadata,
    default_constructor: Option<DefaultConstructor>,
    dependent_constructor: Option<(TypeInfo, DependentConstructor)>,
    properties: BTreeMap<String, (TypeInfo, PropertySetter)>,
    _capability: PhantomData<fn() -> Box<C>>,
}

impl<C: Capability + ?Sized> RegistrationBuilder<C> {
    /// 注册零参数构造器
    pub fn constructor<F>(mut self, constructor: F) -> Self
    where
        F: Fn() -> Result<Box<C>, DependencyError> + Send + Sync + 'static,
    {
        self.default_constructor = Some(Arc::new(move || {
            constructor().map(|instance| Box::new(instance) as Instance)
        }));
        self
    }

    /// 注册接受单个依赖的构造器
    pub fn constructor_with<D, F>(mut self, constructor: F) -> Self
    where
        D: Capability + ?Sized,
        F: Fn(Arc<D>) -> Result<Box<C>, DependencyError> + Send + Sync + 'static,
    {
        let identifier = self.metadata.identifier.clone();
        let erased: DependentConstructor = Arc::new(move |dependency: &dyn Any| {
            let dependency = dependency.downcast_ref::<Arc<D>>().ok_or_else(|| {
                DependencyError::contract_mismatch(identifier.clone(), D::info().module_path)
            })?;
            constructor(Arc::clone(dependency)).map(|instance| Box::new(instance) as Instance)
        });
        self.dependent_constructor = Some((D::info(), erased));
        self
    }

    /// 注册属性 setter
    pub fn property<D, F>(mut self, name: impl Into<String>, setter: F) -> Self
    where
        D: Capability + ?Sized,
        F: Fn(&mut C, Arc<D>) + Send + Sync + 'static,
    {
        let identifier = self.metadata.identifier.clone();
        let erased: PropertySetter = Arc::new(
            move |target: &mut (dyn Any + Send + Sync), dependency: &dyn Any| {
                let target = target.downcast_mut::<Box<C>>().ok_or_else(|| {
                    DependencyError::contract_mismatch(identifier.clone(), C::info().module_path)
                })?;
                let dependency = dependency.downcast_ref::<Arc<D>>().ok_or_else(|| {
                    DependencyError::contract_mismatch(identifier.clone(), D::info().module_path)
                })?;
                setter(&mut **target, Arc::clone(dependency));
                Ok(())
            },
        );
        self.properties.insert(name.into(), (D::info(), erased));
        self
    }

    /// 设置描述
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.metadata = self.metadata.with_description(description);
        self
    }

    /// 完成构建
    pub fn build(self) -> ComponentRegistration {
        ComponentRegistration {
            metadata: self.metadata,
            default_constructor: self.default_constructor,
            dependent_constructor: self.dependent_constructor,
            properties: self.properties,
            share: share::<C>,
        }
    }
}

fn share<C: Capability + ?Sized>(instance: Instance) -> Result<Instance, Instance> {
    instance
        .downcast::<Box<C>>()
        .map(|boxed| Box::new(Arc::<C>::from(*boxed)) as Instance)
}

#[cfg(test)]
mod tests {
    use super::*;

    trait Source: Send + Sync + std::fmt::Debug {
        fn value(&self) -> f64;
    }

    impl Capability for dyn Source {}

    trait Sink: Send + Sync + std::fmt::Debug {
        fn total(&self) -> Option<f64>;
        fn attach(&mut self, source: Arc<dyn Source>);
    }

    impl Capability for dyn Sink {}

    #[derive(Debug)]
    struct Fixed(f64);

    impl Source for Fixed {
        fn value(&self) -> f64 {
            self.0
        }
    }

    #[derive(Debug, Default)]
    struct Doubler {
        source: Option<Arc<dyn Source>>,
    }

    impl Sink for Doubler {
        fn total(&self) -> Option<f64> {
            self.source.as_ref().map(|s| s.value() * 2.0)
        }

        fn attach(&mut self, source: Arc<dyn Source>) {
            self.source = Some(source);
        }
    }

    fn doubler_registration() -> ComponentRegistration {
        ComponentRegistration::of::<Doubler, dyn Sink>()
            .constructor(|| Ok(Box::new(Doubler::default()) as Box<dyn Sink>))
            .constructor_with::<dyn Source, _>(|source| {
                Ok(Box::new(Doubler {
                    source: Some(source),
                }) as Box<dyn Sink>)
            })
            .property::<dyn Source, _>("source", |sink, source| sink.attach(source))
            .build()
    }

    #[test]
    fn test_identifier_defaults_to_type_path() {
        let registration = doubler_registration();
        assert!(registration.identifier().ends_with("::Doubler"));
        assert!(registration.provides::<dyn Sink>());
        assert!(!registration.provides::<dyn Source>());
    }

    #[test]
    fn test_instantiate_and_downcast() {
        let registration = doubler_registration();
        let instance = registration.instantiate().unwrap();
        let sink = registration.downcast::<dyn Sink>(instance).unwrap();
        assert_eq!(sink.total(), None);
    }

    #[test]
    fn test_downcast_to_wrong_capability_fails() {
        let registration = doubler_registration();
        let instance = registration.instantiate().unwrap();
        let err = registration.downcast::<dyn Source>(instance).unwrap_err();
        assert!(matches!(err, DependencyError::ContractMismatch { .. }));
    }

    #[test]
    fn test_instantiate_with_dependency() {
        let registration = doubler_registration();
        let source: Arc<dyn Source> = Arc::new(Fixed(4.0));
        let instance = registration
            .instantiate_with(&source, &<dyn Source>::info())
            .unwrap();
        let sink = registration.downcast::<dyn Sink>(instance).unwrap();
        assert_eq!(sink.total(), Some(8.0));
    }

    #[test]
    fn test_instantiate_with_wrong_dependency_type() {
        let registration = doubler_registration();
        let source: Arc<dyn Source> = Arc::new(Fixed(4.0));
        let err = registration
            .instantiate_with(&source, &<dyn Sink>::info())
            .unwrap_err();
        assert!(matches!(err, DependencyError::ComponentCreationFailed { .. }));
    }

    #[test]
    fn test_inject_property() {
        let registration = doubler_registration();
        let mut instance = registration.instantiate().unwrap();
        let source: Arc<dyn Source> = Arc::new(Fixed(1.5));
        registration
            .inject_property(instance.as_mut(), "source", &source, &<dyn Source>::info())
            .unwrap();
        let sink = registration.downcast::<dyn Sink>(instance).unwrap();
        assert_eq!(sink.total(), Some(3.0));
    }

    #[test]
    fn test_unknown_property_is_rejected() {
        let registration = doubler_registration();
        let mut instance = registration.instantiate().unwrap();
        let source: Arc<dyn Source> = Arc::new(Fixed(1.5));
        let err = registration
            .inject_property(instance.as_mut(), "missing", &source, &<dyn Source>::info())
            .unwrap_err();
        assert!(matches!(err, DependencyError::ComponentCreationFailed { .. }));
    }

    #[test]
    fn test_inject_property_wrong_dependency_type() {
        let registration = doubler_registration();
        let mut instance = registration.instantiate().unwrap();
        let source: Arc<dyn Source> = Arc::new(Fixed(1.5));
        let err = registration
            .inject_property(instance.as_mut(), "source", &source, &<dyn Sink>::info())
            .unwrap_err();
        assert!(matches!(err, DependencyError::ComponentCreationFailed { .. }));
        assert!(err.to_string().contains("source"));
    }

    #[test]
    fn test_missing_default_constructor() {
        let registration = ComponentRegistration::of::<Fixed, dyn Source>().build();
        let err = registration.instantiate().unwrap_err();
        assert!(matches!(err, DependencyError::ComponentCreationFailed { .. }));
    }

    #[test]
    fn test_share_produces_arc() {
        let registration = doubler_registration();
        let instance = registration.instantiate().unwrap();
        let shared = registration.share(instance).unwrap();
        assert!(shared.downcast_ref::<Arc<dyn Sink>>().is_some());
    }
}
