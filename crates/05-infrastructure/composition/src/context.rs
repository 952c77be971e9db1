//! 容器上下文
//!
//! 两种加载方式向同一种 [`BeanContainer`] 填充单例：
//!
//! - [`DescriptorContext`] 读取 bean 描述文件，按 `type` 在注册表中查找实现
//! - [`AnnotationContext`] 扫描 `#[component]` 标注的组件

use config_abstractions::{ContainerDescriptor, ContainerDescriptorProvider};
use config_impl::DescriptorConfigProvider;
use di_abstractions::{
    BeanDefinition, BeanLookup, Capability, ComponentResolver, ComponentScanner, PackageScanner,
};
use di_impl::{BeanContainer, TypeResolver};
use infrastructure_common::{DependencyError, InfrastructureError};
use std::path::Path;
use std::sync::Arc;
use tracing::info;

/// 描述文件驱动的容器上下文
#[derive(Debug)]
pub struct DescriptorContext {
    container: BeanContainer,
}

impl DescriptorContext {
    /// 加载描述文件并创建所有 bean
    pub fn load<P: AsRef<Path>>(
        path: P,
        resolver: &TypeResolver,
    ) -> Result<Self, InfrastructureError> {
        let provider = DescriptorConfigProvider::new(path.as_ref())?;
        let descriptor = provider.read_container_descriptor()?;
        info!("加载 bean 描述文件: {}", path.as_ref().display());
        Ok(Self::from_descriptor(&descriptor, resolver)?)
    }

    /// 从已解析的描述创建所有 bean
    pub fn from_descriptor(
        descriptor: &ContainerDescriptor,
        resolver: &TypeResolver,
    ) -> Result<Self, DependencyError> {
        let definitions = descriptor
            .beans
            .iter()
            .map(|bean| {
                let registration = resolver.registration(&bean.type_name)?.clone();
                let definition = BeanDefinition::new(bean.id.clone(), registration);
                let definition = match &bean.constructor_ref {
                    Some(reference) => definition.with_constructor_ref(reference.clone()),
                    None => definition,
                };
                Ok(bean
                    .properties
                    .iter()
                    .fold(definition, |definition, (property, reference)| {
                        definition.with_property(property.clone(), reference.clone())
                    }))
            })
            .collect::<Result<Vec<_>, DependencyError>>()?;

        Ok(Self {
            container: BeanContainer::from_definitions(definitions)?,
        })
    }

    /// 底层容器
    pub fn container(&self) -> &BeanContainer {
        &self.container
    }
}

/// 注解驱动的容器上下文
#[derive(Debug)]
pub struct AnnotationContext {
    container: BeanContainer,
    packages: Vec<String>,
}

impl AnnotationContext {
    /// 扫描指定包并创建所有 bean
    pub fn scan(packages: &[&str]) -> Result<Self, DependencyError> {
        Self::scan_with(&PackageScanner, packages)
    }

    /// 使用指定扫描器扫描
    pub fn scan_with<S: ComponentScanner>(
        scanner: &S,
        packages: &[&str],
    ) -> Result<Self, DependencyError> {
        let definitions = scanner.scan(packages);
        info!(
            "{} 在 {:?} 中发现 {} 个组件",
            scanner.name(),
            packages,
            definitions.len()
        );
        Ok(Self {
            container: BeanContainer::from_definitions(definitions)?,
            packages: packages.iter().map(|package| package.to_string()).collect(),
        })
    }

    /// 扫描过的包
    pub fn packages(&self) -> &[String] {
        &self.packages
    }

    /// 底层容器
    pub fn container(&self) -> &BeanContainer {
        &self.container
    }
}

macro_rules! delegate_lookup {
    ($context:ty) => {
        impl BeanLookup for $context {
            fn resolve<C>(&self) -> Result<Arc<C>, DependencyError>
            where
                C: Capability + ?Sized,
            {
                self.container.resolve::<C>()
            }

            fn resolve_by_name<C>(&self, name: &str) -> Result<Arc<C>, DependencyError>
            where
                C: Capability + ?Sized,
            {
                self.container.resolve_by_name::<C>(name)
            }

            fn contains_bean(&self, name: &str) -> bool {
                self.container.contains_bean(name)
            }

            fn bean_names(&self) -> Vec<String> {
                self.container.bean_names()
            }
        }
    };
}

delegate_lookup!(DescriptorContext);
delegate_lookup!(AnnotationContext);
