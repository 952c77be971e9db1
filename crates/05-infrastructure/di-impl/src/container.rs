//! 具名单例容器

use di_abstractions::{BeanDefinition, BeanLookup, Capability, Instance, ResolveContext};
use infrastructure_common::{DependencyError, TypeInfo};
use parking_lot::RwLock;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use tracing::{debug, info};

/// 容器中的单例
struct BeanEntry {
    /// 实现类型
    type_info: TypeInfo,
    /// 提供的能力
    capability: TypeInfo,
    /// 共享实例，内部为 `Arc<C>`
    instance: Instance,
}

impl BeanEntry {
    fn downcast<C: Capability + ?Sized>(&self, name: &str) -> Result<Arc<C>, DependencyError> {
        self.instance
            .downcast_ref::<Arc<C>>()
            .cloned()
            .ok_or_else(|| DependencyError::contract_mismatch(name, C::info().module_path))
    }
}

impl std::fmt::Debug for BeanEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BeanEntry")
            .field("type_info", &self.type_info)
            .field("capability", &self.capability)
            .finish_non_exhaustive()
    }
}

/// 具名单例容器
///
/// 刷新时按 bean 定义一次性创建所有单例，引用关系递归解析。
/// 任一 bean 创建失败时，本次刷新不会留下任何已创建的单例。
#[derive(Debug, Default)]
pub struct BeanContainer {
    /// 已创建的单例，按名称索引
    beans: RwLock<BTreeMap<String, BeanEntry>>,
}

impl BeanContainer {
    /// 创建空容器
    pub fn new() -> Self {
        Self::default()
    }

    /// 从 bean 定义创建容器
    pub fn from_definitions(definitions: Vec<BeanDefinition>) -> Result<Self, DependencyError> {
        let container = Self::new();
        container.refresh(definitions)?;
        Ok(container)
    }

    /// 注册外部创建的单例，名称已存在时失败
    pub fn register_singleton<T, C>(&self, name: &str, instance: Arc<C>) -> Result<(), DependencyError>
    where
        T: 'static,
        C: Capability + ?Sized,
    {
        let mut beans = self.beans.write();
        if beans.contains_key(name) {
            return Err(duplicate_bean(name));
        }

        info!("注册单例组件: {} ({})", name, std::any::type_name::<T>());
        beans.insert(
            name.to_string(),
            BeanEntry {
                type_info: TypeInfo::of::<T>(),
                capability: C::info(),
                instance: Box::new(instance),
            },
        );
        Ok(())
    }

    /// 按定义创建所有单例
    pub fn refresh(&self, definitions: Vec<BeanDefinition>) -> Result<(), DependencyError> {
        let mut order = Vec::with_capacity(definitions.len());
        let mut pending = HashMap::with_capacity(definitions.len());
        {
            let beans = self.beans.read();
            for definition in definitions {
                if pending.contains_key(&definition.name) || beans.contains_key(&definition.name) {
                    return Err(duplicate_bean(&definition.name));
                }
                order.push(definition.name.clone());
                pending.insert(definition.name.clone(), definition);
            }
        }

        let mut created = BTreeMap::new();
        for name in &order {
            let mut context = ResolveContext::new();
            self.create_bean(name, &pending, &mut created, &mut context)?;
        }

        let count = created.len();
        self.beans.write().extend(created);
        info!("容器刷新完成，创建了 {} 个单例", count);
        Ok(())
    }

    /// 已创建的单例数量
    pub fn len(&self) -> usize {
        self.beans.read().len()
    }

    /// 容器是否为空
    pub fn is_empty(&self) -> bool {
        self.beans.read().is_empty()
    }

    /// bean 的实现类型
    pub fn bean_type(&self, name: &str) -> Option<TypeInfo> {
        self.beans.read().get(name).map(|entry| entry.type_info.clone())
    }

    fn create_bean(
        &self,
        name: &str,
        definitions: &HashMap<String, BeanDefinition>,
        created: &mut BTreeMap<String, BeanEntry>,
        context: &mut ResolveContext,
    ) -> Result<(), DependencyError> {
        if created.contains_key(name) {
            return Ok(());
        }
        let Some(definition) = definitions.get(name) else {
            // 不在本次定义中的引用只能指向已有单例
            return if self.contains_bean(name) {
                Ok(())
            } else {
                Err(DependencyError::not_registered(name))
            };
        };

        context.push(name)?;
        for reference in definition.references() {
            self.create_bean(reference, definitions, created, context)?;
        }

        let registration = &definition.registration;
        let existing = self.beans.read();
        let lookup = |bean: &str| {
            created
                .get(bean)
                .or_else(|| existing.get(bean))
                .ok_or_else(|| DependencyError::not_registered(bean))
        };

        let mut instance = match &definition.constructor_ref {
            Some(reference) => {
                debug!("构造器注入: {} <- {}", name, reference);
                let dependency = lookup(reference)?;
                registration.instantiate_with(&*dependency.instance, &dependency.capability)?
            }
            None => registration.instantiate()?,
        };

        for property in &definition.properties {
            debug!("属性注入: {}.{} <- {}", name, property.name, property.bean);
            let dependency = lookup(&property.bean)?;
            registration.inject_property(
                instance.as_mut(),
                &property.name,
                &*dependency.instance,
                &dependency.capability,
            )?;
        }

        let entry = BeanEntry {
            type_info: registration.metadata().type_info.clone(),
            capability: registration.capability().clone(),
            instance: registration.share(instance)?,
        };
        drop(existing);

        info!(
            "创建单例组件: {} ({})",
            name,
            registration.metadata().type_info.module_path
        );
        created.insert(name.to_string(), entry);
        context.pop();
        Ok(())
    }
}

impl BeanLookup for BeanContainer {
    fn resolve<C>(&self) -> Result<Arc<C>, DependencyError>
    where
        C: Capability + ?Sized,
    {
        let beans = self.beans.read();
        let candidates: Vec<(&String, &BeanEntry)> = beans
            .iter()
            .filter(|(_, entry)| entry.capability.is::<C>())
            .collect();

        match candidates.as_slice() {
            [] => Err(DependencyError::not_registered(C::info().module_path)),
            [(name, entry)] => entry.downcast::<C>(name),
            many => Err(DependencyError::AmbiguousComponent {
                capability: C::capability_name(),
                candidates: many
                    .iter()
                    .map(|(name, _)| name.as_str())
                    .collect::<Vec<_>>()
                    .join(", "),
            }),
        }
    }

    fn resolve_by_name<C>(&self, name: &str) -> Result<Arc<C>, DependencyError>
    where
        C: Capability + ?Sized,
    {
        let beans = self.beans.read();
        let entry = beans
            .get(name)
            .ok_or_else(|| DependencyError::not_registered(name))?;
        if !entry.capability.is::<C>() {
            return Err(DependencyError::contract_mismatch(
                name,
                C::info().module_path,
            ));
        }
        entry.downcast::<C>(name)
    }

    fn contains_bean(&self, name: &str) -> bool {
        self.beans.read().contains_key(name)
    }

    fn bean_names(&self) -> Vec<String> {
        self.beans.read().keys().cloned().collect()
    }
}

fn duplicate_bean(name: &str) -> DependencyError {
    DependencyError::RegistrationError {
        type_name: name.to_string(),
        message: "bean 名称重复".to_string(),
    }
}
