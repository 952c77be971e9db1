//! 注解组件扫描
//!
//! `#[component]` 宏在程序启动时把组件登记到全局注解注册表，
//! 扫描器再按包名（模块路径片段）筛选出需要交给容器的 bean 定义。

use crate::container::BeanDefinition;
use crate::registry::ComponentRegistration;
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use tracing::debug;

/// 注解组件
///
/// 由 `#[component]` 宏生成，字段均为编译期常量。
#[derive(Debug, Clone, Copy)]
pub struct AnnotatedComponent {
    /// bean 名称
    pub name: &'static str,
    /// 声明组件的模块路径
    pub module_path: &'static str,
    /// 构造器注入引用的 bean 名称
    pub qualifier: Option<&'static str>,
    /// 注册信息工厂
    pub registration: fn() -> ComponentRegistration,
}

impl AnnotatedComponent {
    /// 检查组件是否位于指定包中
    ///
    /// 包名可以是单个模块名（如 `dao`），也可以是模块路径前缀（如 `core_domain::dao`）。
    pub fn in_package(&self, package: &str) -> bool {
        let package = package.trim_matches(':');
        if package.is_empty() {
            return false;
        }
        if package.contains("::") {
            return self.module_path == package
                || self
                    .module_path
                    .strip_prefix(package)
                    .is_some_and(|rest| rest.starts_with("::"));
        }
        self.module_path.split("::").any(|segment| segment == package)
    }

    /// 转换为 bean 定义
    pub fn to_definition(&self) -> BeanDefinition {
        let definition = BeanDefinition::new(self.name, (self.registration)());
        match self.qualifier {
            Some(qualifier) => definition.with_constructor_ref(qualifier),
            None => definition,
        }
    }
}

/// 全局注解注册表
static ANNOTATED_COMPONENTS: Lazy<RwLock<Vec<AnnotatedComponent>>> =
    Lazy::new(|| RwLock::new(Vec::new()));

/// 登记注解组件（由 `#[component]` 宏在启动时调用）
pub fn register_annotated(component: AnnotatedComponent) {
    ANNOTATED_COMPONENTS.write().push(component);
}

/// 获取所有已登记的注解组件
pub fn annotated_components() -> Vec<AnnotatedComponent> {
    ANNOTATED_COMPONENTS.read().clone()
}

/// 组件扫描器 trait
pub trait ComponentScanner {
    /// 扫描指定包中的组件
    fn scan(&self, packages: &[&str]) -> Vec<BeanDefinition>;

    /// 获取扫描器名称
    fn name(&self) -> &str;
}

/// 基于全局注解注册表的包扫描器
#[derive(Debug, Default, Clone, Copy)]
pub struct PackageScanner;

impl ComponentScanner for PackageScanner {
    fn scan(&self, packages: &[&str]) -> Vec<BeanDefinition> {
        let mut components: Vec<AnnotatedComponent> = annotated_components()
            .into_iter()
            .filter(|component| packages.iter().any(|package| component.in_package(package)))
            .collect();
        // 启动时的登记顺序不确定，按名称排序保证扫描结果稳定
        components.sort_by_key(|component| component.name);

        debug!(
            "扫描包 {:?}，发现 {} 个组件",
            packages,
            components.len()
        );
        components.iter().map(AnnotatedComponent::to_definition).collect()
    }

    fn name(&self) -> &str {
        "PackageScanner"
    }
}
