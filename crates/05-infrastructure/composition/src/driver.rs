//! 装配与调用驱动
//!
//! 读取配置、解析并装配组件、调用计算，最后把结果渲染为一行报告。

use crate::catalog::DAO_PROPERTY;
use crate::context::{AnnotationContext, DescriptorContext};
use config_abstractions::{ConfigurationDescriptor, TypeListProvider};
use config_impl::TextConfigProvider;
use core_domain::dao::{DataCapability, DatabaseDao};
use core_domain::metier::{ComputationCapability, MetierImpl};
use di_abstractions::{BeanLookup, ComponentResolver};
use di_impl::TypeResolver;
use infrastructure_common::InfrastructureError;
use std::fmt;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// 注册表驱动装配的方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReflectMode {
    /// 先无参构造业务实现，再通过属性 setter 注入
    #[default]
    TwoPhase,
    /// 通过单依赖构造器一次完成
    SinglePhase,
    /// 只解析数据访问实现并读取数据
    DataOnly,
}

/// 装配结果
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WiringOutcome {
    /// 计算（或读取）得到的值
    pub value: f64,
}

impl fmt::Display for WiringOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RES={:?}", self.value)
    }
}

/// 把一次装配的结果渲染为报告行
pub fn render_report(result: &Result<WiringOutcome, InfrastructureError>) -> String {
    match result {
        Ok(outcome) => outcome.to_string(),
        Err(e) => e.to_string(),
    }
}

/// 装配驱动
#[derive(Debug, Clone)]
pub struct WiringDriver {
    resolver: TypeResolver,
}

impl WiringDriver {
    /// 使用指定解析器创建驱动
    pub fn new(resolver: TypeResolver) -> Self {
        Self { resolver }
    }

    /// 使用的类型解析器
    pub fn resolver(&self) -> &TypeResolver {
        &self.resolver
    }

    /// 静态装配：固定类型，先构造器注入，再 setter 注入
    pub fn run_static(&self) -> Result<WiringOutcome, InfrastructureError> {
        let dao: Arc<dyn DataCapability> = Arc::new(DatabaseDao::new());
        let mut metier = MetierImpl::with_dao(Arc::clone(&dao));
        metier.set_dao(dao);

        let value = metier.calcul()?;
        info!("静态装配完成");
        Ok(WiringOutcome { value })
    }

    /// 读取文本类型清单后按注册表装配
    pub fn run_from_file<P: AsRef<Path>>(
        &self,
        path: P,
        mode: ReflectMode,
    ) -> Result<WiringOutcome, InfrastructureError> {
        let descriptor = TextConfigProvider::new(path).read_type_list()?;
        self.run_reflective(&descriptor, mode)
    }

    /// 按类型清单装配
    pub fn run_reflective(
        &self,
        descriptor: &ConfigurationDescriptor,
        mode: ReflectMode,
    ) -> Result<WiringOutcome, InfrastructureError> {
        debug!("装配方式: {:?}, 类型清单: {}", mode, descriptor.source);

        let dao: Arc<dyn DataCapability> = Arc::from(
            self.resolver
                .resolve::<dyn DataCapability>(&descriptor.data_type)?,
        );

        if mode == ReflectMode::DataOnly {
            if descriptor.computation_type.is_some() {
                warn!("只读取数据，忽略业务实现配置");
            }
            return Ok(WiringOutcome {
                value: dao.get_data(),
            });
        }

        let computation_type = descriptor.require_computation_type()?;
        let metier = match mode {
            ReflectMode::SinglePhase => self
                .resolver
                .resolve_with::<dyn ComputationCapability, dyn DataCapability>(computation_type, dao)?,
            _ => {
                let mut metier = self
                    .resolver
                    .resolve::<dyn ComputationCapability>(computation_type)?;
                self.resolver
                    .inject::<dyn ComputationCapability, dyn DataCapability>(
                        computation_type,
                        &mut metier,
                        DAO_PROPERTY,
                        dao,
                    )?;
                metier
            }
        };

        let value = metier.calcul()?;
        info!("{} <- {} 装配完成", computation_type, descriptor.data_type);
        Ok(WiringOutcome { value })
    }

    /// 从 bean 描述文件创建容器，按名称取出业务 bean 并计算
    pub fn run_descriptor<P: AsRef<Path>>(
        &self,
        path: P,
        bean: &str,
    ) -> Result<WiringOutcome, InfrastructureError> {
        let context = DescriptorContext::load(path, &self.resolver)?;
        let metier = context.resolve_by_name::<dyn ComputationCapability>(bean)?;
        Ok(WiringOutcome {
            value: metier.calcul()?,
        })
    }

    /// 扫描注解组件创建容器，按能力取出业务 bean 并计算
    pub fn run_annotation(&self, packages: &[&str]) -> Result<WiringOutcome, InfrastructureError> {
        let context = AnnotationContext::scan(packages)?;
        let metier = context.resolve::<dyn ComputationCapability>()?;
        Ok(WiringOutcome {
            value: metier.calcul()?,
        })
    }
}
