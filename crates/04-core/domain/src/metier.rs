//! 业务层

use crate::dao::DataCapability;
use component_macros::component;
use di_abstractions::{Capability, Injectable};
use infrastructure_common::DependencyError;
use std::fmt::Debug;
use std::sync::Arc;

/// 业务计算能力
///
/// 计算依赖一个数据访问实现。实现可以先无依赖地构造，再通过 [`set_dao`](Self::set_dao) 注入；
/// 未注入时调用 [`calcul`](Self::calcul) 返回 [`DependencyError::UnwiredDependency`]。
pub trait ComputationCapability: Send + Sync + Debug {
    /// 执行计算
    fn calcul(&self) -> Result<f64, DependencyError>;

    /// 注入（或替换）数据访问实现
    fn set_dao(&mut self, dao: Arc<dyn DataCapability>);
}

impl Capability for dyn ComputationCapability {}

/// 业务计算实现：数据乘以固定系数
#[component(name = "metier", provides = ComputationCapability, qualifier = "dao")]
#[derive(Debug, Default, Clone)]
pub struct MetierImpl {
    dao: Option<Arc<dyn DataCapability>>,
}

impl MetierImpl {
    /// 计算系数
    pub const FACTOR: f64 = 23.0;

    /// 创建未注入依赖的实例
    pub fn new() -> Self {
        Self::default()
    }

    /// 通过构造器注入依赖
    pub fn with_dao(dao: Arc<dyn DataCapability>) -> Self {
        Self { dao: Some(dao) }
    }

    /// 是否已注入依赖
    pub fn is_wired(&self) -> bool {
        self.dao.is_some()
    }
}

impl ComputationCapability for MetierImpl {
    fn calcul(&self) -> Result<f64, DependencyError> {
        let dao = self
            .dao
            .as_ref()
            .ok_or_else(|| DependencyError::unwired("MetierImpl", "DataCapability"))?;
        Ok(dao.get_data() * Self::FACTOR)
    }

    fn set_dao(&mut self, dao: Arc<dyn DataCapability>) {
        self.dao = Some(dao);
    }
}

impl Injectable for MetierImpl {
    type Dependency = dyn DataCapability;

    fn inject(dependency: Arc<Self::Dependency>) -> Self {
        Self::with_dao(dependency)
    }
}
