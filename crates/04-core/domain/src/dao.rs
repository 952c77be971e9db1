//! 数据访问层

use component_macros::component;
use di_abstractions::Capability;
use std::fmt::Debug;
use tracing::info;

/// 数据访问能力
pub trait DataCapability: Send + Sync + Debug {
    /// 获取数据
    fn get_data(&self) -> f64;
}

impl Capability for dyn DataCapability {}

/// 数据库版本的数据访问实现
#[component(name = "dao", provides = DataCapability)]
#[derive(Debug, Default, Clone, Copy)]
pub struct DatabaseDao;

impl DatabaseDao {
    /// 固定返回的数据
    pub const DATA: f64 = 23.0;

    /// 创建实例
    pub fn new() -> Self {
        Self
    }
}

impl DataCapability for DatabaseDao {
    fn get_data(&self) -> f64 {
        info!("数据库版本");
        Self::DATA
    }
}
