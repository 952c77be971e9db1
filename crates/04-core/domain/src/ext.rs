//! 扩展包：传感器版本的数据访问实现
//!
//! 不修改业务层代码，只改配置即可替换数据来源。

use crate::dao::DataCapability;
use component_macros::component;
use tracing::info;

/// 传感器版本的数据访问实现
#[component(name = "sensorDao", provides = DataCapability)]
#[derive(Debug, Default, Clone, Copy)]
pub struct SensorDao;

impl SensorDao {
    /// 固定返回的数据
    pub const DATA: f64 = 12.0;

    /// 创建实例
    pub fn new() -> Self {
        Self
    }
}

impl DataCapability for SensorDao {
    fn get_data(&self) -> f64 {
        info!("传感器版本");
        Self::DATA
    }
}
