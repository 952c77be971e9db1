//! 配置提供者抽象接口

use crate::descriptor::{ConfigurationDescriptor, ContainerDescriptor};
use infrastructure_common::ConfigError;
use std::path::Path;

/// 配置提供者 trait
pub trait ConfigProvider {
    /// 获取提供者名称
    fn name(&self) -> &str;

    /// 配置来源路径
    fn source(&self) -> &Path;

    /// 检查配置来源是否存在
    fn exists(&self) -> bool {
        self.source().exists()
    }
}

/// 文本类型清单提供者 trait
///
/// 第 1 行为数据访问实现标识符，第 2 行（可选）为业务实现标识符。
pub trait TypeListProvider: ConfigProvider {
    /// 读取类型清单
    fn read_type_list(&self) -> Result<ConfigurationDescriptor, ConfigError>;
}

/// 容器描述文件提供者 trait
pub trait ContainerDescriptorProvider: ConfigProvider {
    /// 读取 bean 描述
    fn read_container_descriptor(&self) -> Result<ContainerDescriptor, ConfigError>;
}
