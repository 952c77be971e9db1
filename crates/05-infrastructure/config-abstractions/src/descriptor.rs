//! 装配配置的数据结构

use infrastructure_common::ConfigError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 文本类型清单
///
/// 按行给出需要实例化的实现标识符。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigurationDescriptor {
    /// 配置来源，用于错误信息
    pub source: String,
    /// 数据访问实现标识符（第 1 行）
    pub data_type: String,
    /// 业务实现标识符（第 2 行）
    pub computation_type: Option<String>,
}

impl ConfigurationDescriptor {
    /// 创建类型清单
    pub fn new(source: impl Into<String>, data_type: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            data_type: data_type.into(),
            computation_type: None,
        }
    }

    /// 设置业务实现标识符
    pub fn with_computation_type(mut self, computation_type: impl Into<String>) -> Self {
        self.computation_type = Some(computation_type.into());
        self
    }

    /// 获取业务实现标识符，清单只有一行时返回缺行错误
    pub fn require_computation_type(&self) -> Result<&str, ConfigError> {
        self.computation_type
            .as_deref()
            .ok_or_else(|| ConfigError::MissingLine {
                path: self.source.clone(),
                line: 2,
            })
    }
}

/// 单个 bean 的描述
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BeanDescriptor {
    /// bean 名称
    pub id: String,
    /// 实现标识符
    #[serde(rename = "type")]
    pub type_name: String,
    /// 构造器注入引用的 bean 名称
    #[serde(
        rename = "constructor-ref",
        alias = "constructor_ref",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub constructor_ref: Option<String>,
    /// 属性注入：属性名 -> bean 名称
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, String>,
}

impl BeanDescriptor {
    /// 创建 bean 描述
    pub fn new(id: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            type_name: type_name.into(),
            constructor_ref: None,
            properties: BTreeMap::new(),
        }
    }

    /// 设置构造器注入引用
    pub fn with_constructor_ref(mut self, bean: impl Into<String>) -> Self {
        self.constructor_ref = Some(bean.into());
        self
    }

    /// 添加属性注入引用
    pub fn with_property(mut self, name: impl Into<String>, bean: impl Into<String>) -> Self {
        self.properties.insert(name.into(), bean.into());
        self
    }
}

/// 容器描述
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerDescriptor {
    /// bean 列表，按声明顺序创建
    #[serde(default)]
    pub beans: Vec<BeanDescriptor>,
}

impl ContainerDescriptor {
    /// 按名称查找 bean 描述
    pub fn bean(&self, id: &str) -> Option<&BeanDescriptor> {
        self.beans.iter().find(|bean| bean.id == id)
    }
}
