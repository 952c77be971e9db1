//! 元数据定义
//!
//! 提供组件和类型的元数据信息

use std::any::TypeId;
use std::fmt;

/// 类型信息
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeInfo {
    /// 类型名称（不含模块路径）
    pub name: String,
    /// 类型ID
    pub id: TypeId,
    /// 完整类型路径
    pub module_path: String,
}

impl TypeInfo {
    /// 从类型获取类型信息
    ///
    /// 支持 trait object，例如 `TypeInfo::of::<dyn Trait>()`。
    pub fn of<T: ?Sized + 'static>() -> Self {
        let full_name = std::any::type_name::<T>();
        Self {
            name: short_type_name(full_name).to_string(),
            id: TypeId::of::<T>(),
            module_path: full_name.to_string(),
        }
    }

    /// 获取简短的类型名称（不包含模块路径）
    pub fn short_name(&self) -> &str {
        &self.name
    }

    /// 判断是否为同一类型
    pub fn is<T: ?Sized + 'static>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }
}

impl fmt::Display for TypeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.module_path)
    }
}

/// 去掉模块路径，`dyn a::b::Trait` 变为 `Trait`
fn short_type_name(full_name: &str) -> &str {
    let trimmed = full_name.strip_prefix("dyn ").unwrap_or(full_name);
    trimmed.rsplit("::").next().unwrap_or(trimmed)
}

/// 组件元数据
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentMetadata {
    /// 组件标识符（配置中使用的文本名称）
    pub identifier: String,
    /// 具体实现类型
    pub type_info: TypeInfo,
    /// 提供的能力
    pub capability: TypeInfo,
    /// 组件描述
    pub description: Option<String>,
}

impl ComponentMetadata {
    /// 创建新的组件元数据
    pub fn new(identifier: impl Into<String>, type_info: TypeInfo, capability: TypeInfo) -> Self {
        Self {
            identifier: identifier.into(),
            type_info,
            capability,
            description: None,
        }
    }

    /// 设置描述
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    trait Marker {}

    struct Sample;

    #[test]
    fn test_type_info_short_name() {
        let info = TypeInfo::of::<Sample>();
        assert_eq!(info.short_name(), "Sample");
        assert!(info.module_path.ends_with("::Sample"));
        assert!(info.is::<Sample>());
    }

    #[test]
    fn test_type_info_for_trait_object() {
        let info = TypeInfo::of::<dyn Marker>();
        assert_eq!(info.short_name(), "Marker");
        assert!(info.is::<dyn Marker>());
        assert!(!info.is::<Sample>());
    }
}
