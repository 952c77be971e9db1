//! 标准组件注册表
//!
//! 列出所有可以通过文本标识符实例化的实现。标识符为实现类型的完整路径，
//! 例如 `core_domain::dao::DatabaseDao`。

use core_domain::dao::{DataCapability, DatabaseDao};
use core_domain::ext::SensorDao;
use core_domain::metier::{ComputationCapability, MetierImpl};
use di_abstractions::ComponentRegistration;
use di_impl::TypeResolver;
use infrastructure_common::DependencyError;

/// 业务实现可注入的属性名
pub const DAO_PROPERTY: &str = "dao";

/// 所有标准组件的注册信息
pub fn standard_registrations() -> Vec<ComponentRegistration> {
    vec![
        ComponentRegistration::of::<DatabaseDao, dyn DataCapability>()
            .constructor(|| Ok(Box::new(DatabaseDao::new()) as Box<dyn DataCapability>))
            .description("数据库版本")
            .build(),
        ComponentRegistration::of::<SensorDao, dyn DataCapability>()
            .constructor(|| Ok(Box::new(SensorDao::new()) as Box<dyn DataCapability>))
            .description("传感器版本")
            .build(),
        ComponentRegistration::of::<MetierImpl, dyn ComputationCapability>()
            .constructor(|| Ok(Box::new(MetierImpl::new()) as Box<dyn ComputationCapability>))
            .constructor_with::<dyn DataCapability, _>(|dao| {
                Ok(Box::new(MetierImpl::with_dao(dao)) as Box<dyn ComputationCapability>)
            })
            .property::<dyn DataCapability, _>(DAO_PROPERTY, |metier, dao| metier.set_dao(dao))
            .description("业务计算")
            .build(),
    ]
}

/// 用标准注册表构建类型解析器
pub fn standard_resolver() -> Result<TypeResolver, DependencyError> {
    TypeResolver::from_registrations(standard_registrations())
}
