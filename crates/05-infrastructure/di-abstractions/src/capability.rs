//! 能力契约
//!
//! 能力是一组抽象操作，通常以 trait object 的形式出现，例如 `dyn DataCapability`。
//! 解析器和容器只通过能力类型交付实例，调用方从不引用具体实现类型。

use infrastructure_common::TypeInfo;

/// 能力契约 trait
///
/// 为 trait object 实现此 trait 即可让其参与解析：
///
/// ```rust
/// use di_abstractions::Capability;
///
/// pub trait Greeter: Send + Sync {
///     fn greet(&self) -> String;
/// }
///
/// impl Capability for dyn Greeter {}
/// ```
pub trait Capability: Send + Sync + 'static {
    /// 能力的类型信息
    fn info() -> TypeInfo {
        TypeInfo::of::<Self>()
    }

    /// 能力的简短名称
    fn capability_name() -> String {
        Self::info().short_name().to_string()
    }
}
