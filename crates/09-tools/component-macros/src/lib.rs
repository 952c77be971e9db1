//! # Component Macros
//!
//! 这个 crate 提供用于注解式组件注册的过程宏。
//!
//! ## 核心宏
//!
//! - [`component`] - 把结构体登记为容器可扫描的组件
//!
//! ## 使用示例
//!
//! ```rust,ignore
//! use component_macros::component;
//!
//! #[component(name = "dao", provides = DataCapability)]
//! #[derive(Debug, Default)]
//! pub struct DatabaseDao;
//!
//! #[component(name = "metier", provides = ComputationCapability, qualifier = "dao")]
//! #[derive(Debug)]
//! pub struct MetierImpl {
//!     dao: Option<Arc<dyn DataCapability>>,
//! }
//! ```
//!
//! 生成的代码引用 `di_abstractions` 和 `ctor`，使用方需要依赖这两个 crate。

use proc_macro::TokenStream;

mod component;
mod utils;

// Re-exports are not allowed in proc-macro crates

/// 注解式组件注册宏
///
/// 在程序启动时把结构体登记到全局注解注册表，包扫描时据此创建 bean。
///
/// # 参数
///
/// - `provides = Trait` - 组件提供的能力（必填，需为其 trait object 实现 `Capability`）
/// - `name = "bean_name"` - bean 名称（默认为首字母小写的结构体名）
/// - `qualifier = "bean_name"` - 构造器注入的 bean 名称，要求结构体实现 `Injectable`；
///   省略时使用 `Default` 构造
///
/// # 示例
///
/// ```rust,ignore
/// #[component(name = "metier", provides = ComputationCapability, qualifier = "dao")]
/// pub struct MetierImpl {
///     // 字段
/// }
/// ```
#[proc_macro_attribute]
pub fn component(args: TokenStream, input: TokenStream) -> TokenStream {
    component::component_impl(args, input)
}
