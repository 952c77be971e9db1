//! 组件注册宏实现

use crate::utils::{decapitalize, to_snake_case};
use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::quote;
use syn::{
    parse::Parse, parse::ParseStream, parse_macro_input, punctuated::Punctuated, Error, Expr,
    ExprPath, Ident, ItemStruct, Lit, Meta, Path, Result, Token,
};

/// 组件配置参数
#[derive(Clone, Default)]
pub struct ComponentArgs {
    /// 自定义 bean 名称
    pub name: Option<String>,
    /// 提供的能力
    pub provides: Option<Path>,
    /// 构造器注入的 bean 名称
    pub qualifier: Option<String>,
}

impl Parse for ComponentArgs {
    fn parse(input: ParseStream<'_>) -> Result<Self> {
        let mut args = ComponentArgs::default();

        let parsed = Punctuated::<Meta, Token![,]>::parse_terminated(input)?;

        for meta in parsed {
            match meta {
                Meta::NameValue(nv) => {
                    if nv.path.is_ident("name") {
                        args.name = Some(string_value(&nv.value)?);
                    } else if nv.path.is_ident("qualifier") {
                        args.qualifier = Some(string_value(&nv.value)?);
                    } else if nv.path.is_ident("provides") {
                        match nv.value {
                            Expr::Path(ExprPath { path, .. }) => args.provides = Some(path),
                            other => {
                                return Err(Error::new_spanned(other, "provides 需要一个 trait 路径"))
                            }
                        }
                    } else {
                        return Err(Error::new_spanned(nv.path, "未知的 component 参数"));
                    }
                }
                other => return Err(Error::new_spanned(other, "未知的 component 参数")),
            }
        }

        Ok(args)
    }
}

fn string_value(expr: &Expr) -> Result<String> {
    if let Expr::Lit(expr_lit) = expr {
        if let Lit::Str(lit_str) = &expr_lit.lit {
            return Ok(lit_str.value());
        }
    }
    Err(Error::new_spanned(expr, "需要字符串字面量"))
}

/// 实现 #[component] 宏
pub fn component_impl(args: TokenStream, input: TokenStream) -> TokenStream {
    let component_args = if args.is_empty() {
        ComponentArgs::default()
    } else {
        match syn::parse::<ComponentArgs>(args) {
            Ok(args) => args,
            Err(e) => return e.to_compile_error().into(),
        }
    };

    let input_struct = parse_macro_input!(input as ItemStruct);

    match expand(&component_args, &input_struct) {
        Ok(registration_code) => TokenStream::from(quote! {
            #input_struct

            #registration_code
        }),
        Err(e) => {
            let error = e.to_compile_error();
            TokenStream::from(quote! {
                #input_struct

                #error
            })
        }
    }
}

/// 生成组件自动注册代码
fn expand(args: &ComponentArgs, input_struct: &ItemStruct) -> Result<proc_macro2::TokenStream> {
    let struct_name = &input_struct.ident;

    if !input_struct.generics.params.is_empty() {
        return Err(Error::new_spanned(
            &input_struct.generics,
            "组件结构体不能带泛型参数",
        ));
    }

    let capability = args.provides.as_ref().ok_or_else(|| {
        Error::new(
            Span::call_site(),
            "component 需要 provides = Trait 参数",
        )
    })?;

    let bean_name = args
        .name
        .clone()
        .unwrap_or_else(|| decapitalize(&struct_name.to_string()));

    let qualifier = match &args.qualifier {
        Some(qualifier) => quote! { ::core::option::Option::Some(#qualifier) },
        None => quote! { ::core::option::Option::None },
    };

    let constructor = if args.qualifier.is_some() {
        quote! {
            .constructor_with::<<#struct_name as ::di_abstractions::Injectable>::Dependency, _>(
                |dependency| {
                    ::core::result::Result::Ok(::std::boxed::Box::new(
                        <#struct_name as ::di_abstractions::Injectable>::inject(dependency),
                    ) as ::std::boxed::Box<dyn #capability>)
                },
            )
        }
    } else {
        quote! {
            .constructor(|| {
                ::core::result::Result::Ok(::std::boxed::Box::new(
                    <#struct_name as ::core::default::Default>::default(),
                ) as ::std::boxed::Box<dyn #capability>)
            })
        }
    };

    let registration_fn_name = Ident::new(
        &format!(
            "__register_component_{}",
            to_snake_case(&struct_name.to_string())
        ),
        Span::call_site(),
    );

    Ok(quote! {
        // 使用 ctor 在程序启动时自动登记组件
        #[ctor::ctor]
        fn #registration_fn_name() {
            ::di_abstractions::register_annotated(::di_abstractions::AnnotatedComponent {
                name: #bean_name,
                module_path: ::core::module_path!(),
                qualifier: #qualifier,
                registration: || {
                    ::di_abstractions::ComponentRegistration::of::<#struct_name, dyn #capability>()
                        #constructor
                        .build()
                },
            });
        }
    })
}
