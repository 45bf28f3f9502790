mod attrs;
mod item_fn;
mod naming;

use attrs::WrapperAttr;
use darling::{ast::NestedMeta, FromMeta};
use syn::{parse_macro_input, ItemFn};

/// Turns a zero-argument `fn() -> i32` into a named `Wrapper` implementor.
///
/// ```ignore
/// #[wrapcall::wrapper]
/// fn the_answer() -> i32 {
///     41
/// }
///
/// assert_eq!(wrapcall::apply_callback(Some(&TheAnswerWrapper)), Ok(42));
/// ```
///
/// The generated struct can be renamed with `#[wrapper(name = "Answer")]`.
#[proc_macro_attribute]
pub fn wrapper(
    attribute: proc_macro::TokenStream,
    input: proc_macro::TokenStream,
) -> proc_macro::TokenStream {
    let attr = match NestedMeta::parse_meta_list(attribute.into())
        .map_err(darling::Error::from)
        .and_then(|list| WrapperAttr::from_list(&list))
    {
        Ok(attr) => attr,
        Err(err) => return err.write_errors().into(),
    };
    item_fn::transform(attr, parse_macro_input!(input as ItemFn))
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
