use proc_macro2::TokenStream;
use quote::quote;
use syn::{ItemFn, ReturnType, Type};

use crate::{attrs::WrapperAttr, naming::wrapper_name};

pub(crate) fn transform(attr: WrapperAttr, input: ItemFn) -> syn::Result<TokenStream> {
    let sig = &input.sig;
    if let Some(asyncness) = &sig.asyncness {
        return Err(syn::Error::new_spanned(
            asyncness,
            "a wrapper function cannot be async",
        ));
    }
    if !sig.generics.params.is_empty() || sig.generics.where_clause.is_some() {
        return Err(syn::Error::new_spanned(
            &sig.generics,
            "a wrapper function cannot be generic",
        ));
    }
    if !sig.inputs.is_empty() {
        return Err(syn::Error::new_spanned(
            &sig.inputs,
            "a wrapper function takes no arguments",
        ));
    }
    match &sig.output {
        ReturnType::Type(_, ty) if returns_i32(ty) => {}
        ReturnType::Type(_, ty) => {
            return Err(syn::Error::new_spanned(
                ty,
                "a wrapper function must return i32",
            ))
        }
        ReturnType::Default => {
            return Err(syn::Error::new_spanned(
                &sig.ident,
                "a wrapper function must return i32",
            ))
        }
    }

    let vis = &input.vis;
    let ident = &sig.ident;
    let name = attr.name.unwrap_or_else(|| wrapper_name(ident));

    Ok(quote! {
        #input

        #[derive(Debug, Clone, Copy, Default)]
        #vis struct #name;

        impl wrapcall::Wrapper for #name {
            fn method(&self) -> i32 {
                #ident()
            }
        }
    })
}

fn returns_i32(ty: &Type) -> bool {
    match ty {
        Type::Path(path) => path.qself.is_none() && path.path.is_ident("i32"),
        Type::Paren(paren) => returns_i32(&paren.elem),
        _ => false,
    }
}
