use darling::FromMeta;

#[derive(FromMeta, Default)]
pub(crate) struct WrapperAttr {
    pub name: Option<syn::Ident>,
}
