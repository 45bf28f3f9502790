use proc_macro2::Ident;

/// `the_answer` becomes `TheAnswerWrapper`, keeping the span of `ident`.
pub(crate) fn wrapper_name(ident: &Ident) -> Ident {
    let name = ident.to_string();
    let name = name.strip_prefix("r#").unwrap_or(&name);
    let camel: String = name
        .split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect();
    Ident::new(&format!("{camel}Wrapper"), ident.span())
}
