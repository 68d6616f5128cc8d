use trellis_core::{Error, Result};

use heck::{ToSnakeCase, ToUpperCamelCase};
use proc_macro2::TokenStream;

/// Method names a column getter must not take: the ones generated items
/// define themselves, and the ones that derived and prelude traits bring into
/// scope on entities and builders.
const RESERVED: &[&str] = &[
    "build",
    "new",
    "from_builder",
    "from_entity",
    "default",
    "clone",
    "clone_from",
    "clone_into",
    "to_owned",
    "eq",
    "ne",
    "fmt",
    "into",
    "try_into",
];

/// A snake case identifier for a database name. Keywords and reserved names
/// get a trailing underscore.
pub(crate) fn snake_ident(name: &str) -> Result<syn::Ident> {
    let snake = name.to_snake_case();
    escape(&snake, name)
}

/// An upper camel case identifier for a database name.
pub(crate) fn camel_ident(name: &str) -> Result<syn::Ident> {
    let camel = name.to_upper_camel_case();
    escape(&camel, name)
}

fn escape(candidate: &str, original: &str) -> Result<syn::Ident> {
    if candidate.is_empty() {
        return Err(Error::invalid_schema(format!(
            "`{original}` does not produce a Rust identifier"
        )));
    }

    let mut candidate = if candidate.starts_with(|c: char| c.is_ascii_digit()) {
        format!("_{candidate}")
    } else {
        candidate.to_string()
    };

    if RESERVED.contains(&candidate.as_str()) || syn::parse_str::<syn::Ident>(&candidate).is_err()
    {
        candidate.push('_');
    }

    syn::parse_str::<syn::Ident>(&candidate).map_err(|_| {
        Error::invalid_schema(format!(
            "`{original}` does not produce a Rust identifier"
        ))
    })
}

/// `set_<name>` for a column identifier.
pub(crate) fn setter_ident(ident: &syn::Ident) -> syn::Ident {
    quote::format_ident!("set_{}", strip_escape(ident))
}

/// `<name>_field` for a column identifier.
pub(crate) fn field_fn_ident(ident: &syn::Ident) -> syn::Ident {
    quote::format_ident!("{}_field", strip_escape(ident))
}

fn strip_escape(ident: &syn::Ident) -> String {
    let name = ident.to_string();
    name.strip_suffix('_').unwrap_or(&name).to_string()
}

/// Parses a path such as `::trellis_core` or `crate::rt`.
pub(crate) fn path(src: &str) -> Result<TokenStream> {
    syn::parse_str::<syn::Path>(src)
        .map(|path| quote::quote!(#path))
        .map_err(|err| Error::invalid_argument(format!("`{src}` is not a path: {err}")))
}
