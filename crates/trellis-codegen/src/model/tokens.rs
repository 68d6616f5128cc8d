use trellis_core::{Error, Result};

use proc_macro2::TokenStream;
use std::fmt;
use std::str::FromStr;

/// Rust source tokens, stored as text.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct Tokens(String);

impl Tokens {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// Lexes the text back into a token stream. Fails on unbalanced
    /// delimiters and other lexing errors.
    pub fn to_token_stream(&self) -> Result<TokenStream> {
        TokenStream::from_str(&self.0).map_err(|err| {
            Error::invalid_argument(format!("`{}` is not valid Rust tokens: {err}", self.0))
        })
    }
}

impl From<TokenStream> for Tokens {
    fn from(tokens: TokenStream) -> Self {
        Self(tokens.to_string())
    }
}

impl From<&TokenStream> for Tokens {
    fn from(tokens: &TokenStream) -> Self {
        Self(tokens.to_string())
    }
}

impl From<&str> for Tokens {
    fn from(src: &str) -> Self {
        Self(src.to_string())
    }
}

impl From<String> for Tokens {
    fn from(src: String) -> Self {
        Self(src)
    }
}

impl From<&syn::Ident> for Tokens {
    fn from(ident: &syn::Ident) -> Self {
        Self(ident.to_string())
    }
}

impl fmt::Display for Tokens {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
