//! An owned model of the Rust files the translators produce.
//!
//! Types, expressions and statements are kept as token text produced with
//! `quote!`, so a model can be built on one thread and rendered on another.
//! Every node is built with consuming builder methods.

mod file;
pub use file::{ArtifactKind, File, ModDecl, Use, WritePolicy};

mod item;
pub use item::{Field, Impl, Item, Struct, Trait};

mod method;
pub use method::{Method, Param, Receiver};

mod render;

mod tokens;
pub use tokens::Tokens;

/// Item visibility.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Visibility {
    #[default]
    Private,
    Pub,
    PubCrate,
    PubSuper,
}

impl Visibility {
    fn as_str(self) -> &'static str {
        match self {
            Self::Private => "",
            Self::Pub => "pub ",
            Self::PubCrate => "pub(crate) ",
            Self::PubSuper => "pub(super) ",
        }
    }
}
