use super::{Item, Tokens, Visibility};

use std::path::{Path, PathBuf};

/// The artifacts produced for a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ArtifactKind {
    /// Entity trait, entity builder trait, entity struct and field statics.
    Entity,

    /// Mutable builder for the entity.
    EntityBuilder,

    /// Manager trait with the generated default methods.
    GeneratedManager,

    /// Module declaring the generated files of a table.
    GeneratedModule,

    /// Hand customizable manager.
    Manager,

    /// Module declaring the generated module and the manager of a table.
    TableModule,

    /// Module declaring every table module.
    RootModule,
}

/// Whether regenerating replaces an existing file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WritePolicy {
    /// Always overwritten.
    Regenerate,

    /// Written once, then left for the user to edit.
    Preserve,
}

impl ArtifactKind {
    pub fn policy(self) -> WritePolicy {
        match self {
            Self::Manager | Self::TableModule => WritePolicy::Preserve,
            _ => WritePolicy::Regenerate,
        }
    }
}

/// A `mod` declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModDecl {
    pub name: String,
    pub vis: Visibility,
}

/// A `use` declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Use {
    pub path: Tokens,
    pub vis: Visibility,
}

/// One source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
    /// Path relative to the output root.
    pub path: PathBuf,
    pub kind: ArtifactKind,
    pub policy: WritePolicy,
    pub docs: Vec<String>,
    pub attrs: Vec<Tokens>,
    pub mods: Vec<ModDecl>,
    pub uses: Vec<Use>,
    pub items: Vec<Item>,
}

impl File {
    pub fn new(kind: ArtifactKind, path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            kind,
            policy: kind.policy(),
            docs: vec![],
            attrs: vec![],
            mods: vec![],
            uses: vec![],
            items: vec![],
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Adds an inner doc comment line.
    pub fn doc(mut self, line: impl Into<String>) -> Self {
        self.docs.push(line.into());
        self
    }

    /// Adds an inner attribute, given without the `#![..]` wrapper.
    pub fn attr(mut self, attr: impl Into<Tokens>) -> Self {
        self.attrs.push(attr.into());
        self
    }

    pub fn module(mut self, name: impl Into<String>, vis: Visibility) -> Self {
        self.mods.push(ModDecl {
            name: name.into(),
            vis,
        });
        self
    }

    /// Adds a private `use`. Paths already imported are skipped.
    pub fn use_path(self, path: impl Into<Tokens>) -> Self {
        self.use_with(path, Visibility::Private)
    }

    /// Adds a `pub use`.
    pub fn reexport(self, path: impl Into<Tokens>) -> Self {
        self.use_with(path, Visibility::Pub)
    }

    fn use_with(mut self, path: impl Into<Tokens>, vis: Visibility) -> Self {
        let path = path.into();
        if !self.uses.iter().any(|existing| existing.path == path) {
            self.uses.push(Use { path, vis });
        }
        self
    }

    pub fn item(mut self, item: impl Into<Item>) -> Self {
        self.items.push(item.into());
        self
    }

    /// Names of the top level traits and structs.
    pub fn item_names(&self) -> impl Iterator<Item = &str> {
        self.items.iter().filter_map(|item| match item {
            Item::Trait(item) => Some(item.name.as_str()),
            Item::Struct(item) => Some(item.name.as_str()),
            Item::Impl(_) => None,
        })
    }

    pub fn find_trait(&self, name: &str) -> Option<&super::Trait> {
        self.items.iter().find_map(|item| match item {
            Item::Trait(item) if item.name == name => Some(item),
            _ => None,
        })
    }

    pub fn find_struct(&self, name: &str) -> Option<&super::Struct> {
        self.items.iter().find_map(|item| match item {
            Item::Struct(item) if item.name == name => Some(item),
            _ => None,
        })
    }

    /// Impl blocks for `self_ty`, inherent and trait impls alike.
    pub fn impls_for<'a>(&'a self, self_ty: &'a str) -> impl Iterator<Item = &'a super::Impl> {
        self.items.iter().filter_map(move |item| match item {
            Item::Impl(item) if item.self_ty.as_str() == self_ty => Some(item),
            _ => None,
        })
    }
}
