use super::{Method, Tokens, Visibility};

/// A top level item of a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Item {
    Trait(Trait),
    Struct(Struct),
    Impl(Impl),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trait {
    pub name: String,
    pub vis: Visibility,
    pub supertraits: Vec<Tokens>,
    pub methods: Vec<Method>,
    pub docs: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Struct {
    pub name: String,
    pub vis: Visibility,
    pub derives: Vec<String>,
    pub fields: Vec<Field>,
    pub docs: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub ty: Tokens,
    pub vis: Visibility,
}

/// An inherent impl, or a trait impl when `trait_` is set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Impl {
    pub trait_: Option<Tokens>,
    pub self_ty: Tokens,
    pub assoc_types: Vec<(String, Tokens)>,
    pub methods: Vec<Method>,
}

impl Trait {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            vis: Visibility::Pub,
            supertraits: vec![],
            methods: vec![],
            docs: vec![],
        }
    }

    pub fn supertrait(mut self, bound: impl Into<Tokens>) -> Self {
        self.supertraits.push(bound.into());
        self
    }

    pub fn method(mut self, method: Method) -> Self {
        self.methods.push(method);
        self
    }

    pub fn doc(mut self, line: impl Into<String>) -> Self {
        self.docs.push(line.into());
        self
    }
}

impl Struct {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            vis: Visibility::Pub,
            derives: vec![],
            fields: vec![],
            docs: vec![],
        }
    }

    pub fn derive(mut self, name: impl Into<String>) -> Self {
        self.derives.push(name.into());
        self
    }

    pub fn field(mut self, name: impl Into<String>, ty: impl Into<Tokens>) -> Self {
        self.fields.push(Field {
            name: name.into(),
            ty: ty.into(),
            vis: Visibility::Private,
        });
        self
    }

    pub fn doc(mut self, line: impl Into<String>) -> Self {
        self.docs.push(line.into());
        self
    }
}

impl Impl {
    pub fn inherent(self_ty: impl Into<Tokens>) -> Self {
        Self {
            trait_: None,
            self_ty: self_ty.into(),
            assoc_types: vec![],
            methods: vec![],
        }
    }

    pub fn of_trait(trait_: impl Into<Tokens>, self_ty: impl Into<Tokens>) -> Self {
        Self {
            trait_: Some(trait_.into()),
            ..Self::inherent(self_ty)
        }
    }

    pub fn assoc_type(mut self, name: impl Into<String>, ty: impl Into<Tokens>) -> Self {
        self.assoc_types.push((name.into(), ty.into()));
        self
    }

    pub fn method(mut self, method: Method) -> Self {
        self.methods.push(method);
        self
    }
}

impl From<Trait> for Item {
    fn from(value: Trait) -> Self {
        Self::Trait(value)
    }
}

impl From<Struct> for Item {
    fn from(value: Struct) -> Self {
        Self::Struct(value)
    }
}

impl From<Impl> for Item {
    fn from(value: Impl) -> Self {
        Self::Impl(value)
    }
}
