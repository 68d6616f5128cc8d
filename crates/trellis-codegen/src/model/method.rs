use super::{Tokens, Visibility};

/// How a method takes `self`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Receiver {
    /// An associated function.
    #[default]
    None,
    Ref,
    RefMut,
    Value,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    pub name: String,
    pub ty: Tokens,
}

/// A function in a trait or impl block.
///
/// A method without a body is a declaration and only renders inside a trait.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Method {
    pub name: String,
    pub vis: Visibility,
    pub receiver: Receiver,
    pub params: Vec<Param>,
    pub ret: Option<Tokens>,
    pub body: Option<Vec<Tokens>>,
    pub docs: Vec<String>,
}

impl Method {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            vis: Visibility::Private,
            receiver: Receiver::None,
            params: vec![],
            ret: None,
            body: None,
            docs: vec![],
        }
    }

    pub fn vis(mut self, vis: Visibility) -> Self {
        self.vis = vis;
        self
    }

    pub fn public(self) -> Self {
        self.vis(Visibility::Pub)
    }

    pub fn receiver(mut self, receiver: Receiver) -> Self {
        self.receiver = receiver;
        self
    }

    pub fn param(mut self, name: impl Into<String>, ty: impl Into<Tokens>) -> Self {
        self.params.push(Param {
            name: name.into(),
            ty: ty.into(),
        });
        self
    }

    pub fn returns(mut self, ty: impl Into<Tokens>) -> Self {
        self.ret = Some(ty.into());
        self
    }

    /// Appends a statement. The first call turns a declaration into a
    /// definition.
    pub fn stmt(mut self, stmt: impl Into<Tokens>) -> Self {
        self.body.get_or_insert_with(Vec::new).push(stmt.into());
        self
    }

    pub fn doc(mut self, line: impl Into<String>) -> Self {
        self.docs.push(line.into());
        self
    }

    pub fn is_declaration(&self) -> bool {
        self.body.is_none()
    }
}
