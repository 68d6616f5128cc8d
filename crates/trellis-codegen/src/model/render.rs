use super::{File, Impl, Item, Method, Receiver, Struct, Tokens, Trait, WritePolicy};

use trellis_core::Result;

const HEADER: &str = "// @generated by trellis-codegen. Changes are overwritten on the next run.";

struct Formatter {
    /// Where to write the source text
    dst: String,

    /// Current indentation depth
    depth: usize,
}

trait Render {
    fn fmt(&self, f: &mut Formatter) -> Result<()>;
}

impl File {
    /// Renders the file as Rust source text.
    ///
    /// Fails if any token text in the model does not lex.
    pub fn render(&self) -> Result<String> {
        let mut f = Formatter {
            dst: String::new(),
            depth: 0,
        };
        Render::fmt(self, &mut f)?;
        Ok(f.dst)
    }
}

impl Formatter {
    fn line(&mut self, text: &str) {
        if !text.is_empty() {
            for _ in 0..self.depth {
                self.dst.push_str("    ");
            }
            self.dst.push_str(text);
        }
        self.dst.push('\n');
    }

    fn blank(&mut self) {
        if !self.dst.is_empty() && !self.dst.ends_with("\n\n") && !self.dst.ends_with("{\n") {
            self.dst.push('\n');
        }
    }

    fn docs(&mut self, prefix: &str, docs: &[String]) {
        for doc in docs {
            if doc.is_empty() {
                self.line(prefix);
            } else {
                self.line(&format!("{prefix} {doc}"));
            }
        }
    }

    fn open(&mut self, head: &str) {
        self.line(&format!("{head} {{"));
        self.depth += 1;
    }

    fn close(&mut self) {
        self.depth -= 1;
        self.line("}");
    }
}

/// Checks that the text lexes and returns it.
fn tokens(tokens: &Tokens) -> Result<&str> {
    tokens.to_token_stream()?;
    Ok(tokens.as_str())
}

impl Render for File {
    fn fmt(&self, f: &mut Formatter) -> Result<()> {
        if self.policy == WritePolicy::Regenerate {
            f.line(HEADER);
        }
        f.docs("//!", &self.docs);

        if !self.attrs.is_empty() {
            f.blank();
            for attr in &self.attrs {
                f.line(&format!("#![{}]", tokens(attr)?));
            }
        }

        if !self.mods.is_empty() {
            f.blank();
            for module in &self.mods {
                f.line(&format!("{}mod {};", module.vis.as_str(), module.name));
            }
        }

        if !self.uses.is_empty() {
            f.blank();
            for use_ in &self.uses {
                f.line(&format!("{}use {};", use_.vis.as_str(), tokens(&use_.path)?));
            }
        }

        for item in &self.items {
            f.blank();
            item.fmt(f)?;
        }

        Ok(())
    }
}

impl Render for Item {
    fn fmt(&self, f: &mut Formatter) -> Result<()> {
        match self {
            Item::Trait(item) => item.fmt(f),
            Item::Struct(item) => item.fmt(f),
            Item::Impl(item) => item.fmt(f),
        }
    }
}

impl Render for Trait {
    fn fmt(&self, f: &mut Formatter) -> Result<()> {
        f.docs("///", &self.docs);

        let mut head = format!("{}trait {}", self.vis.as_str(), self.name);
        if !self.supertraits.is_empty() {
            let bounds = self
                .supertraits
                .iter()
                .map(tokens)
                .collect::<Result<Vec<_>>>()?;
            head.push_str(": ");
            head.push_str(&bounds.join(" + "));
        }

        f.open(&head);
        render_methods(&self.methods, f)?;
        f.close();
        Ok(())
    }
}

impl Render for Struct {
    fn fmt(&self, f: &mut Formatter) -> Result<()> {
        f.docs("///", &self.docs);
        if !self.derives.is_empty() {
            f.line(&format!("#[derive({})]", self.derives.join(", ")));
        }

        if self.fields.is_empty() {
            f.line(&format!("{}struct {} {{}}", self.vis.as_str(), self.name));
            return Ok(());
        }

        f.open(&format!("{}struct {}", self.vis.as_str(), self.name));
        for field in &self.fields {
            f.line(&format!(
                "{}{}: {},",
                field.vis.as_str(),
                field.name,
                tokens(&field.ty)?
            ));
        }
        f.close();
        Ok(())
    }
}

impl Render for Impl {
    fn fmt(&self, f: &mut Formatter) -> Result<()> {
        let head = match &self.trait_ {
            Some(trait_) => format!("impl {} for {}", tokens(trait_)?, tokens(&self.self_ty)?),
            None => format!("impl {}", tokens(&self.self_ty)?),
        };

        f.open(&head);
        for (name, ty) in &self.assoc_types {
            f.line(&format!("type {name} = {};", tokens(ty)?));
        }
        if !self.assoc_types.is_empty() && !self.methods.is_empty() {
            f.blank();
        }
        render_methods(&self.methods, f)?;
        f.close();
        Ok(())
    }
}

fn render_methods(methods: &[Method], f: &mut Formatter) -> Result<()> {
    for (i, method) in methods.iter().enumerate() {
        if i > 0 {
            f.blank();
        }
        method.fmt(f)?;
    }
    Ok(())
}

impl Render for Method {
    fn fmt(&self, f: &mut Formatter) -> Result<()> {
        f.docs("///", &self.docs);

        let mut params = vec![];
        match self.receiver {
            Receiver::None => {}
            Receiver::Ref => params.push("&self".to_string()),
            Receiver::RefMut => params.push("&mut self".to_string()),
            Receiver::Value => params.push("self".to_string()),
        }
        for param in &self.params {
            params.push(format!("{}: {}", param.name, tokens(&param.ty)?));
        }

        let mut sig = format!(
            "{}fn {}({})",
            self.vis.as_str(),
            self.name,
            params.join(", ")
        );
        if let Some(ret) = &self.ret {
            sig.push_str(" -> ");
            sig.push_str(tokens(ret)?);
        }

        match &self.body {
            None => f.line(&format!("{sig};")),
            Some(body) => {
                f.open(&sig);
                for stmt in body {
                    f.line(tokens(stmt)?);
                }
                f.close();
            }
        }
        Ok(())
    }
}
