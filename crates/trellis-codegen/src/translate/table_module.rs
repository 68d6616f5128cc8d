use super::Translator;
use crate::model::{ArtifactKind, File, Visibility};
use crate::TableContext;

use trellis_core::Result;

use quote::quote;

/// Emits the module of a table. Written once.
#[derive(Debug, Default, Clone, Copy)]
pub struct TableModuleTranslator;

impl Translator for TableModuleTranslator {
    fn kind(&self) -> ArtifactKind {
        ArtifactKind::TableModule
    }

    fn translate(&self, cx: &TableContext<'_>) -> Result<File> {
        let generated_module = &cx.generated_module;
        let manager_module = cx.manager_module();
        let manager = &cx.manager;

        Ok(File::new(self.kind(), format!("{}/mod.rs", cx.dir()))
            .doc(format!("Entities and manager of `{}`.", cx.relative_name))
            .module(generated_module.to_string(), Visibility::Pub)
            .module(manager_module.to_string(), Visibility::Private)
            .reexport(quote!(#generated_module::*))
            .reexport(quote!(#manager_module::#manager)))
    }
}
