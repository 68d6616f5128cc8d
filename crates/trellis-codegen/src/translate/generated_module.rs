use super::Translator;
use crate::model::{ArtifactKind, File, Visibility};
use crate::TableContext;

use trellis_core::Result;

use quote::quote;

/// Declares the regenerated files of a table and re-exports their items.
#[derive(Debug, Default, Clone, Copy)]
pub struct GeneratedModuleTranslator;

impl Translator for GeneratedModuleTranslator {
    fn kind(&self) -> ArtifactKind {
        ArtifactKind::GeneratedModule
    }

    fn translate(&self, cx: &TableContext<'_>) -> Result<File> {
        let entity_module = cx.entity_module();
        let builder_module = cx.builder_module();
        let generated_manager_module = cx.generated_manager_module();

        let entity = &cx.entity;
        let entity_impl = &cx.entity_impl;
        let builder = &cx.builder;
        let builder_impl = &cx.builder_impl;
        let generated_manager = &cx.generated_manager;

        Ok(File::new(self.kind(), format!("{}/mod.rs", cx.generated_dir()))
            .doc(format!("Generated code for `{}`.", cx.relative_name))
            .module(entity_module.to_string(), Visibility::Private)
            .module(builder_module.to_string(), Visibility::Private)
            .module(generated_manager_module.to_string(), Visibility::Private)
            .reexport(quote!(#entity_module::{#entity, #builder, #entity_impl}))
            .reexport(quote!(#builder_module::#builder_impl))
            .reexport(quote!(#generated_manager_module::#generated_manager)))
    }
}
