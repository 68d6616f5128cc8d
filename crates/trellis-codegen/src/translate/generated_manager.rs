use super::Translator;
use crate::model::{ArtifactKind, File, Method, Receiver, Trait};
use crate::TableContext;

use trellis_core::{Error, Result};

use quote::quote;

/// Emits the manager trait whose methods are derived from the table.
///
/// The primary key types are only declared here. They are implemented by the
/// hand written manager, which is never overwritten.
#[derive(Debug, Default, Clone, Copy)]
pub struct GeneratedManagerTranslator;

impl Translator for GeneratedManagerTranslator {
    fn kind(&self) -> ArtifactKind {
        ArtifactKind::GeneratedManager
    }

    fn translate(&self, cx: &TableContext<'_>) -> Result<File> {
        if cx.primary_key.is_empty() {
            return Err(Error::invalid_schema(format!(
                "table `{}` has no primary key",
                cx.relative_name
            )));
        }

        let support = cx.support();
        let entity = &cx.entity;
        let entity_impl = &cx.entity_impl;
        let entity_module = cx.entity_module();
        let manager = &cx.manager;
        let manager_module = cx.manager_module();
        let relative_name = &cx.relative_name;
        let full_name = cx.naming.full_name_of_table(cx.project, cx.table)?;

        let keys: Vec<_> = cx.primary_key_columns().map(|column| &column.ident).collect();
        let primary_key = match keys.as_slice() {
            [key] => quote!(entity.#key()),
            keys => quote!((#(entity.#keys()),*)),
        };

        let manager_trait = Trait::new(cx.generated_manager.to_string())
            .doc(format!("Manages the rows of {full_name}."))
            .supertrait(quote!(#support::Manager<Entity = #entity_impl>))
            .method(
                Method::new("primary_key_for")
                    .doc("The primary key of `entity`, in key declaration order.")
                    .receiver(Receiver::Ref)
                    .param("entity", quote!(&#entity_impl))
                    .returns(cx.primary_key_ty())
                    .stmt(primary_key),
            )
            .method(
                Method::new("table")
                    .doc("Looks the table up in the current project.")
                    .receiver(Receiver::Ref)
                    .returns(quote!(#support::Result<#support::TableRef>))
                    .stmt(quote!(self.project_component().find_table_by_name(#relative_name))),
            )
            .method(
                Method::new("manager_type")
                    .receiver(Receiver::Ref)
                    .returns(quote!(#support::TypeToken))
                    .stmt(quote!(#support::TypeToken::of::<super::super::#manager_module::#manager>())),
            )
            .method(
                Method::new("entity_type")
                    .receiver(Receiver::Ref)
                    .returns(quote!(#support::TypeToken))
                    .stmt(quote!(#support::TypeToken::of::<#entity_impl>())),
            )
            .method(
                Method::new("primary_key_types")
                    .doc("Types of the primary key columns, in key declaration order.")
                    .receiver(Receiver::Ref)
                    .returns(quote!(#support::Vec<#support::TypeToken>)),
            );

        Ok(File::new(
            self.kind(),
            format!("{}/{}.rs", cx.generated_dir(), cx.generated_manager_module()),
        )
        .use_path(quote!(super::#entity_module::{#entity, #entity_impl}))
        .item(manager_trait))
    }
}
