use super::Translator;
use crate::model::{ArtifactKind, File, Impl, Method, Receiver, Struct};
use crate::TableContext;

use trellis_core::Result;

use quote::quote;

/// Emits the manager struct users customize. Written once.
#[derive(Debug, Default, Clone, Copy)]
pub struct ManagerTranslator;

impl Translator for ManagerTranslator {
    fn kind(&self) -> ArtifactKind {
        ArtifactKind::Manager
    }

    fn translate(&self, cx: &TableContext<'_>) -> Result<File> {
        let support = cx.support();
        let generated_module = &cx.generated_module;
        let generated_manager = &cx.generated_manager;
        let entity_impl = &cx.entity_impl;
        let manager = &cx.manager;

        let key_types = cx.primary_key_columns().map(|column| &column.value_ty);

        let manager_struct = Struct::new(manager.to_string())
            .doc(format!("Manager of `{}`.", cx.relative_name))
            .doc("")
            .doc("This file is not overwritten when code is regenerated.")
            .derive("Debug")
            .derive("Clone")
            .field("project_component", quote!(Arc<ProjectComponent>));

        let inherent = Impl::inherent(manager).method(
            Method::new("new")
                .public()
                .param("project_component", quote!(Arc<ProjectComponent>))
                .returns(quote!(Self))
                .stmt(quote!(Self { project_component })),
        );

        let manager_impl = Impl::of_trait("Manager", manager)
            .assoc_type("Entity", entity_impl)
            .method(
                Method::new("project_component")
                    .receiver(Receiver::Ref)
                    .returns(quote!(&ProjectComponent))
                    .stmt(quote!(&self.project_component)),
            );

        let generated_impl = Impl::of_trait(generated_manager, manager).method(
            Method::new("primary_key_types")
                .receiver(Receiver::Ref)
                .returns(quote!(Vec<TypeToken>))
                .stmt(quote!(vec![#(TypeToken::of::<#key_types>()),*])),
        );

        Ok(File::new(
            self.kind(),
            format!("{}/{}.rs", cx.dir(), cx.manager_module()),
        )
        .use_path(quote!(super::#generated_module::{#generated_manager, #entity_impl}))
        .use_path(quote!(#support::{Manager, ProjectComponent, TypeToken}))
        .use_path(quote!(std::sync::Arc))
        .item(manager_struct)
        .item(inherent)
        .item(manager_impl)
        .item(generated_impl))
    }
}
