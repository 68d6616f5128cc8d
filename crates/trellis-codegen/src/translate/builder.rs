use super::Translator;
use crate::model::{ArtifactKind, File, Impl, Method, Receiver, Struct};
use crate::TableContext;

use trellis_core::Result;

use quote::quote;

/// Emits the mutable builder struct of an entity.
#[derive(Debug, Default, Clone, Copy)]
pub struct EntityBuilderTranslator;

impl Translator for EntityBuilderTranslator {
    fn kind(&self) -> ArtifactKind {
        ArtifactKind::EntityBuilder
    }

    fn translate(&self, cx: &TableContext<'_>) -> Result<File> {
        let entity = &cx.entity;
        let entity_impl = &cx.entity_impl;
        let builder = &cx.builder;
        let builder_impl = &cx.builder_impl;
        let entity_module = cx.entity_module();

        let mut builder_struct = Struct::new(builder_impl.to_string())
            .doc(format!("Builds `{entity_impl}` values one column at a time."))
            .derive("Debug")
            .derive("Clone")
            .derive("Default")
            .derive("PartialEq");
        let mut builder_trait_impl = Impl::of_trait(builder, builder_impl);

        for column in &cx.columns {
            let ident = &column.ident;
            let ty = column.rust_ty();

            builder_struct = builder_struct.field(ident.to_string(), &ty);
            builder_trait_impl = builder_trait_impl
                .method(
                    Method::new(ident.to_string())
                        .receiver(Receiver::Ref)
                        .returns(&ty)
                        .stmt(quote!(self.#ident.clone())),
                )
                .method(
                    Method::new(column.setter.to_string())
                        .receiver(Receiver::RefMut)
                        .param("value", &ty)
                        .returns(quote!(&mut Self))
                        .stmt(quote!(self.#ident = value;))
                        .stmt(quote!(self)),
                );
        }

        builder_trait_impl = builder_trait_impl.method(
            Method::new("build")
                .receiver(Receiver::Ref)
                .returns(quote!(#entity_impl))
                .stmt(quote!(#entity_impl::from_builder(self))),
        );

        let fields: Vec<_> = cx.columns.iter().map(|column| &column.ident).collect();
        let getters = &fields;
        let inherent = Impl::inherent(builder_impl)
            .method(
                Method::new("new")
                    .public()
                    .doc("A builder with every column at its default value.")
                    .returns(quote!(Self))
                    .stmt(quote!(<Self as ::core::default::Default>::default())),
            )
            .method(
                Method::new("from_entity")
                    .public()
                    .doc("A builder holding the values of `entity`.")
                    .param("entity", quote!(&impl #entity))
                    .returns(quote!(Self))
                    .stmt(quote!(Self { #( #fields: entity.#getters(), )* })),
            );

        Ok(File::new(
            self.kind(),
            format!("{}/{}.rs", cx.generated_dir(), cx.builder_module()),
        )
        .attr(quote!(allow(clippy::clone_on_copy)))
        .use_path(quote!(super::#entity_module::{#entity, #builder, #entity_impl}))
        .item(builder_struct)
        .item(inherent)
        .item(builder_trait_impl))
    }
}
