use super::Translator;
use crate::model::{ArtifactKind, File, Impl, Method, Receiver, Struct, Trait};
use crate::{ColumnContext, TableContext};

use trellis_core::Result;

use quote::quote;

/// Emits the entity traits, the entity struct and one field accessor per
/// column.
#[derive(Debug, Default, Clone, Copy)]
pub struct EntityTranslator;

impl Translator for EntityTranslator {
    fn kind(&self) -> ArtifactKind {
        ArtifactKind::Entity
    }

    fn translate(&self, cx: &TableContext<'_>) -> Result<File> {
        let entity = &cx.entity;
        let entity_impl = &cx.entity_impl;
        let builder = &cx.builder;
        let full_name = cx.naming.full_name_of_table(cx.project, cx.table)?;

        let mut entity_trait = Trait::new(entity.to_string())
            .doc(format!("A row of {full_name}."));
        let mut builder_trait = Trait::new(builder.to_string())
            .doc(format!("Mutable view of a row of {full_name} under construction."));
        let mut entity_struct = Struct::new(entity_impl.to_string())
            .derive("Debug")
            .derive("Clone")
            .derive("Default")
            .derive("PartialEq");
        let mut getters = Impl::of_trait(entity, entity_impl);

        for column in &cx.columns {
            let ident = &column.ident;
            let setter = &column.setter;
            let ty = column.rust_ty();

            entity_trait = entity_trait.method(getter(column));
            builder_trait = builder_trait.method(getter(column)).method(
                Method::new(setter.to_string())
                    .receiver(Receiver::RefMut)
                    .param("value", &ty)
                    .returns(quote!(&mut Self)),
            );
            entity_struct = entity_struct.field(ident.to_string(), &ty);
            getters = getters.method(getter(column).stmt(quote!(self.#ident.clone())));
        }

        builder_trait = builder_trait.method(
            Method::new("build")
                .receiver(Receiver::Ref)
                .returns(quote!(#entity_impl))
                .doc(format!("Creates an immutable `{entity_impl}` from the current values.")),
        );

        let fields: Vec<_> = cx.columns.iter().map(|column| &column.ident).collect();
        let getters_of_builder = &fields;
        let mut inherent = Impl::inherent(entity_impl).method(
            Method::new("from_builder")
                .public()
                .param("builder", quote!(&impl #builder))
                .returns(quote!(Self))
                .stmt(quote!(Self { #( #fields: builder.#getters_of_builder(), )* })),
        );

        for column in &cx.columns {
            inherent = inherent.method(field_fn(cx, column));
        }

        Ok(
            File::new(self.kind(), format!("{}/{}.rs", cx.generated_dir(), cx.entity_module()))
                .attr(quote!(allow(clippy::clone_on_copy)))
                .item(entity_trait)
                .item(builder_trait)
                .item(entity_struct)
                .item(getters)
                .item(inherent),
        )
    }
}

fn getter(column: &ColumnContext<'_>) -> Method {
    Method::new(column.ident.to_string())
        .receiver(Receiver::Ref)
        .returns(column.rust_ty())
}

/// A function returning the lazily built field of `column`.
fn field_fn(cx: &TableContext<'_>, column: &ColumnContext<'_>) -> Method {
    let support = cx.support();
    let entity_impl = &cx.entity_impl;
    let ident = &column.ident;
    let value_ty = &column.value_ty;
    let database_ty = &column.database_ty;
    let mapper = &column.mapper_expr;
    let unique = column.unique;

    let schema_name = &cx.schema.name;
    let table_name = &cx.table.name;
    let column_name = &column.column.name;

    let field_ty = if column.mapper.orderable {
        quote!(#support::ComparableField<#entity_impl, #database_ty, #value_ty>)
    } else {
        quote!(#support::ReferenceField<#entity_impl, #database_ty, #value_ty>)
    };

    let (get, set) = if column.nullable() {
        (
            quote!(entity.#ident.clone()),
            quote!(entity.#ident = Some(value)),
        )
    } else {
        (
            quote!(Some(entity.#ident.clone())),
            quote!(entity.#ident = value),
        )
    };

    let constructor = if column.mapper.orderable {
        quote!(#support::ComparableField::new)
    } else {
        quote!(#support::ReferenceField::new)
    };

    Method::new(column.field_fn.to_string())
        .public()
        .doc(format!("The `{column_name}` field."))
        .returns(quote!(&'static #field_ty))
        .stmt(quote! {
            static FIELD: #support::OnceLock<#field_ty> = #support::OnceLock::new();
        })
        .stmt(quote! {
            FIELD.get_or_init(|| {
                #constructor(
                    #support::FieldIdentifier::new(#schema_name, #table_name, #column_name),
                    |entity: &#entity_impl| #get,
                    |entity: &mut #entity_impl, value: #value_ty| #set,
                    #mapper,
                    #unique,
                )
                .expect("field identifier is validated when generating")
            })
        })
}
