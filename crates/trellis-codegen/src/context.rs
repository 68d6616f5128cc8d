use crate::{util, Config};

use trellis_core::field::FieldIdentifier;
use trellis_core::mapper::{MapperInfo, MapperRegistry};
use trellis_core::naming::NamingConvention;
use trellis_core::schema::{Column, Project, Schema, Table};
use trellis_core::{Error, Result};

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use std::collections::HashMap;

/// Everything the translators need to know about one table, resolved before
/// any translator runs.
///
/// Building the context fails if the table is not fully resolvable, so a table
/// either translates completely or not at all.
pub struct TableContext<'a> {
    pub project: &'a Project,

    pub schema: &'a Schema,

    pub table: &'a Table,

    pub config: &'a Config,

    pub naming: &'a dyn NamingConvention,

    /// `dbms.schema.table`
    pub relative_name: String,

    /// Path of the runtime crate
    pub runtime: TokenStream,

    /// Module of the table, e.g. `order_line`
    pub module: syn::Ident,

    /// Name of the module holding the regenerated files
    pub generated_module: syn::Ident,

    /// Read only entity trait, e.g. `OrderLine`
    pub entity: syn::Ident,

    /// Entity struct, e.g. `OrderLineImpl`
    pub entity_impl: syn::Ident,

    /// Builder trait, e.g. `OrderLineBuilder`
    pub builder: syn::Ident,

    /// Builder struct, e.g. `OrderLineBuilderImpl`
    pub builder_impl: syn::Ident,

    /// Generated manager trait, e.g. `GeneratedOrderLineManager`
    pub generated_manager: syn::Ident,

    /// Hand written manager, e.g. `OrderLineManager`
    pub manager: syn::Ident,

    pub columns: Vec<ColumnContext<'a>>,

    /// Indices into `columns`, in primary key order.
    pub primary_key: Vec<usize>,
}

/// A column with its Rust names and types.
pub struct ColumnContext<'a> {
    pub column: &'a Column,

    pub mapper: &'a MapperInfo,

    /// Getter and struct field name
    pub ident: syn::Ident,

    /// `set_<column>`
    pub setter: syn::Ident,

    /// `<column>_field`
    pub field_fn: syn::Ident,

    /// Language value type `V`
    pub value_ty: TokenStream,

    /// Database value type `D`
    pub database_ty: TokenStream,

    /// Expression constructing the type mapper
    pub mapper_expr: TokenStream,

    pub unique: bool,
}

impl<'a> TableContext<'a> {
    pub fn new(
        project: &'a Project,
        table: &'a Table,
        naming: &'a dyn NamingConvention,
        mappers: &'a MapperRegistry,
        config: &'a Config,
    ) -> Result<Self> {
        let schema = project.schema_of(table)?;
        let relative_name = project.relative_name(table)?;
        let runtime = util::path(&config.runtime)?;

        let base = table.attributes.get_str("alias").unwrap_or(&table.name);
        let module = util::snake_ident(base)?;
        let entity = util::camel_ident(base)?;
        let generated_module = syn::parse_str::<syn::Ident>(&config.generated_module)
            .map_err(|_| {
                Error::invalid_argument(format!(
                    "generated module `{}` is not an identifier",
                    config.generated_module
                ))
            })?;

        let primary_key_columns = project.primary_key_columns(table)?;

        let mut columns = Vec::with_capacity(table.columns.len());
        let mut seen: HashMap<String, &str> = HashMap::new();

        for column in &table.columns {
            let cx = FieldIdentifier::new(&schema.name, &table.name, &column.name)
                .validate()
                .and_then(|()| {
                    ColumnContext::new(column, mappers, &config.runtime, &primary_key_columns)
                })
                .map_err(|err| {
                    err.context(Error::invalid_schema(format!(
                        "cannot translate column `{}` of `{relative_name}`",
                        column.name
                    )))
                })?;

            if let Some(other) = seen.insert(cx.ident.to_string(), &column.name) {
                return Err(Error::invalid_schema(format!(
                    "columns `{other}` and `{}` of `{relative_name}` map to the same name `{}`",
                    column.name, cx.ident
                )));
            }

            columns.push(cx);
        }

        let primary_key = primary_key_columns
            .iter()
            .map(|pk_column| pk_column.id.index)
            .collect();

        Ok(Self {
            project,
            schema,
            table,
            config,
            naming,
            relative_name,
            runtime,
            module,
            generated_module,
            builder: format_ident!("{}Builder", entity),
            builder_impl: format_ident!("{}BuilderImpl", entity),
            entity_impl: format_ident!("{}Impl", entity),
            generated_manager: format_ident!("Generated{}Manager", entity),
            manager: format_ident!("{}Manager", entity),
            entity,
            columns,
            primary_key,
        })
    }

    /// `::runtime::codegen_support`
    pub fn support(&self) -> TokenStream {
        let runtime = &self.runtime;
        quote!(#runtime::codegen_support)
    }

    pub fn primary_key_columns(&self) -> impl Iterator<Item = &ColumnContext<'a>> {
        self.primary_key.iter().map(|index| &self.columns[*index])
    }

    /// Type of the primary key: the column type for a single column key, a
    /// tuple in key order otherwise.
    pub fn primary_key_ty(&self) -> TokenStream {
        let types: Vec<_> = self.primary_key_columns().map(|cx| cx.rust_ty()).collect();
        match types.as_slice() {
            [ty] => ty.clone(),
            types => quote!((#(#types),*)),
        }
    }

    /// Directory of the table, relative to the output root.
    pub fn dir(&self) -> String {
        self.module.to_string()
    }

    /// Directory of the regenerated files, relative to the output root.
    pub fn generated_dir(&self) -> String {
        format!("{}/{}", self.module, self.generated_module)
    }

    /// Module of the entity file inside the generated module.
    pub fn entity_module(&self) -> syn::Ident {
        self.module.clone()
    }

    pub fn builder_module(&self) -> syn::Ident {
        format_ident!("{}_builder_impl", self.module)
    }

    pub fn generated_manager_module(&self) -> syn::Ident {
        format_ident!("generated_{}_manager", self.module)
    }

    pub fn manager_module(&self) -> syn::Ident {
        format_ident!("{}_manager", self.module)
    }
}

impl<'a> ColumnContext<'a> {
    fn new(
        column: &'a Column,
        mappers: &'a MapperRegistry,
        runtime: &str,
        primary_key_columns: &[&Column],
    ) -> Result<Self> {
        let mapper = mappers.get(&column.type_mapper)?;

        let ident = util::snake_ident(column.attributes.get_str("alias").unwrap_or(&column.name))?;
        let value_ty = parse_type(&mapper.language_type_in(runtime))?;
        let database_ty = parse_type(&mapper.database_type_in(runtime))?;
        let mapper_expr = parse_expr(&mapper.constructor_in(runtime))?;

        let sole_key = matches!(primary_key_columns, [only] if only.id == column.id);
        let unique = sole_key || column.attributes.get_bool("unique").unwrap_or(false);

        Ok(Self {
            column,
            mapper,
            setter: util::setter_ident(&ident),
            field_fn: util::field_fn_ident(&ident),
            ident,
            value_ty,
            database_ty,
            mapper_expr,
            unique,
        })
    }

    pub fn nullable(&self) -> bool {
        self.column.nullable
    }

    /// Type of the entity field: `V`, or `Option<V>` when nullable.
    pub fn rust_ty(&self) -> TokenStream {
        let value_ty = &self.value_ty;
        if self.nullable() {
            quote!(Option<#value_ty>)
        } else {
            value_ty.clone()
        }
    }
}

fn parse_type(src: &str) -> Result<TokenStream> {
    syn::parse_str::<syn::Type>(src)
        .map(|ty| quote!(#ty))
        .map_err(|err| Error::invalid_schema(format!("`{src}` is not a Rust type: {err}")))
}

fn parse_expr(src: &str) -> Result<TokenStream> {
    syn::parse_str::<syn::Expr>(src)
        .map(|expr| quote!(#expr))
        .map_err(|err| Error::invalid_schema(format!("`{src}` is not a Rust expression: {err}")))
}
