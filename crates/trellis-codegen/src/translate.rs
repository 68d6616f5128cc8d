//! Translators turn one table into one file each.

mod builder;
pub use builder::EntityBuilderTranslator;

mod entity;
pub use entity::EntityTranslator;

mod generated_manager;
pub use generated_manager::GeneratedManagerTranslator;

mod generated_module;
pub use generated_module::GeneratedModuleTranslator;

mod manager;
pub use manager::ManagerTranslator;

mod table_module;
pub use table_module::TableModuleTranslator;

use crate::model::{ArtifactKind, File};
use crate::TableContext;

use trellis_core::Result;

/// Produces one artifact for a table.
///
/// Translators are pure: translating the same context twice yields equal
/// files.
pub trait Translator: Send + Sync {
    fn kind(&self) -> ArtifactKind;

    fn translate(&self, cx: &TableContext<'_>) -> Result<File>;
}

/// Every translator, in output order.
pub fn all() -> Vec<Box<dyn Translator>> {
    vec![
        Box::new(EntityTranslator),
        Box::new(EntityBuilderTranslator),
        Box::new(GeneratedManagerTranslator),
        Box::new(GeneratedModuleTranslator),
        Box::new(ManagerTranslator),
        Box::new(TableModuleTranslator),
    ]
}
