mod config;
pub use config::Config;

mod context;
pub use context::{ColumnContext, TableContext};

mod generator;
pub use generator::{Failure, Generation, Generator, WriteAction, WriteOutcome};

pub mod model;

pub mod translate;
pub use translate::Translator;

mod util;

use trellis_core::{Project, Result};

/// Runs every translator over `project` with the default type mappers.
pub fn generate(project: &Project, config: &Config) -> Generation {
    Generator::new(project).config(config.clone()).generate()
}

/// Loads a project document and generates its code.
pub fn generate_from_json(src: &str, config: &Config) -> Result<Generation> {
    let project = Project::from_json(src)?;
    Ok(generate(&project, config))
}
