use crate::model::{ArtifactKind, File, Visibility, WritePolicy};
use crate::translate::{self, Translator};
use crate::{Config, TableContext};

use trellis_core::mapper::MapperRegistry;
use trellis_core::naming::{NamingConvention, SqlNamingConvention};
use trellis_core::schema::{Project, SchemaId, Table};
use trellis_core::{Error, Result};

use rayon::prelude::*;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, debug_span, info, warn};

/// Runs the translators over every table of a project.
pub struct Generator<'a> {
    project: &'a Project,
    config: Config,
    mappers: MapperRegistry,
    translators: Vec<Box<dyn Translator>>,

    /// Used for every dbms instead of the convention of its type
    naming: Option<Box<dyn NamingConvention>>,
}

/// The outcome of a generator run.
#[derive(Debug, Clone, Default)]
pub struct Generation {
    /// Every generated file, sorted by path.
    pub files: Vec<File>,

    /// Tables that produced no files, sorted by name.
    pub failures: Vec<Failure>,
}

/// A table that could not be translated.
#[derive(Debug, Clone)]
pub struct Failure {
    /// `dbms.schema.table`
    pub table: String,
    pub error: Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteOutcome {
    pub path: PathBuf,
    pub action: WriteAction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteAction {
    /// The file was created or its content replaced.
    Written,

    /// The file already had the generated content.
    Unchanged,

    /// The file is hand customizable and already exists.
    Skipped,
}

/// A table waiting to be translated.
struct Job<'a> {
    table: &'a Table,
    name: String,
    naming: &'a dyn NamingConvention,
}

/// Files of one translated table.
struct Translated {
    module: String,
    files: Vec<File>,
}

impl<'a> Generator<'a> {
    pub fn new(project: &'a Project) -> Self {
        Self {
            project,
            config: Config::default(),
            mappers: MapperRegistry::builtin(),
            translators: translate::all(),
            naming: None,
        }
    }

    pub fn config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    pub fn mappers(mut self, mappers: MapperRegistry) -> Self {
        self.mappers = mappers;
        self
    }

    /// Replaces the naming convention chosen from each dbms type.
    pub fn naming(mut self, naming: impl NamingConvention + 'static) -> Self {
        self.naming = Some(Box::new(naming));
        self
    }

    pub fn translators(mut self, translators: Vec<Box<dyn Translator>>) -> Self {
        self.translators = translators;
        self
    }

    pub fn generate(&self) -> Generation {
        let mut failures = vec![];

        let conventions: Vec<_> = self
            .project
            .dbmses
            .iter()
            .map(|dbms| SqlNamingConvention::for_dbms_type(&dbms.type_name))
            .collect();

        let mut jobs = vec![];

        for (dbms, convention) in self.project.dbmses.iter().zip(&conventions) {
            let naming: &dyn NamingConvention = match (&self.naming, convention) {
                (Some(naming), _) => &**naming,
                (None, Ok(convention)) => convention,
                (None, Err(err)) => {
                    for table in self.tables_of(&dbms.schemas, &mut failures) {
                        failures.push(self.failure(table, err.clone()));
                    }
                    continue;
                }
            };

            let mut schemas = vec![];
            for id in &dbms.schemas {
                match self.project.schema(*id) {
                    Ok(schema) if naming.is_schema_excluded(&schema.name) => {
                        debug!(dbms = %dbms.name, schema = %schema.name, "skipping excluded schema");
                    }
                    Ok(_) => schemas.push(*id),
                    Err(error) => failures.push(Failure {
                        table: format!("{}.{}", dbms.name, id.0),
                        error,
                    }),
                }
            }

            for table in self.tables_of(&schemas, &mut failures) {
                let name = self
                    .project
                    .relative_name(table)
                    .unwrap_or_else(|_| table.name.clone());
                jobs.push(Job { table, name, naming });
            }
        }

        let results: Vec<(String, Result<Translated>)> = if self.config.parallel {
            jobs.par_iter()
                .map(|job| (job.name.clone(), self.translate_table(job)))
                .collect()
        } else {
            jobs.iter()
                .map(|job| (job.name.clone(), self.translate_table(job)))
                .collect()
        };

        let mut results = results;
        results.sort_by(|(a, _), (b, _)| a.cmp(b));

        let mut files = vec![];
        let mut modules: HashMap<String, String> = HashMap::new();

        for (table, result) in results {
            let translated = result.and_then(|translated| {
                match modules.get(&translated.module) {
                    Some(other) => Err(Error::invalid_schema(format!(
                        "module `{}` of `{table}` is already generated for `{other}`",
                        translated.module
                    ))),
                    None => Ok(translated),
                }
            });

            match translated {
                Ok(translated) => {
                    modules.insert(translated.module, table);
                    files.extend(translated.files);
                }
                Err(error) => {
                    warn!(table = %table, error = %error, "failed to translate table");
                    failures.push(Failure { table, error });
                }
            }
        }

        let tables = modules.len();
        if tables > 0 {
            files.push(self.root_module(modules.into_keys()));
        }

        files.sort_by(|a, b| a.path.cmp(&b.path));
        failures.sort_by(|a, b| a.table.cmp(&b.table));

        info!(
            project = %self.project.name,
            tables,
            files = files.len(),
            failures = failures.len(),
            "generated code"
        );

        Generation { files, failures }
    }

    fn translate_table(&self, job: &Job<'_>) -> Result<Translated> {
        let _span = debug_span!("translate", table = %job.name).entered();

        let cx = TableContext::new(self.project, job.table, job.naming, &self.mappers, &self.config)?;
        let files = self
            .translators
            .iter()
            .map(|translator| translator.translate(&cx))
            .collect::<Result<Vec<_>>>()?;

        for file in &files {
            debug!(path = %file.path.display(), kind = ?file.kind, "emitted artifact");
        }

        Ok(Translated {
            module: cx.module.to_string(),
            files,
        })
    }

    /// Tables of the given schemas. Dangling ids are recorded as failures.
    fn tables_of(
        &self,
        schemas: &[SchemaId],
        failures: &mut Vec<Failure>,
    ) -> Vec<&'a Table> {
        let project = self.project;
        let mut tables = vec![];

        for id in schemas {
            let schema = match project.schema(*id) {
                Ok(schema) => schema,
                Err(error) => {
                    failures.push(Failure {
                        table: format!("schema {}", id.0),
                        error,
                    });
                    continue;
                }
            };

            for table_id in &schema.tables {
                match project.table(*table_id) {
                    Ok(table) => tables.push(table),
                    Err(error) => failures.push(Failure {
                        table: format!("{}.{}", schema.name, table_id.0),
                        error,
                    }),
                }
            }
        }

        tables
    }

    fn failure(&self, table: &Table, error: Error) -> Failure {
        Failure {
            table: self
                .project
                .relative_name(table)
                .unwrap_or_else(|_| table.name.clone()),
            error,
        }
    }

    fn root_module(&self, modules: impl Iterator<Item = String>) -> File {
        let mut modules: Vec<_> = modules.collect();
        modules.sort();

        modules.into_iter().fold(
            File::new(ArtifactKind::RootModule, "mod.rs")
                .doc(format!("Generated code for project `{}`.", self.project.name)),
            |file, module| file.module(module, Visibility::Pub),
        )
    }
}

impl Generation {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    /// The generated file at `path`, relative to the output root.
    pub fn file(&self, path: impl AsRef<Path>) -> Option<&File> {
        let path = path.as_ref();
        self.files.iter().find(|file| file.path == path)
    }

    /// Writes every file below `root`.
    ///
    /// Regenerated files are replaced; hand customizable files are only
    /// written when missing.
    pub fn write_to(&self, root: impl AsRef<Path>) -> Result<Vec<WriteOutcome>> {
        let root = root.as_ref();
        let mut outcomes = Vec::with_capacity(self.files.len());

        for file in &self.files {
            let path = root.join(&file.path);

            let action = match file.policy {
                WritePolicy::Preserve if path.exists() => {
                    debug!(path = %path.display(), "keeping existing file");
                    WriteAction::Skipped
                }
                policy => {
                    let src = file.render()?;
                    if policy == WritePolicy::Regenerate
                        && fs::read_to_string(&path).is_ok_and(|existing| existing == src)
                    {
                        WriteAction::Unchanged
                    } else {
                        if let Some(parent) = path.parent() {
                            fs::create_dir_all(parent)?;
                        }
                        fs::write(&path, src)?;
                        WriteAction::Written
                    }
                }
            };

            outcomes.push(WriteOutcome {
                path: file.path.clone(),
                action,
            });
        }

        let written = outcomes
            .iter()
            .filter(|outcome| outcome.action == WriteAction::Written)
            .count();
        info!(root = %root.display(), written, total = outcomes.len(), "wrote generated code");

        Ok(outcomes)
    }
}
