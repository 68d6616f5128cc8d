use pretty_assertions::assert_eq;
use std::fs;
use trellis_codegen::model::WritePolicy;
use trellis_codegen::{generate, generate_from_json, Config, Generator, WriteAction};
use trellis_core::naming::SqlNamingConvention;
use trellis_core::Project;

const WAREHOUSE: &str = r#"{
    "name": "warehouse",
    "dbmses": [
        {
            "name": "main",
            "type": "mysql",
            "schemas": [
                {
                    "name": "stock",
                    "tables": [
                        {
                            "name": "item",
                            "columns": [
                                { "name": "sku", "type_mapper": "identity:string" },
                                { "name": "description", "type_mapper": "clob_to_string", "nullable": true },
                                { "name": "weight", "type_mapper": "identity:f64" }
                            ],
                            "primary_key_columns": [{ "name": "sku" }]
                        },
                        {
                            "name": "bin",
                            "columns": [
                                { "name": "aisle", "type_mapper": "identity:i16" },
                                { "name": "slot", "type_mapper": "identity:i16" },
                                { "name": "sku", "type_mapper": "identity:string", "unique": true }
                            ],
                            "primary_key_columns": [{ "name": "aisle" }, { "name": "slot" }]
                        },
                        {
                            "name": "legacy",
                            "columns": [{ "name": "id", "type_mapper": "identity:u128" }],
                            "primary_key_columns": [{ "name": "id" }]
                        },
                        {
                            "name": "orphan",
                            "columns": [{ "name": "id", "type_mapper": "identity:i64" }],
                            "primary_key_columns": [{ "name": "missing" }]
                        }
                    ]
                },
                {
                    "name": "information_schema",
                    "tables": [{
                        "name": "tables",
                        "columns": [{ "name": "name", "type_mapper": "identity:string" }],
                        "primary_key_columns": [{ "name": "name" }]
                    }]
                }
            ]
        },
        {
            "name": "archive",
            "type": "oracle",
            "schemas": [{
                "name": "old",
                "tables": [{
                    "name": "entry",
                    "columns": [{ "name": "id", "type_mapper": "identity:i64" }],
                    "primary_key_columns": [{ "name": "id" }]
                }]
            }]
        }
    ]
}"#;

fn paths(config: &Config) -> Vec<String> {
    generate_from_json(WAREHOUSE, config)
        .unwrap()
        .files
        .iter()
        .map(|file| file.path.display().to_string())
        .collect()
}

#[test]
fn failing_tables_do_not_stop_the_others() {
    let generation = generate_from_json(WAREHOUSE, &Config::default()).unwrap();

    let failed: Vec<_> = generation
        .failures
        .iter()
        .map(|failure| failure.table.as_str())
        .collect();
    assert_eq!(
        failed,
        [
            "archive.old.entry",
            "main.stock.legacy",
            "main.stock.orphan"
        ]
    );

    assert!(generation.failures[0].error.is_invalid_schema());
    assert!(generation.failures[2].error.is_resolution());
    assert!(!generation.is_complete());

    assert_eq!(
        paths(&Config::default()),
        [
            "bin/bin_manager.rs",
            "bin/generated/bin.rs",
            "bin/generated/bin_builder_impl.rs",
            "bin/generated/generated_bin_manager.rs",
            "bin/generated/mod.rs",
            "bin/mod.rs",
            "item/generated/generated_item_manager.rs",
            "item/generated/item.rs",
            "item/generated/item_builder_impl.rs",
            "item/generated/mod.rs",
            "item/item_manager.rs",
            "item/mod.rs",
            "mod.rs",
        ]
    );
}

#[test]
fn unknown_mapper_is_reported_with_its_column() {
    let generation = generate_from_json(WAREHOUSE, &Config::default()).unwrap();
    let legacy = generation
        .failures
        .iter()
        .find(|failure| failure.table == "main.stock.legacy")
        .unwrap();

    assert_eq!(
        legacy.error.to_string(),
        "invalid schema: cannot translate column `id` of `main.stock.legacy`: \
         invalid schema: unknown type mapper `identity:u128`"
    );
}

#[test]
fn root_module_declares_translated_tables() {
    let generation = generate_from_json(WAREHOUSE, &Config::default()).unwrap();
    let root = generation.file("mod.rs").unwrap();

    assert_eq!(root.policy, WritePolicy::Regenerate);
    let modules: Vec<_> = root.mods.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(modules, ["bin", "item"]);
}

#[test]
fn every_file_parses() {
    let generation = generate_from_json(WAREHOUSE, &Config::default()).unwrap();

    for file in &generation.files {
        let src = file.render().unwrap();
        if let Err(err) = syn::parse_file(&src) {
            panic!("{} does not parse: {err}\n{src}", file.path.display());
        }
    }
}

#[test]
fn parallel_and_sequential_runs_agree() {
    let project = Project::from_json(WAREHOUSE).unwrap();

    let mut sequential = Config::default();
    sequential.parallel(false);

    let a = generate(&project, &Config::default());
    let b = generate(&project, &sequential);
    assert_eq!(a.files, b.files);
    assert_eq!(a.failures.len(), b.failures.len());
}

#[test]
fn translation_is_repeatable() {
    let project = Project::from_json(WAREHOUSE).unwrap();

    let first = generate(&project, &Config::default());
    let second = generate(&project, &Config::default());
    assert_eq!(first.files, second.files);
}

#[test]
fn naming_override_applies_to_every_dbms() {
    let project = Project::from_json(WAREHOUSE).unwrap();
    let generation = Generator::new(&project)
        .naming(SqlNamingConvention::postgresql())
        .generate();

    // The oracle dbms is translated, and `information_schema` is still a
    // system schema under postgres.
    assert!(generation.file("entry/mod.rs").is_some());
    assert!(generation.file("tables/mod.rs").is_none());
}

#[test]
fn runtime_path_is_configurable() {
    let mut config = Config::default();
    config.runtime("crate::rt");

    let generation = generate_from_json(WAREHOUSE, &config).unwrap();
    let src = generation
        .file("bin/generated/generated_bin_manager.rs")
        .unwrap()
        .render()
        .unwrap();
    assert!(src.contains("crate :: rt :: codegen_support :: Manager"));
    assert!(!src.contains("trellis_core"));
}

#[test]
fn custom_files_are_written_once() {
    let dir = tempfile::tempdir().unwrap();
    let generation = generate_from_json(WAREHOUSE, &Config::default()).unwrap();

    let first = generation.write_to(dir.path()).unwrap();
    assert!(first.iter().all(|outcome| outcome.action == WriteAction::Written));

    let manager = dir.path().join("item/item_manager.rs");
    fs::write(&manager, "// customized\n").unwrap();

    let entity = dir.path().join("item/generated/item.rs");
    fs::write(&entity, "// edited\n").unwrap();

    let second = generation.write_to(dir.path()).unwrap();
    let action = |path: &str| {
        second
            .iter()
            .find(|outcome| outcome.path.to_str() == Some(path))
            .unwrap()
            .action
    };

    assert_eq!(action("item/item_manager.rs"), WriteAction::Skipped);
    assert_eq!(action("item/mod.rs"), WriteAction::Skipped);
    assert_eq!(action("item/generated/item.rs"), WriteAction::Written);
    assert_eq!(action("bin/generated/bin.rs"), WriteAction::Unchanged);

    assert_eq!(fs::read_to_string(&manager).unwrap(), "// customized\n");
    assert!(fs::read_to_string(&entity)
        .unwrap()
        .starts_with("// @generated"));
}
