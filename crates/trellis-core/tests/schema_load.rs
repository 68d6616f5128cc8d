use pretty_assertions::assert_eq;
use trellis_core::schema::ProjectDef;
use trellis_core::Project;

const DOCUMENT: &str = r#"{
    "name": "shop",
    "dbmses": [{
        "name": "main",
        "type": "postgresql",
        "schemas": [{
            "name": "public",
            "tables": [{
                "name": "user",
                "alias": "account",
                "columns": [
                    { "name": "id", "type_mapper": "identity:i64", "database_type": "BIGINT" },
                    { "name": "email", "type_mapper": "identity:string", "nullable": true, "unique": true }
                ],
                "primary_key_columns": [{ "name": "id" }]
            }]
        }]
    }]
}"#;

#[test]
fn load_document() {
    let project = Project::from_json(DOCUMENT).unwrap();

    assert_eq!(project.name, "shop");
    assert_eq!(project.dbmses[0].type_name, "postgresql");

    let table = project.find_table_by_name("main.public.user").unwrap();
    assert_eq!(table.attributes.get_str("alias"), Some("account"));
    assert_eq!(table.columns.len(), 2);
    assert_eq!(table.columns[0].database_type.as_deref(), Some("BIGINT"));
    assert!(!table.columns[0].nullable);
    assert!(table.columns[1].nullable);
    assert_eq!(table.columns[1].attributes.get_bool("unique"), Some(true));
    assert_eq!(project.relative_name(table).unwrap(), "main.public.user");
}

#[test]
fn definition_survives_serialization() {
    let def = ProjectDef::from_json(DOCUMENT).unwrap();
    let again = ProjectDef::from_json(&def.to_json().unwrap()).unwrap();
    assert_eq!(def, again);
}

#[test]
fn malformed_json_is_an_invalid_schema() {
    let err = Project::from_json("{ \"name\": ").unwrap_err();
    assert!(err.is_invalid_schema());
}

#[test]
fn duplicate_table() {
    let err = Project::from_json(
        r#"{
            "name": "shop",
            "dbmses": [{ "name": "main", "type": "sqlite", "schemas": [{
                "name": "main",
                "tables": [{ "name": "user" }, { "name": "user" }]
            }]}]
        }"#,
    )
    .unwrap_err();

    assert_eq!(
        err.to_string(),
        "invalid schema: duplicate table `user` in schema `main`"
    );
}

#[test]
fn dotted_names_are_rejected() {
    let load = |dbms: &str, schema: &str, table: &str| {
        Project::from_json(&format!(
            r#"{{
                "name": "shop",
                "dbmses": [{{ "name": "{dbms}", "type": "sqlite", "schemas": [{{
                    "name": "{schema}",
                    "tables": [{{ "name": "{table}" }}]
                }}]}}]
            }}"#
        ))
    };

    let err = load("main", "public", "audit.log").unwrap_err();
    assert!(err.is_invalid_schema());
    assert_eq!(
        err.to_string(),
        "invalid schema: table name `audit.log` contains `.`"
    );

    let err = load("main", "sales.eu", "order").unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid schema: schema name `sales.eu` contains `.`"
    );

    let err = load("db.1", "public", "order").unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid schema: dbms name `db.1` contains `.`"
    );

    let project = load("main", "public", "audit_log").unwrap();
    assert_eq!(
        project.find_table_by_name("main.public.audit_log").unwrap().name,
        "audit_log"
    );
}

#[test]
fn resolve_field_by_identifier() {
    let project = Project::from_json(DOCUMENT).unwrap();

    let column = project
        .resolve_field(&trellis_core::field::FieldIdentifier::new(
            "public", "user", "email",
        ))
        .unwrap();
    assert_eq!(column.name, "email");

    assert!(project
        .resolve_field(&trellis_core::field::FieldIdentifier::new(
            "public", "user", "phone",
        ))
        .unwrap_err()
        .is_resolution());
}
