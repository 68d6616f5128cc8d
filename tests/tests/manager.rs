use pretty_assertions::assert_eq;
use std::sync::Arc;
use tests::shop::order_line::{
    GeneratedOrderLineManager, OrderLineBuilder, OrderLineBuilderImpl, OrderLineImpl,
    OrderLineManager,
};
use tests::shop::user::{GeneratedUserManager, UserBuilder, UserBuilderImpl, UserImpl, UserManager};
use trellis_core::{Manager, Project, ProjectComponent, TypeToken};

fn component() -> Arc<ProjectComponent> {
    Arc::new(ProjectComponent::new(Project::from_json(tests::SHOP).unwrap()))
}

#[test]
fn single_column_primary_key() {
    let manager = UserManager::new(component());

    let mut builder = UserBuilderImpl::new();
    builder.set_id(42).set_name("Ada".to_string());

    assert_eq!(manager.primary_key_for(&builder.build()), 42);
}

#[test]
fn composite_primary_key_follows_key_order() {
    let manager = OrderLineManager::new(component());

    let mut builder = OrderLineBuilderImpl::new();
    builder.set_line_no(3).set_order_id(1001).set_quantity(2);

    // `order_id` is declared after `line_no` but comes first in the key.
    let key: (i64, i32) = manager.primary_key_for(&builder.build());
    assert_eq!(key, (1001, 3));
}

#[test]
fn primary_key_types() {
    let users = UserManager::new(component());
    assert_eq!(users.primary_key_types(), [TypeToken::of::<i64>()]);

    let lines = OrderLineManager::new(component());
    assert_eq!(
        lines.primary_key_types(),
        [TypeToken::of::<i64>(), TypeToken::of::<i32>()]
    );
}

#[test]
fn manager_and_entity_types() {
    let manager = UserManager::new(component());

    assert!(manager.manager_type().is::<UserManager>());
    assert!(manager.entity_type().is::<UserImpl>());
    assert_ne!(manager.entity_type(), TypeToken::of::<OrderLineImpl>());
}

#[test]
fn table_resolves_through_the_component() {
    let component = component();
    let manager = OrderLineManager::new(component.clone());

    let table = manager.table().unwrap();
    assert_eq!(table.name, "order_line");
    assert_eq!(table.columns.len(), 4);
    assert!(Arc::ptr_eq(&component.project(), &manager.project_component().project()));
}

#[test]
fn table_follows_reloads() {
    let component = component();
    let users = UserManager::new(component.clone());
    let lines = OrderLineManager::new(component.clone());

    let before = users.table().unwrap();

    // Reload a project that only knows about users.
    let mut def = trellis_core::schema::ProjectDef::from_json(tests::SHOP).unwrap();
    def.dbmses[0].schemas[0].tables.retain(|table| table.name == "user");
    def.dbmses[0].schemas[0].tables[0]
        .columns
        .retain(|column| column.name != "bio");
    component.reload(def.build().unwrap());

    let after = users.table().unwrap();
    assert_eq!(before.columns.len(), 6);
    assert_eq!(after.columns.len(), 5);

    let err = lines.table().unwrap_err();
    assert!(err.is_resolution());
}

#[test]
fn managers_share_a_component() {
    let component = component();
    let users = UserManager::new(component.clone());
    let lines = OrderLineManager::new(component);

    assert!(std::ptr::eq(
        users.project_component(),
        lines.project_component()
    ));
}
