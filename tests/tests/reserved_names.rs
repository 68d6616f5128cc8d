use pretty_assertions::assert_eq;
use std::sync::Arc;
use tests::shop::setting::{
    GeneratedSettingManager, Setting, SettingBuilder, SettingBuilderImpl, SettingImpl,
    SettingManager,
};
use trellis_core::field::{FieldAccessor, FieldComparison, FieldIdentity};
use trellis_core::{Project, ProjectComponent};

fn theme() -> SettingImpl {
    let mut builder = SettingBuilderImpl::new();
    builder
        .set_default("theme".to_string())
        .set_clone(2)
        .set_eq(Some("dark".to_string()));
    builder.build()
}

#[test]
fn columns_named_after_trait_methods() {
    let setting = theme();

    assert_eq!(setting.default_(), "theme");
    assert_eq!(setting.clone_(), 2);
    assert_eq!(setting.eq_().as_deref(), Some("dark"));

    let copy = setting.clone();
    assert_eq!(copy, setting);
    assert_eq!(SettingBuilderImpl::from_entity(&copy).build(), setting);
    assert_eq!(SettingBuilderImpl::new(), SettingBuilderImpl::default());
}

#[test]
fn manager_keys_on_the_escaped_getter() {
    let component = Arc::new(ProjectComponent::new(Project::from_json(tests::SHOP).unwrap()));
    let manager = SettingManager::new(component);

    assert_eq!(manager.primary_key_for(&theme()), "theme");
    assert_eq!(manager.table().unwrap().name, "setting");
}

#[test]
fn fields_keep_the_column_name() {
    let field = SettingImpl::default_field();
    assert_eq!(field.identifier().to_string(), "public.setting.default");
    assert!(field.equal(Some("theme".to_string())).test(&theme()));
    assert!(SettingImpl::clone_field().greater_than(1).test(&theme()));
    assert!(SettingImpl::eq_field().is_not_null().test(&theme()));
}
