use pretty_assertions::assert_eq;
use tests::shop::user::{User, UserBuilder, UserBuilderImpl, UserImpl};
use trellis_core::connection::Clob;
use trellis_core::field::{FieldAccessor, FieldComparison, FieldIdentifier, FieldIdentity};

fn user(id: i64, name: &str, email: Option<&str>) -> UserImpl {
    let mut builder = UserBuilderImpl::new();
    builder
        .set_id(id)
        .set_name(name.to_string())
        .set_email(email.map(str::to_string));
    builder.build()
}

fn users() -> Vec<UserImpl> {
    vec![
        user(1, "Ada", Some("ada@example.com")),
        user(2, "Grace", None),
        user(3, "Barbara", Some("barbara@example.com")),
        user(4, "Edsger", None),
    ]
}

fn ids(users: &[UserImpl]) -> Vec<i64> {
    users.iter().map(|user| user.id()).collect()
}

#[test]
fn fields_are_identified_by_database_names() {
    assert_eq!(
        UserImpl::id_field().identifier(),
        &FieldIdentifier::new("public", "user", "id")
    );
    assert_eq!(
        UserImpl::email_field().identifier().to_string(),
        "public.user.email"
    );
}

#[test]
fn uniqueness() {
    assert!(UserImpl::id_field().is_unique());
    assert!(UserImpl::email_field().is_unique());
    assert!(!UserImpl::name_field().is_unique());
}

#[test]
fn fields_are_built_once() {
    assert!(std::ptr::eq(UserImpl::name_field(), UserImpl::name_field()));
}

fn select(users: &[UserImpl], predicate: impl Fn(&UserImpl) -> bool) -> Vec<i64> {
    users
        .iter()
        .filter(|user| predicate(user))
        .map(|user| user.id())
        .collect()
}

#[test]
fn filter_with_predicates() {
    let all = users();

    let greater = UserImpl::id_field().greater_than(2);
    assert_eq!(select(&all, |user| greater.test(user)), [3, 4]);

    let between = UserImpl::id_field().between(2, 4);
    assert_eq!(select(&all, |user| between.test(user)), [2, 3, 4]);

    let named = UserImpl::name_field().in_set(["Ada".to_string(), "Edsger".to_string()]);
    assert_eq!(select(&all, |user| named.test(user)), [1, 4]);

    let no_email = UserImpl::email_field().is_null();
    assert_eq!(select(&all, |user| no_email.test(user)), [2, 4]);

    let email_after_b = UserImpl::email_field().greater_than("b".to_string());
    assert_eq!(select(&all, |user| email_after_b.test(user)), [3]);

    let not_after_b = email_after_b.clone().negate();
    assert_eq!(select(&all, |user| not_after_b.test(user)), [1, 2, 4]);
}

#[test]
fn sort_with_comparators() {
    let mut all = users();

    let by_email = UserImpl::email_field().comparator_nulls_last();
    all.sort_by(|a, b| by_email.compare(a, b));
    assert_eq!(ids(&all)[..2], [1, 3]);

    let by_email = UserImpl::email_field().comparator_nulls_first();
    all.sort_by(|a, b| by_email.compare(a, b));
    assert_eq!(ids(&all)[2..], [1, 3]);

    let by_id_desc = UserImpl::id_field().comparator().reversed();
    all.sort_by(|a, b| by_id_desc.compare(a, b));
    assert_eq!(ids(&all), [4, 3, 2, 1]);
}

#[test]
fn setters_write_through_the_field() {
    let mut ada = user(1, "Ada", None);

    UserImpl::email_field()
        .set_to("ada@example.com".to_string())
        .apply(&mut ada);
    UserImpl::name_field().set(&mut ada, "Ada Lovelace".to_string());
    (UserImpl::id_field().setter())(&mut ada, 11);

    assert_eq!(ada.email().as_deref(), Some("ada@example.com"));
    assert_eq!(ada.name(), "Ada Lovelace");
    assert_eq!((UserImpl::id_field().getter())(&ada), Some(11));
}

#[test]
fn database_values_go_through_the_mapper() {
    let mut builder = UserBuilderImpl::new();
    builder
        .set_id(1)
        .set_active(true)
        .set_bio(Some("Analyst".to_string()));
    let ada = builder.build();

    assert_eq!(
        UserImpl::active_field().get_database_value(&ada).unwrap(),
        Some(1)
    );
    assert_eq!(
        UserImpl::id_field().get_database_value(&ada).unwrap(),
        Some(1)
    );

    let clob = UserImpl::bio_field().get_database_value(&ada).unwrap().unwrap();
    assert_eq!(clob.length().unwrap(), 7);
    assert_eq!(clob.sub_string(1, 7).unwrap(), "Analyst");

    assert!(UserImpl::rating_field()
        .get_database_value(&ada)
        .unwrap()
        .is_none());
}

#[test]
fn unordered_fields_only_offer_null_checks() {
    let mut builder = UserBuilderImpl::new();
    builder.set_rating(Some(4.5));
    let rated = builder.build();

    let field = UserImpl::rating_field();
    assert!(field.is_not_null().test(&rated));
    assert!(field.is_null().test(&UserImpl::default()));
    assert_eq!(field.get(&rated), Some(4.5));
}
