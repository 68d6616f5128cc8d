use pretty_assertions::assert_eq;
use tests::shop::order_line::{OrderLine, OrderLineBuilder, OrderLineBuilderImpl, OrderLineImpl};
use tests::shop::user::{User, UserBuilder, UserBuilderImpl, UserImpl};

#[test]
fn build_entity_from_builder() {
    let mut builder = UserBuilderImpl::new();
    builder
        .set_id(7)
        .set_name("Ada".to_string())
        .set_email(Some("ada@example.com".to_string()))
        .set_active(true);

    let user = builder.build();

    assert_eq!(user.id(), 7);
    assert_eq!(user.name(), "Ada");
    assert_eq!(user.email().as_deref(), Some("ada@example.com"));
    assert!(user.active());
    assert_eq!(user.rating(), None);
    assert_eq!(user.bio(), None);
}

#[test]
fn builder_getters_see_set_values() {
    let mut builder = OrderLineBuilderImpl::new();
    builder.set_order_id(10).set_line_no(2).set_quantity(5);

    assert_eq!(builder.order_id(), 10);
    assert_eq!(builder.line_no(), 2);
    assert_eq!(builder.quantity(), 5);
    assert_eq!(builder.note(), None);
}

#[test]
fn entity_is_independent_of_its_builder() {
    let mut builder = OrderLineBuilderImpl::new();
    builder.set_order_id(1).set_line_no(1).set_quantity(3);

    let line = builder.build();
    builder.set_quantity(4);

    assert_eq!(line.quantity(), 3);
    assert_eq!(builder.build().quantity(), 4);
}

#[test]
fn copy_entity_into_builder() {
    let mut builder = UserBuilderImpl::new();
    builder
        .set_id(3)
        .set_name("Grace".to_string())
        .set_rating(Some(4.5))
        .set_bio(Some("Compilers".to_string()));
    let user = builder.build();

    let copy = UserBuilderImpl::from_entity(&user);
    assert_eq!(copy, builder);
    assert_eq!(copy.build(), user);
}

#[test]
fn from_builder_accepts_any_builder() {
    #[derive(Default)]
    struct Fixed;

    impl OrderLineBuilder for Fixed {
        fn line_no(&self) -> i32 {
            9
        }

        fn set_line_no(&mut self, _value: i32) -> &mut Self {
            self
        }

        fn order_id(&self) -> i64 {
            8
        }

        fn set_order_id(&mut self, _value: i64) -> &mut Self {
            self
        }

        fn quantity(&self) -> i32 {
            1
        }

        fn set_quantity(&mut self, _value: i32) -> &mut Self {
            self
        }

        fn note(&self) -> Option<String> {
            Some("fixed".to_string())
        }

        fn set_note(&mut self, _value: Option<String>) -> &mut Self {
            self
        }

        fn build(&self) -> OrderLineImpl {
            OrderLineImpl::from_builder(self)
        }
    }

    let line = Fixed.build();
    assert_eq!(line.order_id(), 8);
    assert_eq!(line.line_no(), 9);
    assert_eq!(line.note().as_deref(), Some("fixed"));
}

#[test]
fn default_entity() {
    let user = UserImpl::default();
    assert_eq!(user.id(), 0);
    assert_eq!(user.name(), "");
    assert!(!user.active());
    assert_eq!(user, UserBuilderImpl::new().build());
}
