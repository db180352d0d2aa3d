use std::sync::Arc;

use serde_json::json;

use super::*;
use crate::condition::Condition;
use crate::context::{Field, FieldProperty, FieldType};
use crate::descriptors::{
    ActionDescriptor, CreatorDescriptor, CreatorPlacement, SearchTypeDescriptor,
    VisualizationDescriptor, WidgetDescriptor,
};
use crate::handlers::{Component, SearchTypeHandler};

struct EchoHandler;

impl SearchTypeHandler for EchoHandler {
    fn build_request(
        &self,
        spec: &serde_json::Value,
        _defaults: &serde_json::Value,
    ) -> anyhow::Result<serde_json::Value> {
        Ok(spec.clone())
    }
}

fn field_action(kind: &'static str, condition: Option<Condition>) -> ExtensionDescriptor {
    ExtensionDescriptor::FieldAction(ActionDescriptor {
        kind,
        title: kind,
        handler: None,
        component: None,
        condition,
    })
}

fn value_action(kind: &'static str) -> ExtensionDescriptor {
    ExtensionDescriptor::ValueAction(ActionDescriptor {
        kind,
        title: kind,
        handler: None,
        component: None,
        condition: None,
    })
}

fn widget(kind: &'static str) -> ExtensionDescriptor {
    ExtensionDescriptor::Widget(WidgetDescriptor {
        kind,
        display_name: kind,
        default_height: 4,
        default_width: 4,
        visualization: Component::new(()),
        edit: None,
        result_transformer: None,
        search_types: None,
        title_generator: None,
        condition: None,
    })
}

fn search_type(kind: &'static str) -> ExtensionDescriptor {
    ExtensionDescriptor::SearchType(SearchTypeDescriptor {
        kind,
        handler: Arc::new(EchoHandler),
        defaults: json!({}),
        condition: None,
    })
}

fn kinds<'a>(descriptors: impl Iterator<Item = &'a ExtensionDescriptor>) -> Vec<&'static str> {
    descriptors.map(ExtensionDescriptor::kind).collect()
}

#[test]
fn register_then_lookup_returns_the_descriptor() {
    let mut catalog = ExtensionCatalog::new();
    catalog
        .register(search_type("messages"))
        .expect("register search type");

    let descriptor = catalog
        .lookup(Category::SearchTypes, "messages")
        .expect("lookup registered kind");
    assert_eq!(descriptor.kind(), "messages");
    assert_eq!(descriptor.category(), Category::SearchTypes);
}

#[test]
fn lookup_of_unregistered_kind_returns_not_found() {
    let catalog = ExtensionCatalog::new();
    let error = catalog
        .lookup(Category::Widgets, "GHOST")
        .expect_err("missing kind should not resolve");
    assert_eq!(
        error,
        ExtensionCatalogError::NotFound {
            category: Category::Widgets,
            kind: "GHOST".to_string(),
        }
    );
}

#[test]
fn registers_descriptors_in_insertion_order() {
    let mut catalog = ExtensionCatalog::new();
    catalog.register(field_action("chart", None)).unwrap();
    catalog.register(field_action("aggregate", None)).unwrap();
    catalog.register(field_action("statistics", None)).unwrap();

    assert_eq!(
        kinds(catalog.descriptors(Category::FieldActions)),
        vec!["chart", "aggregate", "statistics"]
    );
}

#[test]
fn same_kind_in_different_categories_does_not_collide() {
    let mut catalog = ExtensionCatalog::new();
    catalog.register(field_action("exclude", None)).unwrap();
    catalog.register(value_action("exclude")).unwrap();

    assert_eq!(catalog.len(Category::FieldActions), 1);
    assert_eq!(catalog.len(Category::ValueActions), 1);
}

#[test]
fn duplicate_kind_is_rejected_and_original_survives() {
    let mut catalog = ExtensionCatalog::new();
    catalog
        .register(ExtensionDescriptor::FieldAction(ActionDescriptor {
            kind: "chart",
            title: "Chart",
            handler: None,
            component: None,
            condition: None,
        }))
        .expect("first registration succeeds");

    // The rejection policy must hold on every repeat, not just the first.
    for _ in 0..100 {
        let error = catalog
            .register(ExtensionDescriptor::FieldAction(ActionDescriptor {
                kind: "chart",
                title: "Impostor",
                handler: None,
                component: None,
                condition: None,
            }))
            .expect_err("duplicate registration must fail");
        assert_eq!(
            error,
            ExtensionCatalogError::DuplicateKind {
                category: Category::FieldActions,
                kind: "chart",
            }
        );
    }

    let survivor = catalog.field_action("chart").expect("original resolves");
    assert_eq!(survivor.title, "Chart");
    assert_eq!(catalog.len(Category::FieldActions), 1);
}

#[test]
fn empty_kind_is_rejected() {
    let mut catalog = ExtensionCatalog::new();
    let error = catalog
        .register(field_action("", None))
        .expect_err("empty kind must fail");
    assert_eq!(
        error,
        ExtensionCatalogError::EmptyKind {
            category: Category::FieldActions,
        }
    );
    assert!(catalog.is_empty());
}

#[test]
fn unknown_category_name_fails_and_leaves_state_unchanged() {
    let mut catalog = ExtensionCatalog::new();
    let error = catalog
        .register_named("widgetz", widget("MESSAGES"))
        .expect_err("unknown category name must fail");
    assert_eq!(
        error,
        ExtensionCatalogError::UnknownCategory {
            name: "widgetz".to_string(),
        }
    );
    assert!(catalog.is_empty());

    let error = catalog
        .lookup_named("widgetz", "MESSAGES")
        .expect_err("unknown category name must fail on lookup too");
    assert!(matches!(
        error,
        ExtensionCatalogError::UnknownCategory { .. }
    ));
}

#[test]
fn register_named_rejects_a_mismatched_category() {
    let mut catalog = ExtensionCatalog::new();
    let error = catalog
        .register_named("value-actions", field_action("chart", None))
        .expect_err("descriptor category must match the requested one");
    assert_eq!(
        error,
        ExtensionCatalogError::CategoryMismatch {
            requested: Category::ValueActions,
            actual: Category::FieldActions,
        }
    );
    assert!(catalog.is_empty());
}

#[test]
fn register_named_routes_to_the_requested_category() {
    let mut catalog = ExtensionCatalog::new();
    catalog
        .register_named("field-actions", field_action("chart", None))
        .expect("register by category name");
    assert!(catalog.contains(Category::FieldActions, "chart"));
}

#[test]
fn applicable_filters_by_condition_in_registration_order() {
    let mut catalog = ExtensionCatalog::new();
    catalog.register(field_action("always", None)).unwrap();
    catalog
        .register(field_action("matching", Some(Condition::new(|_| true))))
        .unwrap();
    catalog
        .register(field_action("filtered", Some(Condition::new(|_| false))))
        .unwrap();

    let context = ActionContext::empty();
    assert_eq!(
        kinds(catalog.applicable(Category::FieldActions, &context)),
        vec!["always", "matching"]
    );
}

#[test]
fn applicable_is_restartable() {
    let mut catalog = ExtensionCatalog::new();
    catalog.register(field_action("always", None)).unwrap();

    let context = ActionContext::empty();
    for _ in 0..3 {
        assert_eq!(
            kinds(catalog.applicable(Category::FieldActions, &context)),
            vec!["always"]
        );
    }
}

#[test]
fn applicable_evaluates_conditions_against_the_context() {
    let mut catalog = ExtensionCatalog::new();
    catalog
        .register(field_action(
            "chart",
            Some(Condition::new(|context| {
                context
                    .field()
                    .is_some_and(|field| field.field_type().is_numeric())
            })),
        ))
        .unwrap();

    let numeric = Field::new("took_ms", FieldType::new(vec![FieldProperty::Numeric]));
    let textual = Field::new("source", FieldType::unknown());

    let context = ActionContext::empty().with_field(&numeric);
    assert_eq!(
        kinds(catalog.applicable(Category::FieldActions, &context)),
        vec!["chart"]
    );

    let context = ActionContext::empty().with_field(&textual);
    assert!(
        kinds(catalog.applicable(Category::FieldActions, &context)).is_empty()
    );
}

#[test]
fn panicking_condition_excludes_only_its_own_descriptor() {
    let mut catalog = ExtensionCatalog::new();
    catalog.register(field_action("first", None)).unwrap();
    catalog
        .register(field_action(
            "broken",
            Some(Condition::new(|_| panic!("broken predicate"))),
        ))
        .unwrap();
    catalog.register(field_action("last", None)).unwrap();

    let context = ActionContext::empty();
    assert_eq!(
        kinds(catalog.applicable(Category::FieldActions, &context)),
        vec!["first", "last"]
    );
}

#[test]
fn typed_accessors_resolve_their_variant() {
    let mut catalog = ExtensionCatalog::new();
    catalog.register(widget("MESSAGES")).unwrap();
    catalog.register(search_type("messages")).unwrap();
    catalog
        .register(ExtensionDescriptor::Visualization(VisualizationDescriptor {
            kind: "bar",
            display_name: "Bar Chart",
            component: Component::new(()),
            condition: None,
        }))
        .unwrap();
    catalog
        .register(ExtensionDescriptor::Creator(CreatorDescriptor {
            kind: "parameter",
            title: "Parameter",
            placement: CreatorPlacement::Generic,
            handler: None,
            component: None,
            condition: None,
        }))
        .unwrap();

    assert_eq!(
        catalog.widget("MESSAGES").map(|widget| widget.display_name),
        Some("MESSAGES")
    );
    assert!(catalog.search_type("messages").is_some());
    assert_eq!(
        catalog.visualization("bar").map(|vis| vis.display_name),
        Some("Bar Chart")
    );
    assert_eq!(
        catalog.creator("parameter").map(|creator| creator.placement),
        Some(CreatorPlacement::Generic)
    );
    assert!(catalog.widget("bar").is_none());
}

mod shared {
    use super::*;

    #[test]
    fn concurrent_registrations_are_all_visible() {
        const KINDS: [&str; 8] = [
            "alpha", "bravo", "charlie", "delta", "echo", "foxtrot", "golf", "hotel",
        ];

        let catalog = SharedCatalog::new();
        std::thread::scope(|scope| {
            for kind in KINDS {
                let catalog = catalog.clone();
                scope.spawn(move || {
                    catalog
                        .register(field_action(kind, None))
                        .expect("distinct kinds all register");
                });
            }
        });

        assert_eq!(catalog.len(Category::FieldActions), KINDS.len());
        for kind in KINDS {
            let descriptor = catalog
                .lookup(Category::FieldActions, kind)
                .expect("registered kind resolves");
            assert_eq!(descriptor.kind(), kind);
        }
    }

    #[test]
    fn sealed_catalog_rejects_late_registration() {
        let catalog = SharedCatalog::new();
        catalog
            .register(field_action("chart", None))
            .expect("register during startup");

        catalog.seal();
        assert!(catalog.is_sealed());

        let error = catalog
            .register(field_action("late", None))
            .expect_err("registration after sealing must fail");
        assert_eq!(
            error,
            ExtensionCatalogError::Sealed {
                category: Category::FieldActions,
                kind: "late",
            }
        );

        // Lookups keep working after the seal.
        assert!(catalog.lookup(Category::FieldActions, "chart").is_ok());
        assert!(!catalog.contains(Category::FieldActions, "late"));
    }

    #[test]
    fn applicable_snapshot_survives_later_registrations() {
        let catalog = SharedCatalog::new();
        catalog.register(field_action("first", None)).unwrap();

        let context = ActionContext::empty();
        let snapshot = catalog.applicable(Category::FieldActions, &context);
        catalog.register(field_action("second", None)).unwrap();

        let kinds: Vec<_> = snapshot.map(|descriptor| descriptor.kind()).collect();
        assert_eq!(kinds, vec!["first"]);

        let kinds: Vec<_> = catalog
            .applicable(Category::FieldActions, &context)
            .map(|descriptor| descriptor.kind())
            .collect();
        assert_eq!(kinds, vec!["first", "second"]);
    }

    #[test]
    fn from_catalog_wraps_existing_registrations() {
        let mut catalog = ExtensionCatalog::new();
        catalog.register(widget("MESSAGES")).unwrap();

        let shared = SharedCatalog::from_catalog(catalog);
        assert!(shared.widget("MESSAGES").is_some());
        assert!(!shared.is_sealed());
    }
}
