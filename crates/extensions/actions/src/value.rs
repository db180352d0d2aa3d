//! Built-in value context-menu actions.

use std::sync::Arc;

use anyhow::Context as _;
use timber_extension_api::{
    ActionContext, ActionDescriptor, ActionHandler, ActionOutcome, Component, Condition,
};

use crate::query;

pub const EXCLUDE: &str = "exclude";
pub const ADD_TO_QUERY: &str = "add-to-query";
pub const EXECUTE_VIEW: &str = "execute-view-with-value";

/// Dialog component inserting the value into a saved view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ExecuteViewWithValue;

/// Narrows the query to rows without this field value.
pub struct ExcludeFromQueryHandler;

impl ActionHandler for ExcludeFromQueryHandler {
    fn invoke(&self, context: &ActionContext<'_>) -> anyhow::Result<ActionOutcome> {
        let (field, value) = field_and_value(context, "exclude")?;
        let term = query::term(field, value);
        Ok(ActionOutcome::SetQuery(query::exclude_term(
            context.query().unwrap_or_default(),
            &term,
        )))
    }
}

/// Narrows the query to rows with this field value.
pub struct AddToQueryHandler;

impl ActionHandler for AddToQueryHandler {
    fn invoke(&self, context: &ActionContext<'_>) -> anyhow::Result<ActionOutcome> {
        let (field, value) = field_and_value(context, "add-to-query")?;
        let term = query::term(field, value);
        Ok(ActionOutcome::SetQuery(query::append_term(
            context.query().unwrap_or_default(),
            &term,
        )))
    }
}

fn field_and_value<'a>(
    context: &'a ActionContext<'a>,
    action: &str,
) -> anyhow::Result<(&'a str, &'a serde_json::Value)> {
    let field = context
        .field()
        .with_context(|| format!("{action} action requires a field"))?;
    let value = context
        .value()
        .with_context(|| format!("{action} action requires a value"))?;
    Ok((field.name(), value))
}

fn stored_field() -> Condition {
    Condition::new(|context| context.field().is_some_and(|field| !field.is_function()))
}

/// The built-in value action descriptors, in menu order.
#[must_use]
pub fn descriptors() -> Vec<ActionDescriptor> {
    vec![
        ActionDescriptor {
            kind: EXCLUDE,
            title: "Exclude from results",
            handler: Some(Arc::new(ExcludeFromQueryHandler)),
            component: None,
            condition: Some(stored_field()),
        },
        ActionDescriptor {
            kind: ADD_TO_QUERY,
            title: "Add to query",
            handler: Some(Arc::new(AddToQueryHandler)),
            component: None,
            condition: Some(stored_field()),
        },
        ActionDescriptor {
            kind: EXECUTE_VIEW,
            title: "Insert into view",
            handler: None,
            component: Some(Component::new(ExecuteViewWithValue)),
            condition: Some(stored_field()),
        },
    ]
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use timber_extension_api::{Field, FieldType};

    use super::*;

    #[test]
    fn add_to_query_appends_the_term() {
        let field = Field::new("source", FieldType::unknown());
        let value = json!("nginx");
        let context = ActionContext::empty()
            .with_field(&field)
            .with_value(&value)
            .with_query("level:error");

        let outcome = AddToQueryHandler.invoke(&context).expect("append");
        assert_eq!(
            outcome,
            ActionOutcome::SetQuery("level:error AND source:nginx".to_string())
        );
    }

    #[test]
    fn add_to_query_without_a_current_query_starts_fresh() {
        let field = Field::new("source", FieldType::unknown());
        let value = json!("nginx");
        let context = ActionContext::empty().with_field(&field).with_value(&value);

        let outcome = AddToQueryHandler.invoke(&context).expect("append");
        assert_eq!(outcome, ActionOutcome::SetQuery("source:nginx".to_string()));
    }

    #[test]
    fn exclude_negates_the_term() {
        let field = Field::new("source", FieldType::unknown());
        let value = json!("nginx");
        let context = ActionContext::empty()
            .with_field(&field)
            .with_value(&value)
            .with_query("*");

        let outcome = ExcludeFromQueryHandler.invoke(&context).expect("exclude");
        assert_eq!(
            outcome,
            ActionOutcome::SetQuery("NOT source:nginx".to_string())
        );
    }

    #[test]
    fn reserved_values_survive_the_round_trip_quoted() {
        let field = Field::new("message", FieldType::unknown());
        let value = json!("disk full");
        let context = ActionContext::empty().with_field(&field).with_value(&value);

        let outcome = AddToQueryHandler.invoke(&context).expect("append");
        assert_eq!(
            outcome,
            ActionOutcome::SetQuery("message:\"disk full\"".to_string())
        );
    }

    #[test]
    fn missing_value_fails_gracefully() {
        let field = Field::new("source", FieldType::unknown());
        let context = ActionContext::empty().with_field(&field);
        let error = AddToQueryHandler
            .invoke(&context)
            .expect_err("value is required");
        assert!(error.to_string().contains("requires a value"));
    }

    #[test]
    fn function_series_are_not_applicable() {
        let series = Field::new("avg(took_ms)", FieldType::unknown());
        let stored = Field::new("took_ms", FieldType::unknown());

        let condition = stored_field();
        let context = ActionContext::empty().with_field(&series);
        assert!(!condition.evaluate(&context));

        let context = ActionContext::empty().with_field(&stored);
        assert!(condition.evaluate(&context));
    }
}
