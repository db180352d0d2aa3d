//! Built-in widget descriptors.

use std::sync::Arc;

use serde_json::Value;
use timber_extension_api::{
    Component, SearchResultTransformer, SearchTypeSpec, SearchTypeSource, WidgetDescriptor,
};

use crate::aggregation::{
    AggregationTitleGenerator, PivotRequestSource, PivotResultTransformer,
};
use crate::search_types;

pub const MESSAGES_WIDGET: &str = "MESSAGES";
pub const AGGREGATION_WIDGET: &str = "AGGREGATION";

/// Marker components the host rendering layer maps to concrete views.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MessageList;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EditMessageList;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AggregationBuilder;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AggregationControls;

/// The message list renders the first (and only) search type result.
pub struct FirstResultTransformer;

impl SearchResultTransformer for FirstResultTransformer {
    fn transform(&self, results: &Value) -> Value {
        results.get(0).cloned().unwrap_or(Value::Null)
    }
}

/// A message widget is always backed by one `messages` search type.
pub struct MessageListSearchTypes;

impl SearchTypeSource for MessageListSearchTypes {
    fn search_types(&self, _widget_config: &Value) -> Vec<SearchTypeSpec> {
        vec![SearchTypeSpec {
            kind: search_types::MESSAGES,
            config: Value::Object(serde_json::Map::new()),
        }]
    }
}

#[must_use]
pub fn message_list_descriptor() -> WidgetDescriptor {
    WidgetDescriptor {
        kind: MESSAGES_WIDGET,
        display_name: "Message List",
        default_height: 5,
        default_width: 6,
        visualization: Component::new(MessageList),
        edit: Some(Component::new(EditMessageList)),
        result_transformer: Some(Arc::new(FirstResultTransformer)),
        search_types: Some(Arc::new(MessageListSearchTypes)),
        title_generator: None,
        condition: None,
    }
}

#[must_use]
pub fn aggregation_descriptor() -> WidgetDescriptor {
    WidgetDescriptor {
        kind: AGGREGATION_WIDGET,
        display_name: "Results",
        default_height: 4,
        default_width: 4,
        visualization: Component::new(AggregationBuilder),
        edit: Some(Component::new(AggregationControls)),
        result_transformer: Some(Arc::new(PivotResultTransformer)),
        search_types: Some(Arc::new(PivotRequestSource)),
        title_generator: Some(Arc::new(AggregationTitleGenerator)),
        condition: None,
    }
}
