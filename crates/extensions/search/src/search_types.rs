//! Built-in search type descriptors and their request handlers.

use std::sync::Arc;

use anyhow::ensure;
use serde_json::{Map, Value, json};
use timber_extension_api::{SearchTypeDescriptor, SearchTypeHandler};

pub const MESSAGES: &str = "messages";
pub const PIVOT: &str = "pivot";

/// Tunable defaults for the `messages` search type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MessageListDefaults {
    pub limit: u32,
    pub offset: u32,
}

impl Default for MessageListDefaults {
    fn default() -> Self {
        Self {
            limit: 150,
            offset: 0,
        }
    }
}

/// Executes the `messages` search type: a paginated slice of the matching
/// messages.
pub struct MessageListHandler;

impl SearchTypeHandler for MessageListHandler {
    fn build_request(&self, spec: &Value, defaults: &Value) -> anyhow::Result<Value> {
        merged_request(MESSAGES, spec, defaults)
    }
}

/// Executes the `pivot` search type backing aggregation widgets.
pub struct PivotHandler;

impl SearchTypeHandler for PivotHandler {
    fn build_request(&self, spec: &Value, defaults: &Value) -> anyhow::Result<Value> {
        merged_request(PIVOT, spec, defaults)
    }
}

/// Overlay the caller's spec on the descriptor defaults and stamp the
/// request with its search type kind.
fn merged_request(kind: &str, spec: &Value, defaults: &Value) -> anyhow::Result<Value> {
    ensure!(
        spec.is_object() || spec.is_null(),
        "search type spec must be an object, got {spec}"
    );

    let mut request = Map::new();
    if let Some(defaults) = defaults.as_object() {
        request.extend(defaults.clone());
    }
    if let Some(spec) = spec.as_object() {
        for (key, value) in spec {
            request.insert(key.clone(), value.clone());
        }
    }
    request.insert("type".to_string(), Value::String(kind.to_string()));
    Ok(Value::Object(request))
}

#[must_use]
pub fn message_list_search_type(defaults: MessageListDefaults) -> SearchTypeDescriptor {
    SearchTypeDescriptor {
        kind: MESSAGES,
        handler: Arc::new(MessageListHandler),
        defaults: json!({
            "limit": defaults.limit,
            "offset": defaults.offset,
        }),
        condition: None,
    }
}

#[must_use]
pub fn pivot_search_type() -> SearchTypeDescriptor {
    SearchTypeDescriptor {
        kind: PIVOT,
        handler: Arc::new(PivotHandler),
        defaults: json!({}),
        condition: None,
    }
}
