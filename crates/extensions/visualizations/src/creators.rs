//! Built-in entries for the add-widget menu.

use std::sync::Arc;

use serde_json::Value;
use timber_extension_api::{
    ActionContext, ActionHandler, ActionOutcome, Component, CreatorDescriptor, CreatorPlacement,
};
use timber_extensions_search::aggregation::{AggregationConfig, Series};
use timber_extensions_search::widgets::{AGGREGATION_WIDGET, MESSAGES_WIDGET};

use crate::types;

pub const MESSAGE_COUNT: &str = "message-count";
pub const MESSAGE_TABLE: &str = "message-table";
pub const CUSTOM_AGGREGATION: &str = "custom-aggregation";
pub const PARAMETER: &str = "parameter";

/// Dialog component collecting a new parameter definition.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CreateParameterDialog;

/// Preset: a single-number widget counting the matching messages.
pub struct AddMessageCountHandler;

impl ActionHandler for AddMessageCountHandler {
    fn invoke(&self, _context: &ActionContext<'_>) -> anyhow::Result<ActionOutcome> {
        let config = AggregationConfig {
            series: vec![Series::count()],
            visualization: Some(types::NUMBER.to_string()),
            ..AggregationConfig::default()
        };
        Ok(ActionOutcome::CreateWidget {
            widget: AGGREGATION_WIDGET,
            config: serde_json::to_value(&config)?,
        })
    }
}

/// Preset: a message table over the current query.
pub struct AddMessageTableHandler;

impl ActionHandler for AddMessageTableHandler {
    fn invoke(&self, _context: &ActionContext<'_>) -> anyhow::Result<ActionOutcome> {
        Ok(ActionOutcome::CreateWidget {
            widget: MESSAGES_WIDGET,
            config: Value::Object(serde_json::Map::new()),
        })
    }
}

/// Opens an empty aggregation the user configures from scratch.
pub struct CreateCustomAggregationHandler;

impl ActionHandler for CreateCustomAggregationHandler {
    fn invoke(&self, _context: &ActionContext<'_>) -> anyhow::Result<ActionOutcome> {
        Ok(ActionOutcome::CreateWidget {
            widget: AGGREGATION_WIDGET,
            config: serde_json::to_value(&AggregationConfig::default())?,
        })
    }
}

/// The built-in creator descriptors, in menu order.
#[must_use]
pub fn descriptors() -> Vec<CreatorDescriptor> {
    vec![
        CreatorDescriptor {
            kind: MESSAGE_COUNT,
            title: "Message Count",
            placement: CreatorPlacement::Preset,
            handler: Some(Arc::new(AddMessageCountHandler)),
            component: None,
            condition: None,
        },
        CreatorDescriptor {
            kind: MESSAGE_TABLE,
            title: "Message Table",
            placement: CreatorPlacement::Preset,
            handler: Some(Arc::new(AddMessageTableHandler)),
            component: None,
            condition: None,
        },
        CreatorDescriptor {
            kind: CUSTOM_AGGREGATION,
            title: "Custom Aggregation",
            placement: CreatorPlacement::Generic,
            handler: Some(Arc::new(CreateCustomAggregationHandler)),
            component: None,
            condition: None,
        },
        CreatorDescriptor {
            kind: PARAMETER,
            title: "Parameter",
            placement: CreatorPlacement::Generic,
            handler: None,
            component: Some(Component::new(CreateParameterDialog)),
            condition: None,
        },
    ]
}
