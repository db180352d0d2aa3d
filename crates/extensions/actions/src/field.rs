//! Built-in field context-menu actions.

use std::sync::Arc;

use anyhow::Context as _;
use timber_extension_api::{
    ActionContext, ActionDescriptor, ActionHandler, ActionOutcome, Condition,
};
use timber_extensions_search::aggregation::{AggregationConfig, Pivot, Series};
use timber_extensions_search::widgets::AGGREGATION_WIDGET;
use timber_extensions_visualizations::types;

pub const CHART: &str = "chart";
pub const AGGREGATE: &str = "aggregate";
pub const STATISTICS: &str = "statistics";
pub const ADD_TO_TABLE: &str = "add-to-table";
pub const NEW_QUERY: &str = "new-query";

/// Charts the field's average over time.
pub struct ChartActionHandler;

impl ActionHandler for ChartActionHandler {
    fn invoke(&self, context: &ActionContext<'_>) -> anyhow::Result<ActionOutcome> {
        let field = context.field().context("chart action requires a field")?;
        let config = AggregationConfig {
            row_pivots: vec![Pivot::new("timestamp")],
            series: vec![Series::new("avg", Some(field.name().to_string()))],
            visualization: Some(types::LINE.to_string()),
            ..AggregationConfig::default()
        };
        Ok(ActionOutcome::CreateWidget {
            widget: AGGREGATION_WIDGET,
            config: serde_json::to_value(&config)?,
        })
    }
}

/// Groups the result set by the field's values.
pub struct AggregateActionHandler;

impl ActionHandler for AggregateActionHandler {
    fn invoke(&self, context: &ActionContext<'_>) -> anyhow::Result<ActionOutcome> {
        let field = context
            .field()
            .context("aggregate action requires a field")?;
        let config = AggregationConfig {
            row_pivots: vec![Pivot::new(field.name())],
            series: vec![Series::count()],
            ..AggregationConfig::default()
        };
        Ok(ActionOutcome::CreateWidget {
            widget: AGGREGATION_WIDGET,
            config: serde_json::to_value(&config)?,
        })
    }
}

/// Summary statistics over the field, rendered as a data table.
pub struct FieldStatisticsHandler;

impl ActionHandler for FieldStatisticsHandler {
    fn invoke(&self, context: &ActionContext<'_>) -> anyhow::Result<ActionOutcome> {
        let field = context
            .field()
            .context("statistics action requires a field")?;
        let field_name = field.name().to_string();
        let series = ["count", "sum", "avg", "min", "max", "stddev"]
            .into_iter()
            .map(|function| Series::new(function, Some(field_name.clone())))
            .collect();
        let config = AggregationConfig {
            series,
            visualization: Some(types::DATA_TABLE.to_string()),
            ..AggregationConfig::default()
        };
        Ok(ActionOutcome::CreateWidget {
            widget: AGGREGATION_WIDGET,
            config: serde_json::to_value(&config)?,
        })
    }
}

/// Adds the field as a column of the invoking message table.
pub struct AddToTableActionHandler;

impl ActionHandler for AddToTableActionHandler {
    fn invoke(&self, context: &ActionContext<'_>) -> anyhow::Result<ActionOutcome> {
        let field = context
            .field()
            .context("add-to-table action requires a field")?;
        Ok(ActionOutcome::AddField(field.name().to_string()))
    }
}

fn numeric_field() -> Condition {
    Condition::new(|context| {
        context
            .field()
            .is_some_and(|field| field.field_type().is_numeric())
    })
}

fn non_compound_field() -> Condition {
    Condition::new(|context| {
        context
            .field()
            .is_some_and(|field| !field.field_type().is_compound())
    })
}

/// The built-in field action descriptors, in menu order.
#[must_use]
pub fn descriptors() -> Vec<ActionDescriptor> {
    vec![
        ActionDescriptor {
            kind: CHART,
            title: "Chart",
            handler: Some(Arc::new(ChartActionHandler)),
            component: None,
            condition: Some(numeric_field()),
        },
        ActionDescriptor {
            kind: AGGREGATE,
            title: "Aggregate",
            handler: Some(Arc::new(AggregateActionHandler)),
            component: None,
            condition: Some(non_compound_field()),
        },
        ActionDescriptor {
            kind: STATISTICS,
            title: "Statistics",
            handler: Some(Arc::new(FieldStatisticsHandler)),
            component: None,
            condition: None,
        },
        ActionDescriptor {
            kind: ADD_TO_TABLE,
            title: "Add to table",
            handler: Some(Arc::new(AddToTableActionHandler)),
            component: None,
            condition: None,
        },
        // Declarative entry: the host opens a fresh query for the field.
        ActionDescriptor {
            kind: NEW_QUERY,
            title: "Use in new query",
            handler: None,
            component: None,
            condition: None,
        },
    ]
}
