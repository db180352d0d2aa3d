//! Aggregation widget configuration and the logic derived from it.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use timber_extension_api::{SearchResultTransformer, SearchTypeSpec, SearchTypeSource, TitleGenerator};

use crate::search_types;

/// Field a pivot groups results by.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pivot {
    pub field: String,
}

impl Pivot {
    #[must_use]
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }
}

/// One metric computed over the result set.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Series {
    /// Aggregation function, e.g. `count` or `avg`.
    pub function: String,
    /// Field the function is computed over; `None` for row counts.
    #[serde(default)]
    pub field: Option<String>,
}

impl Series {
    #[must_use]
    pub fn new(function: impl Into<String>, field: Option<String>) -> Self {
        Self {
            function: function.into(),
            field,
        }
    }

    /// Row count over all messages.
    #[must_use]
    pub fn count() -> Self {
        Self::new("count", None)
    }

    /// Rendered form used in titles and result columns, e.g. `avg(took_ms)`.
    #[must_use]
    pub fn effective_name(&self) -> String {
        match &self.field {
            Some(field) => format!("{}({field})", self.function),
            None => format!("{}()", self.function),
        }
    }
}

/// Configuration payload of an aggregation widget instance.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AggregationConfig {
    pub row_pivots: Vec<Pivot>,
    pub column_pivots: Vec<Pivot>,
    pub series: Vec<Series>,
    /// Visualization kind rendering the result; the host falls back to a
    /// data table when unset.
    pub visualization: Option<String>,
    /// Include rollup rows for pivot totals.
    pub rollup: bool,
}

impl Default for AggregationConfig {
    fn default() -> Self {
        Self {
            row_pivots: Vec::new(),
            column_pivots: Vec::new(),
            series: Vec::new(),
            visualization: None,
            rollup: true,
        }
    }
}

/// Title shown on an aggregation widget, derived from its config.
#[must_use]
pub fn title_for(config: &AggregationConfig) -> String {
    let series = config
        .series
        .iter()
        .map(Series::effective_name)
        .collect::<Vec<_>>()
        .join(", ");
    if !config.row_pivots.is_empty() {
        let fields = config
            .row_pivots
            .iter()
            .map(|pivot| pivot.field.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        return format!("Aggregating {series} by {fields}");
    }
    if !config.series.is_empty() {
        return format!("Aggregating {series}");
    }
    "Empty Aggregation".to_string()
}

/// Derives aggregation widget titles from the raw config payload.
pub struct AggregationTitleGenerator;

impl TitleGenerator for AggregationTitleGenerator {
    fn title_for(&self, widget_config: &Value) -> String {
        let config: AggregationConfig =
            serde_json::from_value(widget_config.clone()).unwrap_or_default();
        title_for(&config)
    }
}

/// Emits the pivot request backing an aggregation widget instance.
pub struct PivotRequestSource;

impl SearchTypeSource for PivotRequestSource {
    fn search_types(&self, widget_config: &Value) -> Vec<SearchTypeSpec> {
        let config: AggregationConfig =
            serde_json::from_value(widget_config.clone()).unwrap_or_default();
        vec![SearchTypeSpec {
            kind: search_types::PIVOT,
            config: serde_json::to_value(&config).unwrap_or(Value::Null),
        }]
    }
}

/// Flattens the pivot result envelope down to its row set.
pub struct PivotResultTransformer;

impl SearchResultTransformer for PivotResultTransformer {
    fn transform(&self, results: &Value) -> Value {
        results
            .get(0)
            .and_then(|result| result.get("rows"))
            .cloned()
            .unwrap_or_else(|| Value::Array(Vec::new()))
    }
}
