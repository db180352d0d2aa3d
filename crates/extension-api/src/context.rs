use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Properties advertised by a field's index mapping.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FieldProperty {
    Numeric,
    Enumerable,
    Compound,
    Decorated,
}

/// Index-derived type information for a message field.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldType {
    properties: Vec<FieldProperty>,
}

impl FieldType {
    #[must_use]
    pub fn new(properties: Vec<FieldProperty>) -> Self {
        Self { properties }
    }

    /// Type information for a field the index knows nothing about.
    #[must_use]
    pub fn unknown() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn properties(&self) -> &[FieldProperty] {
        &self.properties
    }

    #[must_use]
    pub fn is_numeric(&self) -> bool {
        self.properties.contains(&FieldProperty::Numeric)
    }

    #[must_use]
    pub fn is_enumerable(&self) -> bool {
        self.properties.contains(&FieldProperty::Enumerable)
    }

    /// Compound fields unite values of more than one underlying mapping and
    /// cannot be aggregated over.
    #[must_use]
    pub fn is_compound(&self) -> bool {
        self.properties.contains(&FieldProperty::Compound)
    }
}

/// A message field as presented to context-menu actions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    name: String,
    #[serde(rename = "type")]
    field_type: FieldType,
}

impl Field {
    #[must_use]
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            field_type,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn field_type(&self) -> &FieldType {
        &self.field_type
    }

    /// `true` for series expressions such as `count()` or `avg(took_ms)`,
    /// which name a computed column rather than an indexed field.
    #[must_use]
    pub fn is_function(&self) -> bool {
        is_function_series(&self.name)
    }
}

fn is_function_series(name: &str) -> bool {
    let Some(open) = name.find('(') else {
        return false;
    };
    let Some(inner) = name.strip_suffix(')') else {
        return false;
    };
    let head = &name[..open];
    let parameter = &inner[open + 1..];
    !head.is_empty()
        && head.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
        && parameter.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Runtime context a condition predicate or action handler is evaluated
/// against.
///
/// The catalog passes contexts through without interpreting them; their
/// shape is a contract between feature modules and the host. Keeping the
/// fields behind a struct lets the host grow the available data later
/// without touching every feature module's signatures.
#[derive(Clone, Copy, Debug, Default)]
pub struct ActionContext<'a> {
    field: Option<&'a Field>,
    value: Option<&'a Value>,
    query: Option<&'a str>,
}

impl<'a> ActionContext<'a> {
    /// A context carrying no field, value or query.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_field(mut self, field: &'a Field) -> Self {
        self.field = Some(field);
        self
    }

    #[must_use]
    pub fn with_value(mut self, value: &'a Value) -> Self {
        self.value = Some(value);
        self
    }

    /// Attach the query string currently active in the host UI.
    #[must_use]
    pub fn with_query(mut self, query: &'a str) -> Self {
        self.query = Some(query);
        self
    }

    #[must_use]
    pub fn field(&self) -> Option<&'a Field> {
        self.field
    }

    #[must_use]
    pub fn value(&self) -> Option<&'a Value> {
        self.value
    }

    #[must_use]
    pub fn query(&self) -> Option<&'a str> {
        self.query
    }
}
