use serde_json::Value;

/// Effect an [`ActionHandler`](crate::ActionHandler) asks the host to apply.
///
/// The catalog never constructs or interprets outcomes; they are the
/// contract between feature-module handlers and the host dispatch layer,
/// and they keep handlers directly testable.
#[derive(Clone, Debug, PartialEq)]
pub enum ActionOutcome {
    /// Replace the current query string.
    SetQuery(String),

    /// Create a widget of the named kind from the provided config payload.
    CreateWidget {
        widget: &'static str,
        config: Value,
    },

    /// Add a field column to the widget the action was invoked from.
    AddField(String),

    /// The action completed without requesting a state change.
    Unchanged,
}
