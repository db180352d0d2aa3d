use std::any::Any;
use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::context::ActionContext;
use crate::outcome::ActionOutcome;

/// Callable capability behind a field action, value action or creator.
///
/// The catalog stores the reference and never invokes it; the host calls
/// [`invoke`](ActionHandler::invoke) once the user selects the action.
pub trait ActionHandler: Send + Sync {
    fn invoke(&self, context: &ActionContext<'_>) -> anyhow::Result<ActionOutcome>;
}

/// Executes a registered search type: turns a caller-provided spec plus the
/// descriptor's stored defaults into the request payload the backend
/// understands.
pub trait SearchTypeHandler: Send + Sync {
    fn build_request(&self, spec: &Value, defaults: &Value) -> anyhow::Result<Value>;
}

/// Reshapes raw backend results into the form a widget's visualization
/// consumes.
pub trait SearchResultTransformer: Send + Sync {
    fn transform(&self, results: &Value) -> Value;
}

/// One search type request emitted by a [`SearchTypeSource`].
#[derive(Clone, Debug, PartialEq)]
pub struct SearchTypeSpec {
    /// Kind of the search type descriptor servicing the request.
    pub kind: &'static str,
    /// Opaque request payload forwarded to the search type handler.
    pub config: Value,
}

/// Produces the search type requests backing a widget instance.
pub trait SearchTypeSource: Send + Sync {
    fn search_types(&self, widget_config: &Value) -> Vec<SearchTypeSpec>;
}

/// Derives a widget instance title from its config payload.
pub trait TitleGenerator: Send + Sync {
    fn title_for(&self, widget_config: &Value) -> String;
}

/// Type-erased reference to a renderable unit owned by the host's rendering
/// layer.
///
/// The catalog returns the handle verbatim; hosts downcast to the concrete
/// component type they mounted. Cloning shares the underlying component.
#[derive(Clone)]
pub struct Component {
    inner: Arc<dyn Any + Send + Sync>,
}

impl Component {
    pub fn new<T>(component: T) -> Self
    where
        T: Send + Sync + 'static,
    {
        Self {
            inner: Arc::new(component),
        }
    }

    /// Recover the concrete component, if the handle wraps a `T`.
    #[must_use]
    pub fn downcast_ref<T>(&self) -> Option<&T>
    where
        T: Send + Sync + 'static,
    {
        self.inner.downcast_ref()
    }
}

impl fmt::Debug for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Component(..)")
    }
}
