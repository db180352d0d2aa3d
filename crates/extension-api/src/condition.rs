use std::any::Any;
use std::fmt;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;

use thiserror::Error;

use crate::context::ActionContext;

/// Predicate gating whether a descriptor applies to a runtime context.
///
/// Conditions are supplied by feature modules and evaluated on every menu
/// enumeration; they must be fast and free of side effects. A descriptor
/// without a condition is always applicable.
#[derive(Clone)]
pub struct Condition {
    predicate: Arc<dyn Fn(&ActionContext<'_>) -> bool + Send + Sync>,
}

/// Error returned when a predicate panicked during evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("condition predicate panicked: {message}")]
pub struct ConditionPanicked {
    message: String,
}

impl Condition {
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&ActionContext<'_>) -> bool + Send + Sync + 'static,
    {
        Self {
            predicate: Arc::new(predicate),
        }
    }

    /// Evaluate the raw predicate. Panics propagate to the caller; catalog
    /// enumeration goes through [`try_evaluate`](Self::try_evaluate)
    /// instead.
    #[must_use]
    pub fn evaluate(&self, context: &ActionContext<'_>) -> bool {
        (self.predicate)(context)
    }

    /// Evaluate the predicate, converting a panic into an error so one bad
    /// descriptor cannot abort a whole enumeration.
    pub fn try_evaluate(
        &self,
        context: &ActionContext<'_>,
    ) -> Result<bool, ConditionPanicked> {
        catch_unwind(AssertUnwindSafe(|| (self.predicate)(context))).map_err(|payload| {
            ConditionPanicked {
                message: panic_message(payload.as_ref()),
            }
        })
    }
}

impl fmt::Debug for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Condition(..)")
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&'static str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "opaque panic payload".to_string()
    }
}
