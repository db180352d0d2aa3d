use std::sync::Arc;

use serde_json::Value;

use crate::category::Category;
use crate::condition::Condition;
use crate::handlers::{
    ActionHandler, Component, SearchResultTransformer, SearchTypeHandler, SearchTypeSource,
    TitleGenerator,
};

/// Dashboard widget contributed to the views UI.
#[derive(Clone)]
pub struct WidgetDescriptor {
    /// Stable key routing widget instances to this descriptor.
    pub kind: &'static str,
    /// Label shown in widget pickers.
    pub display_name: &'static str,
    /// Grid rows a fresh instance occupies.
    pub default_height: u32,
    /// Grid columns a fresh instance occupies.
    pub default_width: u32,
    /// Renderable displaying the widget's results.
    pub visualization: Component,
    /// Renderable presenting the widget's edit mode, if it has one.
    pub edit: Option<Component>,
    /// Reshapes backend results before they reach the visualization.
    pub result_transformer: Option<Arc<dyn SearchResultTransformer>>,
    /// Produces the search type requests backing a widget instance.
    pub search_types: Option<Arc<dyn SearchTypeSource>>,
    /// Derives instance titles from the widget config.
    pub title_generator: Option<Arc<dyn TitleGenerator>>,
    pub condition: Option<Condition>,
}

/// Search type executable against the backend.
#[derive(Clone)]
pub struct SearchTypeDescriptor {
    pub kind: &'static str,
    pub handler: Arc<dyn SearchTypeHandler>,
    /// Payload merged into every request for this search type.
    pub defaults: Value,
    pub condition: Option<Condition>,
}

/// Context-menu action on a field or value.
///
/// A descriptor may carry a handler, a component, both or neither; purely
/// declarative actions (e.g. use-in-new-query) are dispatched by the host
/// from the descriptor alone.
#[derive(Clone)]
pub struct ActionDescriptor {
    pub kind: &'static str,
    /// Menu entry label.
    pub title: &'static str,
    pub handler: Option<Arc<dyn ActionHandler>>,
    pub component: Option<Component>,
    pub condition: Option<Condition>,
}

/// Visualization selectable for aggregation results.
#[derive(Clone)]
pub struct VisualizationDescriptor {
    pub kind: &'static str,
    pub display_name: &'static str,
    pub component: Component,
    pub condition: Option<Condition>,
}

/// Where a creator entry is surfaced in the add-widget menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CreatorPlacement {
    /// Ready-made widget shortcuts.
    Preset,
    /// Entries opening a configuration flow.
    Generic,
}

/// Entry in the add-widget menu.
#[derive(Clone)]
pub struct CreatorDescriptor {
    pub kind: &'static str,
    pub title: &'static str,
    pub placement: CreatorPlacement,
    pub handler: Option<Arc<dyn ActionHandler>>,
    pub component: Option<Component>,
    pub condition: Option<Condition>,
}

/// A registered extension point instance, tagged by the category it belongs
/// to.
///
/// Category-specific payload is explicit per variant; the shared surface
/// ([`kind`](Self::kind), [`display_name`](Self::display_name),
/// [`condition`](Self::condition)) is what the catalog itself operates on.
#[derive(Clone)]
pub enum ExtensionDescriptor {
    Widget(WidgetDescriptor),
    SearchType(SearchTypeDescriptor),
    FieldAction(ActionDescriptor),
    ValueAction(ActionDescriptor),
    Visualization(VisualizationDescriptor),
    Creator(CreatorDescriptor),
}

impl std::fmt::Debug for ExtensionDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExtensionDescriptor")
            .field("category", &self.category())
            .field("kind", &self.kind())
            .field("display_name", &self.display_name())
            .finish()
    }
}

impl ExtensionDescriptor {
    /// Category this descriptor registers under.
    #[must_use]
    pub fn category(&self) -> Category {
        match self {
            ExtensionDescriptor::Widget(_) => Category::Widgets,
            ExtensionDescriptor::SearchType(_) => Category::SearchTypes,
            ExtensionDescriptor::FieldAction(_) => Category::FieldActions,
            ExtensionDescriptor::ValueAction(_) => Category::ValueActions,
            ExtensionDescriptor::Visualization(_) => Category::VisualizationTypes,
            ExtensionDescriptor::Creator(_) => Category::Creators,
        }
    }

    /// Type key, unique within the descriptor's category.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            ExtensionDescriptor::Widget(widget) => widget.kind,
            ExtensionDescriptor::SearchType(search_type) => search_type.kind,
            ExtensionDescriptor::FieldAction(action)
            | ExtensionDescriptor::ValueAction(action) => action.kind,
            ExtensionDescriptor::Visualization(visualization) => visualization.kind,
            ExtensionDescriptor::Creator(creator) => creator.kind,
        }
    }

    /// Label shown in menus, when the variant carries one.
    #[must_use]
    pub fn display_name(&self) -> Option<&'static str> {
        match self {
            ExtensionDescriptor::Widget(widget) => Some(widget.display_name),
            ExtensionDescriptor::SearchType(_) => None,
            ExtensionDescriptor::FieldAction(action)
            | ExtensionDescriptor::ValueAction(action) => Some(action.title),
            ExtensionDescriptor::Visualization(visualization) => {
                Some(visualization.display_name)
            }
            ExtensionDescriptor::Creator(creator) => Some(creator.title),
        }
    }

    /// Applicability predicate, when the descriptor carries one.
    #[must_use]
    pub fn condition(&self) -> Option<&Condition> {
        match self {
            ExtensionDescriptor::Widget(widget) => widget.condition.as_ref(),
            ExtensionDescriptor::SearchType(search_type) => search_type.condition.as_ref(),
            ExtensionDescriptor::FieldAction(action)
            | ExtensionDescriptor::ValueAction(action) => action.condition.as_ref(),
            ExtensionDescriptor::Visualization(visualization) => {
                visualization.condition.as_ref()
            }
            ExtensionDescriptor::Creator(creator) => creator.condition.as_ref(),
        }
    }

    #[must_use]
    pub fn as_widget(&self) -> Option<&WidgetDescriptor> {
        match self {
            ExtensionDescriptor::Widget(widget) => Some(widget),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_search_type(&self) -> Option<&SearchTypeDescriptor> {
        match self {
            ExtensionDescriptor::SearchType(search_type) => Some(search_type),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_field_action(&self) -> Option<&ActionDescriptor> {
        match self {
            ExtensionDescriptor::FieldAction(action) => Some(action),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_value_action(&self) -> Option<&ActionDescriptor> {
        match self {
            ExtensionDescriptor::ValueAction(action) => Some(action),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_visualization(&self) -> Option<&VisualizationDescriptor> {
        match self {
            ExtensionDescriptor::Visualization(visualization) => Some(visualization),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_creator(&self) -> Option<&CreatorDescriptor> {
        match self {
            ExtensionDescriptor::Creator(creator) => Some(creator),
            _ => None,
        }
    }
}
