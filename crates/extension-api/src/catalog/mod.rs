mod shared;
mod store;

#[cfg(test)]
mod tests;

pub use shared::SharedCatalog;

use log::{debug, warn};

use crate::category::Category;
use crate::context::ActionContext;
use crate::descriptors::{
    ActionDescriptor, CreatorDescriptor, ExtensionDescriptor, SearchTypeDescriptor,
    VisualizationDescriptor, WidgetDescriptor,
};
use crate::error::ExtensionCatalogError;
use crate::package::ExtensionPackage;
use store::DescriptorStore;

/// Catalog of all extensions contributing to the views UI.
///
/// Feature modules register descriptors during startup; the host rendering
/// layer resolves them by category and kind, or enumerates the descriptors
/// applicable to a runtime context. The catalog stores handler and
/// component references verbatim and never invokes them.
///
/// Duplicate kinds are rejected at registration time so conflicts between
/// feature modules surface during startup instead of as silently-wrong
/// menus later. For concurrent registration and lookup, wrap the catalog in
/// a [`SharedCatalog`].
#[derive(Clone, Default)]
pub struct ExtensionCatalog {
    widgets: DescriptorStore,
    search_types: DescriptorStore,
    field_actions: DescriptorStore,
    value_actions: DescriptorStore,
    visualizations: DescriptorStore,
    creators: DescriptorStore,
}

impl ExtensionCatalog {
    /// Create an empty catalog without any extensions registered.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn store(&self, category: Category) -> &DescriptorStore {
        match category {
            Category::Widgets => &self.widgets,
            Category::SearchTypes => &self.search_types,
            Category::FieldActions => &self.field_actions,
            Category::ValueActions => &self.value_actions,
            Category::VisualizationTypes => &self.visualizations,
            Category::Creators => &self.creators,
        }
    }

    fn store_mut(&mut self, category: Category) -> &mut DescriptorStore {
        match category {
            Category::Widgets => &mut self.widgets,
            Category::SearchTypes => &mut self.search_types,
            Category::FieldActions => &mut self.field_actions,
            Category::ValueActions => &mut self.value_actions,
            Category::VisualizationTypes => &mut self.visualizations,
            Category::Creators => &mut self.creators,
        }
    }

    /// Register a descriptor under the category its variant belongs to.
    ///
    /// Registrations from independent feature modules may arrive in any
    /// order; a failed registration leaves the catalog unchanged.
    pub fn register(
        &mut self,
        descriptor: ExtensionDescriptor,
    ) -> Result<(), ExtensionCatalogError> {
        let category = descriptor.category();
        let kind = descriptor.kind();
        self.store_mut(category).insert(descriptor)?;
        debug!("registered {category} extension '{kind}'");
        Ok(())
    }

    /// Register a descriptor, checking it against an explicit category.
    pub fn register_in(
        &mut self,
        category: Category,
        descriptor: ExtensionDescriptor,
    ) -> Result<(), ExtensionCatalogError> {
        if descriptor.category() != category {
            return Err(ExtensionCatalogError::CategoryMismatch {
                requested: category,
                actual: descriptor.category(),
            });
        }
        self.register(descriptor)
    }

    /// Register a descriptor under a category addressed by name.
    ///
    /// A misconfigured feature module surfaces here: an unrecognized name
    /// fails fast instead of being silently ignored.
    pub fn register_named(
        &mut self,
        category: &str,
        descriptor: ExtensionDescriptor,
    ) -> Result<(), ExtensionCatalogError> {
        self.register_in(category.parse()?, descriptor)
    }

    /// Install every descriptor contributed by a package.
    pub fn register_package<P>(&mut self, package: P) -> Result<(), ExtensionCatalogError>
    where
        P: ExtensionPackage,
    {
        for descriptor in package.descriptors() {
            self.register(descriptor)?;
        }
        Ok(())
    }

    /// Resolve the descriptor registered under `kind`.
    ///
    /// An absent kind is an expected outcome — a stale widget reference or
    /// an uninstalled feature module — and surfaces as the recoverable
    /// [`ExtensionCatalogError::NotFound`].
    pub fn lookup(
        &self,
        category: Category,
        kind: &str,
    ) -> Result<&ExtensionDescriptor, ExtensionCatalogError> {
        self.store(category)
            .get(kind)
            .ok_or_else(|| ExtensionCatalogError::NotFound {
                category,
                kind: kind.to_string(),
            })
    }

    /// Resolve a descriptor with the category addressed by name.
    pub fn lookup_named(
        &self,
        category: &str,
        kind: &str,
    ) -> Result<&ExtensionDescriptor, ExtensionCatalogError> {
        self.lookup(category.parse()?, kind)
    }

    /// Enumerate every descriptor in a category, in registration order.
    pub fn descriptors(&self, category: Category) -> impl Iterator<Item = &ExtensionDescriptor> {
        self.store(category).iter()
    }

    /// Enumerate the descriptors in a category applicable to `context`.
    ///
    /// The sequence is lazy, preserves registration order and includes
    /// every descriptor without a condition; call again for a fresh pass.
    /// A condition that panics excludes only its own descriptor — the
    /// panic is caught and logged, and enumeration continues with the
    /// siblings, so one bad feature module cannot break every menu.
    pub fn applicable<'a>(
        &'a self,
        category: Category,
        context: &'a ActionContext<'a>,
    ) -> impl Iterator<Item = &'a ExtensionDescriptor> {
        self.store(category)
            .iter()
            .filter(move |descriptor| condition_allows(descriptor, context))
    }

    /// Resolve a widget descriptor by kind.
    #[must_use]
    pub fn widget(&self, kind: &str) -> Option<&WidgetDescriptor> {
        self.widgets.get(kind).and_then(ExtensionDescriptor::as_widget)
    }

    /// Resolve a search type descriptor by kind.
    #[must_use]
    pub fn search_type(&self, kind: &str) -> Option<&SearchTypeDescriptor> {
        self.search_types
            .get(kind)
            .and_then(ExtensionDescriptor::as_search_type)
    }

    /// Resolve a field action descriptor by kind.
    #[must_use]
    pub fn field_action(&self, kind: &str) -> Option<&ActionDescriptor> {
        self.field_actions
            .get(kind)
            .and_then(ExtensionDescriptor::as_field_action)
    }

    /// Resolve a value action descriptor by kind.
    #[must_use]
    pub fn value_action(&self, kind: &str) -> Option<&ActionDescriptor> {
        self.value_actions
            .get(kind)
            .and_then(ExtensionDescriptor::as_value_action)
    }

    /// Resolve a visualization descriptor by kind.
    #[must_use]
    pub fn visualization(&self, kind: &str) -> Option<&VisualizationDescriptor> {
        self.visualizations
            .get(kind)
            .and_then(ExtensionDescriptor::as_visualization)
    }

    /// Resolve a creator descriptor by kind.
    #[must_use]
    pub fn creator(&self, kind: &str) -> Option<&CreatorDescriptor> {
        self.creators
            .get(kind)
            .and_then(ExtensionDescriptor::as_creator)
    }

    /// Number of descriptors registered in a category.
    #[must_use]
    pub fn len(&self, category: Category) -> usize {
        self.store(category).len()
    }

    /// `true` when no descriptors are registered in any category.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        Category::ALL
            .into_iter()
            .all(|category| self.store(category).is_empty())
    }

    /// `true` when a descriptor is registered under `kind`.
    #[must_use]
    pub fn contains(&self, category: Category, kind: &str) -> bool {
        self.store(category).contains(kind)
    }
}

fn condition_allows(descriptor: &ExtensionDescriptor, context: &ActionContext<'_>) -> bool {
    let Some(condition) = descriptor.condition() else {
        return true;
    };
    match condition.try_evaluate(context) {
        Ok(applicable) => applicable,
        Err(error) => {
            warn!(
                "condition for {} extension '{}' failed: {error}; treating as not applicable",
                descriptor.category(),
                descriptor.kind()
            );
            false
        }
    }
}
