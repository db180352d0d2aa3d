use std::sync::Arc;

use log::warn;
use parking_lot::RwLock;

use crate::category::Category;
use crate::context::ActionContext;
use crate::descriptors::{
    ActionDescriptor, CreatorDescriptor, ExtensionDescriptor, SearchTypeDescriptor,
    VisualizationDescriptor, WidgetDescriptor,
};
use crate::error::ExtensionCatalogError;
use crate::package::ExtensionPackage;

use super::{ExtensionCatalog, condition_allows};

/// Cloneable, process-wide handle sharing one [`ExtensionCatalog`] between
/// registering feature modules and the host rendering layer.
///
/// Registrations serialize behind a write lock; lookups and enumerations
/// take the read lock, so readers never block each other. The handle lives
/// for the process lifetime: a single init phase, no teardown. Once the
/// host signals startup complete via [`seal`](Self::seal), further
/// registrations are rejected so late, buggy registrations are caught
/// instead of manifesting as inconsistent menus.
#[derive(Clone, Default)]
pub struct SharedCatalog {
    inner: Arc<RwLock<Inner>>,
}

#[derive(Default)]
struct Inner {
    catalog: ExtensionCatalog,
    sealed: bool,
}

impl SharedCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an already-populated catalog.
    #[must_use]
    pub fn from_catalog(catalog: ExtensionCatalog) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Inner {
                catalog,
                sealed: false,
            })),
        }
    }

    /// Register a descriptor under the category its variant belongs to.
    pub fn register(
        &self,
        descriptor: ExtensionDescriptor,
    ) -> Result<(), ExtensionCatalogError> {
        register_locked(&mut self.inner.write(), descriptor)
    }

    /// Register a descriptor under a category addressed by name.
    pub fn register_named(
        &self,
        category: &str,
        descriptor: ExtensionDescriptor,
    ) -> Result<(), ExtensionCatalogError> {
        let category: Category = category.parse()?;
        if descriptor.category() != category {
            return Err(ExtensionCatalogError::CategoryMismatch {
                requested: category,
                actual: descriptor.category(),
            });
        }
        self.register(descriptor)
    }

    /// Install every descriptor contributed by a package.
    pub fn register_package<P>(&self, package: P) -> Result<(), ExtensionCatalogError>
    where
        P: ExtensionPackage,
    {
        let mut inner = self.inner.write();
        for descriptor in package.descriptors() {
            register_locked(&mut inner, descriptor)?;
        }
        Ok(())
    }

    /// Reject all further registrations. Called once the host finishes
    /// startup; lookups are unaffected and sealing is idempotent.
    pub fn seal(&self) {
        self.inner.write().sealed = true;
    }

    #[must_use]
    pub fn is_sealed(&self) -> bool {
        self.inner.read().sealed
    }

    /// Resolve an owned clone of the descriptor registered under `kind`.
    pub fn lookup(
        &self,
        category: Category,
        kind: &str,
    ) -> Result<ExtensionDescriptor, ExtensionCatalogError> {
        self.inner.read().catalog.lookup(category, kind).cloned()
    }

    /// Resolve a descriptor with the category addressed by name.
    pub fn lookup_named(
        &self,
        category: &str,
        kind: &str,
    ) -> Result<ExtensionDescriptor, ExtensionCatalogError> {
        self.lookup(category.parse()?, kind)
    }

    /// Enumerate every descriptor in a category, in registration order.
    pub fn descriptors(
        &self,
        category: Category,
    ) -> impl Iterator<Item = ExtensionDescriptor> + use<> {
        self.inner
            .read()
            .catalog
            .store(category)
            .snapshot()
            .into_iter()
    }

    /// Enumerate the descriptors in a category applicable to `context`.
    ///
    /// The category is snapshotted under the read lock and conditions are
    /// evaluated lazily against the snapshot, so a slow predicate never
    /// holds the lock. Call again for a fresh snapshot.
    pub fn applicable<'a>(
        &self,
        category: Category,
        context: &'a ActionContext<'a>,
    ) -> impl Iterator<Item = ExtensionDescriptor> + use<'a> {
        self.inner
            .read()
            .catalog
            .store(category)
            .snapshot()
            .into_iter()
            .filter(move |descriptor| condition_allows(descriptor, context))
    }

    /// Resolve an owned clone of a widget descriptor by kind.
    #[must_use]
    pub fn widget(&self, kind: &str) -> Option<WidgetDescriptor> {
        self.inner.read().catalog.widget(kind).cloned()
    }

    /// Resolve an owned clone of a search type descriptor by kind.
    #[must_use]
    pub fn search_type(&self, kind: &str) -> Option<SearchTypeDescriptor> {
        self.inner.read().catalog.search_type(kind).cloned()
    }

    /// Resolve an owned clone of a field action descriptor by kind.
    #[must_use]
    pub fn field_action(&self, kind: &str) -> Option<ActionDescriptor> {
        self.inner.read().catalog.field_action(kind).cloned()
    }

    /// Resolve an owned clone of a value action descriptor by kind.
    #[must_use]
    pub fn value_action(&self, kind: &str) -> Option<ActionDescriptor> {
        self.inner.read().catalog.value_action(kind).cloned()
    }

    /// Resolve an owned clone of a visualization descriptor by kind.
    #[must_use]
    pub fn visualization(&self, kind: &str) -> Option<VisualizationDescriptor> {
        self.inner.read().catalog.visualization(kind).cloned()
    }

    /// Resolve an owned clone of a creator descriptor by kind.
    #[must_use]
    pub fn creator(&self, kind: &str) -> Option<CreatorDescriptor> {
        self.inner.read().catalog.creator(kind).cloned()
    }

    /// Number of descriptors registered in a category.
    #[must_use]
    pub fn len(&self, category: Category) -> usize {
        self.inner.read().catalog.len(category)
    }

    /// `true` when no descriptors are registered in any category.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.read().catalog.is_empty()
    }

    /// `true` when a descriptor is registered under `kind`.
    #[must_use]
    pub fn contains(&self, category: Category, kind: &str) -> bool {
        self.inner.read().catalog.contains(category, kind)
    }
}

fn register_locked(
    inner: &mut Inner,
    descriptor: ExtensionDescriptor,
) -> Result<(), ExtensionCatalogError> {
    if inner.sealed {
        let error = ExtensionCatalogError::Sealed {
            category: descriptor.category(),
            kind: descriptor.kind(),
        };
        warn!("{error}");
        return Err(error);
    }
    inner.catalog.register(descriptor)
}
