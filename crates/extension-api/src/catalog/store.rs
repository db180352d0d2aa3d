use indexmap::IndexMap;

use crate::descriptors::ExtensionDescriptor;
use crate::error::ExtensionCatalogError;

/// Insertion-ordered descriptor storage for a single category.
///
/// Registration order is preserved because menu enumeration must render
/// consistently across calls.
#[derive(Clone, Default)]
pub(super) struct DescriptorStore {
    entries: IndexMap<&'static str, ExtensionDescriptor>,
}

impl DescriptorStore {
    pub(super) fn insert(
        &mut self,
        descriptor: ExtensionDescriptor,
    ) -> Result<(), ExtensionCatalogError> {
        let kind = descriptor.kind();
        if kind.is_empty() {
            return Err(ExtensionCatalogError::EmptyKind {
                category: descriptor.category(),
            });
        }
        if self.entries.contains_key(kind) {
            return Err(ExtensionCatalogError::DuplicateKind {
                category: descriptor.category(),
                kind,
            });
        }
        self.entries.insert(kind, descriptor);
        Ok(())
    }

    pub(super) fn get(&self, kind: &str) -> Option<&ExtensionDescriptor> {
        self.entries.get(kind)
    }

    pub(super) fn contains(&self, kind: &str) -> bool {
        self.entries.contains_key(kind)
    }

    pub(super) fn iter(&self) -> impl Iterator<Item = &ExtensionDescriptor> {
        self.entries.values()
    }

    /// Owned clone of the store's descriptors, in registration order.
    pub(super) fn snapshot(&self) -> Vec<ExtensionDescriptor> {
        self.entries.values().cloned().collect()
    }

    pub(super) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(super) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
