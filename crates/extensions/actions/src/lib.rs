//! Built-in field and value context-menu actions for the Timber views
//! module.
//!
//! Field actions act on a field as a whole (chart it, aggregate it); value
//! actions act on one concrete field value (query for it, exclude it).

pub mod field;
pub mod query;
pub mod value;

use timber_extension_api::{ExtensionDescriptor, ExtensionPackage};

/// Package bundling the built-in field and value actions.
pub struct ActionsPackage {
    descriptors: Vec<ExtensionDescriptor>,
}

impl ActionsPackage {
    #[must_use]
    pub fn new() -> Self {
        let descriptors = field::descriptors()
            .into_iter()
            .map(ExtensionDescriptor::FieldAction)
            .chain(
                value::descriptors()
                    .into_iter()
                    .map(ExtensionDescriptor::ValueAction),
            )
            .collect();
        Self { descriptors }
    }
}

impl Default for ActionsPackage {
    fn default() -> Self {
        Self::new()
    }
}

impl ExtensionPackage for ActionsPackage {
    type Descriptors<'a> = std::vec::IntoIter<ExtensionDescriptor>;

    fn descriptors(&self) -> Self::Descriptors<'_> {
        self.descriptors.clone().into_iter()
    }
}

#[must_use]
pub fn bundle() -> ActionsPackage {
    ActionsPackage::new()
}
