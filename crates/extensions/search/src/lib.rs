//! Built-in search widgets and search types for the Timber views module.
//!
//! The package contributes the message list and aggregation widgets plus
//! the `messages` and `pivot` search types that back them.

pub mod aggregation;
pub mod search_types;
pub mod widgets;

use timber_extension_api::{ExtensionDescriptor, ExtensionPackage};

pub use search_types::MessageListDefaults;

/// Package bundling the built-in search widgets and search types.
pub struct SearchPackage {
    descriptors: Vec<ExtensionDescriptor>,
}

impl SearchPackage {
    #[must_use]
    pub fn new(defaults: MessageListDefaults) -> Self {
        let descriptors = vec![
            ExtensionDescriptor::Widget(widgets::message_list_descriptor()),
            ExtensionDescriptor::Widget(widgets::aggregation_descriptor()),
            ExtensionDescriptor::SearchType(search_types::message_list_search_type(defaults)),
            ExtensionDescriptor::SearchType(search_types::pivot_search_type()),
        ];
        Self { descriptors }
    }
}

impl Default for SearchPackage {
    fn default() -> Self {
        Self::new(MessageListDefaults::default())
    }
}

impl ExtensionPackage for SearchPackage {
    type Descriptors<'a> = std::vec::IntoIter<ExtensionDescriptor>;

    fn descriptors(&self) -> Self::Descriptors<'_> {
        self.descriptors.clone().into_iter()
    }
}

/// Package with the stock defaults.
#[must_use]
pub fn bundle() -> SearchPackage {
    SearchPackage::default()
}
