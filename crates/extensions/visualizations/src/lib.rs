//! Built-in visualization types and add-widget creators for the Timber
//! views module.

pub mod creators;
pub mod types;

use timber_extension_api::{ExtensionDescriptor, ExtensionPackage};

/// Package bundling the built-in visualizations and creator entries.
pub struct VisualizationsPackage {
    descriptors: Vec<ExtensionDescriptor>,
}

impl VisualizationsPackage {
    #[must_use]
    pub fn new() -> Self {
        let descriptors = types::descriptors()
            .into_iter()
            .map(ExtensionDescriptor::Visualization)
            .chain(
                creators::descriptors()
                    .into_iter()
                    .map(ExtensionDescriptor::Creator),
            )
            .collect();
        Self { descriptors }
    }
}

impl Default for VisualizationsPackage {
    fn default() -> Self {
        Self::new()
    }
}

impl ExtensionPackage for VisualizationsPackage {
    type Descriptors<'a> = std::vec::IntoIter<ExtensionDescriptor>;

    fn descriptors(&self) -> Self::Descriptors<'_> {
        self.descriptors.clone().into_iter()
    }
}

#[must_use]
pub fn bundle() -> VisualizationsPackage {
    VisualizationsPackage::new()
}
