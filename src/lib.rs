//! Extension registry and built-in extension packages for the Timber views
//! module.
//!
//! The root crate assembles the built-in feature packages into a default
//! catalog and re-exports the extension API so that embedders can configure
//! everything without digging through the module hierarchy. Rendering,
//! permission checks and routing stay with the host application; this crate
//! only captures and resolves extension descriptors.

pub mod builtin;
pub mod settings;

pub use builtin::{default_catalog, register_builtin_extensions};
pub use settings::{Settings, load_settings};

pub use timber_extension_api::{
    ActionContext, ActionDescriptor, ActionHandler, ActionOutcome, Category, Component,
    Condition, CreatorDescriptor, CreatorPlacement, ExtensionCatalog, ExtensionCatalogError,
    ExtensionDescriptor, ExtensionPackage, Field, FieldProperty, FieldType,
    SearchResultTransformer, SearchTypeDescriptor, SearchTypeHandler, SearchTypeSource,
    SearchTypeSpec, SharedCatalog, TitleGenerator, VisualizationDescriptor, WidgetDescriptor,
};
pub use timber_extensions_actions::ActionsPackage;
pub use timber_extensions_search::{MessageListDefaults, SearchPackage};
pub use timber_extensions_visualizations::VisualizationsPackage;
