//! Assembly of the built-in extension packages.

use timber_extension_api::{ExtensionCatalog, ExtensionCatalogError, SharedCatalog};

use crate::settings::Settings;

/// Register every built-in extension package.
///
/// Packages install independently; their relative order only decides menu
/// enumeration order within each category.
pub fn register_builtin_extensions(
    catalog: &mut ExtensionCatalog,
    settings: &Settings,
) -> Result<(), ExtensionCatalogError> {
    catalog.register_package(timber_extensions_search::SearchPackage::new(
        settings.message_list_defaults(),
    ))?;
    catalog.register_package(timber_extensions_actions::bundle())?;
    catalog.register_package(timber_extensions_visualizations::bundle())?;
    Ok(())
}

/// Assemble the default catalog handle for a host process.
///
/// The returned handle is sealed: the built-ins are the complete descriptor
/// set, and anything registered later is a bug the seal surfaces. Hosts
/// that install their own packages build a catalog with
/// [`register_builtin_extensions`] and seal it themselves.
pub fn default_catalog(settings: &Settings) -> Result<SharedCatalog, ExtensionCatalogError> {
    let mut catalog = ExtensionCatalog::new();
    register_builtin_extensions(&mut catalog, settings)?;
    let shared = SharedCatalog::from_catalog(catalog);
    shared.seal();
    Ok(shared)
}
