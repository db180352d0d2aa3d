use crate::descriptors::ExtensionDescriptor;

/// A collection of descriptors contributed by a feature module.
///
/// Feature crates bundle their descriptors into a package and hand it to
/// [`ExtensionCatalog::register_package`](crate::ExtensionCatalog::register_package);
/// packages from independent modules may be installed in any order.
pub trait ExtensionPackage: Send + Sync {
    /// Iterator type yielded by [`descriptors`](Self::descriptors).
    type Descriptors<'a>: IntoIterator<Item = ExtensionDescriptor>
    where
        Self: 'a;

    /// Enumerate the descriptors contributed by this package.
    fn descriptors(&self) -> Self::Descriptors<'_>;
}
