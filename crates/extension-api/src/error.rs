use thiserror::Error;

use crate::category::Category;

/// Errors that can occur when mutating or querying the
/// [`ExtensionCatalog`](crate::ExtensionCatalog).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExtensionCatalogError {
    /// A category was addressed by a name outside the closed set.
    #[error("extension category '{name}' is not recognized")]
    UnknownCategory { name: String },

    /// An extension attempted to register a kind that already exists in its
    /// category.
    #[error("{category} extension '{kind}' is already registered")]
    DuplicateKind {
        category: Category,
        kind: &'static str,
    },

    /// An extension attempted to register with an empty kind.
    #[error("{category} extension registered with an empty kind")]
    EmptyKind { category: Category },

    /// A lookup addressed a kind that has not been registered. Callers are
    /// expected to recover, e.g. by skipping a stale widget reference.
    #[error("{category} extension '{kind}' is not registered")]
    NotFound { category: Category, kind: String },

    /// A descriptor was registered under a category it does not belong to.
    #[error("descriptor for {actual} cannot be registered under {requested}")]
    CategoryMismatch {
        requested: Category,
        actual: Category,
    },

    /// A registration arrived after the catalog was sealed.
    #[error("extension catalog is sealed, {category} extension '{kind}' arrived too late")]
    Sealed {
        category: Category,
        kind: &'static str,
    },
}
