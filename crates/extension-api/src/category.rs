use std::fmt;
use std::str::FromStr;

use crate::error::ExtensionCatalogError;

/// Fixed buckets of extension descriptors sharing a common purpose.
///
/// The set is closed: the host enumerates it at startup and feature modules
/// can only contribute to the categories listed here. Call sites that
/// address categories by name go through [`FromStr`], which rejects
/// unrecognized keys instead of silently ignoring them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Widgets,
    SearchTypes,
    FieldActions,
    ValueActions,
    VisualizationTypes,
    Creators,
}

impl Category {
    /// Every category, in the order menus enumerate them.
    pub const ALL: [Category; 6] = [
        Category::Widgets,
        Category::SearchTypes,
        Category::FieldActions,
        Category::ValueActions,
        Category::VisualizationTypes,
        Category::Creators,
    ];

    /// Stable string key used when a category is addressed by name.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Category::Widgets => "widgets",
            Category::SearchTypes => "search-types",
            Category::FieldActions => "field-actions",
            Category::ValueActions => "value-actions",
            Category::VisualizationTypes => "visualization-types",
            Category::Creators => "creators",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Category {
    type Err = ExtensionCatalogError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.key() == value)
            .ok_or_else(|| ExtensionCatalogError::UnknownCategory {
                name: value.to_string(),
            })
    }
}
