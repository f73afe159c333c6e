//! Event categories
//!
//! Categories form an open list configured by the host application instead of a fixed
//! enum. Lookups ignore case, so `business` and `BUSINESS` both resolve to the
//! configured spelling.

use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

use super::eq_ignore_case;
use crate::error::{AppError, AppResult};

/// Categories offered when nothing is configured
pub const DEFAULT_CATEGORIES: [&str; 7] = [
    "Business", "Gym", "Formal", "Casual", "Work", "Office", "Meeting",
];

/// A category name as stored on an event
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct Category(String);

impl Category {
    /// Wrap a stored name without consulting the catalog
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Category(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The configured set of categories
#[derive(Debug, Clone)]
pub struct CategoryCatalog {
    categories: Vec<Category>,
}

impl CategoryCatalog {
    /// Build a catalog, dropping blank names and case-insensitive duplicates
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut categories: Vec<Category> = Vec::new();
        for name in names {
            let name = name.as_ref().trim();
            if name.is_empty() {
                continue;
            }
            let taken = categories
                .iter()
                .any(|c| eq_ignore_case(c.as_str(), name));
            if !taken {
                categories.push(Category::new(name));
            }
        }
        Self { categories }
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Resolve a user-supplied name to its configured spelling
    pub fn resolve(&self, name: &str) -> AppResult<Category> {
        let wanted = name.trim();
        self.categories
            .iter()
            .find(|c| eq_ignore_case(c.as_str(), wanted))
            .cloned()
            .ok_or_else(|| AppError::Validation(format!("Unknown category '{}'", wanted)))
    }
}

impl Default for CategoryCatalog {
    fn default() -> Self {
        Self::new(DEFAULT_CATEGORIES)
    }
}
