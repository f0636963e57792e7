//! Filter Engine for the list view
//!
//! Filtering is a pure function over the catalog: the list view recomputes
//! it on every criteria change rather than maintaining an incrementally
//! updated cache. The catalog never changes, so there is nothing to
//! invalidate.

use crate::catalog::{Catalog, Category, Record};

/// Category selector: everything, or a single category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => *c == category,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CategoryFilter::All => "全部",
            CategoryFilter::Only(c) => c.label(),
        }
    }

    /// Next selector in tab-row order, wrapping back to `All`.
    pub fn cycle(&self) -> Self {
        match self {
            CategoryFilter::All => CategoryFilter::Only(Category::ALL[0]),
            CategoryFilter::Only(c) => {
                let pos = Category::ALL.iter().position(|x| x == c).unwrap_or(0);
                match Category::ALL.get(pos + 1) {
                    Some(next) => CategoryFilter::Only(*next),
                    None => CategoryFilter::All,
                }
            }
        }
    }
}

/// Search string plus category selector. Lives only while the list view is
/// active; never persisted.
#[derive(Debug, Clone, Default)]
pub struct FilterCriteria {
    pub query: String,
    pub category: CategoryFilter,
}

impl FilterCriteria {
    fn matches(&self, record: &Record) -> bool {
        if !self.category.matches(record.category) {
            return false;
        }
        if self.query.is_empty() {
            return true;
        }
        let needle = self.query.to_lowercase();
        record.name.to_lowercase().contains(&needle)
            || record.series.to_lowercase().contains(&needle)
    }
}

/// Ordered subset of the catalog matching the criteria. Stable: source order
/// is preserved, no re-sorting. An empty result is a valid, displayable
/// state, not a failure.
pub fn apply<'a>(catalog: &'a Catalog, criteria: &FilterCriteria) -> Vec<&'a Record> {
    catalog
        .records()
        .iter()
        .filter(|r| criteria.matches(r))
        .collect()
}
