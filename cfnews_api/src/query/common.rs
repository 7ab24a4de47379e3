//! Shared filter infrastructure: the [`Filter`] trait and [`SortDirection`].

use super::FilterSpec;

/// Trait implemented by all per-family filter builders.
pub trait Filter {
    /// Produces the normalized filter mapping for this builder.
    ///
    /// Absent inputs emit no key; list inputs are resolved element by element
    /// through the code registry before insertion. Pure: identical inputs
    /// always yield an identical spec.
    fn to_spec(&self) -> FilterSpec;
}

/// Sort order for API results.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortDirection {
    /// Ascending order (oldest/smallest first).
    Ascending,
    /// Descending order (newest/largest first). This is the default.
    #[default]
    Descending,
}

impl SortDirection {
    /// Upstream token for this direction.
    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Ascending => "ascending",
            SortDirection::Descending => "descending",
        }
    }
}

/// Upstream sentinel tokens for tri-state boolean filters.
pub(crate) fn oui_non(value: bool) -> &'static str {
    if value {
        "oui"
    } else {
        "non"
    }
}
