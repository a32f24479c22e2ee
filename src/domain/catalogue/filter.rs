// SPDX-License-Identifier: MPL-2.0
//! Catalogue filter types for the domain layer.
//!
//! [`FilterState`] is what the user has selected; [`CatalogueQuery`] is the
//! normalized constraint set sent to the catalogue service. The two axes are
//! independent and combine with AND logic.

// =============================================================================
// Genre Selection
// =============================================================================

/// Genre axis of the filter.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum GenreSelection {
    /// No genre constraint.
    #[default]
    All,
    /// Only movies of the named genre.
    Genre(String),
}

impl GenreSelection {
    /// Parses a selector value: an empty string or `"all"` (any case) means
    /// [`GenreSelection::All`].
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        let trimmed = label.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
            Self::All
        } else {
            Self::Genre(trimmed.to_string())
        }
    }

    /// Returns the genre name, or `None` for [`GenreSelection::All`].
    #[must_use]
    pub fn as_genre(&self) -> Option<&str> {
        match self {
            Self::All => None,
            Self::Genre(name) => Some(name),
        }
    }

    /// Returns `true` if this selection constrains the query.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !matches!(self, Self::All)
    }
}

// =============================================================================
// Filter State
// =============================================================================

/// The user's current genre/search constraints.
///
/// The search text is kept verbatim (it mirrors the search box); it is only
/// normalized when a [`CatalogueQuery`] is built from it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    pub genre: GenreSelection,
    pub search: String,
}

impl FilterState {
    /// Builds the query for the current state.
    #[must_use]
    pub fn to_query(&self) -> CatalogueQuery {
        CatalogueQuery::new(self.genre.as_genre(), Some(self.search.as_str()))
    }

    /// Returns `true` if either axis constrains the query.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.to_query().is_constrained()
    }
}

// =============================================================================
// Catalogue Query
// =============================================================================

/// Normalized catalogue request constraints.
///
/// A `None` field means "unconstrained on this axis". Empty and
/// whitespace-only values are never stored.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CatalogueQuery {
    genre: Option<String>,
    search: Option<String>,
}

impl CatalogueQuery {
    /// Creates a query, dropping blank constraints.
    #[must_use]
    pub fn new(genre: Option<&str>, search: Option<&str>) -> Self {
        Self {
            genre: non_blank(genre),
            search: non_blank(search),
        }
    }

    /// The query used by bootstrap: no constraint on either axis.
    #[must_use]
    pub fn unconstrained() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn genre(&self) -> Option<&str> {
        self.genre.as_deref()
    }

    #[must_use]
    pub fn search(&self) -> Option<&str> {
        self.search.as_deref()
    }

    /// Returns `true` if at least one axis is constrained.
    #[must_use]
    pub fn is_constrained(&self) -> bool {
        self.genre.is_some() || self.search.is_some()
    }

    /// Query-string pairs in a stable order (`genre` before `search`).
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(&'static str, &str)> {
        let mut pairs = Vec::with_capacity(2);
        if let Some(genre) = self.genre() {
            pairs.push(("genre", genre));
        }
        if let Some(search) = self.search() {
            pairs.push(("search", search));
        }
        pairs
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn genre_selection_parses_all_variants() {
        assert_eq!(GenreSelection::from_label(""), GenreSelection::All);
        assert_eq!(GenreSelection::from_label("  "), GenreSelection::All);
        assert_eq!(GenreSelection::from_label("All"), GenreSelection::All);
        assert_eq!(
            GenreSelection::from_label("Sci-Fi"),
            GenreSelection::Genre("Sci-Fi".to_string())
        );
    }

    #[test]
    fn default_filter_is_unconstrained() {
        let filter = FilterState::default();
        assert!(!filter.is_active());
        assert_eq!(filter.to_query(), CatalogueQuery::unconstrained());
    }

    #[test]
    fn whitespace_search_is_not_a_constraint() {
        let filter = FilterState {
            genre: GenreSelection::All,
            search: "   \t".to_string(),
        };
        assert_eq!(filter.to_query().search(), None);
        assert!(!filter.is_active());
    }

    #[test]
    fn search_is_trimmed_in_query() {
        let filter = FilterState {
            genre: GenreSelection::All,
            search: "  batman ".to_string(),
        };
        assert_eq!(filter.to_query().search(), Some("batman"));
    }

    #[test]
    fn both_axes_combine() {
        let filter = FilterState {
            genre: GenreSelection::Genre("Action".to_string()),
            search: "knight".to_string(),
        };
        let query = filter.to_query();
        assert_eq!(query.genre(), Some("Action"));
        assert_eq!(query.search(), Some("knight"));
        assert_eq!(query.to_pairs(), vec![("genre", "Action"), ("search", "knight")]);
    }

    #[test]
    fn unconstrained_query_has_no_pairs() {
        assert!(CatalogueQuery::unconstrained().to_pairs().is_empty());
        assert!(!CatalogueQuery::unconstrained().is_constrained());
    }
}
