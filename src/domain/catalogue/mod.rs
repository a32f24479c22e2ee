// SPDX-License-Identifier: MPL-2.0
//! Catalogue domain types: movies, filters, and query results.

pub mod filter;
pub mod movie;
pub mod result;

pub use filter::{CatalogueQuery, FilterState, GenreSelection};
pub use movie::{Movie, MovieId, POSTER_PLACEHOLDER_URL};
pub use result::{CataloguePage, CatalogueResult};
