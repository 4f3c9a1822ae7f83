//! # Search Entity Module
//!
//! Holds one query and the ordered results the source returned for it.
//! Pagination is a pure derivation: the entity stores no current page, the
//! caller asks for whichever page it wants to show.

use crate::api::{FetchError, RecipeSource, RecipeSummary};

/// Results shown per page unless configured otherwise
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// One search: the query and its results
#[derive(Debug, Clone)]
pub struct Search {
    query: String,
    results: Vec<RecipeSummary>,
}

impl Search {
    /// Create a search for a query, with no results yet
    pub fn new(query: &str) -> Self {
        Self {
            query: query.to_string(),
            results: Vec::new(),
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// All results in service order
    pub fn results(&self) -> &[RecipeSummary] {
        &self.results
    }

    /// Run the query against the source, replacing any previous results
    pub async fn fetch(&mut self, source: &dyn RecipeSource) -> Result<(), FetchError> {
        self.results = source.search(&self.query).await?;
        Ok(())
    }

    /// The slice of results belonging to a 1-based page.
    ///
    /// Out-of-range pages (including page 0) yield an empty slice.
    pub fn page_slice(&self, page: usize, per_page: usize) -> &[RecipeSummary] {
        if page == 0 || per_page == 0 {
            return &[];
        }
        let start = match (page - 1).checked_mul(per_page) {
            Some(start) if start < self.results.len() => start,
            _ => return &[],
        };
        let end = (start + per_page).min(self.results.len());
        &self.results[start..end]
    }

    /// How many pages the results span at the given page size
    pub fn num_pages(&self, per_page: usize) -> usize {
        if per_page == 0 {
            return 0;
        }
        self.results.len().div_ceil(per_page)
    }
}
