use async_trait::async_trait;

use crate::domain::movie::Movie;
use crate::repository::errors::RepositoryResult;

pub mod errors;
pub mod http;

/// Upstream query for one page of movies.
///
/// Carries the title filter and the verbatim page parameter only. The remote
/// endpoint has no sorting capability, so no sort fields exist here and none
/// can ever be forwarded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MovieListQuery {
    pub title: Option<String>,
    pub page: Option<String>,
}

impl MovieListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn page(mut self, page: impl Into<String>) -> Self {
        self.page = Some(page.into());
        self
    }
}

#[async_trait]
pub trait MovieReader {
    /// Fetches one page of movies, returning the reported total page count
    /// and the rows in server order.
    async fn list(&self, query: MovieListQuery) -> RepositoryResult<(usize, Vec<Movie>)>;
}
