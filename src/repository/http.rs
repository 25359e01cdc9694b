use async_trait::async_trait;
use reqwest::Client;

use crate::domain::movie::Movie;
use crate::models::movie::SearchResponse;
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{MovieListQuery, MovieReader};

/// Movie catalogue backed by the remote search endpoint.
///
/// No timeout is configured; a hung upstream call blocks that one request
/// and surfaces through the transport's own defaults.
#[derive(Clone)]
pub struct HttpMovieRepository {
    client: Client,
    search_url: String,
}

impl HttpMovieRepository {
    pub fn new(search_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            search_url: search_url.into(),
        }
    }
}

#[async_trait]
impl MovieReader for HttpMovieRepository {
    async fn list(&self, query: MovieListQuery) -> RepositoryResult<(usize, Vec<Movie>)> {
        let mut request = self.client.get(&self.search_url);

        if let Some(title) = &query.title {
            request = request.query(&[("Title", title.as_str())]);
        }
        if let Some(page) = &query.page {
            request = request.query(&[("page", page.as_str())]);
        }

        let response = request.send().await?;

        if !response.status().is_success() {
            return Err(RepositoryError::Network(format!(
                "search endpoint returned {}",
                response.status()
            )));
        }

        let body: SearchResponse = response.json().await?;

        let movies = body.data.into_iter().map(Movie::from).collect();

        Ok((body.total_pages, movies))
    }
}
