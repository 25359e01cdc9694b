use crate::domain::movie::{SortColumn, sort_movies};
use crate::dto::search::{HeaderLink, SearchPageData, SearchParams, SearchRequest};
use crate::pagination::Paginated;
use crate::repository::{MovieListQuery, MovieReader};
use crate::services::ServiceResult;

/// Loads one page of search results for the index page.
///
/// The upstream query carries the title filter and the verbatim page
/// parameter; sorting happens here, on the fetched page only. Re-sorting
/// after a page change starts over from that page's server order.
pub async fn load_search_page<R>(repo: &R, params: &SearchParams) -> ServiceResult<SearchPageData>
where
    R: MovieReader + ?Sized,
{
    let request = SearchRequest::derive(params);

    let mut query = MovieListQuery::new();
    if !request.title.is_empty() {
        query = query.title(&request.title);
    }
    if let Some(page) = &request.page {
        query = query.page(page);
    }

    let (total_pages, mut movies) = repo.list(query).await.map_err(|err| {
        log::error!("Failed to fetch movies: {err}");
        err
    })?;

    if let (Some(column), Some(order)) = (request.sort, request.order) {
        sort_movies(&mut movies, column, order);
    }

    let headers = SortColumn::ALL
        .iter()
        .map(|&column| HeaderLink::new(&request, column))
        .collect();

    let movies = Paginated::new(movies, total_pages, request.current_page(), |page| {
        request.page_query(page)
    });

    Ok(SearchPageData {
        movies,
        headers,
        request,
    })
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::domain::movie::Movie;
    use crate::repository::errors::{RepositoryError, RepositoryResult};
    use crate::services::ServiceError;

    struct MockRepo {
        total_pages: usize,
        movies: Vec<Movie>,
        queries: Mutex<Vec<MovieListQuery>>,
    }

    impl MockRepo {
        fn new(total_pages: usize, movies: Vec<Movie>) -> Self {
            Self {
                total_pages,
                movies,
                queries: Mutex::new(Vec::new()),
            }
        }

        fn recorded_query(&self) -> MovieListQuery {
            self.queries
                .lock()
                .expect("lock poisoned")
                .first()
                .expect("no query recorded")
                .clone()
        }
    }

    #[async_trait]
    impl MovieReader for MockRepo {
        async fn list(&self, query: MovieListQuery) -> RepositoryResult<(usize, Vec<Movie>)> {
            self.queries.lock().expect("lock poisoned").push(query);
            Ok((self.total_pages, self.movies.clone()))
        }
    }

    struct FailingRepo;

    #[async_trait]
    impl MovieReader for FailingRepo {
        async fn list(&self, _query: MovieListQuery) -> RepositoryResult<(usize, Vec<Movie>)> {
            Err(RepositoryError::Network("connection refused".to_string()))
        }
    }

    fn movie(title: &str, year: &str) -> Movie {
        Movie {
            title: title.to_string(),
            year: year.to_string(),
        }
    }

    fn params(query: &str) -> SearchParams {
        serde_html_form::from_str(query).expect("params deserialize")
    }

    #[actix_web::test]
    async fn upstream_query_carries_title_and_page_only() {
        let repo = MockRepo::new(1, vec![]);

        load_search_page(&repo, &params("title=Matrix&page=2&sort=Year&order=desc"))
            .await
            .expect("should load page");

        let expected = MovieListQuery::new().title("Matrix").page("2");
        assert_eq!(repo.recorded_query(), expected);
    }

    #[actix_web::test]
    async fn empty_title_and_absent_page_are_not_forwarded() {
        let repo = MockRepo::new(1, vec![]);

        load_search_page(&repo, &params("title="))
            .await
            .expect("should load page");

        assert_eq!(repo.recorded_query(), MovieListQuery::new());
    }

    #[actix_web::test]
    async fn sorts_the_fetched_page_when_both_axes_are_present() {
        let repo = MockRepo::new(1, vec![movie("Waterworld", "1995"), movie("Alien", "1979")]);

        let data = load_search_page(&repo, &params("sort=Title&order=asc"))
            .await
            .expect("should load page");

        let titles: Vec<_> = data.movies.items.iter().map(|m| m.title.as_str()).collect();
        assert_eq!(titles, vec!["Alien", "Waterworld"]);
    }

    #[actix_web::test]
    async fn keeps_server_order_without_a_complete_sort() {
        let movies = vec![movie("Waterworld", "1995"), movie("Alien", "1979")];

        for query in ["", "sort=Title", "order=asc", "sort=Rating&order=asc"] {
            let repo = MockRepo::new(1, movies.clone());
            let data = load_search_page(&repo, &params(query))
                .await
                .expect("should load page");

            let titles: Vec<_> = data.movies.items.iter().map(|m| m.title.as_str()).collect();
            assert_eq!(titles, vec!["Waterworld", "Alien"], "query {query:?}");
        }
    }

    #[actix_web::test]
    async fn descending_reverses_the_page() {
        let repo = MockRepo::new(
            1,
            vec![
                movie("Heat", "1995"),
                movie("Alien", "1979"),
                movie("Waterworld", "1995"),
            ],
        );

        let data = load_search_page(&repo, &params("sort=Title&order=desc"))
            .await
            .expect("should load page");

        let titles: Vec<_> = data.movies.items.iter().map(|m| m.title.as_str()).collect();
        assert_eq!(titles, vec!["Waterworld", "Heat", "Alien"]);
    }

    #[actix_web::test]
    async fn repository_failures_propagate() {
        let result = load_search_page(&FailingRepo, &params("title=Matrix")).await;

        assert!(matches!(
            result,
            Err(ServiceError::Repository(RepositoryError::Network(_)))
        ));
    }

    #[actix_web::test]
    async fn pagination_links_cover_every_page() {
        let repo = MockRepo::new(3, vec![movie("Alien", "1979")]);

        let data = load_search_page(&repo, &params("title=Alien&page=2"))
            .await
            .expect("should load page");

        assert_eq!(data.movies.total_pages, 3);
        let numbers: Vec<_> = data.movies.pages.iter().map(|p| p.number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);

        let current: Vec<_> = data.movies.pages.iter().map(|p| p.current).collect();
        assert_eq!(current, vec![false, true, false]);

        // Each link changes the page axis only.
        assert_eq!(data.movies.pages[2].query, "title=Alien&page=3");
    }

    #[actix_web::test]
    async fn headers_flag_the_active_sort_column() {
        let repo = MockRepo::new(1, vec![]);

        let data = load_search_page(&repo, &params("sort=Year&order=asc"))
            .await
            .expect("should load page");

        assert_eq!(data.headers.len(), 2);
        assert!(!data.headers[0].sorted);
        assert!(data.headers[1].sorted);
        // Clicking the ascending column toggles to descending.
        assert_eq!(data.headers[1].query, "sort=Year&order=desc");
        // Clicking the other column lands ascending.
        assert_eq!(data.headers[0].query, "sort=Title&order=asc");
    }
}
