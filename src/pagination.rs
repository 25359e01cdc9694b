use serde::Serialize;

/// One entry in the pagination row.
#[derive(Debug, Serialize)]
pub struct PageLink {
    pub number: usize,
    pub query: String,
    pub current: bool,
}

/// A page of items together with its pagination links.
///
/// Links are sequential from 1 through `total_pages`, one per page, with no
/// windowing for large counts. The template suppresses the whole row when
/// `total_pages` does not exceed 1.
#[derive(Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub pages: Vec<PageLink>,
    pub total_pages: usize,
}

impl<T> Paginated<T> {
    /// `current_page` of `None` highlights no link; `to_query` supplies the
    /// query string for each page number.
    pub fn new<F>(
        items: Vec<T>,
        total_pages: usize,
        current_page: Option<usize>,
        to_query: F,
    ) -> Self
    where
        F: Fn(usize) -> String,
    {
        let pages = (1..=total_pages)
            .map(|number| PageLink {
                number,
                query: to_query(number),
                current: current_page == Some(number),
            })
            .collect();

        Self {
            items,
            pages,
            total_pages,
        }
    }
}
