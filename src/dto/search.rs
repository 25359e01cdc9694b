use serde::{Deserialize, Serialize};

use crate::domain::movie::{Movie, SortColumn, SortOrder};
use crate::pagination::Paginated;

/// Raw query parameters accepted by the index page.
///
/// Every field is an optional string, so deserialization succeeds for any
/// query string the browser can produce.
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub title: Option<String>,
    pub page: Option<String>,
    pub sort: Option<String>,
    pub order: Option<String>,
}

/// The user's current search intent, derived from the URL query string.
///
/// The query string is the single source of truth: the application keeps no
/// other copy of title/page/sort/order. A request is constructed fresh for
/// every navigation and never mutated afterwards; the view's controls each
/// clone it, change one axis and serialize the clone back into a URL.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct SearchRequest {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub title: String,
    /// Page parameter carried verbatim; validation is left to the upstream
    /// endpoint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<SortColumn>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<SortOrder>,
}

impl SearchRequest {
    /// Derives a request from the raw parameters. Absent or malformed input
    /// degrades to defaults; this never fails.
    ///
    /// `sort` and `order` are coupled: both are present only when both
    /// parameters carry a value and the column name is recognized.
    pub fn derive(params: &SearchParams) -> Self {
        let title = params.title.clone().unwrap_or_default();
        let page = params.page.clone().filter(|page| !page.is_empty());

        let (sort, order) = match (params.sort.as_deref(), params.order.as_deref()) {
            (Some(sort), Some(order)) if !sort.is_empty() && !order.is_empty() => {
                match SortColumn::from_param(sort) {
                    Some(column) => (Some(column), Some(SortOrder::from_param(order))),
                    None => (None, None),
                }
            }
            _ => (None, None),
        };

        Self {
            title,
            page,
            sort,
            order,
        }
    }

    /// The page the pagination row should highlight.
    ///
    /// An absent parameter means page 1. A non-numeric parameter yields
    /// `None`, so no link is highlighted.
    pub fn current_page(&self) -> Option<usize> {
        match &self.page {
            None => Some(1),
            Some(raw) => raw.parse().ok(),
        }
    }

    /// Canonical query-string encoding of this request.
    pub fn query_string(&self) -> String {
        serde_html_form::to_string(self).unwrap_or_default()
    }

    /// Query string for the pagination link to `page`; the other axes are
    /// untouched.
    pub fn page_query(&self, page: usize) -> String {
        let mut next = self.clone();
        next.page = Some(page.to_string());
        next.query_string()
    }

    /// Query string for a click on `column`'s header.
    ///
    /// Lands on descending only when that exact column is currently sorted
    /// ascending; any other prior state lands on ascending. Title and page
    /// are untouched.
    pub fn sort_toggle_query(&self, column: SortColumn) -> String {
        let order = if self.sort == Some(column) && self.order == Some(SortOrder::Asc) {
            SortOrder::Desc
        } else {
            SortOrder::Asc
        };

        let mut next = self.clone();
        next.sort = Some(column);
        next.order = Some(order);
        next.query_string()
    }
}

/// One sortable column header, with its precomputed toggle link.
#[derive(Debug, Serialize)]
pub struct HeaderLink {
    pub label: &'static str,
    pub query: String,
    pub sorted: bool,
    /// Direction indicator, present only on the active sort column.
    pub order: Option<SortOrder>,
}

impl HeaderLink {
    pub fn new(request: &SearchRequest, column: SortColumn) -> Self {
        let sorted = request.sort == Some(column);

        Self {
            label: column.label(),
            query: request.sort_toggle_query(column),
            sorted,
            order: if sorted { request.order } else { None },
        }
    }
}

/// Data required to render the search page template.
#[derive(Serialize)]
pub struct SearchPageData {
    pub movies: Paginated<Movie>,
    pub headers: Vec<HeaderLink>,
    /// Echoed back into the search form so a submit carries the other axes
    /// through as hidden fields.
    pub request: SearchRequest,
}
