use serde::{Deserialize, Serialize};

/// A single movie row as shown in the results table.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Movie {
    pub title: String,
    /// Release year as reported by the search endpoint.
    pub year: String,
}

/// Columns the results table can be sorted by.
///
/// The set is closed: a `sort` parameter naming anything else is ignored and
/// the page keeps its server order.
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
pub enum SortColumn {
    #[serde(rename = "Title")]
    Title,
    #[serde(rename = "Year")]
    Year,
}

impl SortColumn {
    /// Table columns in display order.
    pub const ALL: [SortColumn; 2] = [SortColumn::Title, SortColumn::Year];

    /// Parses the `sort` query parameter. Unknown column names yield `None`.
    pub fn from_param(param: &str) -> Option<Self> {
        match param {
            "Title" => Some(Self::Title),
            "Year" => Some(Self::Year),
            _ => None,
        }
    }

    /// Spelling used in query strings, matching the movie field names.
    pub fn as_param(self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::Year => "Year",
        }
    }

    /// Column label shown in the table header.
    pub fn label(self) -> &'static str {
        match self {
            Self::Title => "Movie name",
            Self::Year => "Year",
        }
    }

    fn key(self, movie: &Movie) -> &str {
        match self {
            Self::Title => &movie.title,
            Self::Year => &movie.year,
        }
    }
}

/// Sort direction for a column.
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
pub enum SortOrder {
    #[serde(rename = "asc")]
    Asc,
    #[serde(rename = "desc")]
    Desc,
}

impl SortOrder {
    /// Parses the `order` query parameter. Only the exact literal `desc`
    /// means descending; any other present value normalizes to ascending.
    pub fn from_param(param: &str) -> Self {
        match param {
            "desc" => Self::Desc,
            _ => Self::Asc,
        }
    }

    pub fn as_param(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// Stable-sorts a page of movies by the given column and direction.
///
/// Operates on the provided page only; rows on other pages are unaffected.
pub fn sort_movies(movies: &mut [Movie], column: SortColumn, order: SortOrder) {
    movies.sort_by(|a, b| {
        let ordering = column.key(a).cmp(column.key(b));
        match order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });
}
