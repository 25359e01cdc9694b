use serde::Deserialize;

use crate::domain::movie::Movie;

/// One page of the remote search endpoint's JSON body.
///
/// The endpoint also reports `page`, `per_page` and `total`; only the fields
/// consumed by the application are decoded.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    pub data: Vec<ApiMovie>,
    pub total_pages: usize,
}

/// Wire format of a single movie record.
#[derive(Debug, Deserialize)]
pub struct ApiMovie {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Year")]
    pub year: String,
}

impl From<ApiMovie> for Movie {
    fn from(movie: ApiMovie) -> Self {
        Self {
            title: movie.title,
            year: movie.year,
        }
    }
}
