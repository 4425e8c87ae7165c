//! Wire format of the artworks listing endpoint.

use serde::Deserialize;

use crate::models::Artwork;

/// `GET /artworks?page=N` response body. Only the fields the table needs are
/// modelled; everything else in the payload is ignored.
#[derive(Debug, Deserialize)]
pub struct ListingResponse {
    pub pagination: Pagination,
    #[serde(default)]
    pub data: Vec<Artwork>,
}

#[derive(Debug, Deserialize)]
pub struct Pagination {
    pub total: u64,
}
