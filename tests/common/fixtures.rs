//! Collection API payloads for HTTP-level tests.

use serde_json::{json, Value};

/// One artwork record as the API returns it.
pub fn artwork_json(id: u64) -> Value {
    json!({
        "id": id,
        "title": format!("Artwork {}", id),
        "place_of_origin": "France",
        "artist_display": "Claude Monet\nFrench, 1840-1926",
        "inscriptions": null,
        "date_start": 1900,
        "date_end": 1906
    })
}

/// A listing page holding `ids`, declaring `total` records overall.
pub fn listing_json(
    page: u32,
    limit: u32,
    ids: impl IntoIterator<Item = u64>,
    total: u64,
) -> Value {
    let data: Vec<Value> = ids.into_iter().map(artwork_json).collect();
    let total_pages = total.div_ceil(u64::from(limit));
    json!({
        "pagination": {
            "total": total,
            "limit": limit,
            "offset": u64::from(page - 1) * u64::from(limit),
            "total_pages": total_pages,
            "current_page": page
        },
        "data": data
    })
}

/// Ids on `page` of a numbered collection of `total` rows.
pub fn page_ids(page: u32, limit: u32, total: u64) -> std::ops::RangeInclusive<u64> {
    let first = u64::from(page - 1) * u64::from(limit) + 1;
    let last = (first + u64::from(limit) - 1).min(total);
    first..=last
}
