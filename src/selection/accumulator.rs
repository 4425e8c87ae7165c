//! Cross-page bulk selection.
//!
//! Walks forward from a start page, one awaited fetch at a time, collecting
//! rows until the requested count is reached or the source runs out. The
//! number of rows still needed depends on what the previous page actually
//! returned, so pages are never requested speculatively or in parallel.

use std::collections::HashSet;

use crate::error::AccumulateError;
use crate::models::{Artwork, Page};
use crate::traits::PageSource;

/// Collect up to `target` rows starting at the first row of `start_page`.
///
/// Returns `min(target, rows available from start_page onward)` rows in
/// source order. `target <= 0` returns an empty list without fetching.
///
/// # Errors
///
/// A failed page fetch stops the walk; the rows gathered so far travel in the
/// returned [`AccumulateError`].
pub async fn accumulate<S>(
    source: &S,
    start_page: u32,
    target: i64,
) -> Result<Vec<Artwork>, AccumulateError>
where
    S: PageSource + ?Sized,
{
    accumulate_with_progress(source, start_page, target, |_, _| {}).await
}

/// [`accumulate`] with a callback run after every page as
/// `progress(rows_collected, target)`.
pub async fn accumulate_with_progress<S, F>(
    source: &S,
    start_page: u32,
    target: i64,
    mut progress: F,
) -> Result<Vec<Artwork>, AccumulateError>
where
    S: PageSource + ?Sized,
    F: FnMut(usize, usize) + Send,
{
    if target <= 0 {
        return Ok(Vec::new());
    }

    let target = usize::try_from(target).unwrap_or(usize::MAX);
    let page_size = source.page_size().max(1);
    let mut remaining = target;
    let mut cursor = start_page;
    let mut rows: Vec<Artwork> = Vec::with_capacity(target.min(1024));
    let mut seen = HashSet::new();

    loop {
        let page = match source.fetch(cursor).await {
            Ok(page) => page,
            Err(source) => {
                tracing::warn!(
                    page = cursor,
                    collected = rows.len(),
                    error = %source,
                    "bulk selection walk failed"
                );
                return Err(AccumulateError {
                    page: cursor,
                    rows,
                    source,
                });
            }
        };

        if page.is_empty() {
            tracing::debug!(page = cursor, "source exhausted");
            break;
        }

        let is_last = is_last_page(&page, page_size);
        for row in page.rows {
            if remaining == 0 {
                break;
            }
            // A row shifted onto this page by an upstream insert was already
            // taken from the previous one.
            if seen.insert(row.id) {
                rows.push(row);
                remaining -= 1;
            }
        }

        tracing::debug!(
            page = cursor,
            collected = rows.len(),
            requested = target,
            "page accumulated"
        );
        progress(rows.len(), target);

        if remaining == 0 || is_last {
            break;
        }
        match cursor.checked_add(1) {
            Some(next) => cursor = next,
            None => break,
        }
    }

    tracing::info!(
        start_page,
        end_page = cursor,
        collected = rows.len(),
        requested = target,
        "bulk selection accumulated"
    );
    Ok(rows)
}

/// Whether `page` is the final one according to its own length and the
/// declared total. A zero total is treated as unknown.
fn is_last_page(page: &Page, page_size: u32) -> bool {
    if page.len() < page_size as usize {
        return true;
    }
    page.total_count > 0 && u64::from(page.index) * u64::from(page_size) >= page.total_count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::InMemorySource;
    use crate::error::{FetchError, NetworkError};
    use crate::models::RowKey;

    fn ids(rows: &[Artwork]) -> Vec<u64> {
        rows.iter().map(|row| row.id.0).collect()
    }

    #[tokio::test]
    async fn test_non_positive_target_fetches_nothing() {
        let source = InMemorySource::numbered(50, 12);

        for target in [0, -1, -500] {
            let rows = accumulate(&source, 1, target).await.unwrap();
            assert!(rows.is_empty());
        }
        assert_eq!(source.fetch_count(), 0);
    }

    #[tokio::test]
    async fn test_spans_into_second_page() {
        let source = InMemorySource::numbered(50, 12);

        let rows = accumulate(&source, 1, 20).await.unwrap();

        assert_eq!(ids(&rows), (1..=20).collect::<Vec<_>>());
        assert_eq!(source.fetched_pages(), vec![1, 2]);
    }

    #[tokio::test]
    async fn test_target_beyond_total_returns_everything() {
        let source = InMemorySource::numbered(50, 12);

        let rows = accumulate(&source, 1, 100).await.unwrap();

        assert_eq!(rows.len(), 50);
        assert_eq!(rows.last().map(|row| row.id), Some(RowKey(50)));
        assert_eq!(source.fetched_pages(), vec![1, 2, 3, 4, 5]);
    }

    #[tokio::test]
    async fn test_starts_from_given_page() {
        let source = InMemorySource::numbered(50, 12);

        let rows = accumulate(&source, 3, 5).await.unwrap();

        assert_eq!(ids(&rows), vec![25, 26, 27, 28, 29]);
        assert_eq!(source.fetched_pages(), vec![3]);
    }

    #[tokio::test]
    async fn test_stops_at_declared_total_or_empty_page() {
        let source = InMemorySource::numbered(24, 12);
        // Exactly two full pages: the second page is full, so the walk only
        // knows it is done from the declared total.
        let rows = accumulate(&source, 1, 30).await.unwrap();
        assert_eq!(rows.len(), 24);
        assert_eq!(source.fetched_pages(), vec![1, 2]);

        let beyond = InMemorySource::numbered(24, 12);
        let rows = accumulate(&beyond, 3, 5).await.unwrap();
        assert!(rows.is_empty());
        assert_eq!(beyond.fetched_pages(), vec![3]);
    }

    #[tokio::test]
    async fn test_exact_fetch_count_property() {
        for (total, page_size, target) in [
            (50u64, 12u32, 1i64),
            (50, 12, 12),
            (50, 12, 13),
            (7, 3, 7),
            (100, 10, 55),
            (9, 4, 40),
        ] {
            let source = InMemorySource::numbered(total, page_size);
            let rows = accumulate(&source, 1, target).await.unwrap();

            let expected = (target as u64).min(total);
            assert_eq!(rows.len() as u64, expected);
            assert_eq!(
                source.fetch_count() as u64,
                expected.div_ceil(u64::from(page_size)),
                "total={} page_size={} target={}",
                total,
                page_size,
                target
            );
        }
    }

    #[tokio::test]
    async fn test_idempotent_against_unchanged_source() {
        let source = InMemorySource::numbered(40, 12);

        let first = accumulate(&source, 2, 17).await.unwrap();
        let second = accumulate(&source, 2, 17).await.unwrap();

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_fetch_error_carries_partial_rows() {
        let source = InMemorySource::numbered(50, 12);
        source.fail_page(
            3,
            FetchError::Network {
                page: 3,
                source: NetworkError::ConnectionFailed {
                    url: "memory".to_string(),
                    message: "down".to_string(),
                },
            },
        );

        let err = accumulate(&source, 1, 30).await.unwrap_err();

        assert_eq!(err.page, 3);
        assert_eq!(err.collected(), 24);
        assert_eq!(source.fetched_pages(), vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_fetches_are_sequential() {
        let source = InMemorySource::numbered(60, 10);
        for page in 1..=6 {
            source.delay_page(page, std::time::Duration::from_millis(2));
        }

        let rows = accumulate(&source, 1, 60).await.unwrap();

        assert_eq!(rows.len(), 60);
        assert_eq!(source.max_concurrent_fetches(), 1);
    }

    #[tokio::test]
    async fn test_skips_keys_repeated_by_shifted_source() {
        // Page 2 repeats key 4 as if a row was inserted upstream mid-walk.
        let mut rows: Vec<Artwork> = (1..=4).map(|id| Artwork::new(id, "x")).collect();
        rows.extend((4..=8).map(|id| Artwork::new(id, "y")));
        let source = InMemorySource::new(rows, 4);

        let selected = accumulate(&source, 1, 6).await.unwrap();

        assert_eq!(ids(&selected), vec![1, 2, 3, 4, 5, 6]);
    }

    #[tokio::test]
    async fn test_progress_reports_each_page() {
        let source = InMemorySource::numbered(30, 12);
        let mut reports = Vec::new();

        let rows = accumulate_with_progress(&source, 1, 30, |collected, target| {
            reports.push((collected, target));
        })
        .await
        .unwrap();

        assert_eq!(rows.len(), 30);
        assert_eq!(reports, vec![(12, 30), (24, 30), (30, 30)]);
    }
}
