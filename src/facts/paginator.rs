use super::FetchResult;

const LOG_TARGET: &str = " paginator";

/// Number of items requested per page; GitHub's maximum.
pub const PAGE_SIZE: u32 = 100;

/// Default upper bound on the number of pages walked for one resource.
pub const DEFAULT_MAX_PAGES: u32 = 100;

/// Walks a paginated resource until a short page signals the end.
///
/// Pages are requested strictly one after another, starting at page 1, since the decision to
/// continue depends on the size of the previous page. Any failed page aborts the walk.
#[derive(Debug, Clone, Copy)]
pub struct Paginator {
    page_size: u32,
    max_pages: u32,
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new(PAGE_SIZE, DEFAULT_MAX_PAGES)
    }
}

impl Paginator {
    #[must_use]
    pub const fn new(page_size: u32, max_pages: u32) -> Self {
        Self { page_size, max_pages }
    }

    /// Collect every item of a resource.
    ///
    /// `fetch_page` receives the 1-based page number and the page size. A page holding fewer than
    /// `page_size` items is the last one; an empty first page yields an empty result. If the page
    /// cap is reached the walk stops with whatever was accumulated so far.
    pub async fn collect<T, F, Fut>(&self, resource: &str, mut fetch_page: F) -> FetchResult<Vec<T>>
    where
        F: FnMut(u32, u32) -> Fut,
        Fut: Future<Output = FetchResult<Vec<T>>>,
    {
        let mut items = Vec::new();
        let mut page = 1;

        loop {
            let batch = fetch_page(page, self.page_size).await?;
            let batch_len = batch.len();
            items.extend(batch);

            log::debug!(target: LOG_TARGET, "Page {page} of {resource} returned {batch_len} item(s)");

            let is_last_page = batch_len < self.page_size as usize;
            if is_last_page {
                break;
            }

            if page >= self.max_pages {
                log::warn!(
                    target: LOG_TARGET,
                    "Stopped reading {resource} after {page} page(s); there may be more than {} item(s)",
                    items.len()
                );
                break;
            }

            page += 1;
        }

        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facts::FetchError;
    use ohno::app_err;
    use std::sync::atomic::{AtomicU32, Ordering};

    fn pages(sizes: &[usize]) -> impl Fn(u32) -> Vec<u32> + '_ {
        move |page| {
            let size = sizes.get(page as usize - 1).copied().unwrap_or(0);
            vec![page; size]
        }
    }

    #[tokio::test]
    async fn test_full_page_then_empty_page() {
        let requests = AtomicU32::new(0);
        let source = pages(&[100, 0]);

        let items = Paginator::default()
            .collect("items", |page, per_page| {
                assert_eq!(per_page, PAGE_SIZE);
                let _ = requests.fetch_add(1, Ordering::SeqCst);
                let batch = source(page);
                async move { Ok(batch) }
            })
            .await
            .unwrap();

        assert_eq!(items.len(), 100);
        assert_eq!(requests.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_empty_first_page() {
        let requests = AtomicU32::new(0);

        let items: Vec<u32> = Paginator::default()
            .collect("items", |_, _| {
                let _ = requests.fetch_add(1, Ordering::SeqCst);
                async { Ok(Vec::new()) }
            })
            .await
            .unwrap();

        assert!(items.is_empty());
        assert_eq!(requests.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_short_page_ends_walk_and_keeps_order() {
        let requests = AtomicU32::new(0);
        let source = pages(&[100, 100, 7, 100]);

        let items = Paginator::default()
            .collect("items", |page, _| {
                let _ = requests.fetch_add(1, Ordering::SeqCst);
                let batch = source(page);
                async move { Ok(batch) }
            })
            .await
            .unwrap();

        assert_eq!(items.len(), 207);
        assert_eq!(requests.load(Ordering::SeqCst), 3);
        assert_eq!(items.first(), Some(&1));
        assert_eq!(items.last(), Some(&3));
    }

    #[tokio::test]
    async fn test_page_cap_stops_walk() {
        let requests = AtomicU32::new(0);

        let items = Paginator::new(2, 3)
            .collect("items", |page, per_page| {
                let _ = requests.fetch_add(1, Ordering::SeqCst);
                async move { Ok(vec![page; per_page as usize]) }
            })
            .await
            .unwrap();

        assert_eq!(items, vec![1, 1, 2, 2, 3, 3]);
        assert_eq!(requests.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_failed_page_aborts() {
        let requests = AtomicU32::new(0);

        let result: FetchResult<Vec<u32>> = Paginator::new(1, 10)
            .collect("items", |page, _| {
                let _ = requests.fetch_add(1, Ordering::SeqCst);
                async move {
                    if page == 2 {
                        Err(FetchError::Failed(app_err!("page {page} failed")))
                    } else {
                        Ok(vec![page])
                    }
                }
            })
            .await;

        assert!(matches!(result, Err(FetchError::Failed(_))));
        assert_eq!(requests.load(Ordering::SeqCst), 2);
    }
}
