use forge_core::{ProviderError, Result};
use tracing::debug;

use crate::api::{ApiError, ApiResult, ListOptions, Response};

/// Optional ceiling on the number of pages one list call may fetch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PageLimit {
    #[default]
    Unbounded,
    AtMost(u32),
}

impl From<Option<u32>> for PageLimit {
    fn from(value: Option<u32>) -> Self {
        value.map_or(PageLimit::Unbounded, PageLimit::AtMost)
    }
}

/// Drives `fetch` over pages 1, 2, ... until it reports an empty page.
///
/// `fetch` appends its own results and returns `Ok(Some(response))` for a
/// page with items or `Ok(None)` for an empty one. The first error stops the
/// loop and is returned translated. There is no page cap; a server that never
/// returns an empty page keeps the loop going.
pub fn all_pages<F>(cursor: &mut ListOptions, fetch: F) -> Result<()>
where
    F: FnMut(&ListOptions) -> std::result::Result<Option<Response>, ApiError>,
{
    all_pages_with_limit(cursor, PageLimit::Unbounded, fetch)
}

/// [`all_pages`] with an optional ceiling. Needing page `max + 1` fails with
/// [`ProviderError::PageLimitExceeded`].
pub fn all_pages_with_limit<F>(
    cursor: &mut ListOptions,
    limit: PageLimit,
    mut fetch: F,
) -> Result<()>
where
    F: FnMut(&ListOptions) -> std::result::Result<Option<Response>, ApiError>,
{
    cursor.page = 1;
    loop {
        if let PageLimit::AtMost(max) = limit
            && cursor.page > max
        {
            return Err(ProviderError::PageLimitExceeded { limit: max });
        }
        debug!(page = cursor.page, page_size = cursor.page_size, "fetching page");
        match fetch(&*cursor) {
            Err(err) => return Err(err.into()),
            Ok(None) => return Ok(()),
            Ok(Some(_)) => cursor.page += 1,
        }
    }
}

/// Collects every item of a paged endpoint into one vector.
pub(crate) fn collect_pages<T, F>(
    cursor: &mut ListOptions,
    limit: PageLimit,
    mut fetch_page: F,
) -> Result<Vec<T>>
where
    F: FnMut(&ListOptions) -> ApiResult<Vec<T>>,
{
    let mut items = Vec::new();
    all_pages_with_limit(cursor, limit, |opts| {
        let (page, response) = fetch_page(opts)?;
        if page.is_empty() {
            return Ok(None);
        }
        debug!(
            page = opts.page,
            count = page.len(),
            total = ?response.total_count(),
            "collected page",
        );
        items.extend(page);
        Ok(Some(response))
    })?;
    Ok(items)
}
