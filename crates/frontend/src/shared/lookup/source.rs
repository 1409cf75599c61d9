use crate::shared::api_utils::ApiError;
use contracts::shared::lookup::LookupItem;
use std::future::Future;
use std::pin::Pin;

pub type SearchFuture<T> = Pin<Box<dyn Future<Output = Result<Vec<T>, ApiError>>>>;

/// A remote endpoint a lookup field searches as the user types.
pub trait LookupSource: Copy + Send + Sync + 'static {
    type Item: LookupItem + Send + Sync + 'static;

    /// Name used in log lines.
    fn name(&self) -> &'static str;

    /// Below this many trimmed characters no request is sent and the list is
    /// emptied.
    fn min_query_len(&self) -> usize {
        0
    }

    /// Search with an empty query when the field gains focus.
    fn fetch_on_focus(&self) -> bool {
        false
    }

    fn search(&self, api_base: &str, query: String) -> SearchFuture<Self::Item>;

    /// A result that matches the query exactly enough to be taken without a
    /// click.
    fn exact_match(&self, _query: &str, _items: &[Self::Item]) -> Option<Self::Item> {
        None
    }
}
