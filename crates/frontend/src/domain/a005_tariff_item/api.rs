use crate::shared::api_utils::{fetch_list, search_query, ApiError};
use crate::shared::lookup::{LookupSource, SearchFuture};
use contracts::domain::a005_tariff_item::aggregate::{exact_code_match, TariffItem, MIN_SEARCH_LEN};

const PAGE_SIZE: usize = 20;

pub async fn search_tariff_items(api_base: &str, search: &str) -> Result<Vec<TariffItem>, ApiError> {
    fetch_list(&format!(
        "{}/getCthsExport?{}&page=1&limit={}",
        api_base,
        search_query(search),
        PAGE_SIZE
    ))
    .await
}

/// RITC search. Needs two characters; a pasted exact code is taken as is.
#[derive(Debug, Clone, Copy)]
pub struct TariffSource;

impl LookupSource for TariffSource {
    type Item = TariffItem;

    fn name(&self) -> &'static str {
        "tariff"
    }

    fn min_query_len(&self) -> usize {
        MIN_SEARCH_LEN
    }

    fn search(&self, api_base: &str, query: String) -> SearchFuture<TariffItem> {
        let api_base = api_base.to_string();
        Box::pin(async move { search_tariff_items(&api_base, &query).await })
    }

    fn exact_match(&self, query: &str, items: &[TariffItem]) -> Option<TariffItem> {
        exact_code_match(items, query)
    }
}
