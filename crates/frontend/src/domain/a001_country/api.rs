use crate::shared::api_utils::{fetch_list, search_query, ApiError};
use crate::shared::lookup::{LookupSource, SearchFuture};
use contracts::domain::a001_country::aggregate::Country;

pub async fn search_countries(api_base: &str, search: &str) -> Result<Vec<Country>, ApiError> {
    fetch_list(&format!("{}/countries?{}", api_base, search_query(search))).await
}

/// Country directory; shows the whole list on focus.
#[derive(Debug, Clone, Copy)]
pub struct CountrySource;

impl LookupSource for CountrySource {
    type Item = Country;

    fn name(&self) -> &'static str {
        "countries"
    }

    fn fetch_on_focus(&self) -> bool {
        true
    }

    fn search(&self, api_base: &str, query: String) -> SearchFuture<Country> {
        let api_base = api_base.to_string();
        Box::pin(async move { search_countries(&api_base, &query).await })
    }
}
