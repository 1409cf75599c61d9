use crate::shared::api_utils::{fetch_list, search_query, ApiError};
use crate::shared::lookup::{LookupSource, SearchFuture};
use contracts::domain::a003_district::aggregate::District;

pub async fn search_districts(api_base: &str, search: &str) -> Result<Vec<District>, ApiError> {
    fetch_list(&format!(
        "{}/districts/?status=Active&{}",
        api_base,
        search_query(search)
    ))
    .await
}

#[derive(Debug, Clone, Copy)]
pub struct DistrictSource;

impl LookupSource for DistrictSource {
    type Item = District;

    fn name(&self) -> &'static str {
        "districts"
    }

    fn search(&self, api_base: &str, query: String) -> SearchFuture<District> {
        let api_base = api_base.to_string();
        Box::pin(async move { search_districts(&api_base, &query).await })
    }
}
