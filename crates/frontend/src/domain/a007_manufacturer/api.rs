use crate::shared::api_utils::{fetch_list, ApiError};
use contracts::domain::a007_manufacturer::aggregate::Manufacturer;

/// Every known manufacturer; the list is small and filtered locally.
pub async fn fetch_manufacturers(api_base: &str) -> Result<Vec<Manufacturer>, ApiError> {
    fetch_list(&format!("{}/dsr/manufacturers", api_base)).await
}
