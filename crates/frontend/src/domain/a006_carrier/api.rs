use crate::shared::api_utils::{fetch_list, search_query, ApiError};
use crate::shared::lookup::{LookupSource, SearchFuture};
use contracts::domain::a006_carrier::aggregate::{Airline, ShippingLine};

pub async fn search_airlines(api_base: &str, search: &str) -> Result<Vec<Airline>, ApiError> {
    fetch_list(&format!("{}/airlines?{}", api_base, search_query(search))).await
}

pub async fn search_shipping_lines(api_base: &str, search: &str) -> Result<Vec<ShippingLine>, ApiError> {
    fetch_list(&format!("{}/shippingLines?{}", api_base, search_query(search))).await
}

#[derive(Debug, Clone, Copy)]
pub struct AirlineSource;

impl LookupSource for AirlineSource {
    type Item = Airline;

    fn name(&self) -> &'static str {
        "airlines"
    }

    fn search(&self, api_base: &str, query: String) -> SearchFuture<Airline> {
        let api_base = api_base.to_string();
        Box::pin(async move { search_airlines(&api_base, &query).await })
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ShippingLineSource;

impl LookupSource for ShippingLineSource {
    type Item = ShippingLine;

    fn name(&self) -> &'static str {
        "shippingLines"
    }

    fn search(&self, api_base: &str, query: String) -> SearchFuture<ShippingLine> {
        let api_base = api_base.to_string();
        Box::pin(async move { search_shipping_lines(&api_base, &query).await })
    }
}
