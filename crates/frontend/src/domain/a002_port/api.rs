use crate::shared::api_utils::{fetch_list, search_query, ApiError};
use crate::shared::lookup::{LookupSource, SearchFuture};
use contracts::domain::a002_port::aggregate::{GatewayPort, Port, PortDirectory};

pub async fn search_ports(
    api_base: &str,
    directory: PortDirectory,
    search: &str,
) -> Result<Vec<Port>, ApiError> {
    fetch_list(&format!(
        "{}/{}?{}",
        api_base,
        directory.endpoint(),
        search_query(search)
    ))
    .await
}

pub async fn search_gateway_ports(api_base: &str, search: &str) -> Result<Vec<GatewayPort>, ApiError> {
    fetch_list(&format!("{}/gateway-ports/?{}", api_base, search_query(search))).await
}

#[derive(Debug, Clone, Copy)]
pub struct PortSource {
    pub directory: PortDirectory,
}

impl LookupSource for PortSource {
    type Item = Port;

    fn name(&self) -> &'static str {
        self.directory.endpoint()
    }

    fn fetch_on_focus(&self) -> bool {
        true
    }

    fn search(&self, api_base: &str, query: String) -> SearchFuture<Port> {
        let api_base = api_base.to_string();
        let directory = self.directory;
        Box::pin(async move { search_ports(&api_base, directory, &query).await })
    }
}

#[derive(Debug, Clone, Copy)]
pub struct GatewayPortSource;

impl LookupSource for GatewayPortSource {
    type Item = GatewayPort;

    fn name(&self) -> &'static str {
        "gateway-ports"
    }

    fn search(&self, api_base: &str, query: String) -> SearchFuture<GatewayPort> {
        let api_base = api_base.to_string();
        Box::pin(async move { search_gateway_ports(&api_base, &query).await })
    }
}
