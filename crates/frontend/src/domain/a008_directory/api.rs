use crate::shared::api_utils::{fetch_list, get_value, ApiError};
use contracts::domain::a008_directory::aggregate::Directory;
use contracts::shared::api_response::item_from_value;
use gloo_net::http::Request;
use serde_json::Value;

/// All directory entries; the exporter lookup filters them locally.
pub async fn fetch_directories(api_base: &str) -> Result<Vec<Directory>, ApiError> {
    fetch_list(&format!("{}/directory", api_base)).await
}

pub async fn fetch_directory(api_base: &str, id: &str) -> Result<Directory, ApiError> {
    let body = get_value(&format!("{}/directory/{}", api_base, id)).await?;
    item_from_value(body).map_err(ApiError::Decode)
}

/// Create (POST) or update (PUT) depending on whether the entry has an id.
pub async fn save_directory(api_base: &str, directory: &Directory) -> Result<Directory, ApiError> {
    let request = match directory.id.as_deref() {
        Some(id) => Request::put(&format!("{}/directory/{}", api_base, id)),
        None => Request::post(&format!("{}/directory", api_base)),
    };
    let response = request.json(directory)?.send().await?;
    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }
    let body: Value = response.json().await.unwrap_or(Value::Null);
    Ok(item_from_value(body).unwrap_or_else(|_| directory.clone()))
}
