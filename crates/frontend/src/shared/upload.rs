//! Multipart upload to the file storage proxy (`POST /upload`).

use crate::shared::api_utils::ApiError;
use contracts::domain::a008_directory::aggregate::UploadedFile;
use contracts::shared::upload::{file_name_from_url, UploadResponse};
use gloo_net::http::Request;
use web_sys::{File, FormData, HtmlInputElement};

fn js_error(e: wasm_bindgen::JsValue) -> ApiError {
    ApiError::Request(format!("{e:?}"))
}

/// Upload one file into `folder`; returns the stored URLs.
pub async fn upload_file(api_base: &str, folder: &str, file: &File) -> Result<Vec<String>, ApiError> {
    let form = FormData::new().map_err(js_error)?;
    form.append_with_str("folderName", folder).map_err(js_error)?;
    form.append_with_blob_and_filename("files", file, &file.name())
        .map_err(js_error)?;

    let response = Request::post(&format!("{}/upload", api_base))
        .body(form)?
        .send()
        .await?;
    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }
    let body: UploadResponse = response
        .json()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))?;
    Ok(body.locations)
}

/// Upload files one by one. A failing file is logged and the rest continue.
pub async fn upload_each(api_base: &str, folder: &str, files: Vec<File>) -> Vec<UploadedFile> {
    let mut uploaded = Vec::new();
    for file in files {
        match upload_file(api_base, folder, &file).await {
            Ok(locations) => {
                for url in locations {
                    let name = match file.name() {
                        name if name.is_empty() => file_name_from_url(&url),
                        name => name,
                    };
                    uploaded.push(UploadedFile { url, name });
                }
            }
            Err(e) => log::error!("upload of {} to {} failed: {}", file.name(), folder, e),
        }
    }
    uploaded
}

/// Files currently selected in a file input.
pub fn selected_files(input: &HtmlInputElement) -> Vec<File> {
    let Some(list) = input.files() else {
        return Vec::new();
    };
    (0..list.length()).filter_map(|i| list.get(i)).collect()
}
