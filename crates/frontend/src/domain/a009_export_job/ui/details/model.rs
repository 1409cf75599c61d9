use crate::shared::api_utils::{get_value, ApiError};
use contracts::domain::a009_export_job::aggregate::ExportJob;
use contracts::shared::api_response::item_from_value;
use gloo_net::http::Request;
use serde_json::Value;

fn job_url(api_base: &str, job_no: &str) -> String {
    format!("{}/export-jobs/{}", api_base, urlencoding::encode(job_no.trim()))
}

pub async fn fetch_job(api_base: &str, job_no: &str) -> Result<ExportJob, ApiError> {
    let body = get_value(&job_url(api_base, job_no)).await?;
    item_from_value(body).map_err(ApiError::Decode)
}

/// PUT the whole job. The saved record is returned when the backend echoes
/// it, otherwise the job as sent.
pub async fn save_job(api_base: &str, job: &ExportJob) -> Result<ExportJob, ApiError> {
    let response = Request::put(&job_url(api_base, &job.job_no))
        .json(job)?
        .send()
        .await?;
    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }
    let body: Value = response.json().await.unwrap_or(Value::Null);
    Ok(item_from_value(body).unwrap_or_else(|_| job.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_url_encodes_number() {
        assert_eq!(
            job_url("http://host:3000/api", " AMD/EXP/SEA/00123/25-26 "),
            "http://host:3000/api/export-jobs/AMD%2FEXP%2FSEA%2F00123%2F25-26"
        );
    }
}
