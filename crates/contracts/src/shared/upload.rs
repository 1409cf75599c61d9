use serde::{Deserialize, Serialize};

/// Response of `POST /upload`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UploadResponse {
    #[serde(default)]
    pub locations: Vec<String>,
}

/// Last path segment of a stored file URL, without the query string.
pub fn file_name_from_url(url: &str) -> String {
    let path = url.split(['?', '#']).next().unwrap_or_default();
    path.rsplit('/')
        .find(|segment| !segment.is_empty())
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_name_from_url() {
        assert_eq!(
            file_name_from_url("https://bucket.s3.amazonaws.com/kyc/pan-card.pdf?X-Amz=1"),
            "pan-card.pdf"
        );
        assert_eq!(file_name_from_url("plain.png"), "plain.png");
        assert_eq!(file_name_from_url(""), "");
    }

    #[test]
    fn test_missing_locations() {
        let resp: UploadResponse = serde_json::from_str("{}").unwrap();
        assert!(resp.locations.is_empty());
    }
}
