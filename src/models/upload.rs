use serde::{Deserialize, Serialize};

pub const STUB_PARSE_JOB_ID: &str = "job_abc123";
pub const STATUS_QUEUED: &str = "queued";

#[derive(Debug, Deserialize)]
pub struct UploadIn {
    pub blob_url: String,
    #[serde(default)]
    pub client_local_date_hint: Option<String>,
}

#[derive(Debug, Serialize, Clone)]
pub struct UploadOut {
    pub parse_job_id: String,
    pub status: String,
}

impl UploadOut {
    // No job is scheduled; the id is a placeholder.
    pub fn queued() -> Self {
        Self {
            parse_job_id: STUB_PARSE_JOB_ID.to_string(),
            status: STATUS_QUEUED.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn date_hint_is_optional() {
        let up: UploadIn =
            serde_json::from_value(json!({ "blob_url": "https://blob/x.csv" })).unwrap();
        assert_eq!(up.blob_url, "https://blob/x.csv");
        assert!(up.client_local_date_hint.is_none());

        let up: UploadIn = serde_json::from_value(json!({
            "blob_url": "https://blob/x.csv",
            "client_local_date_hint": null
        }))
        .unwrap();
        assert!(up.client_local_date_hint.is_none());
    }

    #[test]
    fn blob_url_must_be_a_string() {
        assert!(serde_json::from_value::<UploadIn>(json!({ "blob_url": 42 })).is_err());
        assert!(serde_json::from_value::<UploadIn>(json!({})).is_err());
    }
}
