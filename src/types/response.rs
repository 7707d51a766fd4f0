use serde::{Deserialize, Serialize};
use serde_json::Value;

const JOB_ID_KEYS: [&str; 3] = ["job_id", "jobId", "id"];
const RESUME_ID_KEYS: [&str; 2] = ["resume_id", "id"];
const MISSING_ID: &str = "?";

/// JSON response body from the backend. The shape is not pinned down;
/// only specific id keys are ever read from it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServerResponse(pub Value);

impl ServerResponse {
    /// Id of a created job: first non-null of `job_id`, `jobId`, `id`.
    pub fn job_ref(&self) -> String {
        self.first_present(&JOB_ID_KEYS)
    }

    /// Id of a stored resume: first non-null of `resume_id`, `id`.
    pub fn resume_ref(&self) -> String {
        self.first_present(&RESUME_ID_KEYS)
    }

    fn first_present(&self, keys: &[&str]) -> String {
        keys.iter()
            .find_map(|key| self.0.get(key).filter(|value| !value.is_null()))
            .map(render_id)
            .unwrap_or_else(|| MISSING_ID.to_string())
    }
}

/// Numeric ids render without quotes, string ids verbatim.
fn render_id(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn job_ref_prefers_job_id() {
        let response = ServerResponse(json!({"job_id": 42, "jobId": 1, "id": 2}));
        assert_eq!(response.job_ref(), "42");
    }

    #[test]
    fn job_ref_falls_through_key_priority() {
        let response = ServerResponse(json!({"jobId": "j-7", "id": 2}));
        assert_eq!(response.job_ref(), "j-7");

        let response = ServerResponse(json!({"id": 2}));
        assert_eq!(response.job_ref(), "2");
    }

    #[test]
    fn job_ref_skips_null_values() {
        let response = ServerResponse(json!({"job_id": null, "id": "abc"}));
        assert_eq!(response.job_ref(), "abc");
    }

    #[test]
    fn missing_ids_render_placeholder() {
        assert_eq!(ServerResponse(json!({})).job_ref(), "?");
        assert_eq!(ServerResponse(json!([1, 2])).job_ref(), "?");
        assert_eq!(ServerResponse(json!({"status": "ok"})).resume_ref(), "?");
    }

    #[test]
    fn resume_ref_prefers_resume_id() {
        let response = ServerResponse(json!({"resume_id": 9, "id": "abc"}));
        assert_eq!(response.resume_ref(), "9");

        let response = ServerResponse(json!({"id": "abc"}));
        assert_eq!(response.resume_ref(), "abc");
    }
}
