use serde::{Deserialize, Serialize};

/// Fallback MIME type for files that report none.
pub const DEFAULT_FILE_TYPE: &str = "application/octet-stream";

/// Request body for `POST /api/jobs`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobCreationPayload {
    pub title: String,
    pub description: String,
    pub location: String,
    pub employer_id: Option<i64>,
}

impl JobCreationPayload {
    /// Build from form field values. A missing binding degrades to an empty
    /// string; `employer_id` is never sourced from the form.
    pub fn from_fields(
        title: Option<String>,
        description: Option<String>,
        location: Option<String>,
    ) -> Self {
        Self {
            title: title.unwrap_or_default(),
            description: description.unwrap_or_default(),
            location: location.unwrap_or_default(),
            employer_id: None,
        }
    }
}

/// A file chosen in the upload widget: name plus the MIME type it reports.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedFile {
    pub name: String,
    pub mime: String,
}

/// Request body for `POST /api/resumes`. Metadata only; the file content
/// never leaves the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeMetadataPayload {
    pub candidate_id: Option<i64>,
    pub file_name: String,
    pub file_type: String,
}

impl ResumeMetadataPayload {
    pub fn from_file(file: &SelectedFile) -> Self {
        let file_type = if file.mime.is_empty() {
            DEFAULT_FILE_TYPE.to_string()
        } else {
            file.mime.clone()
        };

        Self {
            candidate_id: None,
            file_name: file.name.clone(),
            file_type,
        }
    }
}
