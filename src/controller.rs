//! Wires the bound forms to the backend: builds payloads from field
//! values, sends them through the api, and routes the outcome to the
//! attached message regions.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::client::JobBoardApi;
use crate::display::{show, MessageRegion};
use crate::types::payloads::{JobCreationPayload, ResumeMetadataPayload, SelectedFile};

/// A bound text input. Clones share the value.
#[derive(Clone, Debug, Default)]
pub struct TextField {
    value: Arc<Mutex<String>>,
}

impl TextField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(value: &str) -> Self {
        let field = Self::new();
        field.set(value);
        field
    }

    pub fn value(&self) -> String {
        self.lock().clone()
    }

    pub fn set(&self, value: &str) {
        *self.lock() = value.to_string();
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> MutexGuard<'_, String> {
        self.value
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// A bound file input: the current selection plus whether the native
/// picker has been opened. Clones share state.
#[derive(Clone, Debug, Default)]
pub struct FileInput {
    state: Arc<Mutex<FileInputState>>,
}

#[derive(Debug, Default)]
struct FileInputState {
    selection: Vec<SelectedFile>,
    picker_open: bool,
}

impl FileInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open_picker(&self) {
        self.lock().picker_open = true;
    }

    pub fn picker_open(&self) -> bool {
        self.lock().picker_open
    }

    /// Replace the selection, closing the picker.
    pub fn select(&self, files: Vec<SelectedFile>) {
        let mut state = self.lock();
        state.selection = files;
        state.picker_open = false;
    }

    pub fn first(&self) -> Option<SelectedFile> {
        self.lock().selection.first().cloned()
    }

    pub fn clear(&self) {
        self.lock().selection.clear();
    }

    fn lock(&self) -> MutexGuard<'_, FileInputState> {
        self.state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// The job posting form. Any field binding may be absent; an absent field
/// reads as empty.
pub struct JobFormView {
    pub title: Option<TextField>,
    pub description: Option<TextField>,
    pub location: Option<TextField>,
}

impl JobFormView {
    fn reset(&self) {
        for field in [&self.title, &self.description, &self.location]
            .into_iter()
            .flatten()
        {
            field.clear();
        }
    }
}

/// The resume upload widget (button plus file input).
pub struct UploadView {
    pub input: FileInput,
}

/// Everything the controller may be wired to. Every binding is optional;
/// an absent binding turns the matching operations into no-ops.
#[derive(Default)]
pub struct PageBindings {
    pub job_form: Option<JobFormView>,
    pub upload: Option<UploadView>,
}

struct JobFormBinding {
    view: JobFormView,
    message: MessageRegion,
}

struct UploadBinding {
    view: UploadView,
    message: MessageRegion,
}

pub struct FormController<A> {
    api: A,
    job: Option<JobFormBinding>,
    upload: Option<UploadBinding>,
}

impl<A: JobBoardApi> FormController<A> {
    /// Wire up the bound forms. Runs once at startup; a message region is
    /// attached to each form that exists.
    pub fn initialize(bindings: PageBindings, api: A) -> Self {
        let job = bindings.job_form.map(|view| JobFormBinding {
            view,
            message: MessageRegion::new(),
        });
        let upload = bindings.upload.map(|view| UploadBinding {
            view,
            message: MessageRegion::new(),
        });

        Self { api, job, upload }
    }

    /// Message region attached to the job form, if one is bound.
    pub fn job_message(&self) -> Option<&MessageRegion> {
        self.job.as_ref().map(|binding| &binding.message)
    }

    /// Message region attached to the upload widget, if one is bound.
    pub fn upload_message(&self) -> Option<&MessageRegion> {
        self.upload.as_ref().map(|binding| &binding.message)
    }

    /// Submit handler for the job form. Reads the three field values,
    /// posts them, and reports through the form's message region. The
    /// fields are reset only on success.
    pub async fn submit_job(&self) {
        let Some(binding) = &self.job else { return };

        let payload = JobCreationPayload::from_fields(
            binding.view.title.as_ref().map(TextField::value),
            binding.view.description.as_ref().map(TextField::value),
            binding.view.location.as_ref().map(TextField::value),
        );

        match self.api.post_job(&payload).await {
            Ok(response) => {
                show(
                    Some(&binding.message),
                    &format!("Job created (ID: {})", response.job_ref()),
                    false,
                );
                binding.view.reset();
            }
            Err(_) => show(Some(&binding.message), "Failed to create job", true),
        }
    }

    /// Click handler for the upload button: opens the file picker.
    pub fn open_file_picker(&self) {
        if let Some(binding) = &self.upload {
            binding.view.input.open_picker();
        }
    }

    /// Change handler for the file input. With no selection this does
    /// nothing: no request, no message. The selection is cleared only on
    /// success.
    pub async fn resume_selected(&self) {
        let Some(binding) = &self.upload else { return };
        let Some(file) = binding.view.input.first() else {
            return;
        };

        let payload = ResumeMetadataPayload::from_file(&file);

        match self.api.post_resume(&payload).await {
            Ok(response) => {
                show(
                    Some(&binding.message),
                    &format!("Resume metadata saved (id: {})", response.resume_ref()),
                    false,
                );
                binding.view.input.clear();
            }
            Err(_) => show(Some(&binding.message), "Upload failed", true),
        }
    }
}
