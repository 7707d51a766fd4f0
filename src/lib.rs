use anyhow::Result;

pub mod client;
pub mod config;
pub mod controller;
pub mod display;
pub mod types;

pub use client::{ApiClient, ApiError, JobBoardApi, JobFilter};
pub use config::ClientConfig;
pub use controller::{FileInput, FormController, JobFormView, PageBindings, TextField, UploadView};
pub use display::{show, MessageRegion};
pub use types::payloads::{JobCreationPayload, ResumeMetadataPayload, SelectedFile};
pub use types::response::ServerResponse;

/// Convenience entry point: resolve configuration and wire up the bound
/// forms against the real backend client.
pub fn init_page(bindings: PageBindings) -> Result<FormController<ApiClient>> {
    let config = ClientConfig::load()?;
    let api = ApiClient::new(config.api_base_url)?;
    Ok(FormController::initialize(bindings, api))
}
