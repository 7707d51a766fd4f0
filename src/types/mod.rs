pub mod payloads;
pub mod response;

pub use payloads::{JobCreationPayload, ResumeMetadataPayload, SelectedFile};
pub use response::ServerResponse;
