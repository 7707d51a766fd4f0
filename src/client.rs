//! HTTP client for the job board backend. All network traffic from the
//! forms goes through [`ApiClient`].

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, error};

use crate::types::payloads::{JobCreationPayload, ResumeMetadataPayload};
use crate::types::response::ServerResponse;

pub const JOBS_ENDPOINT: &str = "/api/jobs";
pub const RESUMES_ENDPOINT: &str = "/api/resumes";

/// Boundary failure for a single request. Transport and decode failures
/// stay distinct in logs; callers show one generic message either way.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    Network(#[source] reqwest::Error),

    #[error("response body is not valid JSON: {0}")]
    Decode(#[source] serde_json::Error),
}

/// The backend operations the forms trigger. [`ApiClient`] is the real
/// transport; tests substitute recording stubs.
#[async_trait]
pub trait JobBoardApi: Send + Sync {
    async fn post_job(&self, payload: &JobCreationPayload) -> Result<ServerResponse, ApiError>;

    async fn post_resume(
        &self,
        payload: &ResumeMetadataPayload,
    ) -> Result<ServerResponse, ApiError>;
}

/// Optional filters for the job listing.
#[derive(Debug, Clone, Default)]
pub struct JobFilter {
    pub location: Option<String>,
    pub keywords: Option<String>,
}

pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for the given backend base URL. No request timeout:
    /// a submission waits as long as the server does.
    pub fn new(base_url: String) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(ApiError::Network)?;

        Ok(Self { client, base_url })
    }

    /// POST a JSON payload and parse the response body as JSON. The HTTP
    /// status code is not consulted: an error status with a parseable body
    /// is returned like any success. Exactly one request per call, no
    /// retries.
    pub async fn post_json<T>(
        &self,
        endpoint: &str,
        payload: &T,
    ) -> Result<ServerResponse, ApiError>
    where
        T: Serialize + ?Sized,
    {
        let url = format!("{}{}", self.base_url, endpoint);
        debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .json(payload)
            .send()
            .await
            .map_err(|e| {
                error!("POST {} failed: {}", url, e);
                ApiError::Network(e)
            })?;

        debug!("POST {} -> {}", url, response.status());
        self.decode_body(&url, response).await
    }

    /// GET a resource and parse the response body as JSON.
    pub async fn get_json(
        &self,
        endpoint: &str,
        query: &[(&str, &str)],
    ) -> Result<ServerResponse, ApiError> {
        let url = format!("{}{}", self.base_url, endpoint);
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|e| {
                error!("GET {} failed: {}", url, e);
                ApiError::Network(e)
            })?;

        debug!("GET {} -> {}", url, response.status());
        self.decode_body(&url, response).await
    }

    /// List published jobs, optionally filtered by location and by keywords
    /// in title or description.
    pub async fn list_jobs(&self, filter: &JobFilter) -> Result<ServerResponse, ApiError> {
        let mut query = Vec::new();
        if let Some(location) = filter.location.as_deref() {
            query.push(("location", location));
        }
        if let Some(keywords) = filter.keywords.as_deref() {
            query.push(("keywords", keywords));
        }

        self.get_json(JOBS_ENDPOINT, &query).await
    }

    async fn decode_body(
        &self,
        url: &str,
        response: reqwest::Response,
    ) -> Result<ServerResponse, ApiError> {
        let body = response.text().await.map_err(|e| {
            error!("failed to read response body from {}: {}", url, e);
            ApiError::Network(e)
        })?;

        serde_json::from_str(&body)
            .map(ServerResponse)
            .map_err(|e| {
                error!("invalid JSON from {}: {}", url, e);
                ApiError::Decode(e)
            })
    }
}

#[async_trait]
impl JobBoardApi for ApiClient {
    async fn post_job(&self, payload: &JobCreationPayload) -> Result<ServerResponse, ApiError> {
        self.post_json(JOBS_ENDPOINT, payload).await
    }

    async fn post_resume(
        &self,
        payload: &ResumeMetadataPayload,
    ) -> Result<ServerResponse, ApiError> {
        self.post_json(RESUMES_ENDPOINT, payload).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::{TcpListener, TcpStream};

    /// Serve exactly one canned HTTP response on a local port and return
    /// the base URL to reach it.
    async fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            read_request(&mut socket).await;

            let response = format!(
                "HTTP/1.1 {status_line}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
        });

        format!("http://{addr}")
    }

    /// Read a full request: headers, then as many body bytes as
    /// Content-Length announces.
    async fn read_request(socket: &mut TcpStream) {
        let mut data = Vec::new();
        let mut buf = [0u8; 1024];

        loop {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                return;
            }
            data.extend_from_slice(&buf[..n]);

            let Some(pos) = data.windows(4).position(|w| w == b"\r\n\r\n") else {
                continue;
            };
            let headers = String::from_utf8_lossy(&data[..pos]).to_lowercase();
            let content_length = headers
                .lines()
                .find_map(|line| line.strip_prefix("content-length:"))
                .and_then(|v| v.trim().parse::<usize>().ok())
                .unwrap_or(0);
            if data.len() >= pos + 4 + content_length {
                return;
            }
        }
    }

    fn payload() -> JobCreationPayload {
        JobCreationPayload::from_fields(Some("Engineer".to_string()), None, None)
    }

    #[tokio::test]
    async fn error_status_with_parseable_body_is_success() {
        let base_url = serve_once("500 Internal Server Error", "{\"job_id\": 42}").await;
        let client = ApiClient::new(base_url).unwrap();

        let response = client.post_job(&payload()).await.unwrap();
        assert_eq!(response.job_ref(), "42");
    }

    #[tokio::test]
    async fn non_json_body_is_a_decode_error() {
        let base_url = serve_once("200 OK", "<html>oops</html>").await;
        let client = ApiClient::new(base_url).unwrap();

        let err = client.post_job(&payload()).await.unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[tokio::test]
    async fn unreachable_server_is_a_network_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = ApiClient::new(format!("http://{addr}")).unwrap();
        let err = client.post_job(&payload()).await.unwrap_err();
        assert!(matches!(err, ApiError::Network(_)));
    }
}
