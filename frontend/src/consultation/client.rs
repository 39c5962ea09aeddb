use std::rc::Rc;

use futures::future::{FutureExt, LocalBoxFuture};
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ConsultationRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub organization: String,
    pub project_type: String,
    pub message: String,
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum SubmitError {
    #[error("request could not be sent: {0}")]
    Network(String),
    #[error("server rejected the request with status {status}")]
    Rejected { status: u16, message: Option<String> },
    #[error("request could not be encoded: {0}")]
    Encode(String),
}

impl SubmitError {
    /// Text shown in the error notification.
    pub fn user_message(&self) -> String {
        match self {
            SubmitError::Network(_) => {
                "We couldn't reach our server. Check your connection and try again.".to_string()
            }
            SubmitError::Rejected { message: Some(message), .. } => {
                format!("{} Please review the form and try again.", message)
            }
            SubmitError::Rejected { .. } | SubmitError::Encode(_) => {
                "Something went wrong sending your request. Please try again in a moment.".to_string()
            }
        }
    }
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: String,
}

pub trait ConsultationClient {
    fn submit(&self, request: ConsultationRequest) -> LocalBoxFuture<'static, Result<(), SubmitError>>;
}

/// Client handle that can travel through component props.
#[derive(Clone)]
pub struct ConsultationService(Rc<dyn ConsultationClient>);

impl ConsultationService {
    pub fn new(client: Rc<dyn ConsultationClient>) -> Self {
        Self(client)
    }

    pub fn client(&self) -> Rc<dyn ConsultationClient> {
        self.0.clone()
    }
}

impl PartialEq for ConsultationService {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// Posts the request as JSON to the site backend.
pub struct HttpConsultationClient {
    endpoint: String,
}

impl HttpConsultationClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into() }
    }
}

impl ConsultationClient for HttpConsultationClient {
    fn submit(&self, request: ConsultationRequest) -> LocalBoxFuture<'static, Result<(), SubmitError>> {
        let endpoint = self.endpoint.clone();
        async move {
            let response = Request::post(&endpoint)
                .json(&request)
                .map_err(|e| SubmitError::Encode(e.to_string()))?
                .send()
                .await
                .map_err(|e| SubmitError::Network(e.to_string()))?;

            if response.ok() {
                return Ok(());
            }
            let status = response.status();
            let message = response.json::<ErrorResponse>().await.ok().map(|r| r.error);
            log::warn!("consultation request rejected with status {}", status);
            Err(SubmitError::Rejected { status, message })
        }
        .boxed_local()
    }
}

/// Stand-in used when there is no backend: waits, then reports success.
pub struct SimulatedConsultationClient {
    delay_ms: u32,
}

impl SimulatedConsultationClient {
    pub fn new(delay_ms: u32) -> Self {
        Self { delay_ms }
    }
}

impl ConsultationClient for SimulatedConsultationClient {
    fn submit(&self, request: ConsultationRequest) -> LocalBoxFuture<'static, Result<(), SubmitError>> {
        let delay_ms = self.delay_ms;
        async move {
            TimeoutFuture::new(delay_ms).await;
            log::info!("simulated consultation request from {}", request.email);
            Ok(())
        }
        .boxed_local()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_with_field_names() {
        let request = ConsultationRequest {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            project_type: "research".into(),
            ..Default::default()
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["email"], "ada@example.com");
        assert_eq!(value["project_type"], "research");
        assert_eq!(value["phone"], "");
    }

    #[test]
    fn error_messages_guide_retry() {
        assert!(SubmitError::Network("offline".into()).user_message().contains("try again"));
        let rejected = SubmitError::Rejected { status: 422, message: Some("Email already used.".into()) };
        assert!(rejected.user_message().starts_with("Email already used."));
        let bare = SubmitError::Rejected { status: 500, message: None };
        assert!(bare.user_message().contains("try again"));
    }
}
