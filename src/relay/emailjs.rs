//! EmailJS REST client
//!
//! Posts the lead as template parameters to the hosted EmailJS send
//! endpoint. The template decides the operator address and the layout of
//! the resulting email.

use super::traits::{MailRelay, RelayError};
use crate::lead::LeadPayload;
use async_trait::async_trait;
use serde::Serialize;
use std::time::Duration;

/// Public EmailJS API host
pub const DEFAULT_ENDPOINT: &str = "https://api.emailjs.com";

const SEND_PATH: &str = "/api/v1.0/email/send";

const REQUEST_TIMEOUT_SECS: u64 = 15;

const MAX_ERROR_BODY_CHARS: usize = 512;

/// Account identifiers for the EmailJS service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailJsCredentials {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

#[derive(Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a LeadPayload,
}

/// Mail relay backed by EmailJS
pub struct EmailJsRelay {
    client: reqwest::Client,
    endpoint: String,
    credentials: Option<EmailJsCredentials>,
}

impl EmailJsRelay {
    /// Create a relay. Without credentials every send fails with
    /// [`RelayError::NotConfigured`] and no request is made.
    pub fn new(
        endpoint: impl Into<String>,
        credentials: Option<EmailJsCredentials>,
    ) -> Result<Self, RelayError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
            credentials,
        })
    }

    pub fn is_configured(&self) -> bool {
        self.credentials.is_some()
    }

    fn send_url(&self) -> String {
        format!("{}{}", self.endpoint.trim_end_matches('/'), SEND_PATH)
    }
}

#[async_trait]
impl MailRelay for EmailJsRelay {
    async fn send(&self, payload: &LeadPayload) -> Result<(), RelayError> {
        let credentials = self.credentials.as_ref().ok_or(RelayError::NotConfigured)?;

        let request = SendRequest {
            service_id: &credentials.service_id,
            template_id: &credentials.template_id,
            user_id: &credentials.public_key,
            template_params: payload,
        };

        let response = self
            .client
            .post(self.send_url())
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RelayError::Rejected {
                status: status.as_u16(),
                body: body.chars().take(MAX_ERROR_BODY_CHARS).collect(),
            });
        }

        tracing::debug!("EmailJS accepted message ({status})");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lead::MainService;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn credentials() -> EmailJsCredentials {
        EmailJsCredentials {
            service_id: "service_test".to_string(),
            template_id: "template_test".to_string(),
            public_key: "public_test".to_string(),
        }
    }

    fn payload() -> LeadPayload {
        LeadPayload {
            name: "Jane Doe".to_string(),
            phone: "0771234567".to_string(),
            email: "jane@example.com".to_string(),
            main_service: MainService::Design,
            sub_service: "Package design".to_string(),
            message: "Hello".to_string(),
        }
    }

    #[tokio::test]
    async fn test_posts_template_params() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(SEND_PATH))
            .and(body_partial_json(json!({
                "service_id": "service_test",
                "template_id": "template_test",
                "user_id": "public_test",
                "template_params": {
                    "from_name": "Jane Doe",
                    "from_phone": "0771234567",
                    "from_email": "jane@example.com",
                    "main_service": "Design",
                    "sub_service": "Package design",
                    "message": "Hello"
                }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_string("OK"))
            .expect(1)
            .mount(&server)
            .await;

        let relay = EmailJsRelay::new(server.uri(), Some(credentials())).unwrap();
        relay.send(&payload()).await.unwrap();
    }

    #[tokio::test]
    async fn test_non_success_status_is_rejected() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(SEND_PATH))
            .respond_with(ResponseTemplate::new(400).set_body_string("The user ID is invalid"))
            .expect(1)
            .mount(&server)
            .await;

        let relay = EmailJsRelay::new(format!("{}/", server.uri()), Some(credentials())).unwrap();
        let err = relay.send(&payload()).await.unwrap_err();

        match err {
            RelayError::Rejected { status, body } => {
                assert_eq!(status, 400);
                assert_eq!(body, "The user ID is invalid");
            }
            other => panic!("expected Rejected, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_long_error_body_is_capped() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_string("x".repeat(4096)))
            .mount(&server)
            .await;

        let relay = EmailJsRelay::new(server.uri(), Some(credentials())).unwrap();
        let err = relay.send(&payload()).await.unwrap_err();

        match err {
            RelayError::Rejected { body, .. } => assert_eq!(body.len(), MAX_ERROR_BODY_CHARS),
            other => panic!("expected Rejected, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_missing_credentials_skip_network() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let relay = EmailJsRelay::new(server.uri(), None).unwrap();
        assert!(!relay.is_configured());

        let err = relay.send(&payload()).await.unwrap_err();
        assert!(matches!(err, RelayError::NotConfigured));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_transport_error() {
        // Grab a free port, then close it so nothing is listening there
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let endpoint = format!("http://127.0.0.1:{port}");
        let relay = EmailJsRelay::new(endpoint, Some(credentials())).unwrap();
        let err = relay.send(&payload()).await.unwrap_err();
        assert!(matches!(err, RelayError::Transport(_)));
    }

    #[test]
    fn test_send_url_joins_endpoint() {
        let relay = EmailJsRelay::new("https://api.emailjs.com/", None).unwrap();
        assert_eq!(relay.send_url(), "https://api.emailjs.com/api/v1.0/email/send");
    }
}
