//! Typed HTTP client for the booking backend.
//!
//! One method per endpoint, each returning the decoded payload or an
//! [`ApiError`]. The transport endpoints wrap their payloads in an
//! [`ApiResponse`] envelope; those methods unwrap it so callers only ever see
//! domain types.

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::models::{
    ApiResponse, AuthResponse, ChatReply, ChatRequest, GroundTransport, Hotel, HotelSearchParams,
    LoginRequest, Package, RegisterRequest, RegisterResponse, Room, TransportOption, User,
};

/// Backend base URL used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5076/api";

/// Environment variable overriding the base URL on native builds.
pub const BASE_URL_ENV: &str = "MANASIK_API_URL";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("backend returned HTTP {status} for {path}")]
    Status { status: u16, path: String },
    #[error("backend rejected the request: {0}")]
    Rejected(String),
    #[error("backend returned a success envelope with no payload")]
    EmptyEnvelope,
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    /// Builds a client from `MANASIK_API_URL` where a process environment
    /// exists, falling back to [`DEFAULT_BASE_URL`].
    pub fn from_env() -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        if let Ok(url) = std::env::var(BASE_URL_ENV) {
            if !url.trim().is_empty() {
                return Self::new(url);
            }
        }
        Self::new(DEFAULT_BASE_URL)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let mut request = self.http.get(self.url(path));
        if !query.is_empty() {
            request = request.query(query);
        }
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                path: path.to_string(),
            });
        }
        Ok(response.json().await?)
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self.http.post(self.url(path)).json(body).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                path: path.to_string(),
            });
        }
        Ok(response.json().await?)
    }

    fn unwrap_envelope<T>(envelope: ApiResponse<T>) -> Result<T, ApiError> {
        if !envelope.success {
            let message = envelope
                .message
                .unwrap_or_else(|| "request rejected".to_string());
            return Err(ApiError::Rejected(message));
        }
        envelope.data.ok_or(ApiError::EmptyEnvelope)
    }

    pub async fn hotels(&self, params: &HotelSearchParams) -> Result<Vec<Hotel>, ApiError> {
        self.get_json("hotels", &params.to_query()).await
    }

    pub async fn hotel(&self, id: &str) -> Result<Hotel, ApiError> {
        self.get_json(&format!("hotels/{id}"), &[]).await
    }

    pub async fn rooms(&self, hotel_id: &str) -> Result<Vec<Room>, ApiError> {
        self.get_json(&format!("hotels/{hotel_id}/rooms"), &[]).await
    }

    pub async fn transports(&self) -> Result<Vec<TransportOption>, ApiError> {
        let envelope: ApiResponse<Vec<TransportOption>> = self
            .get_json("InternationalTransport/GetAllTransports", &[])
            .await?;
        Self::unwrap_envelope(envelope)
    }

    pub async fn search_by_route(
        &self,
        departure_airport: &str,
        arrival_airport: &str,
    ) -> Result<Vec<TransportOption>, ApiError> {
        let query = [
            ("departureAirport", departure_airport.to_string()),
            ("arrivalAirport", arrival_airport.to_string()),
        ];
        let envelope: ApiResponse<Vec<TransportOption>> = self
            .get_json("InternationalTransport/SearchByRoute", &query)
            .await?;
        Self::unwrap_envelope(envelope)
    }

    pub async fn search_by_date_range(
        &self,
        start_date: &str,
        return_date: &str,
    ) -> Result<Vec<TransportOption>, ApiError> {
        let query = [
            ("startDate", start_date.to_string()),
            ("returnDate", return_date.to_string()),
        ];
        let envelope: ApiResponse<Vec<TransportOption>> = self
            .get_json("InternationalTransport/SearchByDateRange", &query)
            .await?;
        Self::unwrap_envelope(envelope)
    }

    pub async fn ground_transports(
        &self,
        transport_type: &str,
    ) -> Result<Vec<GroundTransport>, ApiError> {
        let query = [("transportType", transport_type.to_string())];
        let envelope: ApiResponse<Vec<GroundTransport>> = self
            .get_json("GroundTransport/SearchByType", &query)
            .await?;
        Self::unwrap_envelope(envelope)
    }

    pub async fn packages(&self) -> Result<Vec<Package>, ApiError> {
        self.get_json("packages", &[]).await
    }

    pub async fn login(&self, credentials: &LoginRequest) -> Result<AuthResponse, ApiError> {
        self.post_json("auth/login", credentials).await
    }

    pub async fn register(&self, request: &RegisterRequest) -> Result<RegisterResponse, ApiError> {
        self.post_json("auth/register", request).await
    }

    pub async fn me(&self, token: &str) -> Result<User, ApiError> {
        let response = self
            .http
            .get(self.url("auth/me"))
            .bearer_auth(token)
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                path: "auth/me".to_string(),
            });
        }
        Ok(response.json().await?)
    }

    pub async fn chat(
        &self,
        conversation_id: Option<&str>,
        message: &str,
    ) -> Result<ChatReply, ApiError> {
        let payload = ChatRequest {
            conversation_id: conversation_id.map(str::to_string),
            message: message.to_string(),
        };
        self.post_json("ai/chat", &payload).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_joins_without_double_slash() {
        let client = ApiClient::new("http://localhost:5076/api/");
        assert_eq!(client.base_url(), "http://localhost:5076/api");
        assert_eq!(
            client.url("/hotels/h-1/rooms"),
            "http://localhost:5076/api/hotels/h-1/rooms"
        );
        assert_eq!(
            client.url("InternationalTransport/GetAllTransports"),
            "http://localhost:5076/api/InternationalTransport/GetAllTransports"
        );
    }

    #[test]
    fn unwrap_envelope_surfaces_backend_message() {
        let envelope: ApiResponse<Vec<TransportOption>> = ApiResponse {
            success: false,
            message: Some("no seats left".into()),
            data: None,
        };
        match ApiClient::unwrap_envelope(envelope) {
            Err(ApiError::Rejected(message)) => assert_eq!(message, "no seats left"),
            other => panic!("expected rejection, got {other:?}"),
        }
    }

    #[test]
    fn unwrap_envelope_requires_payload() {
        let envelope: ApiResponse<Vec<GroundTransport>> = ApiResponse {
            success: true,
            message: None,
            data: None,
        };
        assert!(matches!(
            ApiClient::unwrap_envelope(envelope),
            Err(ApiError::EmptyEnvelope)
        ));
    }

    #[test]
    fn unwrap_envelope_returns_data() {
        let envelope = ApiResponse {
            success: true,
            message: None,
            data: Some(vec![1, 2, 3]),
        };
        assert_eq!(ApiClient::unwrap_envelope(envelope).unwrap(), vec![1, 2, 3]);
    }
}
