use async_trait::async_trait;
use reqwest::Response;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};

use crate::data_provider::MatchAuthority;
use crate::error::ApiError;
use crate::types::{EventId, Match, MatchEvent, MatchId, MatchResult, NewEvent, RosterEntry, TeamId};

/// Error body returned by the match API
#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// HTTP client for the remote match authority
pub struct Client {
    http: reqwest::Client,
    base_url: String,
}

impl Client {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn make_url(&self, endpoint: &str) -> String {
        format!("{}{endpoint}", self.base_url)
    }

    async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        let url = self.make_url(endpoint);
        debug!("HTTP: GET {}", url);
        let response = self.http.get(url).send().await?;
        decode(response).await
    }

    async fn post<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        let url = self.make_url(endpoint);
        debug!("HTTP: POST {}", url);
        let response = self.http.post(url).send().await?;
        decode(response).await
    }

    async fn post_json<B: serde::Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let url = self.make_url(endpoint);
        debug!("HTTP: POST {}", url);
        let response = self.http.post(url).json(body).send().await?;
        decode(response).await
    }
}

/// Turn a non-success status into [`ApiError::Rejected`], keeping the server's message
async fn check_status(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let message = response
        .json::<ErrorBody>()
        .await
        .ok()
        .and_then(|body| body.message);
    warn!("HTTP: request failed with {}: {:?}", status, message);
    Err(ApiError::Rejected {
        status: status.as_u16(),
        message,
    })
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let response = check_status(response).await?;
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

#[async_trait]
impl MatchAuthority for Client {
    fn instance_key(&self) -> String {
        self.base_url.clone()
    }

    async fn get_match(&self, match_id: MatchId) -> Result<Match, ApiError> {
        self.get(&format!("/matches/{match_id}")).await
    }

    async fn events(&self, match_id: MatchId) -> Result<Vec<MatchEvent>, ApiError> {
        self.get(&format!("/matches/{match_id}/events")).await
    }

    async fn roster(&self, team_id: TeamId) -> Result<Vec<RosterEntry>, ApiError> {
        self.get(&format!("/teams/{team_id}/roster")).await
    }

    async fn start_match(&self, match_id: MatchId) -> Result<Match, ApiError> {
        self.post(&format!("/matches/{match_id}/start")).await
    }

    async fn register_result(&self, result: &MatchResult) -> Result<MatchResult, ApiError> {
        self.post_json(&format!("/matches/{}/result", result.match_id), result)
            .await
    }

    async fn finish_match(&self, match_id: MatchId) -> Result<Match, ApiError> {
        self.post(&format!("/matches/{match_id}/finish")).await
    }

    async fn cancel_match(&self, match_id: MatchId) -> Result<Match, ApiError> {
        self.post(&format!("/matches/{match_id}/cancel")).await
    }

    async fn create_event(&self, event: &NewEvent) -> Result<MatchEvent, ApiError> {
        self.post_json("/events", event).await
    }

    async fn delete_event(&self, event_id: EventId) -> Result<(), ApiError> {
        let url = self.make_url(&format!("/events/{event_id}"));
        debug!("HTTP: DELETE {}", url);
        let response = self.http.delete(url).send().await?;
        check_status(response).await.map(|_| ())
    }
}
