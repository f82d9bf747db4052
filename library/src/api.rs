use async_trait::async_trait;
use log::{debug, error};
use puppy_bowl_protocol::envelope::{Envelope, NewPlayerData, PlayerData, PlayersData};
use puppy_bowl_protocol::{api_url, NewPlayer, Player, PlayerId};
use serde::de::DeserializeOwned;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use crate::utils::global_window;
use crate::ClientError;

/// The four roster operations the UI depends on.
///
/// Implemented by [ApiClient] over `fetch`; tests substitute in-memory fakes or,
/// with the `mock` feature, `MockRosterApi`.
#[cfg_attr(feature = "mock", mockall::automock)]
#[async_trait(?Send)]
pub trait RosterApi {
    /// `GET /players`. An empty roster is `Ok` with an empty vector.
    async fn fetch_all_players(&self) -> Result<Vec<Player>, ClientError>;

    /// `GET /players/{id}`, with the player's team embedded when it has one.
    async fn fetch_single_player(&self, player_id: PlayerId) -> Result<Player, ClientError>;

    /// `POST /players`. The server validates the payload.
    async fn add_new_player(&self, new_player: &NewPlayer) -> Result<Player, ClientError>;

    /// `DELETE /players/{id}`. The response body is ignored.
    async fn remove_player(&self, player_id: PlayerId) -> Result<(), ClientError>;
}

/// Roster API client bound to one cohort.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// `base_url` must already contain the cohort segment.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        ApiClient {
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }

    pub fn for_cohort(api_base: &str, cohort: &str) -> Self {
        ApiClient::new(api_url(api_base, cohort))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn players_url(&self) -> String {
        format!("{}/players", self.base_url)
    }

    pub(crate) fn player_url(&self, player_id: PlayerId) -> String {
        format!("{}/players/{}", self.base_url, player_id)
    }

    async fn send(&self, method: &str, url: &str, body: Option<&str>) -> Result<Response, ClientError> {
        let window = global_window()?;
        let init = RequestInit::new();
        init.set_method(method);
        init.set_mode(RequestMode::Cors);
        if let Some(body) = body {
            init.set_body(&JsValue::from_str(body));
        }
        let request = Request::new_with_str_and_init(url, &init)?;
        if body.is_some() {
            request.headers().set("Content-Type", "application/json")?;
        }
        debug!("{method} {url}");
        let response = JsFuture::from(window.fetch_with_request(&request)).await?;
        Ok(response.dyn_into::<Response>()?)
    }

    async fn read_data<T: DeserializeOwned>(
        response: Response,
        key: &'static str,
    ) -> Result<T, ClientError> {
        let body = JsFuture::from(response.text()?).await?;
        let body = body
            .as_string()
            .ok_or_else(|| ClientError::Network("response body is not text".to_owned()))?;
        match decode_data(&body, key) {
            Err(ClientError::Decode(_)) if !response.ok() => Err(ClientError::Http {
                status: response.status(),
                status_text: response.status_text(),
            }),
            result => result,
        }
    }
}

/// Unwrap `data.{key}` out of a response envelope.
pub(crate) fn decode_data<T: DeserializeOwned>(
    body: &str,
    key: &'static str,
) -> Result<T, ClientError> {
    let envelope: Envelope<T> = serde_json::from_str(body)?;
    envelope.into_result()?.ok_or(ClientError::MissingData(key))
}

#[async_trait(?Send)]
impl RosterApi for ApiClient {
    async fn fetch_all_players(&self) -> Result<Vec<Player>, ClientError> {
        let result = async {
            let response = self.send("GET", &self.players_url(), None).await?;
            let data: PlayersData = Self::read_data(response, "players").await?;
            Ok::<_, ClientError>(data.players)
        };
        result.await.map_err(|error| {
            error!("Uh oh, trouble fetching players! {error}");
            error
        })
    }

    async fn fetch_single_player(&self, player_id: PlayerId) -> Result<Player, ClientError> {
        let result = async {
            let response = self.send("GET", &self.player_url(player_id), None).await?;
            let data: PlayerData = Self::read_data(response, "player").await?;
            Ok::<_, ClientError>(data.player)
        };
        result.await.map_err(|error| {
            error!("Oh no, trouble fetching player #{player_id}! {error}");
            error
        })
    }

    async fn add_new_player(&self, new_player: &NewPlayer) -> Result<Player, ClientError> {
        let result = async {
            let body = serde_json::to_string(new_player)?;
            let response = self.send("POST", &self.players_url(), Some(&body)).await?;
            let data: NewPlayerData = Self::read_data(response, "newPlayer").await?;
            Ok::<_, ClientError>(data.new_player)
        };
        result.await.map_err(|error| {
            error!("Oops, something went wrong with adding that player! {error}");
            error
        })
    }

    async fn remove_player(&self, player_id: PlayerId) -> Result<(), ClientError> {
        self.send("DELETE", &self.player_url(player_id), None)
            .await
            .map(|_response| ())
            .map_err(|error| {
                error!("Whoops, trouble removing player #{player_id} from the roster! {error}");
                error
            })
    }
}
