/*!
JSON envelopes wrapping every response of the Puppy Bowl API.

Success: `{ "success": true, "error": null, "data": { ... } }`.
Failure: `{ "success": false, "error": { "name": ..., "message": ... }, "data": null }`.
 */

use crate::Player;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Error object the API reports inside a failed envelope.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub name: String,
    pub message: String,
}

impl ApiError {
    pub fn new(name: impl Into<String>, message: impl Into<String>) -> Self {
        ApiError {
            name: name.into(),
            message: message.into(),
        }
    }
}

impl Display for ApiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.name, self.message)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Envelope<T> {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub error: Option<ApiError>,
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    pub fn ok(data: T) -> Self {
        Envelope {
            success: true,
            error: None,
            data: Some(data),
        }
    }

    pub fn failure(error: ApiError) -> Self {
        Envelope {
            success: false,
            error: Some(error),
            data: None,
        }
    }

    /// Unwrap the payload. `Ok(None)` means the API claimed success but sent no data.
    pub fn into_result(self) -> Result<Option<T>, ApiError> {
        match (self.error, self.data) {
            (Some(error), _) => Err(error),
            (None, Some(data)) => Ok(Some(data)),
            (None, None) if !self.success => {
                Err(ApiError::new("Error", "request failed without details"))
            }
            (None, None) => Ok(None),
        }
    }
}

/// `data` of `GET /players`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PlayersData {
    pub players: Vec<Player>,
}

/// `data` of `GET /players/{id}`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PlayerData {
    pub player: Player,
}

/// `data` of `POST /players`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewPlayerData {
    pub new_player: Player,
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::PlayerId;

    #[test]
    fn test_players_envelope() {
        let json = r#"{
            "success": true,
            "error": null,
            "data": { "players": [
                { "id": 1, "name": "Rex", "breed": "Boxer", "status": "bench",
                  "imageUrl": "https://example.com/rex.png", "teamId": null }
            ] }
        }"#;
        let envelope: Envelope<PlayersData> = serde_json::from_str(json).unwrap();
        let players = envelope.into_result().unwrap().unwrap().players;
        assert_eq!(players.len(), 1);
        assert_eq!(players[0].id, PlayerId::new(1));
    }

    #[test]
    fn test_new_player_envelope_uses_camel_case_key() {
        let json = r#"{
            "success": true,
            "error": null,
            "data": { "newPlayer": { "id": 9, "name": "Test Puppy", "breed": "Test Breed",
                "status": "bench", "imageUrl": "https://example.com/dog.png", "teamId": null } }
        }"#;
        let envelope: Envelope<NewPlayerData> = serde_json::from_str(json).unwrap();
        let player = envelope.into_result().unwrap().unwrap().new_player;
        assert_eq!(player.name, "Test Puppy");
        assert_eq!(player.team_id, None);
    }

    #[test]
    fn test_failure_envelope_surfaces_error() {
        let json = r#"{
            "success": false,
            "error": { "name": "NotFoundError", "message": "Player 42 not found" },
            "data": null
        }"#;
        let envelope: Envelope<PlayerData> = serde_json::from_str(json).unwrap();
        assert_eq!(
            envelope.into_result(),
            Err(ApiError::new("NotFoundError", "Player 42 not found"))
        );
    }

    #[test]
    fn test_unsuccessful_envelope_without_error_is_still_a_failure() {
        let json = r#"{ "success": false, "data": null }"#;
        let envelope: Envelope<PlayerData> = serde_json::from_str(json).unwrap();
        assert!(envelope.into_result().is_err());

        let json = r#"{ "success": true, "data": null }"#;
        let envelope: Envelope<PlayerData> = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.into_result(), Ok(None));
    }
}
