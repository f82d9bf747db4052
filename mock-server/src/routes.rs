use std::convert::Infallible;

use log::{debug, warn};
use serde::Serialize;
use warp::http::StatusCode;
use warp::hyper::body::Bytes;
use warp::reply::{Json, WithStatus};
use warp::{Filter, Rejection, Reply};

use puppy_bowl_protocol::envelope::{ApiError, Envelope, NewPlayerData, PlayerData, PlayersData};
use puppy_bowl_protocol::{NewPlayer, PlayerId};

use crate::store::SharedStore;

const MAX_BODY_BYTES: u64 = 16 * 1024;

/// The roster API under `/api/{cohort}/players`, with CORS open to any origin.
pub fn api(store: SharedStore) -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone {
    let store = warp::any().map(move || store.clone());
    let players = warp::path!("api" / String / "players");
    let player = warp::path!("api" / String / "players" / u64);

    let list = players
        .and(warp::get())
        .and(store.clone())
        .then(list_players);
    let create = players
        .and(warp::post())
        .and(warp::body::content_length_limit(MAX_BODY_BYTES))
        .and(warp::body::bytes())
        .and(store.clone())
        .then(add_player);
    let single = player
        .and(warp::get())
        .and(store.clone())
        .then(get_player);
    let delete = player
        .and(warp::delete())
        .and(store)
        .then(remove_player);

    let cors = warp::cors()
        .allow_any_origin()
        .allow_methods(vec!["GET", "POST", "DELETE"])
        .allow_header("content-type");

    list.or(create)
        .or(single)
        .or(delete)
        .recover(handle_rejection)
        .with(warp::log("puppy_bowl_mock_server"))
        .with(cors)
}

fn respond<T: Serialize>(status: StatusCode, envelope: &Envelope<T>) -> WithStatus<Json> {
    warp::reply::with_status(warp::reply::json(envelope), status)
}

fn failure(status: StatusCode, error: ApiError) -> WithStatus<Json> {
    respond::<()>(status, &Envelope::failure(error))
}

fn not_found(player_id: PlayerId) -> WithStatus<Json> {
    failure(
        StatusCode::NOT_FOUND,
        ApiError::new("NotFoundError", format!("No player found with id {player_id}")),
    )
}

async fn list_players(cohort: String, store: SharedStore) -> WithStatus<Json> {
    let players = store.list(&cohort).await;
    respond(StatusCode::OK, &Envelope::ok(PlayersData { players }))
}

async fn get_player(cohort: String, player_id: u64, store: SharedStore) -> WithStatus<Json> {
    let player_id = PlayerId::new(player_id);
    match store.get(&cohort, player_id).await {
        Some(player) => respond(StatusCode::OK, &Envelope::ok(PlayerData { player })),
        None => not_found(player_id),
    }
}

async fn add_player(cohort: String, body: Bytes, store: SharedStore) -> WithStatus<Json> {
    let new_player = match serde_json::from_slice::<NewPlayer>(&body) {
        Ok(new_player) => new_player,
        Err(error) => {
            warn!("rejecting malformed player for cohort {cohort}: {error}");
            return failure(
                StatusCode::BAD_REQUEST,
                ApiError::new("ValidationError", error.to_string()),
            );
        }
    };
    match store.add(&cohort, new_player).await {
        Ok(new_player) => respond(StatusCode::OK, &Envelope::ok(NewPlayerData { new_player })),
        Err(error) => failure(StatusCode::BAD_REQUEST, error),
    }
}

async fn remove_player(cohort: String, player_id: u64, store: SharedStore) -> WithStatus<Json> {
    let player_id = PlayerId::new(player_id);
    match store.remove(&cohort, player_id).await {
        Some(_) => respond(StatusCode::OK, &Envelope::ok(())),
        None => not_found(player_id),
    }
}

async fn handle_rejection(rejection: Rejection) -> Result<WithStatus<Json>, Infallible> {
    debug!("rejected request: {rejection:?}");
    let (status, error) = if rejection.is_not_found() {
        (
            StatusCode::NOT_FOUND,
            ApiError::new("NotFoundError", "No such route"),
        )
    } else if rejection.find::<warp::reject::MethodNotAllowed>().is_some() {
        (
            StatusCode::METHOD_NOT_ALLOWED,
            ApiError::new("MethodNotAllowed", "Method not allowed"),
        )
    } else if rejection.find::<warp::reject::PayloadTooLarge>().is_some() {
        (
            StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::new("PayloadTooLarge", "Request body is too large"),
        )
    } else {
        (
            StatusCode::BAD_REQUEST,
            ApiError::new("BadRequest", format!("{rejection:?}")),
        )
    };
    Ok(failure(status, error))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::store::Store;
    use puppy_bowl_protocol::{Player, PlayerStatus};
    use serde::de::DeserializeOwned;
    use std::sync::Arc;
    use warp::test::request;

    const COHORT: &str = "2109-UNF-HY-WEB-PT";

    fn data<T: DeserializeOwned>(body: &[u8]) -> T {
        serde_json::from_slice::<Envelope<T>>(body)
            .unwrap()
            .into_result()
            .unwrap()
            .unwrap()
    }

    async fn fetch_all_players(store: &SharedStore) -> Vec<Player> {
        let response = request()
            .method("GET")
            .path(&format!("/api/{COHORT}/players"))
            .reply(&api(store.clone()))
            .await;
        assert_eq!(response.status(), StatusCode::OK);
        data::<PlayersData>(response.body()).players
    }

    async fn add_new_player(store: &SharedStore, name: &str) -> Player {
        let response = request()
            .method("POST")
            .path(&format!("/api/{COHORT}/players"))
            .header("content-type", "application/json")
            .json(&serde_json::json!({
                "name": name,
                "breed": "Test Breed",
                "status": "bench",
                "imageUrl": "https://learndotresources.s3.amazonaws.com/workshop/60ad725bbe74cd0004a6cba0/puppybowl-default-dog.png",
            }))
            .reply(&api(store.clone()))
            .await;
        assert_eq!(response.status(), StatusCode::OK);
        data::<NewPlayerData>(response.body()).new_player
    }

    #[tokio::test]
    async fn test_empty_roster_is_an_empty_array() {
        let store = Arc::new(Store::default());
        assert!(fetch_all_players(&store).await.is_empty());
    }

    #[tokio::test]
    async fn test_added_player_is_benched_without_team_and_listed() {
        let store = Arc::new(Store::default());
        let new_player = add_new_player(&store, "Test Puppy").await;
        assert_eq!(new_player.status, PlayerStatus::Bench);
        assert_eq!(new_player.team_id, None);

        let players = fetch_all_players(&store).await;
        assert!(players
            .iter()
            .any(|player| player.name == "Test Puppy" && player.breed == "Test Breed"));
    }

    #[tokio::test]
    async fn test_single_player_has_requested_id() {
        let store = Arc::new(Store::with_demo_roster());
        for player in fetch_all_players(&store).await {
            let response = request()
                .method("GET")
                .path(&format!("/api/{COHORT}/players/{}", player.id))
                .reply(&api(store.clone()))
                .await;
            assert_eq!(response.status(), StatusCode::OK);
            let fetched = data::<PlayerData>(response.body()).player;
            assert_eq!(fetched.id, player.id);
            assert_eq!(fetched.breed, player.breed);
        }
    }

    #[tokio::test]
    async fn test_removed_player_disappears_from_roster() {
        let store = Arc::new(Store::default());
        let player_id = add_new_player(&store, "Temporary Puppy").await.id;

        let response = request()
            .method("DELETE")
            .path(&format!("/api/{COHORT}/players/{player_id}"))
            .reply(&api(store.clone()))
            .await;
        assert_eq!(response.status(), StatusCode::OK);

        let players = fetch_all_players(&store).await;
        assert!(players.iter().all(|player| player.id != player_id));
    }

    #[tokio::test]
    async fn test_unknown_player_is_a_failure_envelope() {
        let store = Arc::new(Store::default());
        let response = request()
            .method("GET")
            .path(&format!("/api/{COHORT}/players/999"))
            .reply(&api(store))
            .await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let envelope: Envelope<PlayerData> = serde_json::from_slice(response.body()).unwrap();
        assert!(!envelope.success);
        assert_eq!(envelope.into_result().unwrap_err().name, "NotFoundError");
    }

    #[tokio::test]
    async fn test_player_without_image_gets_default_picture() {
        let store = Arc::new(Store::default());
        let response = request()
            .method("POST")
            .path(&format!("/api/{COHORT}/players"))
            .json(&serde_json::json!({ "name": "Rex", "breed": "Boxer" }))
            .reply(&api(store))
            .await;
        assert_eq!(response.status(), StatusCode::OK);
        let new_player = data::<NewPlayerData>(response.body()).new_player;
        assert_eq!(new_player.image_url, crate::store::DEFAULT_IMAGE_URL);
        assert_eq!(new_player.status, PlayerStatus::Bench);
    }

    #[tokio::test]
    async fn test_malformed_body_is_rejected() {
        let store = Arc::new(Store::default());
        let response = request()
            .method("POST")
            .path(&format!("/api/{COHORT}/players"))
            .body(r#"{ "name": "No Breed", "imageUrl": 7 }"#)
            .reply(&api(store.clone()))
            .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(fetch_all_players(&store).await.is_empty());
    }
}
