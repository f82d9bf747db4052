//! In-memory roster and DOM helpers for the browser tests.

use std::cell::{Cell, RefCell};

use async_trait::async_trait;
use js_sys::Promise;
use puppy_bowl_client::protocol::envelope::ApiError;
use puppy_bowl_client::{ClientError, NewPlayer, Player, PlayerId, PlayerStatus, RosterApi, Team, TeamId};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Element, HtmlElement};

use crate::utils::{global_document, global_window};

pub(crate) fn player(id: u64, name: &str) -> Player {
    Player {
        id: PlayerId::new(id),
        name: name.to_owned(),
        breed: "Boxer".to_owned(),
        status: PlayerStatus::Bench,
        image_url: format!("https://example.com/{id}.png"),
        team_id: None,
        cohort_id: None,
        created_at: None,
        updated_at: None,
        team: None,
    }
}

pub(crate) fn player_on_team(id: u64, name: &str, team: &str) -> Player {
    Player {
        team_id: Some(TeamId::new(10)),
        team: Some(Team {
            id: TeamId::new(10),
            name: team.to_owned(),
            score: Some(0),
        }),
        ..player(id, name)
    }
}

/// Behaves like the API: the list omits teams, the single player endpoint embeds them.
pub(crate) struct FakeRoster {
    players: RefCell<Vec<Player>>,
    next_id: Cell<u64>,
}

impl FakeRoster {
    pub(crate) fn new(players: Vec<Player>) -> Self {
        let next_id = players.iter().map(|player| player.id.get()).max().unwrap_or(0) + 1;
        FakeRoster {
            players: RefCell::new(players),
            next_id: Cell::new(next_id),
        }
    }

    pub(crate) fn player_ids(&self) -> Vec<PlayerId> {
        self.players.borrow().iter().map(|player| player.id).collect()
    }

    pub(crate) fn players(&self) -> Vec<Player> {
        self.players.borrow().clone()
    }
}

#[async_trait(?Send)]
impl RosterApi for FakeRoster {
    async fn fetch_all_players(&self) -> Result<Vec<Player>, ClientError> {
        Ok(self
            .players
            .borrow()
            .iter()
            .map(|player| Player {
                team: None,
                ..player.clone()
            })
            .collect())
    }

    async fn fetch_single_player(&self, player_id: PlayerId) -> Result<Player, ClientError> {
        self.players
            .borrow()
            .iter()
            .find(|player| player.id == player_id)
            .cloned()
            .ok_or_else(|| {
                ClientError::Api(ApiError::new(
                    "NotFoundError",
                    format!("Player {player_id} not found"),
                ))
            })
    }

    async fn add_new_player(&self, new_player: &NewPlayer) -> Result<Player, ClientError> {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        let player = Player {
            breed: new_player.breed.clone(),
            status: new_player.status,
            image_url: new_player.image_url.clone(),
            ..player(id, &new_player.name)
        };
        self.players.borrow_mut().push(player.clone());
        Ok(player)
    }

    async fn remove_player(&self, player_id: PlayerId) -> Result<(), ClientError> {
        self.players
            .borrow_mut()
            .retain(|player| player.id != player_id);
        Ok(())
    }
}

/// A fresh `<main>` attached to the test page's body.
pub(crate) fn attach_container() -> Element {
    let document = global_document().unwrap();
    let container = document.create_element("main").unwrap();
    document.body().unwrap().append_child(&container).unwrap();
    container
}

pub(crate) fn button_labelled(root: &Element, label: &str) -> Option<HtmlElement> {
    let buttons = root.query_selector_all("button").unwrap();
    (0..buttons.length())
        .filter_map(|index| buttons.item(index))
        .find(|button| button.text_content().as_deref() == Some(label))
        .map(|button| button.unchecked_into())
}

/// Wait until every future spawned by an event handler has run to completion.
pub(crate) async fn settle() {
    let promise = Promise::new(&mut |resolve, _reject| {
        global_window()
            .unwrap()
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, 0)
            .unwrap();
    });
    JsFuture::from(promise).await.unwrap();
}
