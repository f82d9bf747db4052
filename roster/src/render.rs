//! Cards for the whole roster and for a single player.
//!
//! Every render replaces the contents of the view's container. Button handlers fetch fresh
//! data and render again; nothing is cached between renders.

use std::cell::RefCell;
use std::rc::Rc;

use log::{error, warn};
use puppy_bowl_client::{js_error_message, Player, PlayerId, RosterApi};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element, HtmlButtonElement, HtmlImageElement};

use crate::utils::create_element;

/// Shown instead of cards when the roster is empty.
pub const EMPTY_ROSTER_MESSAGE: &str = "No players available!";
/// Team label of a player without a team.
pub const UNASSIGNED_TEAM: &str = "Unassigned";

pub const SEE_DETAILS_LABEL: &str = "See details";
pub const REMOVE_LABEL: &str = "Remove from roster";
pub const BACK_LABEL: &str = "Back to all players";

type ClickHandler = Closure<dyn FnMut()>;

/// The element cards are rendered into, and the API its buttons talk to.
///
/// Click handlers of the rendered buttons are owned by the view and dropped on the next
/// render, together with the buttons they were attached to.
#[derive(Clone)]
pub struct RosterView {
    container: Element,
    api: Rc<dyn RosterApi>,
    handlers: Rc<RefCell<Vec<ClickHandler>>>,
}

impl RosterView {
    pub fn new(container: Element, api: Rc<dyn RosterApi>) -> Self {
        RosterView {
            container,
            api,
            handlers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn container(&self) -> &Element {
        &self.container
    }

    pub fn api(&self) -> &dyn RosterApi {
        self.api.as_ref()
    }

    pub(crate) fn document(&self) -> Result<Document, JsValue> {
        self.container
            .owner_document()
            .ok_or_else(|| JsValue::from_str("render target has no owner document"))
    }

    /// Empty the container and release the handlers of the buttons it held.
    fn clear(&self) {
        self.container.set_inner_html("");
        self.handlers.borrow_mut().clear();
    }

    #[cfg(test)]
    pub(crate) fn handler_count(&self) -> usize {
        self.handlers.borrow().len()
    }
}

/// Replace the container's contents with one card per player, or with a placeholder
/// message if there are none.
pub fn render_all_players(view: &RosterView, players: &[Player]) -> Result<(), JsValue> {
    let document = view.document()?;
    view.clear();

    if players.is_empty() {
        let message = document.create_element("p")?;
        message.set_text_content(Some(EMPTY_ROSTER_MESSAGE));
        view.container.append_child(&message)?;
        return Ok(());
    }

    for player in players {
        let card = player_card(&document, player)?;
        let player_id = player.id;
        let see_details = button(view, &document, SEE_DETAILS_LABEL, {
            let view = view.clone();
            move || {
                let view = view.clone();
                spawn_local(async move { show_player(&view, player_id).await });
            }
        })?;
        let remove = button(view, &document, REMOVE_LABEL, {
            let view = view.clone();
            move || {
                let view = view.clone();
                spawn_local(async move { remove_and_refresh(&view, player_id).await });
            }
        })?;
        card.append_child(&see_details)?;
        card.append_child(&remove)?;
        view.container.append_child(&card)?;
    }
    Ok(())
}

/// Replace the container's contents with the details of one player.
pub fn render_single_player(view: &RosterView, player: &Player) -> Result<(), JsValue> {
    let document = view.document()?;
    view.clear();

    let card = player_card(&document, player)?;
    let breed = document.create_element("p")?;
    breed.set_text_content(Some(&format!("Breed: {}", player.breed)));
    let team = document.create_element("p")?;
    let team_name = player.team_name().unwrap_or(UNASSIGNED_TEAM);
    team.set_text_content(Some(&format!("Team: {team_name}")));
    let back = button(view, &document, BACK_LABEL, {
        let view = view.clone();
        move || {
            let view = view.clone();
            spawn_local(async move { refresh_roster(&view).await });
        }
    })?;

    card.append_child(&breed)?;
    card.append_child(&team)?;
    card.append_child(&back)?;
    view.container.append_child(&card)?;
    Ok(())
}

/// Fetch the whole roster and render it. If the fetch fails the current view stays.
pub async fn refresh_roster(view: &RosterView) {
    match view.api.fetch_all_players().await {
        Ok(players) => report(render_all_players(view, &players), "rendering the roster"),
        Err(error) => warn!("Keeping the current view, the roster is unavailable: {error}"),
    }
}

async fn show_player(view: &RosterView, player_id: PlayerId) {
    match view.api.fetch_single_player(player_id).await {
        Ok(player) => report(
            render_single_player(view, &player),
            &format!("rendering player #{player_id}"),
        ),
        Err(error) => warn!("Keeping the current view, player #{player_id} is unavailable: {error}"),
    }
}

async fn remove_and_refresh(view: &RosterView, player_id: PlayerId) {
    // best-effort: the refreshed roster shows whether the removal went through
    if let Err(error) = view.api.remove_player(player_id).await {
        warn!("Removing player #{player_id} failed, refreshing anyway: {error}");
    }
    refresh_roster(view).await;
}

fn report(result: Result<(), JsValue>, context: &str) {
    if let Err(error) = result {
        error!("Failed {context}: {}", js_error_message(&error));
    }
}

/// Image, name and id; the part both card kinds share.
fn player_card(document: &Document, player: &Player) -> Result<Element, JsValue> {
    let card = document.create_element("div")?;
    card.set_class_name("player-card");
    card.set_attribute("data-player-id", &player.id.to_string())?;

    let image: HtmlImageElement = create_element(document, "img")?;
    image.set_src(&player.image_url);
    image.set_alt(&player.name);

    let name = document.create_element("h2")?;
    name.set_text_content(Some(&player.name));

    let id = document.create_element("p")?;
    id.set_text_content(Some(&format!("ID: {}", player.id)));

    card.append_child(&image)?;
    card.append_child(&name)?;
    card.append_child(&id)?;
    Ok(card)
}

fn button(
    view: &RosterView,
    document: &Document,
    label: &str,
    on_click: impl FnMut() + 'static,
) -> Result<HtmlButtonElement, JsValue> {
    let button: HtmlButtonElement = create_element(document, "button")?;
    button.set_type("button");
    button.set_text_content(Some(label));
    let on_click = ClickHandler::new(on_click);
    button.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    view.handlers.borrow_mut().push(on_click);
    Ok(button)
}
