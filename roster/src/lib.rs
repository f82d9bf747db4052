/*!
Puppy Bowl roster manager: lists the players of a cohort as cards, shows a player's details,
and adds or removes players through the roster API.

The page must provide a `<main>` element, which every render replaces the contents of, and an
empty `<form id="new-player-form">`. [init] wires both up; the binary calls it on load.
*/

use std::rc::Rc;

use log::{error, info};
use puppy_bowl_client::{js_error_message, ApiClient, RosterApi};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlFormElement;

pub mod config;
pub mod form;
pub mod render;
#[cfg(test)]
mod testing;
mod utils;

pub use config::Config;
pub use form::render_new_player_form;
pub use render::{refresh_roster, render_all_players, render_single_player, RosterView};

/// Render the current roster into `<main>`, then set up the new player form.
pub async fn init(config: &Config) -> Result<(), JsValue> {
    let document = utils::global_document()?;
    let main = document
        .query_selector("main")?
        .ok_or_else(|| JsValue::from_str("no <main> element on page"))?;
    let form = document
        .get_element_by_id(form::FORM_ID)
        .ok_or_else(|| JsValue::from_str("no #new-player-form element on page"))?
        .dyn_into::<HtmlFormElement>()?;

    let api: Rc<dyn RosterApi> = Rc::new(ApiClient::new(config.api_url()));
    info!("Using roster at {}", config.api_url());
    let view = RosterView::new(main, api);

    refresh_roster(&view).await;

    render_new_player_form(&form, &view).map_err(|error| {
        error!(
            "Uh oh, trouble rendering the new player form! {}",
            js_error_message(&error)
        );
        error
    })
}
