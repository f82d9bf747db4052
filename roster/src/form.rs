//! The "add a player" form.

use log::{info, warn};
use puppy_bowl_client::{NewPlayer, PlayerStatus};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;
use web_sys::{
    Document, Event, HtmlButtonElement, HtmlFormElement, HtmlInputElement, HtmlOptionElement,
    HtmlSelectElement,
};

use crate::render::{refresh_roster, RosterView};
use crate::utils::create_element;

/// Id of the form element the page has to provide.
pub const FORM_ID: &str = "new-player-form";
pub const SUBMIT_LABEL: &str = "Add Player";

#[derive(Clone)]
struct PlayerFields {
    name: HtmlInputElement,
    breed: HtmlInputElement,
    image_url: HtmlInputElement,
    status: HtmlSelectElement,
}

impl PlayerFields {
    fn build(document: &Document) -> Result<Self, JsValue> {
        let status: HtmlSelectElement = create_element(document, "select")?;
        status.set_id("player-status");
        for option in PlayerStatus::ALL {
            let option = HtmlOptionElement::new_with_text_and_value(option.label(), option.as_str())?;
            status.append_child(&option)?;
        }

        Ok(PlayerFields {
            name: input(document, "text", "player-name", "Puppy Name")?,
            breed: input(document, "text", "player-breed", "Breed")?,
            image_url: input(document, "url", "player-image-url", "Image URL")?,
            status,
        })
    }

    fn append_to(&self, form: &HtmlFormElement) -> Result<(), JsValue> {
        form.append_child(&self.name)?;
        form.append_child(&self.breed)?;
        form.append_child(&self.image_url)?;
        form.append_child(&self.status)?;
        Ok(())
    }

    fn read(&self) -> NewPlayer {
        let status = self.status.value().parse().unwrap_or_else(|error| {
            warn!("{error}, adding the player to the bench");
            PlayerStatus::default()
        });
        NewPlayer {
            name: self.name.value(),
            breed: self.breed.value(),
            image_url: self.image_url.value(),
            status,
        }
    }

    fn reset(&self) {
        self.name.set_value("");
        self.breed.set_value("");
        self.image_url.set_value("");
        self.status.set_value(PlayerStatus::default().as_str());
    }
}

fn input(
    document: &Document,
    kind: &str,
    id: &str,
    placeholder: &str,
) -> Result<HtmlInputElement, JsValue> {
    let input: HtmlInputElement = create_element(document, "input")?;
    input.set_type(kind);
    input.set_id(id);
    input.set_placeholder(placeholder);
    input.set_required(true);
    Ok(input)
}

/// Fill `form` with the new player inputs and a submit button, and hook up submission.
///
/// Submitting adds the player, clears the inputs and re-renders the roster into `view`.
/// Calling this again on a form that already has the inputs does nothing.
pub fn render_new_player_form(form: &HtmlFormElement, view: &RosterView) -> Result<(), JsValue> {
    if form.query_selector("#player-name")?.is_some() {
        warn!("The new player form is already set up");
        return Ok(());
    }
    let document = form
        .owner_document()
        .ok_or_else(|| JsValue::from_str("form has no owner document"))?;

    let fields = PlayerFields::build(&document)?;
    fields.append_to(form)?;
    let submit: HtmlButtonElement = create_element(&document, "button")?;
    submit.set_type("submit");
    submit.set_text_content(Some(SUBMIT_LABEL));
    form.append_child(&submit)?;

    let on_submit = {
        let view = view.clone();
        Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            event.prevent_default();
            let new_player = fields.read();
            let fields = fields.clone();
            let view = view.clone();
            spawn_local(async move { add_and_refresh(&view, &fields, new_player).await });
        })
    };
    form.add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref())?;
    on_submit.forget();
    Ok(())
}

async fn add_and_refresh(view: &RosterView, fields: &PlayerFields, new_player: NewPlayer) {
    if let Ok(player) = view.api().add_new_player(&new_player).await {
        info!("{} joined the roster as player #{}", player.name, player.id);
    }
    fields.reset();
    refresh_roster(view).await;
}
