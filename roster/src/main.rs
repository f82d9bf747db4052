use log::{error, info};
use puppy_bowl_client::js_error_message;
use puppy_bowl_roster::{init, Config};
use wasm_bindgen_futures::spawn_local;

fn main() {
    puppy_bowl_client::set_panic_hook();
    let config = Config::from_location();
    wasm_logger::init(wasm_logger::Config::new(config.log_level));
    info!("Starting the roster for cohort {}", config.cohort);
    spawn_local(async move {
        if let Err(error) = init(&config).await {
            error!("Failed to start the roster: {}", js_error_message(&error));
        }
    });
}
