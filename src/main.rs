mod app;
mod components;
mod config;
mod geolocation;
mod leaflet;
mod logging;
mod storage;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = config::load();
    logging::init(&config.log.filter);

    leptos::mount::mount_to_body(move || view! { <App config=config /> });
}
