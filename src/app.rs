use leptos::html::Div;
use leptos::prelude::*;
use mapty_core::{AppConfig, Tracker, WorkoutId};
use tracing::{error, warn};
use wasm_bindgen_futures::spawn_local;

use crate::components::workout_form::WorkoutForm;
use crate::components::workout_list::WorkoutList;
use crate::geolocation;
use crate::leaflet::LeafletMap;
use crate::storage::BrowserStore;

/// The controller behind the whole page, held in a thread-local signal so
/// the Leaflet handle (a JS object) can live inside it.
pub type TrackerSignal = RwSignal<Tracker<BrowserStore, LeafletMap>, LocalStorage>;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let started: Result<Tracker<BrowserStore, LeafletMap>, _> = BrowserStore::local().and_then(|store| Tracker::start(store, config));
    let tracker: TrackerSignal = match started {
        Ok(tracker) => RwSignal::new_local(tracker),
        Err(e) => {
            error!("Failed to load saved workouts: {}", e);
            let message = String::from(e);
            return view! {
                <div class="fatal-error">
                    <h2>"Mapty could not start"</h2>
                    <p>{message}</p>
                </div>
            }
            .into_any();
        }
    };

    let map_ref = NodeRef::<Div>::new();

    // Locate the user once, then bring up the map and replay saved markers.
    Effect::new(move |_| {
        spawn_local(async move {
            let center = match geolocation::current_position().await {
                Ok(center) => center,
                Err(e) => {
                    warn!("{}; map disabled for this session", e);
                    return;
                }
            };
            let Some(element) = map_ref.get_untracked() else {
                warn!("Map container is not mounted");
                return;
            };

            let map_config = tracker.with_untracked(|t| t.config().map.clone());
            let map = match LeafletMap::initialize(&element, center, &map_config) {
                Ok(map) => map,
                Err(e) => {
                    error!("Failed to initialize map: {}", e);
                    return;
                }
            };
            map.on_click(move |coordinates| tracker.update(|t| t.map_clicked(coordinates)));
            tracker.update(|t| t.map_ready(map));
        });
    });

    let on_focus = Callback::new(move |id: WorkoutId| {
        tracker.update(|t| {
            t.focus(id);
        });
    });

    view! {
        <div class="app-layout">
            <aside class="sidebar">
                <h1 class="sidebar-title">"Mapty"</h1>
                <p class="sidebar-subtitle">
                    {move || {
                        if tracker.with(|t| t.is_map_ready()) {
                            "Click the map to log a workout"
                        } else {
                            "Waiting for your location..."
                        }
                    }}
                </p>
                <WorkoutForm tracker=tracker />
                <WorkoutList tracker=tracker on_focus=on_focus />
            </aside>
            <div id="map" class="map" node_ref=map_ref></div>
        </div>
    }
    .into_any()
}
