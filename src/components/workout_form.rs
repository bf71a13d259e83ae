use std::time::Duration;

use leptos::html::Input;
use leptos::prelude::*;
use mapty_core::{FormInput, SubmitError, WorkoutKind};
use tracing::warn;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::app::TrackerSignal;

/// The workout entry form. Shown while the tracker's form is anchored to a
/// map click; the type selector swaps the cadence and elevation rows.
#[component]
pub fn WorkoutForm(tracker: TrackerSignal) -> impl IntoView {
    let (distance, set_distance) = signal(String::new());
    let (duration, set_duration) = signal(String::new());
    let (cadence, set_cadence) = signal(String::new());
    let (elevation, set_elevation) = signal(String::new());
    // Keeps the form out of the layout for a moment after a submit.
    let (collapsed, set_collapsed) = signal(false);

    let hide_delay =
        tracker.with_untracked(|t| Duration::from_millis(t.config().form.hide_delay_ms));
    let distance_ref = NodeRef::<Input>::new();

    let visible = move || tracker.with(|t| t.form().is_visible());
    let kind = move || tracker.with(|t| t.form().kind());
    let shows_cadence = move || tracker.with(|t| t.form().shows_cadence());
    let shows_elevation = move || tracker.with(|t| t.form().shows_elevation());
    let anchor = Memo::new(move |_| tracker.with(|t| t.form().anchor()));

    // Focus distance every time the form is (re)anchored
    Effect::new(move |_| {
        if anchor.get().is_none() {
            return;
        }
        if let Some(input) = distance_ref.get_untracked() {
            let _ = input.focus();
        }
    });

    let clear_and_collapse = move || {
        set_distance.set(String::new());
        set_duration.set(String::new());
        set_cadence.set(String::new());
        set_elevation.set(String::new());
        set_collapsed.set(true);

        let restore = Closure::once(move || set_collapsed.set(false));
        if let Some(window) = web_sys::window() {
            let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
                restore.as_ref().unchecked_ref(),
                i32::try_from(hide_delay.as_millis()).unwrap_or(i32::MAX),
            );
        }
        restore.forget();
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let input = FormInput {
            distance: distance.get_untracked(),
            duration: duration.get_untracked(),
            cadence: cadence.get_untracked(),
            elevation: elevation.get_untracked(),
        };

        match tracker.try_update(|t| t.submit(&input, chrono::Local::now())) {
            Some(Ok(_)) | Some(Err(SubmitError::Persist(_))) => clear_and_collapse(),
            Some(Err(e @ SubmitError::Invalid(_))) => alert(&e.to_string()),
            Some(Err(SubmitError::FormHidden)) => warn!("Submit without a map location ignored"),
            None => {}
        }
    };

    let on_kind_change = move |ev: leptos::ev::Event| {
        match WorkoutKind::parse(&event_target_value(&ev)) {
            Some(kind) => tracker.update(|t| t.select_kind(kind)),
            None => warn!("Unknown workout type selected"),
        }
    };

    let row_class = move |shown: bool| {
        if shown {
            "form__row"
        } else {
            "form__row form__row--hidden"
        }
    };

    view! {
        <form
            class="form"
            class:hidden=move || !visible()
            style:display=move || if collapsed.get() { "none" } else { "grid" }
            on:submit=on_submit
        >
            <div class="form__row">
                <label class="form__label">"Type"</label>
                <select
                    class="form__input form__input--type"
                    prop:value=move || kind().as_str()
                    on:change=on_kind_change
                >
                    {WorkoutKind::ALL
                        .into_iter()
                        .map(|k| view! { <option value=k.as_str()>{k.label()}</option> })
                        .collect::<Vec<_>>()}
                </select>
            </div>
            <div class="form__row">
                <label class="form__label">"Distance"</label>
                <input
                    class="form__input form__input--distance"
                    placeholder="km"
                    node_ref=distance_ref
                    prop:value=move || distance.get()
                    on:input=move |ev| set_distance.set(event_target_value(&ev))
                />
            </div>
            <div class="form__row">
                <label class="form__label">"Duration"</label>
                <input
                    class="form__input form__input--duration"
                    placeholder="min"
                    prop:value=move || duration.get()
                    on:input=move |ev| set_duration.set(event_target_value(&ev))
                />
            </div>
            <div class=move || row_class(shows_cadence())>
                <label class="form__label">"Cadence"</label>
                <input
                    class="form__input form__input--cadence"
                    placeholder="step/min"
                    disabled=move || !shows_cadence()
                    prop:value=move || cadence.get()
                    on:input=move |ev| set_cadence.set(event_target_value(&ev))
                />
            </div>
            <div class=move || row_class(shows_elevation())>
                <label class="form__label">"Elev Gain"</label>
                <input
                    class="form__input form__input--elevation"
                    placeholder="meters"
                    disabled=move || !shows_elevation()
                    prop:value=move || elevation.get()
                    on:input=move |ev| set_elevation.set(event_target_value(&ev))
                />
            </div>
            <button class="form__btn">"OK"</button>
        </form>
    }
}

fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}
