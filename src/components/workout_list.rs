use leptos::prelude::*;
use mapty_core::{Workout, WorkoutId};

use crate::app::TrackerSignal;
use crate::components::workout_item::WorkoutItem;

/// Every logged workout, oldest first.
#[component]
pub fn WorkoutList(tracker: TrackerSignal, on_focus: Callback<WorkoutId>) -> impl IntoView {
    // Form and map events update the tracker without touching the list;
    // the memo keeps those from reaching the entries.
    let workouts = Memo::new(move |_| tracker.with(|t| t.workouts().to_vec()));

    view! {
        <ul class="workouts">
            <Show when=move || workouts.with(|w| w.is_empty())>
                <li class="workouts-empty">"No workouts yet."</li>
            </Show>
            <For
                each=move || workouts.get()
                key=|workout: &Workout| workout.id()
                children=move |workout: Workout| {
                    view! { <WorkoutItem workout=workout on_focus=on_focus /> }
                }
            />
        </ul>
    }
}
