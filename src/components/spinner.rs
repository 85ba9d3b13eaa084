//! Inline busy indicator for submit buttons.

use leptos::prelude::*;

/// Swapped into the submit button while a request is outstanding.
#[component]
pub fn Spinner() -> impl IntoView {
    view! { <span class="spinner" role="status" aria-label="Loading"></span> }
}
