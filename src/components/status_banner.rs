//! Error and success banners for the auth forms.

use leptos::prelude::*;

use crate::state::form::FormStatus;
use crate::theme::Theme;

/// Renders the status messages of a form, one banner per kind. Hidden
/// entirely while no message is set.
#[component]
pub fn StatusBanner(status: RwSignal<FormStatus>) -> impl IntoView {
    let theme = expect_context::<Theme>();
    let error_style = format!(
        "color: {}; background-color: {};",
        theme.error_fg, theme.error_bg
    );
    let notice_style = format!(
        "color: {}; background-color: {};",
        theme.success_fg, theme.success_bg
    );

    view! {
        <Show when=move || status.get().error.is_some()>
            <div class="form-banner form-banner--error" style=error_style.clone()>
                {move || status.get().error.unwrap_or_default()}
            </div>
        </Show>
        <Show when=move || status.get().notice.is_some()>
            <div class="form-banner form-banner--notice" style=notice_style.clone()>
                {move || status.get().notice.unwrap_or_default()}
            </div>
        </Show>
    }
}
