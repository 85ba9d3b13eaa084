//! Labeled input field for the auth forms.

use leptos::prelude::*;

use crate::theme::Theme;

/// A labeled, theme-styled text input bound to a string signal.
///
/// `on_edit` fires on every keystroke so the owning form can drop stale
/// error messages as soon as the user starts correcting the input.
#[component]
pub fn TextField(
    id: &'static str,
    label: &'static str,
    placeholder: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    value: RwSignal<String>,
    #[prop(into)] disabled: Signal<bool>,
    #[prop(optional)] on_edit: Option<Callback<()>>,
) -> impl IntoView {
    let theme = expect_context::<Theme>();
    let label_style = format!("color: {};", theme.field_ink);
    let input_style = format!(
        "border: 1px solid {}; border-radius: 12px; color: {}; background-color: rgba(255, 255, 255, 0.9);",
        theme.field_ink, theme.field_ink
    );

    view! {
        <div class="form-field">
            <label class="form-field__label" for=id style=label_style>
                {label}
            </label>
            <input
                class="form-field__input"
                id=id
                name=id
                type=input_type
                placeholder=placeholder
                style=input_style
                prop:value=move || value.get()
                on:input=move |ev| {
                    value.set(event_target_value(&ev));
                    if let Some(on_edit) = on_edit.as_ref() {
                        on_edit.run(());
                    }
                }
                disabled=move || disabled.get()
            />
        </div>
    }
}
