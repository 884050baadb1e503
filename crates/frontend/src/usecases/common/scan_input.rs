use crate::shared::icons::icon;
use leptos::html;
use leptos::prelude::*;

/// Text field fed by the RFID reader.
///
/// Readers type the code and press Enter; the field is cleared and keeps
/// focus so the next tag can be read right away.
#[component]
pub fn ScanInput(
    on_scan: Callback<String>,
    #[prop(optional, into)] disabled: Signal<bool>,
    #[prop(optional, into)] placeholder: MaybeProp<String>,
) -> impl IntoView {
    let value = RwSignal::new(String::new());
    let input_ref = NodeRef::<html::Input>::new();

    let submit = move || {
        let raw = value.get_untracked();
        if raw.trim().is_empty() {
            return;
        }
        value.set(String::new());
        on_scan.run(raw);
        if let Some(input) = input_ref.get_untracked() {
            let _ = input.focus();
        }
    };

    view! {
        <div class="scan-input">
            {icon("tag")}
            <input
                node_ref=input_ref
                class="form__input scan-input__field"
                type="text"
                autocomplete="off"
                autofocus=true
                placeholder=move || placeholder.get().unwrap_or_else(|| "Scan RFID tag…".to_string())
                disabled=move || disabled.get()
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
                on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                    if ev.key() == "Enter" {
                        ev.prevent_default();
                        submit();
                    }
                }
            />
        </div>
    }
}
