//! Top bar: sidebar toggle, factory name, selected line.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::system::env::use_env;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let env = use_env();

    let toggle_sidebar = move |_| {
        ctx.toggle_left();
    };

    let is_sidebar_visible = move || ctx.left_open.get();
    let factory_name = move || env.config.with(|c| c.factory_name.clone());

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=toggle_sidebar
                    title=move || if is_sidebar_visible() { "Hide navigation" } else { "Show navigation" }
                >
                    {move || if is_sidebar_visible() {
                        icon("panel-left-close")
                    } else {
                        icon("panel-left-open")
                    }}
                </button>
                {icon("factory")}
                <span class="top-header__title">{factory_name}</span>
            </div>

            <div class="top-header__actions">
                <div class="top-header__line" title="Selected line">
                    {icon("target")}
                    <span>
                        {move || ctx.selected_line.get().unwrap_or_else(|| "No line selected".to_string())}
                    </span>
                </div>
                <Show when=move || !env.loaded.get()>
                    <span class="top-header__hint">"loading settings…"</span>
                </Show>
            </div>
        </div>
    }
}
