use super::breadcrumbs::Breadcrumbs;
use super::tabs::TabBar;
use crate::layout::global_context::AppGlobalContext;
use leptos::prelude::*;

#[component]
pub fn Center(children: Children) -> impl IntoView {
    let tabs_store = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");
    let has_tabs = move || tabs_store.opened.with(|tabs| !tabs.is_empty());

    view! {
        <div data-zone="center" class="app-tabs" style="flex: 1; overflow: auto;">
            <TabBar />
            <Show
                when=has_tabs
                fallback=|| view! {
                    <div class="placeholder">"Choose a page in the menu on the left"</div>
                }
            >
                <Breadcrumbs />
            </Show>
            {children()}
        </div>
    }
}
