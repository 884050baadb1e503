//! Application shell
//!
//! - `AppShell` - waits for the environment config, then shows `MainLayout`
//! - `MainLayout` - Shell + Sidebar + Tabs

use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use crate::layout::left::sidebar::Sidebar;
use crate::layout::tabs::TabPage;
use crate::layout::Shell;
use crate::system::env::use_env;
use leptos::prelude::*;
use thaw::*;

/// Main application layout with Sidebar and Tabs.
///
/// Initializes router integration for syncing tabs with the URL (?active=...).
#[component]
fn MainLayout() -> impl IntoView {
    let tabs_store = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");
    let env = use_env();

    if tabs_store.selected_line.get_untracked().is_none() {
        let default_line = env.config.with_untracked(|c| c.default_line.clone());
        if default_line.is_some() {
            tabs_store.select_line(default_line);
        }
    }

    tabs_store.init_router_integration();

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=move || {
                view! {
                    <For
                        each=move || tabs_store.opened.get()
                        key=|tab| tab.key.clone()
                        children=move |tab: TabData| {
                            view! {
                                <TabPage tab=tab tabs_store=tabs_store />
                            }
                        }
                    />
                }.into_any()
            }
        />
    }
}

/// Polling intervals and the API base come from `/api/env`, so nothing that
/// talks to the backend is mounted before the config load finishes.
#[component]
pub fn AppShell() -> impl IntoView {
    let env = use_env();

    view! {
        <Show
            when=move || env.loaded.get()
            fallback=|| view! {
                <div class="app-loading">
                    <Spinner label="Loading settings..." />
                </div>
            }
        >
            <MainLayout />
        </Show>
    }
}
