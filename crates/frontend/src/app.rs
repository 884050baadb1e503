use crate::app_shell::AppShell;
use crate::layout::global_context::AppGlobalContext;
use crate::system::env::EnvContext;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    // Provide the AppGlobalContext store to the whole app via context.
    let ctx = AppGlobalContext::new();
    ctx.init_persistence();
    provide_context(ctx);

    let env = EnvContext::new();
    env.load();
    provide_context(env);

    view! {
        <ConfigProvider>
            <AppShell />
        </ConfigProvider>
    }
}
