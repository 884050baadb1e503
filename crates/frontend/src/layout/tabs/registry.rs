//! Tab content registry: tab.key → View

use crate::dashboards::d400_line_tracking::ui::LineTrackingDashboard;
use crate::dashboards::d401_factory_overview::ui::FactoryOverviewDashboard;
use crate::domain::a001_production_line::ui::details::LineSettingsDetails;
use crate::domain::a002_work_order::ui::form::WorkOrderForm;
use crate::layout::global_context::AppGlobalContext;
use crate::usecases::u501_rfid_registration;
use crate::usecases::u502_rfid_checking;
use crate::usecases::u503_rfid_reject;
use leptos::logging::log;
use leptos::prelude::*;

/// Renders the content of a tab.
///
/// `tabs_store` is used by pages that open other tabs.
pub fn render_tab_content(key: &str, tabs_store: AppGlobalContext) -> AnyView {
    match key {
        // Dashboards
        "d400_line_tracking" => view! { <LineTrackingDashboard /> }.into_any(),
        "d401_factory_overview" => view! {
            <FactoryOverviewDashboard
                on_open_line=Callback::new(move |line_id: String| {
                    tabs_store.select_line(Some(line_id));
                    tabs_store.open_tab(
                        "d400_line_tracking",
                        super::tab_label_for_key("d400_line_tracking"),
                    );
                })
            />
        }
        .into_any(),

        // Aggregates
        "a001_production_line" => view! { <LineSettingsDetails /> }.into_any(),
        "a002_work_order" => view! { <WorkOrderForm /> }.into_any(),

        // Use cases
        "u501_rfid_registration" => view! { <u501_rfid_registration::RegistrationView /> }.into_any(),
        "u502_rfid_checking" => view! { <u502_rfid_checking::CheckingView /> }.into_any(),
        "u503_rfid_reject" => view! { <u503_rfid_reject::RejectView /> }.into_any(),

        _ => {
            log!("Unknown tab type: {}", key);
            view! { <div class="placeholder">{"Not implemented yet"}</div> }.into_any()
        }
    }
}
