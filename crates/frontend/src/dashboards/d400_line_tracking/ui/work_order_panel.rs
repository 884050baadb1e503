use crate::shared::icons::icon;
use contracts::domain::a002_work_order::{WorkOrder, WorkOrderField};
use leptos::prelude::*;

/// Work order currently running on the line.
///
/// `work_order` is `None` until the first poll answers and `Some(None)` when
/// the line has nothing assigned.
#[component]
pub fn WorkOrderPanel(#[prop(into)] work_order: Signal<Option<Option<WorkOrder>>>) -> impl IntoView {
    view! {
        <div class="work-order-panel">
            <div class="work-order-panel__title">
                {icon("list")}
                <span>"Current work order"</span>
            </div>
            {move || match work_order.get() {
                None => view! {
                    <div class="work-order-panel__empty">"Loading…"</div>
                }.into_any(),
                Some(None) => view! {
                    <div class="work-order-panel__empty">"No work order assigned"</div>
                }.into_any(),
                Some(Some(wo)) => view! {
                    <dl class="work-order-panel__fields">
                        {WorkOrderField::ALL.iter().map(|field| {
                            let value = wo.get(*field).to_string();
                            view! {
                                <dt>{field.label()}</dt>
                                <dd>{if value.is_empty() { "—".to_string() } else { value }}</dd>
                            }
                        }).collect_view()}
                    </dl>
                }.into_any(),
            }}
        </div>
    }
}
