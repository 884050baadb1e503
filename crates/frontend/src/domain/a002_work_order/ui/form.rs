//! Bind a work order to a production line.

use super::WorkOrderSelector;
use crate::domain::a001_production_line::api::fetch_lines;
use crate::domain::a002_work_order::api;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::LineSelect;
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use crate::shared::page_frame::PageFrame;
use contracts::domain::a001_production_line::ProductionLine;
use contracts::domain::a002_work_order::{WorkOrderCatalog, WorkOrderSelection};
use contracts::domain::a003_rfid_garment::ScanResponse;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[component]
pub fn WorkOrderForm() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let lines = RwSignal::new(Vec::<ProductionLine>::new());
    let catalog = RwSignal::new(WorkOrderCatalog::default());
    let selection = RwSignal::new(WorkOrderSelection::default());
    let catalog_error = RwSignal::new(None::<String>);
    let submitting = RwSignal::new(false);
    let result = RwSignal::new(None::<(bool, String)>);

    spawn_local(async move {
        match fetch_lines().await {
            Ok(data) => lines.set(data),
            Err(e) => log::error!("Failed to load lines: {}", e),
        }
    });
    spawn_local(async move {
        match api::fetch_work_orders().await {
            Ok(orders) => {
                log::debug!("work-order catalog: {} rows", orders.len());
                catalog.set(WorkOrderCatalog::new(orders));
            }
            Err(e) => {
                log::error!("Failed to load work orders: {}", e);
                catalog_error.set(Some(e.to_string()));
            }
        }
    });

    // Start from what the line is currently running
    Effect::new(move |_| {
        let Some(line_id) = ctx.selected_line.get() else {
            selection.set(WorkOrderSelection::default());
            return;
        };
        spawn_local(async move {
            match api::fetch_line_work_order(&line_id).await {
                Ok(Some(current)) => selection.set(WorkOrderSelection::from(&current)),
                Ok(None) => selection.set(WorkOrderSelection::default()),
                Err(e) => log::warn!("Failed to load work order of {}: {}", line_id, e),
            }
        });
    });

    let missing = Signal::derive(move || {
        let line_selected = ctx.selected_line.with(Option::is_some);
        catalog_error.with(|err| {
            catalog.with(|c| {
                selection.with(|s| submit_blocker(line_selected, err.is_some(), c, s))
            })
        })
    });

    let can_submit = Signal::derive(move || missing.with(Option::is_none) && !submitting.get());

    let submit = move |_| {
        let Some(line_id) = ctx.selected_line.get_untracked() else {
            return;
        };
        if missing.get_untracked().is_some() {
            return;
        }
        let Ok(work_order) = selection.with_untracked(|s| s.to_work_order()) else {
            return;
        };
        submitting.set(true);
        spawn_local(async move {
            let outcome = match api::assign_work_order(&line_id, &work_order).await {
                Ok(resp) => assign_outcome(&resp, &work_order.summary(), &line_id),
                Err(e) => {
                    log::error!("Failed to assign work order: {}", e);
                    (false, e.to_string())
                }
            };
            result.set(Some(outcome));
            submitting.set(false);
        });
    };

    view! {
        <PageFrame page_id="a002_work_order--detail" category="detail">
            <div class="page__header">
                <div class="page__header-left">
                    {icon("list")}
                    <h1 class="page__title">"Work order"</h1>
                    <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Brand>
                        {move || catalog.with(|c| c.len()).to_string()}
                    </Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| selection.update(|s| s.clear())
                    >
                        "Clear"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=submit
                        disabled=Signal::derive(move || !can_submit.get())
                    >
                        {move || if submitting.get() { "Saving..." } else { "Assign to line" }}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || catalog_error.get().map(|err| view! {
                    <div class="alert alert--error">{format!("Failed to load work orders: {err}")}</div>
                })}

                <div class="form" style="max-width: 480px;">
                    <LineSelect
                        lines=lines
                        selected=Signal::derive(move || ctx.selected_line.get())
                        on_select=Callback::new(move |id| ctx.select_line(id))
                    />
                    <WorkOrderSelector catalog=catalog selection=selection />
                    {move || missing.get().map(|m| view! {
                        <div class="form__hint">{m}</div>
                    })}
                </div>
            </div>

            {move || result.get().map(|(ok, message)| view! {
                <Modal
                    title={if ok { "Work order assigned" } else { "Not assigned" }}
                    on_close=Callback::new(move |_| result.set(None))
                >
                    <div class={if ok { "alert alert--success" } else { "alert alert--error" }}>
                        {message}
                    </div>
                </Modal>
            })}
        </PageFrame>
    }
}

/// Why the selection cannot be submitted yet, `None` when it can.
fn submit_blocker(
    line_selected: bool,
    catalog_failed: bool,
    catalog: &WorkOrderCatalog,
    selection: &WorkOrderSelection,
) -> Option<String> {
    if catalog_failed {
        return Some("Work-order list is not available".to_string());
    }
    if catalog.is_empty() {
        return Some("Work-order list is empty".to_string());
    }
    if !line_selected {
        return Some("Select a line".to_string());
    }
    if let Err(e) = selection.to_work_order() {
        return Some(e.to_string());
    }
    if !catalog.contains(selection) {
        return Some("This combination is not in the work-order list".to_string());
    }
    None
}

fn assign_outcome(resp: &ScanResponse, summary: &str, line_id: &str) -> (bool, String) {
    if resp.success {
        (true, format!("{} assigned to line {}", summary, line_id))
    } else {
        (false, resp.failure_message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a002_work_order::{WorkOrder, WorkOrderField};

    fn order() -> WorkOrder {
        WorkOrder {
            wo: "WO-1".into(),
            style: "ST1".into(),
            buyer: "ACME".into(),
            item: "Shirt".into(),
            color: "Blue".into(),
            size: "M".into(),
        }
    }

    fn full_selection() -> WorkOrderSelection {
        WorkOrderSelection::from(&order())
    }

    #[test]
    fn test_blocked_until_complete() {
        let catalog = WorkOrderCatalog::new(vec![order()]);
        let mut partial = full_selection();
        partial.set(WorkOrderField::Color, "");
        assert!(submit_blocker(true, false, &catalog, &partial).is_some());
        assert!(submit_blocker(false, false, &catalog, &full_selection()).is_some());
        assert_eq!(submit_blocker(true, false, &catalog, &full_selection()), None);
    }

    #[test]
    fn test_blocked_without_catalog() {
        let empty = WorkOrderCatalog::default();
        assert!(submit_blocker(true, true, &empty, &full_selection()).is_some());
        assert_eq!(
            submit_blocker(true, false, &empty, &full_selection()),
            Some("Work-order list is empty".to_string())
        );
    }

    #[test]
    fn test_assign_outcome_messages() {
        let refused = ScanResponse::default();
        assert_eq!(
            assign_outcome(&refused, "WO-1", "L01"),
            (false, "Rejected by server".to_string())
        );
        let ok = ScanResponse {
            success: true,
            message: String::new(),
        };
        assert!(assign_outcome(&ok, "WO-1", "L01").0);
    }
}
