use crate::domain::a001_production_line::api::fetch_lines;
use crate::domain::a002_work_order::api::{fetch_line_work_order, fetch_work_orders};
use crate::domain::a002_work_order::ui::WorkOrderSelector;
use crate::domain::a003_rfid_garment::api::register_garment;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::LineSelect;
use crate::shared::page_frame::PageFrame;
use crate::usecases::common::{complete_scan, record_result, ScanInput, ScanSessionPanel};
use chrono::Utc;
use contracts::domain::a001_production_line::ProductionLine;
use contracts::domain::a002_work_order::{WorkOrderCatalog, WorkOrderSelection};
use contracts::domain::a003_rfid_garment::ScanStatus;
use contracts::usecases::common::{ScanDecision, ScanSession, UseCaseMetadata};
use contracts::usecases::u501_rfid_registration::{
    ready_to_scan, register_request, RfidRegistration,
};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn RegistrationView() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let lines = RwSignal::new(Vec::<ProductionLine>::new());
    let catalog = RwSignal::new(WorkOrderCatalog::default());
    let selection = RwSignal::new(WorkOrderSelection::default());
    let session = RwSignal::new(ScanSession::new());
    let scan_error = RwSignal::new(None::<String>);

    spawn_local(async move {
        match fetch_lines().await {
            Ok(data) => lines.set(data),
            Err(e) => log::error!("Failed to load lines: {}", e),
        }
    });
    spawn_local(async move {
        match fetch_work_orders().await {
            Ok(orders) => catalog.set(WorkOrderCatalog::new(orders)),
            Err(e) => log::error!("Failed to load work orders: {}", e),
        }
    });

    // Preselect the work order the line is running
    Effect::new(move |_| {
        let Some(line_id) = ctx.selected_line.get() else {
            return;
        };
        spawn_local(async move {
            if let Ok(Some(current)) = fetch_line_work_order(&line_id).await {
                selection.set(WorkOrderSelection::from(&current));
            }
        });
    });

    let ready = Memo::new(move |_| {
        let line_id = ctx.selected_line.get().unwrap_or_default();
        selection
            .with(|s| ready_to_scan(&line_id, s))
            .map_err(|e| e.to_string())
    });

    let on_scan = Callback::new(move |raw: String| {
        scan_error.set(None);
        let line_id = ctx.selected_line.get_untracked().unwrap_or_default();
        let current = selection.get_untracked();
        if let Err(e) = ready_to_scan(&line_id, &current) {
            scan_error.set(Some(e.to_string()));
            return;
        }

        match session.try_update(|s| s.begin(&raw, Utc::now())) {
            Some(ScanDecision::Submit(code)) => match register_request(&code, &line_id, &current) {
                Ok(request) => spawn_local(async move {
                    let result = register_garment(&request).await;
                    complete_scan(session, &code, ScanStatus::Registered, result);
                }),
                Err(e) => record_result(session, &code, ScanStatus::Failed, e.to_string()),
            },
            Some(ScanDecision::Duplicate(code)) => {
                log::info!("duplicate tag {} ignored", code);
            }
            Some(ScanDecision::Invalid(e)) => scan_error.set(Some(e.to_string())),
            None => {}
        }
    });

    view! {
        <PageFrame page_id="u501_rfid_registration--usecase" category="usecase">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{RfidRegistration::display_name()}</h1>
                </div>
            </div>
            <div class="page__content">
                <p class="page__description">{RfidRegistration::description()}</p>

                <div class="scan-layout">
                    <div class="scan-layout__setup">
                        <LineSelect
                            lines=lines
                            selected=Signal::derive(move || ctx.selected_line.get())
                            on_select=Callback::new(move |id| ctx.select_line(id))
                        />
                        <WorkOrderSelector catalog=catalog selection=selection />
                    </div>

                    <div class="scan-layout__scan">
                        <ScanInput
                            on_scan=on_scan
                            disabled=Signal::derive(move || ready.with(Result::is_err))
                        />
                        {move || ready.get().err().map(|e| view! {
                            <div class="form__hint">{format!("{e} before scanning")}</div>
                        })}
                        {move || scan_error.get().map(|e| view! {
                            <div class="alert alert--error">{e}</div>
                        })}
                        <ScanSessionPanel session=session export_prefix="rfid_registration" />
                    </div>
                </div>
            </div>
        </PageFrame>
    }
}
