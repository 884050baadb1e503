use crate::domain::a001_production_line::api::fetch_lines;
use crate::domain::a003_rfid_garment::api::scrap_garment;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::ui::Select;
use crate::shared::components::LineSelect;
use crate::shared::page_frame::PageFrame;
use crate::system::env::use_env;
use crate::usecases::common::{complete_scan, record_result, ScanInput, ScanSessionPanel};
use chrono::Utc;
use contracts::domain::a001_production_line::ProductionLine;
use contracts::domain::a003_rfid_garment::ScanStatus;
use contracts::usecases::common::{ScanDecision, ScanSession, UseCaseMetadata};
use contracts::usecases::u503_rfid_reject::{ready_to_scan, scrap_request, RfidReject};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn RejectView() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let env = use_env();

    let lines = RwSignal::new(Vec::<ProductionLine>::new());
    let reason = RwSignal::new(String::new());
    let session = RwSignal::new(ScanSession::new());
    let scan_error = RwSignal::new(None::<String>);

    spawn_local(async move {
        match fetch_lines().await {
            Ok(data) => lines.set(data),
            Err(e) => log::error!("Failed to load lines: {}", e),
        }
    });

    let reasons = Signal::derive(move || {
        env.config.with(|c| {
            c.reject_reasons
                .iter()
                .map(|r| (r.clone(), r.clone()))
                .collect::<Vec<_>>()
        })
    });

    let ready = Memo::new(move |_| {
        let line_id = ctx.selected_line.get().unwrap_or_default();
        reason
            .with(|r| ready_to_scan(&line_id, r))
            .map_err(|e| e.to_string())
    });

    let on_scan = Callback::new(move |raw: String| {
        scan_error.set(None);
        let line_id = ctx.selected_line.get_untracked().unwrap_or_default();
        let reason_now = reason.get_untracked();
        if let Err(e) = ready_to_scan(&line_id, &reason_now) {
            scan_error.set(Some(e.to_string()));
            return;
        }

        // A tag already scrapped in this session is flagged, never sent twice
        match session.try_update(|s| s.begin(&raw, Utc::now())) {
            Some(ScanDecision::Submit(code)) => match scrap_request(&code, &line_id, &reason_now) {
                Ok(request) => spawn_local(async move {
                    let result = scrap_garment(&request).await;
                    complete_scan(session, &code, ScanStatus::Rejected, result);
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
        <PageFrame page_id="u503_rfid_reject--usecase" category="usecase">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{RfidReject::display_name()}</h1>
                </div>
            </div>
            <div class="page__content">
                <p class="page__description">{RfidReject::description()}</p>

                <div class="scan-layout">
                    <div class="scan-layout__setup">
                        <LineSelect
                            lines=lines
                            selected=Signal::derive(move || ctx.selected_line.get())
                            on_select=Callback::new(move |id| ctx.select_line(id))
                        />
                        <Select
                            label="Reject reason"
                            value=Signal::derive(move || reason.get())
                            options=reasons
                            required=true
                            on_change=Callback::new(move |r: String| reason.set(r))
                        />
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
                        <ScanSessionPanel session=session export_prefix="rfid_reject" />
                    </div>
                </div>
            </div>
        </PageFrame>
    }
}
