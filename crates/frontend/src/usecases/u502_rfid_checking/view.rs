use crate::domain::a003_rfid_garment::api::lookup_rfid;
use crate::shared::date_utils::format_datetime;
use crate::shared::page_frame::PageFrame;
use crate::usecases::common::{record_result, ScanInput, ScanSessionPanel};
use chrono::Utc;
use contracts::domain::a002_work_order::WorkOrderField;
use contracts::domain::a003_rfid_garment::{RfidLookup, ScanStatus};
use contracts::usecases::common::{ScanDecision, ScanSession, UseCaseMetadata};
use contracts::usecases::u502_rfid_checking::{describe_lookup, RfidChecking};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn CheckingView() -> impl IntoView {
    let session = RwSignal::new(ScanSession::new());
    let last_lookup = RwSignal::new(None::<RfidLookup>);
    let scan_error = RwSignal::new(None::<String>);

    let on_scan = Callback::new(move |raw: String| {
        scan_error.set(None);
        match session.try_update(|s| s.begin(&raw, Utc::now())) {
            Some(ScanDecision::Submit(code)) => spawn_local(async move {
                let (status, message) = match lookup_rfid(&code).await {
                    Ok(Some(lookup)) if lookup.found() => {
                        let message = describe_lookup(&lookup);
                        last_lookup.set(Some(lookup));
                        (ScanStatus::Checked, message)
                    }
                    Ok(_) => {
                        last_lookup.set(None);
                        (ScanStatus::Failed, "Unknown tag".to_string())
                    }
                    Err(e) => {
                        log::warn!("lookup of {} failed: {}", code, e);
                        (ScanStatus::Failed, e.to_string())
                    }
                };
                record_result(session, &code, status, message);
            }),
            Some(ScanDecision::Duplicate(code)) => {
                log::info!("duplicate tag {} ignored", code);
            }
            Some(ScanDecision::Invalid(e)) => scan_error.set(Some(e.to_string())),
            None => {}
        }
    });

    view! {
        <PageFrame page_id="u502_rfid_checking--usecase" category="usecase">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{RfidChecking::display_name()}</h1>
                </div>
            </div>
            <div class="page__content">
                <p class="page__description">{RfidChecking::description()}</p>

                <div class="scan-layout">
                    <div class="scan-layout__setup">
                        {move || match last_lookup.get() {
                            Some(lookup) => view! { <LookupCard lookup=lookup /> }.into_any(),
                            None => view! {
                                <div class="placeholder">"Scan a tag to see where it belongs"</div>
                            }.into_any(),
                        }}
                    </div>

                    <div class="scan-layout__scan">
                        <ScanInput on_scan=on_scan />
                        {move || scan_error.get().map(|e| view! {
                            <div class="alert alert--error">{e}</div>
                        })}
                        <ScanSessionPanel session=session export_prefix="rfid_checking" />
                    </div>
                </div>
            </div>
        </PageFrame>
    }
}

#[component]
fn LookupCard(lookup: RfidLookup) -> impl IntoView {
    let dash = |v: Option<String>| v.filter(|s| !s.is_empty()).unwrap_or_else(|| "—".to_string());
    let work_order = lookup.work_order.clone();

    view! {
        <div class="lookup-card">
            <div class="lookup-card__title">
                <code>{lookup.rfid.clone()}</code>
                <span class="lookup-card__status">{lookup.status.clone()}</span>
            </div>
            <dl class="lookup-card__fields">
                <dt>"Line"</dt>
                <dd>{dash(lookup.line_id.clone())}</dd>
                <dt>"Last station"</dt>
                <dd>{dash(lookup.last_station.clone())}</dd>
                <dt>"Seen"</dt>
                <dd>{dash(lookup.timestamp.as_deref().map(format_datetime))}</dd>
                {work_order.map(|wo| {
                    WorkOrderField::ALL.iter().map(|field| {
                        view! {
                            <dt>{field.label()}</dt>
                            <dd>{dash(Some(wo.get(*field).to_string()))}</dd>
                        }
                    }).collect_view()
                })}
            </dl>
        </div>
    }
}
