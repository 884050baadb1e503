use super::work_order_panel::WorkOrderPanel;
use crate::dashboards::d400_line_tracking::api;
use crate::domain::a001_production_line::api::fetch_lines;
use crate::domain::a002_work_order::api::fetch_line_work_order;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::{LineSelect, PieChart, PieSlice, StatCard};
use crate::shared::date_utils::format_scan_time;
use crate::shared::icons::icon;
use crate::shared::number_format::format_count;
use crate::shared::page_frame::PageFrame;
use crate::shared::polling::use_polling;
use crate::system::env::use_env;
use chrono::{DateTime, Utc};
use contracts::dashboards::d400_line_tracking::TrackingCounters;
use contracts::domain::a001_production_line::ProductionLine;
use contracts::shared::indicators::{CounterKind, IndicatorStatus, Stage, ValueFormat};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Live QC/PQC counters of one line
#[component]
pub fn LineTrackingDashboard() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let env = use_env();
    let (tracking_ms, work_order_ms) = env
        .config
        .with_untracked(|c| (c.tracking_interval_ms(), c.work_order_interval_ms()));

    let lines = RwSignal::new(Vec::<ProductionLine>::new());
    let lines_error = RwSignal::new(None::<String>);

    spawn_local(async move {
        match fetch_lines().await {
            Ok(data) => lines.set(data),
            Err(e) => {
                log::error!("Failed to load lines: {}", e);
                lines_error.set(Some(e.to_string()));
            }
        }
    });

    let line_key = Signal::derive(move || ctx.selected_line.get());

    // Independent loops: counters every second, work order every 30 s by default
    let counters = use_polling(line_key, tracking_ms, |line_id: String| async move {
        api::fetch_tracking(&line_id).await
    });
    let work_order = use_polling(line_key, work_order_ms, |line_id: String| async move {
        fetch_line_work_order(&line_id).await
    });

    let last_update = RwSignal::new(None::<DateTime<Utc>>);
    Effect::new(move |_| {
        if counters.with(Option::is_some) {
            last_update.set(Some(Utc::now()));
        } else {
            last_update.set(None);
        }
    });

    let current_line = Memo::new(move |_| {
        let selected = ctx.selected_line.get()?;
        lines.with(|all| all.iter().find(|l| l.id == selected).cloned())
    });
    let target = Signal::derive(move || current_line.with(|l| l.as_ref().map_or(0, |l| l.target)));

    let stage_cards = move |stage: Stage| {
        CounterKind::ALL
            .into_iter()
            .map(|kind| {
                let value = Signal::derive(move || {
                    counters.with(|c| c.as_ref().map(|c| stage.value(c, kind) as f64))
                });
                let status = Signal::derive(move || {
                    counters.with(|c| {
                        c.as_ref()
                            .map_or(IndicatorStatus::Neutral, |c| stage.status(c, kind))
                    })
                });
                view! {
                    <StatCard
                        label=format!("{} {}", stage.label(), kind.label())
                        icon_name=kind.icon()
                        value=value
                        format=ValueFormat::Integer
                        status=status
                        accent=kind.color()
                    />
                }
            })
            .collect_view()
    };

    let stage_subtitle = move |stage: Stage| {
        counters.get().map(|c| {
            let s = match stage {
                Stage::Qc => c.qc(),
                Stage::Pqc => c.pqc(),
            };
            let rate = s
                .pass_rate()
                .map_or("—".to_string(), |r| format!("{r:.1}%"));
            format!("total {} · pass rate {}", format_count(s.total()), rate)
        })
    };

    let output_value =
        Signal::derive(move || counters.with(|c| c.as_ref().map(|c| c.output as f64)));
    let output_subtitle = Signal::derive(move || {
        let target = target.get();
        counters.get().map(|c| {
            if target == 0 {
                "no target set".to_string()
            } else {
                format!(
                    "target {} · remaining {}",
                    format_count(target),
                    format_count(c.remaining(target))
                )
            }
        })
    });
    let efficiency = Signal::derive(move || {
        let target = target.get();
        counters.with(|c| c.as_ref().and_then(|c| c.efficiency(target)))
    });
    let efficiency_status = Signal::derive(move || IndicatorStatus::for_efficiency(efficiency.get()));

    let qc_slices = Signal::derive(move || {
        let c: TrackingCounters = counters.get().unwrap_or_default();
        CounterKind::ALL
            .into_iter()
            .map(|kind| PieSlice {
                label: kind.label().to_string(),
                value: Stage::Qc.value(&c, kind),
                color: kind.color().to_string(),
            })
            .collect::<Vec<_>>()
    });

    view! {
        <PageFrame page_id="d400_line_tracking--dashboard" category="dashboard">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Line tracking"</h1>
                    {move || last_update.get().map(|t| view! {
                        <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Success>
                            {format!("updated {}", format_scan_time(&t))}
                        </Badge>
                    })}
                </div>
                <div class="page__header-right" style="min-width: 240px;">
                    <LineSelect
                        lines=lines
                        selected=line_key
                        on_select=Callback::new(move |id| ctx.select_line(id))
                    />
                </div>
            </div>

            {move || lines_error.get().map(|err| view! {
                <div class="alert alert--error">{format!("Failed to load lines: {err}")}</div>
            })}

            <Show
                when=move || line_key.with(Option::is_some)
                fallback=|| view! {
                    <div class="placeholder">"Select a production line to start tracking"</div>
                }
            >
                <div class="line-info">
                    <Flex gap=FlexGap::Large align=FlexAlign::Center>
                        <span class="line-info__item">
                            {icon("factory")}
                            {move || current_line.get().map_or_else(
                                || ctx.selected_line.get().unwrap_or_default(),
                                |l| l.display_name(),
                            )}
                        </span>
                        <span class="line-info__item">
                            {icon("user")}
                            {move || current_line.get().map_or("—".to_string(), |l| l.supervisor_or_dash())}
                        </span>
                        <span class="line-info__item">
                            {icon("clock")}
                            {move || current_line.get().and_then(|l| l.start_time).unwrap_or_else(|| "—".to_string())}
                        </span>
                        <span class="line-info__item">
                            {icon("target")}
                            {move || format_count(target.get())}
                        </span>
                    </Flex>
                </div>

                <Show
                    when=move || counters.with(Option::is_some)
                    fallback=|| view! { <Spinner label="Waiting for the first reading..." /> }
                >
                    <div class="tracking__summary">
                        <StatCard
                            label="Output"
                            icon_name="package"
                            value=output_value
                            format=ValueFormat::Integer
                            status=Signal::derive(|| IndicatorStatus::Neutral)
                            subtitle=output_subtitle
                        />
                        <StatCard
                            label="Efficiency"
                            icon_name="activity"
                            value=efficiency
                            format=ValueFormat::Percent { decimals: 1 }
                            status=efficiency_status
                        />
                    </div>

                    <div class="tracking__body">
                        <div class="tracking__stages">
                            <section class="tracking__stage">
                                <h3 class="tracking__stage-title">
                                    "QC "
                                    <span class="tracking__stage-subtitle">{move || stage_subtitle(Stage::Qc)}</span>
                                </h3>
                                <div class="tracking__cards">{stage_cards(Stage::Qc)}</div>
                            </section>
                            <section class="tracking__stage">
                                <h3 class="tracking__stage-title">
                                    "PQC "
                                    <span class="tracking__stage-subtitle">{move || stage_subtitle(Stage::Pqc)}</span>
                                </h3>
                                <div class="tracking__cards">{stage_cards(Stage::Pqc)}</div>
                            </section>
                        </div>

                        <div class="tracking__side">
                            <PieChart title="QC distribution" slices=qc_slices />
                            <WorkOrderPanel work_order=work_order />
                        </div>
                    </div>
                </Show>
            </Show>
        </PageFrame>
    }
}
