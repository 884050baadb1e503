use crate::domain::a001_production_line::api::fetch_lines;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::shared::number_format::format_count;
use crate::shared::page_frame::PageFrame;
use crate::shared::polling::use_polling;
use crate::system::env::use_env;
use contracts::domain::a001_production_line::ProductionLine;
use leptos::prelude::*;
use thaw::*;

/// All lines of the factory. Double-click a row to open its tracking dashboard.
#[component]
pub fn FactoryOverviewDashboard(on_open_line: Callback<String>) -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let interval_ms = use_env()
        .config
        .with_untracked(|c| c.work_order_interval_ms());

    // The line list has no key of its own; poll it for as long as the tab lives
    let lines = use_polling(Signal::derive(|| Some(())), interval_ms, |_: ()| async move {
        fetch_lines().await
    });

    let total_target = Signal::derive(move || {
        lines.with(|l| l.as_ref().map_or(0, |l| l.iter().map(|x| x.target).sum::<u64>()))
    });

    view! {
        <PageFrame page_id="d401_factory_overview--dashboard" category="dashboard">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Factory overview"</h1>
                    <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Brand>
                        {move || lines.with(|l| l.as_ref().map_or(0, Vec::len)).to_string()}
                    </Badge>
                </div>
                <div class="page__header-right">
                    <span class="page__hint">
                        {icon("target")}
                        {move || format!(" total target {}", format_count(total_target.get()))}
                    </span>
                </div>
            </div>

            <Show
                when=move || lines.with(Option::is_some)
                fallback=|| view! { <Spinner label="Loading lines..." /> }
            >
                <Table attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>"Line"</TableHeaderCell>
                            <TableHeaderCell>"Id"</TableHeaderCell>
                            <TableHeaderCell>"Supervisor"</TableHeaderCell>
                            <TableHeaderCell>"Start"</TableHeaderCell>
                            <TableHeaderCell>"Target"</TableHeaderCell>
                            <TableHeaderCell>""</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <For
                            each=move || lines.get().unwrap_or_default()
                            key=|line: &ProductionLine| line.clone()
                            children=move |line: ProductionLine| {
                                let id_for_dbl = line.id.clone();
                                let id_for_btn = line.id.clone();
                                let id_for_active = line.id.clone();
                                let display_name = line.display_name();
                                let line_id = line.id.clone();
                                let supervisor = line.supervisor_or_dash();
                                let start_time = line.start_time.clone().unwrap_or_else(|| "—".to_string());
                                let target = format_count(line.target);
                                let is_selected = move || {
                                    ctx.selected_line.get().as_deref() == Some(id_for_active.as_str())
                                };
                                view! {
                                    <TableRow
                                        class:table__row--selected=is_selected
                                        on:dblclick=move |_| on_open_line.run(id_for_dbl.clone())
                                    >
                                        <TableCell>
                                            <TableCellLayout truncate=true>{display_name}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{line_id}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout truncate=true>{supervisor}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                {start_time}
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                <span style="font-variant-numeric: tabular-nums;">
                                                    {target}
                                                </span>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <Button
                                                appearance=ButtonAppearance::Subtle
                                                on_click=move |_| on_open_line.run(id_for_btn.clone())
                                            >
                                                {icon("activity")}
                                                " Track"
                                            </Button>
                                        </TableCell>
                                    </TableRow>
                                }
                            }
                        />
                    </TableBody>
                </Table>
            </Show>
        </PageFrame>
    }
}
