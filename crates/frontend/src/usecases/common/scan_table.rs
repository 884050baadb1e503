use crate::shared::date_utils::format_scan_time;
use crate::shared::export::{export_to_excel, timestamped_filename};
use crate::shared::icons::icon;
use chrono::Utc;
use contracts::domain::a003_rfid_garment::{RfidScanRecord, ScanStatus};
use contracts::usecases::common::ScanSession;
use leptos::logging::log;
use leptos::prelude::*;
use thaw::*;

fn status_color(status: ScanStatus) -> BadgeColor {
    match status {
        ScanStatus::Registered | ScanStatus::Checked => BadgeColor::Success,
        ScanStatus::Rejected => BadgeColor::Warning,
        ScanStatus::Duplicate => BadgeColor::Informative,
        ScanStatus::Failed => BadgeColor::Danger,
    }
}

/// Session summary, CSV export, clear button and the scan history table
#[component]
pub fn ScanSessionPanel(
    session: RwSignal<ScanSession>,
    /// File name prefix of the CSV export
    export_prefix: &'static str,
) -> impl IntoView {
    let summary = Memo::new(move |_| session.with(|s| s.summary()));
    let is_empty = Signal::derive(move || session.with(|s| s.is_empty()));

    let export = move |_| {
        let records: Vec<RfidScanRecord> = session.with_untracked(|s| s.records().to_vec());
        let filename = timestamped_filename(export_prefix, Utc::now());
        if let Err(e) = export_to_excel(&records, &filename) {
            log!("Failed to export: {}", e);
        }
    };

    view! {
        <div class="scan-session">
            <div class="scan-session__toolbar">
                <Flex gap=FlexGap::Small align=FlexAlign::Center>
                    <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Brand>
                        {move || format!("{} scans", summary.get().total)}
                    </Badge>
                    <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Success>
                        {move || format!("{} ok", summary.get().succeeded)}
                    </Badge>
                    <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Informative>
                        {move || format!("{} duplicate", summary.get().duplicates)}
                    </Badge>
                    <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Danger>
                        {move || format!("{} failed", summary.get().failed)}
                    </Badge>
                </Flex>
                <Flex gap=FlexGap::Small justify=FlexJustify::End>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=export
                        disabled=is_empty
                    >
                        {icon("download")}
                        " CSV"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| session.update(|s| s.clear())
                        disabled=is_empty
                    >
                        {icon("trash")}
                        " Clear"
                    </Button>
                </Flex>
            </div>

            <Show
                when=move || !is_empty.get()
                fallback=|| view! { <div class="placeholder">"No tags scanned yet"</div> }
            >
                <Table attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>"Time"</TableHeaderCell>
                            <TableHeaderCell>"RFID"</TableHeaderCell>
                            <TableHeaderCell>"Status"</TableHeaderCell>
                            <TableHeaderCell>"Message"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || session.with(|s| s.latest_first()).into_iter().map(|record| {
                            view! {
                                <TableRow>
                                    <TableCell>
                                        <TableCellLayout>{format_scan_time(&record.timestamp)}</TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>
                                            <code>{record.rfid.clone()}</code>
                                        </TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>
                                            <Badge appearance=BadgeAppearance::Tint color=status_color(record.status)>
                                                {record.status.label()}
                                            </Badge>
                                        </TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout truncate=true>{record.message.clone()}</TableCellLayout>
                                    </TableCell>
                                </TableRow>
                            }
                        }).collect_view()}
                    </TableBody>
                </Table>
            </Show>
        </div>
    }
}
