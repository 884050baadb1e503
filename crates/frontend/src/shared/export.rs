//! CSV export of in-memory tables, downloaded through a temporary anchor.
use crate::shared::date_utils::format_export_time;
use contracts::domain::a003_rfid_garment::RfidScanRecord;
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// Types that can be written as a CSV row
pub trait ExcelExportable {
    fn headers() -> Vec<&'static str>;

    fn to_csv_row(&self) -> Vec<String>;
}

impl ExcelExportable for RfidScanRecord {
    fn headers() -> Vec<&'static str> {
        vec!["RFID", "Time", "Status", "Message"]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.rfid.clone(),
            format_export_time(&self.timestamp),
            self.status.label().to_string(),
            self.message.clone(),
        ]
    }
}

/// Build the CSV text: UTF-8 BOM (so spreadsheet apps detect the encoding),
/// `;` separators, one header line.
pub fn build_csv<T: ExcelExportable>(data: &[T]) -> String {
    let mut csv_content = String::new();
    csv_content.push('\u{FEFF}');
    csv_content.push_str(&T::headers().join(";"));
    csv_content.push('\n');

    for item in data {
        let escaped_row: Vec<String> = item
            .to_csv_row()
            .iter()
            .map(|cell| escape_csv_cell(cell))
            .collect();
        csv_content.push_str(&escaped_row.join(";"));
        csv_content.push('\n');
    }
    csv_content
}

/// Export rows to a CSV file and start the download
pub fn export_to_excel<T: ExcelExportable>(data: &[T], filename: &str) -> Result<(), String> {
    if data.is_empty() {
        return Err("Nothing to export".to_string());
    }

    let blob = create_csv_blob(&build_csv(data))?;
    download_blob(&blob, filename)?;
    log::info!("exported {} rows to {}", data.len(), filename);
    Ok(())
}

/// `{prefix}_{YYYYMMDD_HHMMSS}.csv`
pub fn timestamped_filename(prefix: &str, now: chrono::DateTime<chrono::Utc>) -> String {
    format!("{}_{}.csv", prefix, now.format("%Y%m%d_%H%M%S"))
}

fn escape_csv_cell(cell: &str) -> String {
    if cell.contains(';') || cell.contains('"') || cell.contains('\n') || cell.contains('\r') {
        let escaped = cell.replace('"', "\"\"");
        format!("\"{}\"", escaped)
    } else {
        cell.to_string()
    }
}

fn create_csv_blob(content: &str) -> Result<Blob, String> {
    let array = js_sys::Array::new();
    array.push(&wasm_bindgen::JsValue::from_str(content));

    let properties = BlobPropertyBag::new();
    properties.set_type("text/csv;charset=utf-8;");

    Blob::new_with_str_sequence_and_options(&array, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))
}

fn download_blob(blob: &Blob, filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;

    let url = Url::create_object_url_with_blob(blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("Failed to cast to anchor: {:?}", e))?;

    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|e| format!("Failed to set style: {:?}", e))?;

    let body = document.body().ok_or("No body element")?;
    body.append_child(&anchor)
        .map_err(|e| format!("Failed to append anchor: {:?}", e))?;
    anchor.click();
    body.remove_child(&anchor)
        .map_err(|e| format!("Failed to remove anchor: {:?}", e))?;

    Url::revoke_object_url(&url).map_err(|e| format!("Failed to revoke URL: {:?}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use contracts::domain::a003_rfid_garment::ScanStatus;

    fn record(rfid: &str, status: ScanStatus, message: &str) -> RfidScanRecord {
        RfidScanRecord {
            rfid: rfid.to_string(),
            timestamp: Utc.with_ymd_and_hms(2024, 5, 6, 8, 15, 0).unwrap(),
            status,
            message: message.to_string(),
        }
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape_csv_cell("plain"), "plain");
        assert_eq!(escape_csv_cell("a;b"), "\"a;b\"");
        assert_eq!(escape_csv_cell("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(escape_csv_cell("two\nlines"), "\"two\nlines\"");
    }

    #[test]
    fn test_build_csv() {
        let rows = vec![
            record("E200", ScanStatus::Registered, "ok"),
            record("E201", ScanStatus::Failed, "HTTP 500; retry"),
        ];
        let csv = build_csv(&rows);
        let lines: Vec<&str> = csv.trim_start_matches('\u{FEFF}').lines().collect();
        let local = rows[0]
            .timestamp
            .with_timezone(&chrono::Local)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string();
        assert!(csv.starts_with('\u{FEFF}'));
        assert_eq!(lines[0], "RFID;Time;Status;Message");
        assert_eq!(lines[1], format!("E200;{};Registered;ok", local));
        assert_eq!(lines[2], format!("E201;{};Failed;\"HTTP 500; retry\"", local));
    }

    #[test]
    fn test_filename() {
        let now = Utc.with_ymd_and_hms(2024, 5, 6, 8, 15, 9).unwrap();
        assert_eq!(
            timestamped_filename("rfid_registration", now),
            "rfid_registration_20240506_081509.csv"
        );
    }
}
