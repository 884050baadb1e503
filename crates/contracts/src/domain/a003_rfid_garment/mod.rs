pub mod dto;
pub mod rfid_code;

pub use dto::{
    RegisterGarmentRequest, RfidLookup, RfidScanRecord, ScanResponse, ScanStatus,
    ScrapGarmentRequest,
};
pub use rfid_code::normalize_rfid;
