//! Common types and traits for the RFID use cases

pub mod scan_session;
pub mod usecase_metadata;

pub use scan_session::{ScanDecision, ScanSession, SessionSummary};
pub use usecase_metadata::UseCaseMetadata;
