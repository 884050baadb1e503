pub mod dto;

pub use dto::{LineSettings, ProductionLine, UpdateLineSettingsRequest, MAX_LINE_TARGET};
