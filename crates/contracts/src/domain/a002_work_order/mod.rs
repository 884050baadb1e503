pub mod catalog;
pub mod dto;

pub use catalog::{WorkOrderCatalog, WorkOrderSelection};
pub use dto::{WorkOrder, WorkOrderField};
