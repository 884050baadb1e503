pub mod form;
pub mod selector;

pub use selector::WorkOrderSelector;
