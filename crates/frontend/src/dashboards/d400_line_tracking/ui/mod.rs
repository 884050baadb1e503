pub mod dashboard;
pub mod work_order_panel;

pub use dashboard::LineTrackingDashboard;
