pub mod d400_line_tracking;
pub mod d401_factory_overview;

pub use d400_line_tracking::ui::LineTrackingDashboard;
pub use d401_factory_overview::ui::FactoryOverviewDashboard;
