pub mod line_select;
pub mod pie_chart;
pub mod stat_card;
pub mod ui;

pub use line_select::LineSelect;
pub use pie_chart::{PieChart, PieSlice};
pub use stat_card::StatCard;
