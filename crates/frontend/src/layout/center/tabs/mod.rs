pub mod tab;

pub use tab::TabBar;
