pub mod breadcrumbs;
pub mod center;
pub mod tabs;

pub use center::Center;
