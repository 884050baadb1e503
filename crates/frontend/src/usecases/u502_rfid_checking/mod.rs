pub mod view;

pub use view::CheckingView;
