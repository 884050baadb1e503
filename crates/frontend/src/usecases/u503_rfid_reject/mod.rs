pub mod view;

pub use view::RejectView;
