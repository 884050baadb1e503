//! Shared building blocks for the domain DTOs

pub mod lenient;
pub mod validation;

pub use lenient::lenient_count;
pub use validation::ValidationError;
