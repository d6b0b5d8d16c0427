pub mod advice;
pub mod metrics;
pub mod plan;
pub mod text;
