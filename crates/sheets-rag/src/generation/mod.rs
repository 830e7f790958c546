//! Chat replies and store-wide insights

pub mod answer;
pub mod insights;
pub mod questions;

pub use answer::compose_reply;
pub use insights::InsightsBuilder;
pub use questions::QuestionGenerator;
